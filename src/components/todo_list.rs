//! Todo List View Component
//!
//! Renders the filtered projection of the list plus the clear-all
//! control. No filtering logic lives here; the store decides what is
//! visible.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::AppContext;

/// The visible rows and the clear-all button
#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let visible = move || ctx.store.with(|store| store.visible_items());

    view! {
        <div class="todos-container">
            <For
                each=visible
                // Key on every mutable field so edits and toggles re-render
                key=|item| (item.id, item.title.clone(), item.completed)
                children=move |item| view! { <TodoRow item=item /> }
            />
            <div class="clear">
                <button
                    type="button"
                    class="clear-btn"
                    on:click=move |_| ctx.clear_all()
                >
                    "Clear All"
                </button>
            </div>
        </div>
    }
}
