//! Todo Entry Form Component
//!
//! Text entry with a submit control that doubles as "save edit", plus
//! the filter selector.

use leptos::prelude::*;

use crate::components::FilterSelect;
use crate::context::AppContext;

/// Form for adding a new item or committing an edit
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_draft();
    };

    let is_editing = move || ctx.store.with(|store| store.entry().is_editing());

    view! {
        <form class="todo-form" on:submit=on_submit>
            <input
                type="text"
                id="todo-input"
                placeholder="Enter an item"
                prop:value=move || ctx.draft.get()
                on:input=move |ev| ctx.draft.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class="submit-btn"
                title=move || if is_editing() { "Save changes" } else { "Add item" }
            >
                {move || if is_editing() { "✎" } else { "+" }}
            </button>
            <FilterSelect />
        </form>
    }
}
