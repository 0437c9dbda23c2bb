//! Todo Row Component
//!
//! A single item row with its edit/complete/delete controls.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::TodoItem;

/// One rendered todo item
#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = item.id;
    let completed = item.completed;
    let title = item.title.clone();

    view! {
        <div class="todo-list">
            <div class=move || if completed { "todo-item completed" } else { "todo-item" }>
                <h3>{title}</h3>
            </div>
            <div class="btn-container">
                <button
                    class="edit-btn"
                    title="Edit"
                    on:click=move |_| ctx.begin_edit(id)
                >
                    "✎"
                </button>
                <button
                    class="done-btn"
                    title="Toggle complete"
                    on:click=move |_| ctx.toggle_completed(id)
                >
                    "✓"
                </button>
                <button
                    class="delete-btn"
                    type="button"
                    title="Delete"
                    on:click=move |_| ctx.remove_item(id)
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
