//! Todo List App
//!
//! Main application component: builds the store from browser storage,
//! provides the context, and lays out the page.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::{Alert, TodoForm, TodoListView};
use crate::context::AppContext;
use crate::ids::SystemIdSource;
use crate::storage::LocalStorageStore;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(Arc::new(LocalStorageStore), Arc::new(SystemIdSource::new()));

    // Provide context to all children
    provide_context(ctx);

    let has_items = move || ctx.store.with(|store| !store.is_empty());

    view! {
        <section class="main-container">
            <div class="todo-app">
                <h1 class="title">"Todo List"</h1>

                <Alert />

                <TodoForm />

                <Show when=has_items>
                    <TodoListView />
                </Show>
            </div>
        </section>
    }
}
