//! Filter Selector Component
//!
//! Dropdown choosing which subset of the list is shown.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::FilterMode;

/// The three selectable filter modes, in display order
const FILTER_MODES: &[FilterMode] = &[
    FilterMode::All,
    FilterMode::Completed,
    FilterMode::Uncompleted,
];

/// Filter mode dropdown
#[component]
pub fn FilterSelect() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <select
            name="todos"
            id="filter"
            class="filter-select"
            prop:value=move || ctx.store.with(|store| store.filter().as_str().to_string())
            on:change=move |ev| ctx.set_filter(FilterMode::from_str(&event_target_value(&ev)))
        >
            {FILTER_MODES.iter().map(|mode| {
                let mode = *mode;
                view! {
                    <option value=mode.as_str()>{mode.label()}</option>
                }
            }).collect_view()}
        </select>
    }
}
