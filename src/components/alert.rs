//! Alert Component
//!
//! Transient notice banner above the entry form. Click dismisses;
//! otherwise the context clears it after a few seconds.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Notice;

/// Current notice, if any
#[component]
pub fn Alert() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="alert">
            {move || ctx.notice.get().map(|notice| {
                let Notice { kind, message } = notice;
                view! {
                    <p
                        class=format!("alert-banner {}", kind.as_class())
                        on:click=move |_| ctx.dismiss_notice()
                    >
                        {message}
                    </p>
                }
            })}
        </div>
    }
}
