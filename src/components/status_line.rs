//! Status Line Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Transient feedback after saves, deletes and failures
#[component]
pub fn StatusLine() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.status.get().map(|status| {
            let class = if status.is_error { "status-line error" } else { "status-line" };
            view! { <div class=class>{status.text}</div> }
        })
    }
}
