//! Navigation Bar Component
//!
//! Tab bar for switching between the site's pages.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};
use crate::session::use_admin_session;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_admin_session();
    let owner = ctx.with_config(|c| c.owner_name.clone());

    view! {
        <nav class="nav-bar">
            <span class="nav-brand">{owner}</span>
            {Page::ALL.iter().map(|page| {
                let page = *page;
                let tab_class = move || {
                    if ctx.page.get() == page { "nav-tab active" } else { "nav-tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| ctx.navigate(page)>
                        {page.label()}
                    </button>
                }
            }).collect_view()}
            <Show when=move || session.is_admin()>
                <span class="nav-admin-badge">"Admin"</span>
            </Show>
        </nav>
    }
}
