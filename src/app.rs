//! Portfolio Frontend App
//!
//! Root component: provides the app context, the admin session and the
//! site store, then switches between pages.

use leptos::prelude::*;
use portfolio_core::SiteConfig;
use reactive_stores::Store;

use crate::components::{NavBar, PasswordModal, StatusLine};
use crate::context::{AppContext, Page};
use crate::pages::{AboutPage, ContactPage, GalleryPage, HomePage, ServicesPage};
use crate::session::provide_admin_session;
use crate::store::SiteState;

const SITE_CONFIG: &str = include_str!("site.json");

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::from_json_or_default(SITE_CONFIG);

    let state = SiteState::open(&config);
    log::info!(
        "Loaded {} projects ({:?}), {} services ({:?})",
        state.projects.len(),
        state.projects.load_source(),
        state.services.len(),
        state.services.load_source(),
    );
    provide_context(Store::new(state));

    provide_admin_session(&config);

    let ctx = AppContext::new(config);
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <NavBar />
            <StatusLine />
            <main class="main-content">
                {move || match ctx.page.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::About => view! { <AboutPage /> }.into_any(),
                    Page::Gallery => view! { <GalleryPage /> }.into_any(),
                    Page::Services => view! { <ServicesPage /> }.into_any(),
                    Page::Contact => view! { <ContactPage /> }.into_any(),
                }}
            </main>
            <PasswordModal />
        </div>
    }
}
