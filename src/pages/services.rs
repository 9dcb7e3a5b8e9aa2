//! Services Page
//!
//! Same editing model as the gallery, over the services collection.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_handlers, create_dnd_signals};
use portfolio_core::{CategoryFilter, DragMove, Service, ServiceCategory};

use crate::components::{AdminBanner, CategoryFilterBar, ServiceCard, ServiceForm};
use crate::context::{use_app_context, Page};
use crate::session::use_admin_session;
use crate::store::{delete_service, reorder_services, use_site_store, SiteStateStoreFields};

#[component]
pub fn ServicesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_site_store();
    let session = use_admin_session();

    let filter = RwSignal::new(CategoryFilter::<ServiceCategory>::All);
    let visible = Memo::new(move |_| store.services().read().visible(filter.get()));
    let (form, set_form) = signal(None::<Option<Service>>);

    let dnd = create_dnd_signals();
    let listeners = bind_global_handlers(dnd, move |source, destination| {
        if !session.is_admin_untracked() {
            return;
        }
        let result = reorder_services(&store, filter.get_untracked(), DragMove { source, destination });
        match result {
            Ok(true) => ctx.notify("Service order saved"),
            Ok(false) => {}
            Err(e) => {
                log::warn!("Reorder failed: {}", e);
                ctx.notify_error(e.to_string());
            }
        }
    });
    on_cleanup(move || listeners.remove());

    view! {
        <section class="services">
            <div class="page-header">
                <h1 class="heading-gradient">"Services"</h1>
                <p>"What I can help you with, and what it costs."</p>
            </div>

            <CategoryFilterBar selected=filter />

            <AdminBanner noun="services" on_add=move |_| set_form.set(Some(None)) />

            <div class="card-grid">
                {move || visible.get().into_iter().enumerate().map(|(index, service)| view! {
                    <ServiceCard
                        service=service
                        index=index
                        dnd=dnd
                        on_edit=move |s: Service| set_form.set(Some(Some(s)))
                        on_delete=move |id: String| {
                            ctx.report(delete_service(&store, &id), "Service deleted");
                        }
                    />
                }).collect_view()}
            </div>

            <Show when=move || visible.with(Vec::is_empty)>
                <p class="empty">"No services in this category yet."</p>
            </Show>

            <div class="cta">
                <p>"Not sure which service fits? Let's talk it through."</p>
                <button class="btn btn-primary" on:click=move |_| ctx.navigate(Page::Contact)>
                    "Contact me"
                </button>
            </div>

            {move || form.get().map(|editing| view! {
                <ServiceForm editing=editing on_close=move |_| set_form.set(None) />
            })}
        </section>
    }
}
