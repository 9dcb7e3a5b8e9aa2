//! Service Card Component

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;
use portfolio_core::{Category, Service};

use crate::components::{DeleteConfirmButton, DraggableCard};
use crate::session::use_admin_session;

#[component]
pub fn ServiceCard(
    service: Service,
    index: usize,
    dnd: DndSignals,
    #[prop(into)] on_edit: Callback<Service>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let session = use_admin_session();

    let detail = |label: &'static str, value: Option<String>| {
        value.map(|v| view! {
            <div class="service-detail">
                <span class="service-detail-label">{label}</span>
                <span>{v}</span>
            </div>
        })
    };
    let rate = detail("Rate", service.rate.clone());
    let duration = detail("Duration", service.duration.clone());
    let availability = detail("Availability", service.availability.clone());

    let id = service.id.clone();
    let category = service.category.label();
    let title = service.title.clone();
    let description = service.description.clone();

    view! {
        <DraggableCard dnd=dnd index=index>
            <div class="card-body">
                <span class="service-category">{category}</span>
                <h3>{title}</h3>
                <p class="card-description">{description}</p>
                {rate}
                {duration}
                {availability}
                <Show when=move || session.is_admin()>
                    <div class="card-actions">
                        <button class="edit-btn" on:click={
                            let s = service.clone();
                            move |_| on_edit.run(s.clone())
                        }>
                            "Edit"
                        </button>
                        <DeleteConfirmButton
                            prompt="Delete this service?"
                            on_confirm={
                                let id = id.clone();
                                move |_| on_delete.run(id.clone())
                            }
                        />
                    </div>
                </Show>
            </div>
        </DraggableCard>
    }
}
