//! Service Form Component

use leptos::prelude::*;
use portfolio_core::{Category, Service, ServiceCategory, ServiceDraft};

use crate::components::category_filter::category_options;
use crate::context::use_app_context;
use crate::store::{create_service, update_service, use_site_store};

#[component]
pub fn ServiceForm(
    /// None = new service
    editing: Option<Service>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_site_store();

    let initial = editing.as_ref().map(ServiceDraft::from_service).unwrap_or_default();
    let editing_id = StoredValue::new(editing.map(|s| s.id));
    let is_edit = editing_id.with_value(Option::is_some);

    let title = RwSignal::new(initial.title);
    let description = RwSignal::new(initial.description);
    let rate = RwSignal::new(initial.rate);
    let duration = RwSignal::new(initial.duration);
    let availability = RwSignal::new(initial.availability);
    let category = RwSignal::new(initial.category);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ServiceDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            rate: rate.get_untracked(),
            duration: duration.get_untracked(),
            availability: availability.get_untracked(),
            category: category.get_untracked(),
        };
        let result = match editing_id.get_value() {
            Some(id) => update_service(&store, &id, draft).map(|_| "Service updated"),
            None => create_service(&store, draft).map(|_| "Service added"),
        };
        match result {
            Ok(message) => {
                ctx.notify(message);
                on_close.run(());
            }
            Err(e) => {
                log::warn!("Service not saved: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    let text_field = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <label>{label}</label>
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="modal-backdrop">
            <form class="modal card service-form" on:submit=on_submit>
                <h3>{if is_edit { "Edit Service" } else { "Add New Service" }}</h3>

                {text_field("Title*", title)}

                <label>"Category*"</label>
                <select
                    prop:value=move || category.get().as_str()
                    on:change=move |ev| {
                        if let Some(c) = ServiceCategory::parse(&event_target_value(&ev)) {
                            category.set(c);
                        }
                    }
                >
                    {category_options::<ServiceCategory>()}
                </select>

                <label>"Description*"</label>
                <textarea
                    rows="4"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>

                {text_field("Rate", rate)}
                {text_field("Duration", duration)}
                {text_field("Availability", availability)}

                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <div class="modal-actions">
                    <button type="button" class="btn btn-outline" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary">
                        {if is_edit { "Update Service" } else { "Add Service" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
