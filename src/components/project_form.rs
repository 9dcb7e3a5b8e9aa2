//! Project Form Component
//!
//! Create or edit a project. Validation errors from the collection are
//! shown inline and keep the form open.

use leptos::prelude::*;
use portfolio_core::{Category, Project, ProjectDraft, ProjectType};

use crate::components::category_filter::category_options;
use crate::components::TechListEditor;
use crate::context::use_app_context;
use crate::store::{create_project, update_project, use_site_store};

#[component]
pub fn ProjectForm(
    /// None = new project
    editing: Option<Project>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_site_store();

    let initial = editing.as_ref().map(ProjectDraft::from_project).unwrap_or_default();
    let editing_id = StoredValue::new(editing.map(|p| p.id));
    let is_edit = editing_id.with_value(Option::is_some);

    let title = RwSignal::new(initial.title);
    let description = RwSignal::new(initial.description);
    let project_type = RwSignal::new(initial.project_type);
    let technologies = RwSignal::new(initial.technologies);
    let github_url = RwSignal::new(initial.github_url);
    let live_url = RwSignal::new(initial.live_url);
    let featured = RwSignal::new(initial.featured);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ProjectDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            project_type: project_type.get_untracked(),
            technologies: technologies.get_untracked(),
            github_url: github_url.get_untracked(),
            live_url: live_url.get_untracked(),
            featured: featured.get_untracked(),
        };
        let result = match editing_id.get_value() {
            Some(id) => update_project(&store, &id, draft).map(|_| "Project updated"),
            None => create_project(&store, draft).map(|_| "Project added"),
        };
        match result {
            Ok(message) => {
                ctx.notify(message);
                on_close.run(());
            }
            Err(e) => {
                log::warn!("Project not saved: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="modal-backdrop">
            <form class="modal card project-form" on:submit=on_submit>
                <h3>{if is_edit { "Edit Project" } else { "Add New Project" }}</h3>

                <label>"Title*"</label>
                <input
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />

                <label>"Project Type*"</label>
                <select
                    prop:value=move || project_type.get().as_str()
                    on:change=move |ev| {
                        if let Some(t) = ProjectType::parse(&event_target_value(&ev)) {
                            project_type.set(t);
                        }
                    }
                >
                    {category_options::<ProjectType>()}
                </select>

                <label>"Technologies*"</label>
                <TechListEditor technologies=technologies />

                <label>"Description*"</label>
                <textarea
                    rows="5"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>

                <label>"GitHub URL"</label>
                <input
                    type="url"
                    placeholder="https://github.com/username/project"
                    prop:value=move || github_url.get()
                    on:input=move |ev| github_url.set(event_target_value(&ev))
                />

                <label>"Live URL"</label>
                <input
                    type="url"
                    placeholder="https://yourproject.com"
                    prop:value=move || live_url.get()
                    on:input=move |ev| live_url.set(event_target_value(&ev))
                />

                <label class="checkbox-row">
                    <input
                        type="checkbox"
                        prop:checked=move || featured.get()
                        on:change=move |ev| featured.set(event_target_checked(&ev))
                    />
                    "Featured on the home page"
                </label>

                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <div class="modal-actions">
                    <button type="button" class="btn btn-outline" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary">
                        {if is_edit { "Update Project" } else { "Add Project" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
