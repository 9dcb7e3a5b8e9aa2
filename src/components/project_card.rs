//! Project Card Component
//!
//! One gallery tile: title, shortened description, first few technologies.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;
use portfolio_core::{preview, Project};

use crate::components::{DeleteConfirmButton, DraggableCard};
use crate::context::use_app_context;
use crate::session::use_admin_session;

/// Badge colour cycles through three styles
pub fn badge_class(index: usize) -> &'static str {
    match index % 3 {
        0 => "tech-badge badge-a",
        1 => "tech-badge badge-b",
        _ => "tech-badge badge-c",
    }
}

#[component]
pub fn ProjectCard(
    project: Project,
    index: usize,
    dnd: DndSignals,
    #[prop(into)] on_view: Callback<Project>,
    #[prop(into)] on_edit: Callback<Project>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let session = use_admin_session();
    let (preview_chars, tech_count) =
        ctx.with_config(|c| (c.description_preview_chars, c.card_tech_count));

    let summary = preview(&project.description, preview_chars);
    let badges = project
        .technologies
        .iter()
        .take(tech_count)
        .enumerate()
        .map(|(i, tech)| view! { <span class=badge_class(i)>{tech.to_string()}</span> })
        .collect_view();

    let id = project.id.clone();
    let title = project.title.clone();
    let for_view = project.clone();
    let for_edit = project;

    view! {
        <DraggableCard dnd=dnd index=index>
            <div class="card-banner">
                <span>{title.clone()}</span>
            </div>
            <div class="card-body">
                <h3>{title}</h3>
                <p class="card-description">{summary}</p>
                <div class="tech-badges">{badges}</div>
                <div class="card-actions">
                    <button
                        class="link-btn"
                        on:click=move |_| {
                            if !dnd.drag_just_ended_read.get_untracked() {
                                on_view.run(for_view.clone());
                            }
                        }
                    >
                        "View Details →"
                    </button>
                    <Show when=move || session.is_admin()>
                        <button class="edit-btn" on:click={
                            let p = for_edit.clone();
                            move |_| on_edit.run(p.clone())
                        }>
                            "Edit"
                        </button>
                        <DeleteConfirmButton
                            prompt="Delete this project?"
                            on_confirm={
                                let id = id.clone();
                                move |_| on_delete.run(id.clone())
                            }
                        />
                    </Show>
                </div>
            </div>
        </DraggableCard>
    }
}
