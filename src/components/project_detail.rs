//! Project Detail Component
//!
//! Full description, every technology, and the project links.

use leptos::prelude::*;
use portfolio_core::{Category, Project};

use crate::components::project_card::badge_class;

#[component]
pub fn ProjectDetail(project: Project, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let badges = project
        .technologies
        .iter()
        .enumerate()
        .map(|(i, tech)| view! { <span class=badge_class(i)>{tech.to_string()}</span> })
        .collect_view();

    let github = project.github_url.clone().map(|url| view! {
        <a class="btn btn-outline" href=url target="_blank" rel="noopener noreferrer">
            "GitHub Repository"
        </a>
    });
    let live = project.live_url.clone().map(|url| view! {
        <a class="btn btn-primary" href=url target="_blank" rel="noopener noreferrer">
            "View Live Project"
        </a>
    });

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal card project-detail" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" aria-label="Close" on:click=move |_| on_close.run(())>"×"</button>
                <h3>{project.title}</h3>
                <p class="detail-type">{project.project_type.label()}</p>
                <p class="detail-description">{project.description}</p>

                <h4>"Technologies Used"</h4>
                <div class="tech-badges">{badges}</div>

                <h4>"Project Links"</h4>
                <div class="detail-links">{github}{live}</div>

                <div class="modal-actions">
                    <button class="btn btn-outline" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
