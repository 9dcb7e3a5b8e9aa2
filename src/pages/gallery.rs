//! Gallery Page
//!
//! Filterable project grid. In admin mode cards can be dragged to reorder,
//! edited, or deleted, and new projects added.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_handlers, create_dnd_signals};
use portfolio_core::{CategoryFilter, DragMove, Project, ProjectType};

use crate::components::{AdminBanner, CategoryFilterBar, ProjectCard, ProjectDetail, ProjectForm};
use crate::context::use_app_context;
use crate::session::use_admin_session;
use crate::store::{delete_project, reorder_projects, use_site_store, SiteStateStoreFields};

#[component]
pub fn GalleryPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_site_store();
    let session = use_admin_session();

    let filter = RwSignal::new(CategoryFilter::<ProjectType>::All);
    let visible = Memo::new(move |_| store.projects().read().visible(filter.get()));

    // None = closed, Some(None) = new project, Some(Some(p)) = editing p
    let (form, set_form) = signal(None::<Option<Project>>);
    let (detail, set_detail) = signal(None::<Project>);

    let dnd = create_dnd_signals();
    let listeners = bind_global_handlers(dnd, move |source, destination| {
        if !session.is_admin_untracked() {
            return;
        }
        let gesture = DragMove { source, destination };
        match reorder_projects(&store, filter.get_untracked(), gesture) {
            Ok(true) => ctx.notify("Project order saved"),
            Ok(false) => {}
            Err(e) => {
                log::warn!("Reorder failed: {}", e);
                ctx.notify_error(e.to_string());
            }
        }
    });
    on_cleanup(move || listeners.remove());

    view! {
        <section class="gallery">
            <div class="page-header">
                <h1 class="heading-gradient">"Project Gallery"</h1>
                <p>"Explore my portfolio of projects. Each project represents my skills, passion, and creativity."</p>
            </div>

            <CategoryFilterBar selected=filter />

            <AdminBanner noun="projects" on_add=move |_| set_form.set(Some(None)) />

            <div class="card-grid">
                {move || visible.get().into_iter().enumerate().map(|(index, project)| view! {
                    <ProjectCard
                        project=project
                        index=index
                        dnd=dnd
                        on_view=move |p: Project| set_detail.set(Some(p))
                        on_edit=move |p: Project| set_form.set(Some(Some(p)))
                        on_delete=move |id: String| {
                            ctx.report(delete_project(&store, &id), "Project deleted");
                        }
                    />
                }).collect_view()}
            </div>

            <Show when=move || visible.with(Vec::is_empty)>
                <p class="empty">"No projects in this category yet."</p>
            </Show>

            {move || form.get().map(|editing| view! {
                <ProjectForm editing=editing on_close=move |_| set_form.set(None) />
            })}

            {move || detail.get().map(|project| view! {
                <ProjectDetail project=project on_close=move |_| set_detail.set(None) />
            })}
        </section>
    }
}
