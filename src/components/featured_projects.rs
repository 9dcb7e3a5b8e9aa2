//! Featured Projects Component
//!
//! Home page preview: the first few featured projects by order.

use leptos::prelude::*;
use portfolio_core::{preview, Category};

use crate::context::{use_app_context, Page};
use crate::store::{use_site_store, SiteStateStoreFields};

#[component]
pub fn FeaturedProjects() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_site_store();
    let (count, preview_chars) = ctx.with_config(|c| (c.featured_count, c.description_preview_chars));

    let featured = Memo::new(move |_| store.projects().read().featured_first_n(count));

    view! {
        <section class="featured-projects">
            <h2>"Featured Projects"</h2>
            <p class="section-intro">
                "A selection of recent work. Each project represents a unique challenge and solution."
            </p>
            <div class="card-grid">
                {move || {
                    let projects = featured.get();
                    if projects.is_empty() {
                        return view! { <p class="empty">"No featured projects yet."</p> }.into_any();
                    }
                    projects.into_iter().map(|p| view! {
                        <div class="card">
                            <div class="card-body">
                                <span class="service-category">{p.project_type.label()}</span>
                                <h3>{p.title}</h3>
                                <p class="card-description">{preview(&p.description, preview_chars)}</p>
                            </div>
                        </div>
                    }).collect_view().into_any()
                }}
            </div>
            <button class="btn btn-outline" on:click=move |_| ctx.navigate(Page::Gallery)>
                "View All Projects"
            </button>
        </section>
    }
}
