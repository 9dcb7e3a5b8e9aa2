use leptos::prelude::*;

use crate::components::FeaturedProjects;
use crate::context::{use_app_context, Page};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let (owner, tagline) = ctx.with_config(|c| (c.owner_name.clone(), c.tagline.clone()));

    view! {
        <section class="hero">
            <h1 class="heading-gradient">{owner}</h1>
            <p class="hero-tagline">{tagline}</p>
            <div class="hero-actions">
                <button class="btn btn-primary" on:click=move |_| ctx.navigate(Page::Gallery)>
                    "See my work"
                </button>
                <button class="btn btn-outline" on:click=move |_| ctx.navigate(Page::Contact)>
                    "Get in touch"
                </button>
            </div>
        </section>
        <FeaturedProjects />
    }
}
