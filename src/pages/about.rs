use leptos::prelude::*;
use portfolio_core::{Category, ProjectType};

use crate::context::use_app_context;

#[component]
pub fn AboutPage() -> impl IntoView {
    let ctx = use_app_context();
    let owner = ctx.with_config(|c| c.owner_name.clone());

    view! {
        <section class="about">
            <h1 class="heading-gradient">"About"</h1>
            <p>{owner} " builds and designs for the web."</p>
            <h2>"What I work on"</h2>
            <ul class="skill-list">
                {ProjectType::ALL.iter().map(|t| view! { <li>{t.label()}</li> }).collect_view()}
            </ul>
        </section>
    }
}
