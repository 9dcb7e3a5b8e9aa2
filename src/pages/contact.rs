use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ContactPage() -> impl IntoView {
    let ctx = use_app_context();
    let email = ctx.with_config(|c| c.contact_email.clone());
    let mailto = format!("mailto:{}", email);

    view! {
        <section class="contact">
            <h1 class="heading-gradient">"Contact"</h1>
            <p>"Have a project in mind? Send a message and I'll get back to you."</p>
            <a class="btn btn-primary" href=mailto>{email}</a>
        </section>
    }
}
