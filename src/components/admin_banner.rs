//! Admin Banner Component
//!
//! Shown above an editable list while admin mode is on.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::session::use_admin_session;
use crate::store::{reset_all, use_site_store};

#[component]
pub fn AdminBanner(
    /// What can be edited here, e.g. "projects"
    #[prop(into)]
    noun: String,
    #[prop(into)] on_add: Callback<()>,
) -> impl IntoView {
    let session = use_admin_session();
    let ctx = use_app_context();
    let store = use_site_store();
    let add_label = format!("Add New {}", capitalize(noun.trim_end_matches('s')));

    view! {
        <Show when=move || session.is_admin()>
            <div class="card admin-banner">
                <p>
                    "Admin mode active. Drag and drop " {noun.clone()}
                    " to reorder them, add new ones, or remove existing ones."
                </p>
                <div class="admin-actions">
                    <button class="btn btn-primary" on:click=move |_| on_add.run(())>
                        {add_label.clone()}
                    </button>
                    <button
                        class="btn btn-outline"
                        on:click=move |_| {
                            ctx.report(reset_all(&store), "Default content restored");
                        }
                    >
                        "Restore defaults"
                    </button>
                    <button class="btn btn-outline" on:click=move |_| session.exit()>"Exit"</button>
                </div>
            </div>
        </Show>
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
