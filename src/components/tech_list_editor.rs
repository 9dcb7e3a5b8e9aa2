//! Technology List Editor Component
//!
//! Text input plus removable chips. Duplicates and blanks are ignored.

use leptos::prelude::*;
use portfolio_core::Technologies;

#[component]
pub fn TechListEditor(technologies: RwSignal<Technologies>) -> impl IntoView {
    let (input, set_input) = signal(String::new());

    let add = move || {
        let value = input.get_untracked();
        let mut added = false;
        technologies.update(|t| added = t.add(&value));
        if added {
            set_input.set(String::new());
        }
    };

    view! {
        <div class="tech-editor">
            <div class="tech-editor-row">
                <input
                    type="text"
                    placeholder="React, TypeScript, Node.js"
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add();
                        }
                    }
                />
                <button type="button" class="btn btn-primary" on:click=move |_| add()>
                    "Add Technology"
                </button>
            </div>
            <div class="tech-chips">
                {move || technologies.with(|list| list.iter().enumerate().map(|(index, tech)| {
                    view! {
                        <span class="tech-badge badge-a">
                            {tech.to_string()}
                            <button
                                type="button"
                                class="chip-remove"
                                on:click=move |_| {
                                    technologies.update(|t| {
                                        t.remove_at(index);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </span>
                    }
                }).collect_view())}
            </div>
        </div>
    }
}
