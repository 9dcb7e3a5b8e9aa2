//! Password Modal Component
//!
//! Opened by the admin secret sequence. Unlocks editing controls only.

use leptos::prelude::*;

use crate::session::use_admin_session;

#[component]
pub fn PasswordModal() -> impl IntoView {
    let session = use_admin_session();
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let close = move || {
        set_password.set(String::new());
        set_error.set(None);
        session.cancel_prompt();
    };

    let check = move || match session.submit(&password.get_untracked()) {
        Ok(()) => {
            set_password.set(String::new());
            set_error.set(None);
        }
        Err(e) => set_error.set(Some(e.to_string())),
    };

    view! {
        <Show when=move || session.prompt_open()>
            <div class="modal-backdrop">
                <div class="modal card password-modal">
                    <h3>"Admin Authentication"</h3>
                    <label for="admin-password">"Enter password:"</label>
                    <input
                        id="admin-password"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                check();
                            }
                        }
                    />
                    {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                    <div class="modal-actions">
                        <button class="btn btn-outline" on:click=move |_| close()>"Cancel"</button>
                        <button class="btn btn-primary" on:click=move |_| check()>"Login"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
