//! Admin Session
//!
//! Owns the admin gate for the mounted app. The secret-sequence listener
//! is attached when the app mounts and removed when it unmounts; nothing
//! is installed on the global object.

use leptos::ev;
use leptos::prelude::*;
use portfolio_core::{AdminError, AdminGate, AdminState, SiteConfig};
use wasm_bindgen::JsCast;

#[derive(Clone, Copy)]
pub struct AdminSession {
    gate: RwSignal<AdminGate>,
}

impl AdminSession {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            gate: RwSignal::new(AdminGate::from_config(config)),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.gate.with(AdminGate::is_unlocked)
    }

    /// Non-tracking check for event handlers
    pub fn is_admin_untracked(&self) -> bool {
        self.gate.with_untracked(AdminGate::is_unlocked)
    }

    pub fn prompt_open(&self) -> bool {
        self.gate.with(|g| g.state() == AdminState::Prompting)
    }

    /// Feed a key press; subscribers only hear about it when the prompt opens
    pub fn on_key(&self, key: &str) {
        let opened = self.gate.try_update_untracked(|g| g.on_key(key)).unwrap_or(false);
        if opened {
            self.gate.notify();
        }
    }

    pub fn open_prompt(&self) {
        self.gate.update(AdminGate::open_prompt);
    }

    pub fn cancel_prompt(&self) {
        self.gate.update(AdminGate::cancel_prompt);
    }

    pub fn submit(&self, password: &str) -> Result<(), AdminError> {
        self.gate
            .try_update(|g| g.submit(password))
            .unwrap_or(Err(AdminError::NotPrompting))
    }

    pub fn exit(&self) {
        self.gate.update(AdminGate::lock);
    }
}

/// Typing into a form field never counts towards the secret
fn typing_in_field(ev: &web_sys::KeyboardEvent) -> bool {
    ev.target().is_some_and(|t| {
        t.dyn_ref::<web_sys::HtmlInputElement>().is_some()
            || t.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
    })
}

/// Create the session, provide it, and listen for the secret sequence
/// for as long as the calling component is mounted.
pub fn provide_admin_session(config: &SiteConfig) -> AdminSession {
    let session = AdminSession::new(config);
    provide_context(session);

    let handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if !typing_in_field(&ev) {
            session.on_key(&ev.key());
        }
    });
    on_cleanup(move || handle.remove());

    session
}

pub fn use_admin_session() -> AdminSession {
    use_context::<AdminSession>().expect("AdminSession should be provided")
}
