//! Admin Gate
//!
//! Unlocks the editing controls. Typing the secret sequence opens a
//! password prompt; the password is compared against a configured list.
//! This only hides buttons in the browser and protects nothing.

use thiserror::Error;

use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminState {
    #[default]
    Locked,
    Prompting,
    Unlocked,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    #[error("Invalid password")]
    InvalidPassword,
    #[error("no password prompt is open")]
    NotPrompting,
}

/// Per-page admin session state
#[derive(Debug, Clone, Default)]
pub struct AdminGate {
    secret: String,
    passwords: Vec<String>,
    buffer: String,
    state: AdminState,
}

impl AdminGate {
    pub fn new(secret: &str, passwords: Vec<String>) -> Self {
        Self {
            secret: secret.to_lowercase(),
            passwords,
            buffer: String::new(),
            state: AdminState::Locked,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.admin_secret, config.admin_passwords.clone())
    }

    pub fn state(&self) -> AdminState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == AdminState::Unlocked
    }

    /// Feed one key press (as reported by `KeyboardEvent.key`). Named keys
    /// such as "Shift" are ignored. Returns true when this key opened the prompt.
    pub fn on_key(&mut self, key: &str) -> bool {
        if self.state != AdminState::Locked || self.secret.is_empty() {
            return false;
        }
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return false;
        };

        self.buffer.extend(c.to_lowercase());
        let keep = self.secret.chars().count();
        let excess = self.buffer.chars().count().saturating_sub(keep);
        if excess > 0 {
            let cut = self
                .buffer
                .char_indices()
                .nth(excess)
                .map_or(self.buffer.len(), |(i, _)| i);
            self.buffer.drain(..cut);
        }

        if self.buffer == self.secret {
            self.buffer.clear();
            self.open_prompt();
            return true;
        }
        false
    }

    pub fn open_prompt(&mut self) {
        if self.state == AdminState::Locked {
            self.state = AdminState::Prompting;
        }
    }

    pub fn cancel_prompt(&mut self) {
        if self.state == AdminState::Prompting {
            self.state = AdminState::Locked;
        }
    }

    /// Check a password typed into the prompt
    pub fn submit(&mut self, password: &str) -> Result<(), AdminError> {
        if self.state != AdminState::Prompting {
            return Err(AdminError::NotPrompting);
        }
        if !self.passwords.iter().any(|p| p == password) {
            return Err(AdminError::InvalidPassword);
        }
        self.state = AdminState::Unlocked;
        log::info!("Admin mode enabled");
        Ok(())
    }

    /// Leave admin mode
    pub fn lock(&mut self) {
        self.state = AdminState::Locked;
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> AdminGate {
        AdminGate::from_config(&SiteConfig::default())
    }

    fn type_text(gate: &mut AdminGate, text: &str) -> bool {
        text.chars().map(|c| gate.on_key(&c.to_string())).any(|opened| opened)
    }

    #[test]
    fn test_secret_opens_prompt_after_noise() {
        let mut g = gate();
        assert!(type_text(&mut g, "xxadminDEV"));
        assert_eq!(g.state(), AdminState::Prompting);
    }

    #[test]
    fn test_named_keys_are_ignored() {
        let mut g = gate();
        type_text(&mut g, "admin");
        assert!(!g.on_key("Shift"));
        assert!(type_text(&mut g, "dev"));
    }

    #[test]
    fn test_partial_secret_does_nothing() {
        let mut g = gate();
        assert!(!type_text(&mut g, "admindex"));
        assert_eq!(g.state(), AdminState::Locked);
    }

    #[test]
    fn test_password_check() {
        let mut g = gate();
        assert_eq!(g.submit("admin"), Err(AdminError::NotPrompting));
        g.open_prompt();
        assert_eq!(g.submit("nope"), Err(AdminError::InvalidPassword));
        assert_eq!(g.state(), AdminState::Prompting);
        assert!(g.submit("dev2025").is_ok());
        assert!(g.is_unlocked());
        g.lock();
        assert_eq!(g.state(), AdminState::Locked);
    }

    #[test]
    fn test_cancel_returns_to_locked() {
        let mut g = gate();
        g.open_prompt();
        g.cancel_prompt();
        assert_eq!(g.state(), AdminState::Locked);
    }
}
