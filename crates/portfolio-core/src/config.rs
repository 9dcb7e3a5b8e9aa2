//! Site Configuration
//!
//! Everything tunable about the site in one serde struct. Missing fields
//! take their defaults, so a partial JSON document is valid.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub owner_name: String,
    pub tagline: String,
    pub contact_email: String,
    /// Slot key for the gallery projects
    pub projects_key: String,
    /// Slot key for the services
    pub services_key: String,
    /// How many featured projects the home page shows
    pub featured_count: usize,
    /// Typing this anywhere opens the admin prompt
    pub admin_secret: String,
    /// Accepted admin passwords. A content-editing convenience, not access control.
    pub admin_passwords: Vec<String>,
    /// Card descriptions longer than this are cut and end with "..."
    pub description_preview_chars: usize,
    /// Technologies shown on a gallery card
    pub card_tech_count: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Portfolio".to_string(),
            tagline: "Websites, design and technical consulting.".to_string(),
            contact_email: "hello@example.com".to_string(),
            projects_key: "portfolio-projects".to_string(),
            services_key: "portfolio-services".to_string(),
            featured_count: 3,
            admin_secret: "admindev".to_string(),
            admin_passwords: vec!["d3v2025".to_string(), "admin".to_string(), "dev2025".to_string()],
            description_preview_chars: 120,
            card_tech_count: 3,
        }
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Parse, or log and use defaults
    pub fn from_json_or_default(text: &str) -> Self {
        Self::from_json(text).unwrap_or_else(|e| {
            log::error!("Invalid site config, using defaults: {}", e);
            Self::default()
        })
    }
}

/// Cut `text` to at most `max_chars` characters, appending "..." when cut
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = SiteConfig::from_json(r#"{"ownerName":"Ada","featuredCount":4}"#).unwrap();
        assert_eq!(cfg.owner_name, "Ada");
        assert_eq!(cfg.featured_count, 4);
        assert_eq!(cfg.projects_key, "portfolio-projects");
        assert_eq!(cfg.admin_secret, "admindev");
    }

    #[test]
    fn test_bad_json_falls_back_to_defaults() {
        assert_eq!(SiteConfig::from_json_or_default("{"), SiteConfig::default());
    }

    #[test]
    fn test_preview_counts_chars() {
        assert_eq!(preview("short", 120), "short");
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("héllo", 2), "hé...");
        assert_eq!(preview("abc", 3), "abc");
    }
}
