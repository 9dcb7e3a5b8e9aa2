//! Technology list attached to a project.

use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free list of technology names
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Technologies(Vec<String>);

impl Technologies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a technology. Input is trimmed; empty values and exact
    /// (case-sensitive) duplicates are rejected. Returns whether it was added.
    pub fn add(&mut self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || self.contains(value) {
            return false;
        }
        self.0.push(value.to_string());
        true
    }

    /// Remove by value. Returns whether anything was removed.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != value);
        self.0.len() != before
    }

    /// Remove by position
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|t| t == value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for Technologies {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut techs = Technologies::new();
        for t in iter {
            techs.add(t.as_ref());
        }
        techs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_dedupes_exact_matches() {
        let mut techs = Technologies::new();
        assert!(techs.add("React"));
        assert!(!techs.add("React"));
        assert!(techs.add("react"));
        assert!(!techs.add(" React "));
        assert!(!techs.add("   "));
        assert_eq!(techs.as_slice(), &["React".to_string(), "react".to_string()]);
    }

    #[test]
    fn test_remove_by_value_and_index() {
        let mut techs: Technologies = ["Rust", "Leptos", "WASM"].into_iter().collect();
        assert!(techs.remove("Leptos"));
        assert!(!techs.remove("Leptos"));
        assert_eq!(techs.remove_at(1), Some("WASM".to_string()));
        assert_eq!(techs.remove_at(5), None);
        assert_eq!(techs.iter().collect::<Vec<_>>(), vec!["Rust"]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let techs: Technologies = ["Next.js", "Stripe"].into_iter().collect();
        let json = serde_json::to_string(&techs).unwrap();
        assert_eq!(json, r#"["Next.js","Stripe"]"#);
    }
}
