//! Service Entity
//!
//! An offering listed on the services page.

use serde::{Deserialize, Serialize};

use super::category::ServiceCategory;
use super::entity::{require_text, DomainResult, Entity};
use crate::fallback;

/// Availability pre-selected in the service form
pub const DEFAULT_AVAILABILITY: &str = "Available";

/// A service offering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    pub category: ServiceCategory,
    #[serde(default)]
    pub order: u32,
}

/// Values collected by the service form
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDraft {
    pub title: String,
    pub description: String,
    pub rate: String,
    pub duration: String,
    pub availability: String,
    pub category: ServiceCategory,
}

impl Default for ServiceDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            rate: String::new(),
            duration: String::new(),
            availability: DEFAULT_AVAILABILITY.to_string(),
            category: ServiceCategory::default(),
        }
    }
}

impl ServiceDraft {
    pub fn from_service(service: &Service) -> Self {
        Self {
            title: service.title.clone(),
            description: service.description.clone(),
            rate: service.rate.clone().unwrap_or_default(),
            duration: service.duration.clone().unwrap_or_default(),
            availability: service.availability.clone().unwrap_or_default(),
            category: service.category,
        }
    }
}

/// Partial update for a service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServicePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub rate: Option<Option<String>>,
    pub duration: Option<Option<String>>,
    pub availability: Option<Option<String>>,
    pub category: Option<ServiceCategory>,
}

impl From<ServiceDraft> for ServicePatch {
    fn from(draft: ServiceDraft) -> Self {
        Self {
            title: Some(draft.title),
            description: Some(draft.description),
            rate: Some(optional_text(draft.rate)),
            duration: Some(optional_text(draft.duration)),
            availability: Some(optional_text(draft.availability)),
            category: Some(draft.category),
        }
    }
}

fn optional_text(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl Entity for Service {
    type Category = ServiceCategory;
    type Draft = ServiceDraft;
    type Patch = ServicePatch;

    const KIND: &'static str = "service";

    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }

    fn category(&self) -> ServiceCategory {
        self.category
    }

    fn from_draft(id: String, order: u32, draft: ServiceDraft) -> DomainResult<Self> {
        let service = Service {
            id,
            title: draft.title,
            description: draft.description,
            rate: optional_text(draft.rate),
            duration: optional_text(draft.duration),
            availability: optional_text(draft.availability),
            category: draft.category,
            order,
        };
        service.validate()?;
        Ok(service)
    }

    fn apply(&mut self, patch: ServicePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(availability) = patch.availability {
            self.availability = availability;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }

    fn validate(&self) -> DomainResult<()> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)
    }

    fn fallback() -> Vec<Self> {
        fallback::services()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_service_needs_no_extras() {
        let draft = ServiceDraft {
            title: "Audit".to_string(),
            description: "Performance review".to_string(),
            availability: String::new(),
            ..Default::default()
        };
        let s = Service::from_draft("9".into(), 1, draft).unwrap();
        assert_eq!(s.rate, None);
        assert_eq!(s.availability, None);
        assert_eq!(s.category, ServiceCategory::Development);
    }

    #[test]
    fn test_service_requires_description() {
        let draft = ServiceDraft {
            title: "Audit".to_string(),
            ..Default::default()
        };
        let err = Service::from_draft("9".into(), 1, draft).unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "description", .. }));
    }

    #[test]
    fn test_parses_stored_shape() {
        let json = r#"{"id":"1","title":"Web Development","description":"d",
            "rate":"$75/hour","category":"development","order":1}"#;
        let s: Service = serde_json::from_str(json).unwrap();
        assert_eq!(s.rate.as_deref(), Some("$75/hour"));
        assert_eq!(s.duration, None);
        assert!(!s.is_featured());
    }
}
