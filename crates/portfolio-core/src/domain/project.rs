//! Project Entity
//!
//! A gallery entry. Projects carry a technology list and a featured flag
//! that feeds the home page preview.

use serde::{Deserialize, Serialize};

use super::category::ProjectType;
use super::entity::{require_text, DomainError, DomainResult, Entity};
use super::technologies::Technologies;
use crate::fallback;

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier (creation timestamp in millis)
    pub id: String,
    pub title: String,
    pub description: String,
    pub project_type: ProjectType,
    #[serde(default)]
    pub technologies: Technologies,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Passed through untouched; images are managed elsewhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    /// Position in the gallery (1-based)
    #[serde(default)]
    pub order: u32,
}

/// Values collected by the project form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub project_type: ProjectType,
    pub technologies: Technologies,
    pub github_url: String,
    pub live_url: String,
    pub featured: bool,
}

impl ProjectDraft {
    /// Pre-fill the form from an existing project
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            project_type: project.project_type,
            technologies: project.technologies.clone(),
            github_url: project.github_url.clone().unwrap_or_default(),
            live_url: project.live_url.clone().unwrap_or_default(),
            featured: project.featured,
        }
    }
}

/// Partial update for a project
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub project_type: Option<ProjectType>,
    pub technologies: Option<Technologies>,
    /// `Some(None)` clears the link
    pub github_url: Option<Option<String>>,
    pub live_url: Option<Option<String>>,
    pub featured: Option<bool>,
}

impl From<ProjectDraft> for ProjectPatch {
    /// The edit form submits every field
    fn from(draft: ProjectDraft) -> Self {
        Self {
            title: Some(draft.title),
            description: Some(draft.description),
            project_type: Some(draft.project_type),
            technologies: Some(draft.technologies),
            github_url: Some(optional_link(draft.github_url)),
            live_url: Some(optional_link(draft.live_url)),
            featured: Some(draft.featured),
        }
    }
}

/// Blank link inputs are stored as absent
fn optional_link(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl Entity for Project {
    type Category = ProjectType;
    type Draft = ProjectDraft;
    type Patch = ProjectPatch;

    const KIND: &'static str = "project";

    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }

    fn category(&self) -> ProjectType {
        self.project_type
    }

    fn is_featured(&self) -> bool {
        self.featured
    }

    fn from_draft(id: String, order: u32, draft: ProjectDraft) -> DomainResult<Self> {
        let project = Project {
            id,
            title: draft.title,
            description: draft.description,
            project_type: draft.project_type,
            technologies: draft.technologies,
            github_url: optional_link(draft.github_url),
            live_url: optional_link(draft.live_url),
            image_url: None,
            featured: draft.featured,
            order,
        };
        project.validate()?;
        Ok(project)
    }

    fn apply(&mut self, patch: ProjectPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(project_type) = patch.project_type {
            self.project_type = project_type;
        }
        if let Some(technologies) = patch.technologies {
            self.technologies = technologies;
        }
        if let Some(github_url) = patch.github_url {
            self.github_url = github_url;
        }
        if let Some(live_url) = patch.live_url {
            self.live_url = live_url;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
    }

    fn validate(&self) -> DomainResult<()> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)?;
        if self.technologies.is_empty() {
            return Err(DomainError::Validation {
                field: "technologies",
                reason: "needs at least one entry",
            });
        }
        Ok(())
    }

    fn fallback() -> Vec<Self> {
        fallback::projects()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProjectDraft {
        ProjectDraft {
            title: "T".to_string(),
            description: "D".to_string(),
            technologies: ["X"].into_iter().collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_draft_requires_technology() {
        let mut d = draft();
        d.technologies = Technologies::new();
        let err = Project::from_draft("1".into(), 1, d).unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "technologies", .. }));
    }

    #[test]
    fn test_blank_links_are_dropped() {
        let mut d = draft();
        d.github_url = "  ".to_string();
        d.live_url = "https://example.com".to_string();
        let p = Project::from_draft("1".into(), 1, d).unwrap();
        assert_eq!(p.github_url, None);
        assert_eq!(p.live_url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_apply_keeps_id_and_order() {
        let mut p = Project::from_draft("7".into(), 3, draft()).unwrap();
        p.apply(ProjectPatch {
            title: Some("New".to_string()),
            featured: Some(true),
            ..Default::default()
        });
        assert_eq!(p.id, "7");
        assert_eq!(p.order, 3);
        assert_eq!(p.title, "New");
        assert_eq!(p.description, "D");
        assert!(p.featured);
    }

    #[test]
    fn test_json_field_names() {
        let p = Project::from_draft("1".into(), 1, draft()).unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["projectType"], "web");
        assert_eq!(json["order"], 1);
        assert!(json.get("githubUrl").is_none());
    }

    #[test]
    fn test_draft_round_trips_through_patch() {
        let mut p = Project::from_draft("1".into(), 1, draft()).unwrap();
        let before = p.clone();
        p.apply(ProjectDraft::from_project(&before).into());
        assert_eq!(p, before);
    }
}
