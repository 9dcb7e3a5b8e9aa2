//! Category Catalogs
//!
//! Each entity kind is filtered by a closed set of categories.
//! The UI renders the catalog as filter buttons plus an "all" sentinel.

use serde::{Deserialize, Serialize};

/// Id of the filter sentinel that matches every category
pub const ALL_ID: &str = "all";

/// A closed, enumerable category set
pub trait Category: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    /// Every selectable value, in display order
    const ALL: &'static [Self];
    /// Label of the "all" filter button
    const ALL_LABEL: &'static str;

    /// Stable id, as stored in JSON
    fn as_str(&self) -> &'static str;

    /// Display name
    fn label(&self) -> &'static str;

    fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

/// Project type shown in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[default]
    Web,
    Design,
    Consulting,
    Marketing,
}

impl Category for ProjectType {
    const ALL: &'static [Self] = &[
        ProjectType::Web,
        ProjectType::Design,
        ProjectType::Consulting,
        ProjectType::Marketing,
    ];
    const ALL_LABEL: &'static str = "All Projects";

    fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Web => "web",
            ProjectType::Design => "design",
            ProjectType::Consulting => "consulting",
            ProjectType::Marketing => "marketing",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ProjectType::Web => "Web Development",
            ProjectType::Design => "UI/UX Design",
            ProjectType::Consulting => "Technical Consulting",
            ProjectType::Marketing => "SEO & Marketing",
        }
    }
}

/// Service category shown on the services page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    #[default]
    Development,
    Design,
    Consulting,
}

impl Category for ServiceCategory {
    const ALL: &'static [Self] = &[
        ServiceCategory::Development,
        ServiceCategory::Design,
        ServiceCategory::Consulting,
    ];
    const ALL_LABEL: &'static str = "All Services";

    fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Development => "development",
            ServiceCategory::Design => "design",
            ServiceCategory::Consulting => "consulting",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Development => "Development",
            ServiceCategory::Design => "Design",
            ServiceCategory::Consulting => "Consulting",
        }
    }
}

/// Active category filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: Category> CategoryFilter<C> {
    /// Parse a filter id; "all" and unknown ids both select everything
    pub fn from_id(id: &str) -> Self {
        match C::parse(id) {
            Some(c) if id != ALL_ID => CategoryFilter::Only(c),
            _ => CategoryFilter::All,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_ID,
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => C::ALL_LABEL,
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(&self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    /// The sentinel followed by every category, in display order
    pub fn catalog() -> Vec<Self> {
        std::iter::once(CategoryFilter::All)
            .chain(C::ALL.iter().copied().map(CategoryFilter::Only))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_ids() {
        for c in ProjectType::ALL {
            assert_eq!(ProjectType::parse(c.as_str()), Some(*c));
        }
        assert_eq!(ServiceCategory::parse("marketing"), None);
    }

    #[test]
    fn test_filter_from_id() {
        assert_eq!(CategoryFilter::<ProjectType>::from_id("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::<ProjectType>::from_id("design"),
            CategoryFilter::Only(ProjectType::Design)
        );
        assert_eq!(CategoryFilter::<ProjectType>::from_id("mobile"), CategoryFilter::All);
    }

    #[test]
    fn test_catalog_starts_with_all() {
        let catalog = CategoryFilter::<ServiceCategory>::catalog();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog[0].label(), "All Services");
        assert_eq!(catalog[1].id(), "development");
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&ProjectType::Marketing).unwrap();
        assert_eq!(json, "\"marketing\"");
    }
}
