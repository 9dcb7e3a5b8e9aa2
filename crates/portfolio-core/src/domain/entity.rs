//! Domain Layer - Core Entity Trait
//!
//! The contract every record managed by a collection must satisfy.
//! Projects and services both implement it, so a single controller
//! handles create/update/delete/reorder for either kind.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::category::Category;
use crate::storage::StoreError;

/// Core trait for all collection entities
pub trait Entity: Sized + Send + Sync + Clone + Serialize + DeserializeOwned + 'static {
    /// Closed set of categories this kind can be filtered by
    type Category: Category;
    /// Fields supplied by the create form
    type Draft;
    /// Fields merged in by an update (None = keep current value)
    type Patch;

    /// Human-readable kind, used in log lines
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Dense 1-based display position
    fn order(&self) -> u32;

    fn set_order(&mut self, order: u32);

    fn category(&self) -> Self::Category;

    /// Whether the item belongs to the featured subset
    fn is_featured(&self) -> bool {
        false
    }

    /// Build a new entity from a validated draft
    fn from_draft(id: String, order: u32, draft: Self::Draft) -> DomainResult<Self>;

    /// Merge a patch into this entity. `id` and `order` are never touched.
    fn apply(&mut self, patch: Self::Patch);

    /// Presence checks required before anything is persisted
    fn validate(&self) -> DomainResult<()>;

    /// Catalog written to the slot when it is empty or unreadable
    fn fallback() -> Vec<Self>;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: &'static str },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("index {index} out of range for {len} items")]
    InvalidIndex { index: usize, len: usize },

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

impl DomainError {
    pub(crate) fn required(field: &'static str) -> Self {
        DomainError::Validation { field, reason: "is required" }
    }
}

/// Presence check shared by every entity kind. Whitespace-only counts as empty.
pub(crate) fn require_text(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::required(field));
    }
    Ok(())
}
