//! Domain Layer
//!
//! Entities managed by collections and the abstractions they share.

mod category;
mod entity;
mod project;
mod service;
mod technologies;

pub use category::{Category, CategoryFilter, ProjectType, ServiceCategory, ALL_ID};
pub use entity::{DomainError, DomainResult, Entity};
pub use project::{Project, ProjectDraft, ProjectPatch};
pub use service::{Service, ServiceDraft, ServicePatch, DEFAULT_AVAILABILITY};
pub use technologies::Technologies;

