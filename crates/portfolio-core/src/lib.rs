//! Portfolio Core
//!
//! Layered like the rest of the workspace:
//! - domain: entities, categories, validation
//! - storage: key-value slot and the typed store on top of it
//! - collection / reorder: the controller the UI talks to
//! - admin / config: session gate and site settings

pub mod admin;
pub mod collection;
pub mod config;
pub mod domain;
pub mod fallback;
pub mod reorder;
pub mod storage;

#[cfg(test)]
mod tests;

pub use admin::{AdminError, AdminGate, AdminState};
pub use collection::{featured, filter_by_category, Collection, CollectionState};
pub use config::{preview, SiteConfig};
pub use domain::{
    Category, CategoryFilter, DomainError, DomainResult, Entity, Project, ProjectDraft, ProjectPatch,
    ProjectType, Service, ServiceCategory, ServiceDraft, ServicePatch, Technologies,
};
pub use reorder::DragMove;
pub use storage::{KeyValueSlot, LoadSource, MemorySlot, PersistentStore, SlotError, StoreError};

/// Gallery projects backed by a slot
pub type ProjectCollection<S> = Collection<Project, S>;
/// Services backed by a slot
pub type ServiceCollection<S> = Collection<Service, S>;
