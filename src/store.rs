//! Global Site State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: the gallery
//! only re-renders when projects change, the services page when services do.

use leptos::prelude::*;
use portfolio_core::{
    CategoryFilter, DomainResult, DragMove, PersistentStore, Project, ProjectCollection, ProjectDraft,
    ProjectType, Service, ServiceCategory, ServiceCollection, ServiceDraft, SiteConfig,
};
use reactive_stores::Store;

use crate::storage::LocalStorageSlot;

/// Both collections, loaded once at startup
#[derive(Clone, Debug, Store)]
pub struct SiteState {
    pub projects: ProjectCollection<LocalStorageSlot>,
    pub services: ServiceCollection<LocalStorageSlot>,
}

impl SiteState {
    pub fn open(config: &SiteConfig) -> Self {
        Self {
            projects: ProjectCollection::open(PersistentStore::new(LocalStorageSlot, config.projects_key.clone())),
            services: ServiceCollection::open(PersistentStore::new(LocalStorageSlot, config.services_key.clone())),
        }
    }
}

/// Type alias for the store
pub type SiteStore = Store<SiteState>;

/// Get the site store from context
pub fn use_site_store() -> SiteStore {
    expect_context::<SiteStore>()
}

// ========================
// Project Operations
// ========================

pub fn create_project(store: &SiteStore, draft: ProjectDraft) -> DomainResult<Project> {
    store.projects().write().create(draft)
}

pub fn update_project(store: &SiteStore, id: &str, draft: ProjectDraft) -> DomainResult<Project> {
    store.projects().write().update(id, draft.into())
}

pub fn delete_project(store: &SiteStore, id: &str) -> DomainResult<Project> {
    store.projects().write().delete(id)
}

pub fn reorder_projects(store: &SiteStore, filter: CategoryFilter<ProjectType>, gesture: DragMove) -> DomainResult<bool> {
    store.projects().write().reorder(filter, gesture)
}

// ========================
// Service Operations
// ========================

pub fn create_service(store: &SiteStore, draft: ServiceDraft) -> DomainResult<Service> {
    store.services().write().create(draft)
}

pub fn update_service(store: &SiteStore, id: &str, draft: ServiceDraft) -> DomainResult<Service> {
    store.services().write().update(id, draft.into())
}

pub fn delete_service(store: &SiteStore, id: &str) -> DomainResult<Service> {
    store.services().write().delete(id)
}

pub fn reorder_services(store: &SiteStore, filter: CategoryFilter<ServiceCategory>, gesture: DragMove) -> DomainResult<bool> {
    store.services().write().reorder(filter, gesture)
}

/// Restore both built-in catalogs
pub fn reset_all(store: &SiteStore) -> DomainResult<()> {
    store.projects().write().reset()?;
    store.services().write().reset()
}
