//! Collection Integration Tests
//!
//! Whole-collection scenarios over an in-memory slot.

use std::collections::BTreeSet;

use crate::collection::{Collection, CollectionState};
use crate::domain::*;
use crate::reorder::{is_dense, DragMove};
use crate::storage::{LoadSource, MemorySlot, PersistentStore, StoreError};

const PROJECTS: &str = "portfolio-projects";
const SERVICES: &str = "portfolio-services";

fn make_project(id: &str, order: u32, project_type: ProjectType) -> Project {
    Project {
        id: id.to_string(),
        title: format!("Project {}", id),
        description: "desc".to_string(),
        project_type,
        technologies: ["Rust"].into_iter().collect(),
        github_url: None,
        live_url: None,
        image_url: None,
        featured: false,
        order,
    }
}

fn seeded(projects: Vec<Project>) -> (MemorySlot, Collection<Project, MemorySlot>) {
    let slot = MemorySlot::new();
    let store = PersistentStore::new(slot.clone(), PROJECTS);
    store.save(&projects).expect("seed");
    let collection = Collection::open(store);
    (slot, collection)
}

fn three() -> (MemorySlot, Collection<Project, MemorySlot>) {
    seeded(vec![
        make_project("1", 1, ProjectType::Web),
        make_project("2", 2, ProjectType::Design),
        make_project("3", 3, ProjectType::Web),
    ])
}

fn ids_and_orders(c: &Collection<Project, MemorySlot>) -> Vec<(String, u32)> {
    c.items().iter().map(|p| (p.id.clone(), p.order)).collect()
}

fn stored(slot: &MemorySlot) -> Vec<Project> {
    serde_json::from_str(&slot.raw(PROJECTS).expect("slot written")).expect("valid json")
}

fn assert_dense(c: &Collection<Project, MemorySlot>) {
    let orders: BTreeSet<u32> = c.items().iter().map(|p| p.order).collect();
    let expected: BTreeSet<u32> = (1..=c.len() as u32).collect();
    assert_eq!(orders, expected);
    assert!(is_dense(c.items()));
}

fn draft(title: &str) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        description: "D".to_string(),
        technologies: ["X"].into_iter().collect(),
        ..Default::default()
    }
}

#[test]
fn test_open_moves_through_states() {
    let store = PersistentStore::<Project, _>::new(MemorySlot::new(), PROJECTS);
    let mut c = Collection::new(store);
    assert_eq!(c.state(), CollectionState::Uninitialized);
    assert!(c.load_source().is_none());
    c.load();
    assert_eq!(c.state(), CollectionState::Ready);
    assert!(matches!(c.load_source(), Some(LoadSource::Fallback(_))));
    assert_eq!(c.len(), 6);
}

#[test]
fn test_first_mutation_lazily_loads() {
    let store = PersistentStore::<Service, _>::new(MemorySlot::new(), SERVICES);
    let mut c = Collection::new(store);
    c.delete("1").unwrap();
    assert_eq!(c.state(), CollectionState::Ready);
    assert_eq!(c.len(), 3);
    assert_eq!(c.items()[0].id, "2");
    assert_eq!(c.items()[0].order, 1);
}

#[test]
fn test_reorder_first_to_last() {
    let (slot, mut c) = three();
    assert!(c.reorder(CategoryFilter::All, DragMove::new(0, 2)).unwrap());
    let expected = vec![("2".to_string(), 1), ("3".to_string(), 2), ("1".to_string(), 3)];
    assert_eq!(ids_and_orders(&c), expected);
    assert_eq!(stored(&slot), c.items());
}

#[test]
fn test_delete_renumbers() {
    let (slot, mut c) = three();
    let removed = c.delete("2").unwrap();
    assert_eq!(removed.id, "2");
    assert_eq!(ids_and_orders(&c), vec![("1".to_string(), 1), ("3".to_string(), 2)]);
    assert_eq!(stored(&slot), c.items());
}

#[test]
fn test_create_on_empty_collection() {
    let (_, mut c) = seeded(vec![]);
    assert!(c.is_empty());
    let created = c.create(draft("T")).unwrap();
    assert_eq!(created.order, 1);
    assert!(!created.id.is_empty());
    assert!(created.id.chars().all(|ch| ch.is_ascii_digit()));
    assert_eq!(c.len(), 1);
}

#[test]
fn test_create_at_same_instant_gets_unique_ids() {
    let (_, mut c) = seeded(vec![]);
    let a = c.create_at(draft("A"), 1_700_000_000_000).unwrap();
    let b = c.create_at(draft("B"), 1_700_000_000_000).unwrap();
    assert_eq!(a.id, "1700000000000");
    assert_eq!(b.id, "1700000000001");
    assert_eq!(b.order, 2);
}

#[test]
fn test_order_stays_dense_through_mutations() {
    let (_, mut c) = three();
    c.create(draft("four")).unwrap();
    assert_dense(&c);
    c.update("1", ProjectPatch { title: Some("renamed".into()), ..Default::default() })
        .unwrap();
    assert_dense(&c);
    c.delete("3").unwrap();
    assert_dense(&c);
    c.reorder(CategoryFilter::All, DragMove::new(2, 0)).unwrap();
    assert_dense(&c);
}

#[test]
fn test_invalid_create_is_reported_and_changes_nothing() {
    let (slot, mut c) = three();
    let before = slot.raw(PROJECTS);
    let mut d = draft("");
    d.title = "  ".to_string();
    let err = c.create(d).unwrap_err();
    assert!(matches!(err, DomainError::Validation { field: "title", .. }));
    assert_eq!(c.len(), 3);
    assert_eq!(slot.raw(PROJECTS), before);
}

#[test]
fn test_update_merges_and_keeps_order() {
    let (_, mut c) = three();
    let updated = c
        .update("3", ProjectPatch { featured: Some(true), ..Default::default() })
        .unwrap();
    assert!(updated.featured);
    assert_eq!(updated.order, 3);
    assert_eq!(updated.title, "Project 3");
    assert_eq!(c.get("3"), Some(&updated));
}

#[test]
fn test_update_rejects_clearing_required_field() {
    let (_, mut c) = three();
    let err = c
        .update("1", ProjectPatch { technologies: Some(Technologies::new()), ..Default::default() })
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { field: "technologies", .. }));
    assert_eq!(c.get("1").unwrap().technologies.len(), 1);
}

#[test]
fn test_missing_id_is_not_found() {
    let (_, mut c) = three();
    assert!(matches!(
        c.update("nope", ProjectPatch::default()),
        Err(DomainError::NotFound(id)) if id == "nope"
    ));
    assert!(matches!(c.delete("nope"), Err(DomainError::NotFound(_))));
    assert_eq!(c.len(), 3);
}

#[test]
fn test_storage_failure_leaves_memory_untouched() {
    let (slot, mut c) = three();
    slot.set_unavailable(true);
    let err = c.delete("1").unwrap_err();
    assert!(matches!(err, DomainError::Storage(StoreError::Slot(_))));
    assert_eq!(c.len(), 3);

    slot.set_unavailable(false);
    assert_eq!(stored(&slot).len(), 3);
}

#[test]
fn test_cancelled_and_same_slot_drops_are_noops() {
    let (slot, mut c) = three();
    slot.put_raw(PROJECTS, "sentinel");
    assert!(!c.reorder(CategoryFilter::All, DragMove::cancelled(0)).unwrap());
    assert!(!c.reorder(CategoryFilter::All, DragMove::new(1, 1)).unwrap());
    assert_eq!(slot.raw(PROJECTS).as_deref(), Some("sentinel"));
    assert_eq!(
        ids_and_orders(&c),
        vec![("1".to_string(), 1), ("2".to_string(), 2), ("3".to_string(), 3)]
    );
}

#[test]
fn test_reorder_out_of_range() {
    let (_, mut c) = three();
    assert!(matches!(
        c.reorder(CategoryFilter::All, DragMove::new(0, 3)),
        Err(DomainError::InvalidIndex { index: 3, len: 3 })
    ));
    // Only two web projects are visible
    assert!(c
        .reorder(CategoryFilter::Only(ProjectType::Web), DragMove::new(0, 2))
        .is_err());
}

#[test]
fn test_reorder_within_filtered_view() {
    let (_, mut c) = three();
    // visible web: 1, 3 ; drag "3" above "1"
    c.reorder(CategoryFilter::Only(ProjectType::Web), DragMove::new(1, 0))
        .unwrap();
    assert_eq!(
        ids_and_orders(&c),
        vec![("3".to_string(), 1), ("1".to_string(), 2), ("2".to_string(), 3)]
    );
    let web: Vec<String> = c
        .visible(CategoryFilter::Only(ProjectType::Web))
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(web, vec!["3", "1"]);
}

#[test]
fn test_filter_by_category() {
    let (_, c) = three();
    assert_eq!(c.visible(CategoryFilter::All), c.items());
    let design = c.visible(CategoryFilter::Only(ProjectType::Design));
    assert_eq!(design.len(), 1);
    assert_eq!(design[0].id, "2");
    assert!(c.visible(CategoryFilter::Only(ProjectType::Marketing)).is_empty());
}

#[test]
fn test_featured_first_n_sorted_by_order() {
    let mut projects = vec![
        make_project("a", 4, ProjectType::Web),
        make_project("b", 1, ProjectType::Web),
        make_project("c", 3, ProjectType::Web),
        make_project("d", 2, ProjectType::Web),
        make_project("e", 5, ProjectType::Web),
    ];
    for p in projects.iter_mut().filter(|p| p.id != "d") {
        p.featured = true;
    }
    let featured: Vec<String> = crate::collection::featured(&projects, 3)
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(featured, vec!["b", "c", "a"]);
}

#[test]
fn test_fallback_featured_preview() {
    let c = Collection::open(PersistentStore::<Project, _>::new(MemorySlot::new(), PROJECTS));
    let ids: Vec<String> = c.featured_first_n(3).into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["1", "2", "4"]);
}

#[test]
fn test_open_normalizes_stored_order() {
    let (_, c) = seeded(vec![
        make_project("x", 7, ProjectType::Web),
        make_project("y", 0, ProjectType::Web),
        make_project("z", 2, ProjectType::Web),
    ]);
    assert_eq!(
        ids_and_orders(&c),
        vec![("z".to_string(), 1), ("x".to_string(), 2), ("y".to_string(), 3)]
    );
}

#[test]
fn test_reset_restores_catalog() {
    let (slot, mut c) = three();
    c.reset().unwrap();
    assert_eq!(c.items(), Project::fallback().as_slice());
    assert_eq!(stored(&slot), Project::fallback());
}

#[test]
fn test_services_share_the_controller() {
    let slot = MemorySlot::new();
    let mut c = Collection::open(PersistentStore::<Service, _>::new(slot.clone(), SERVICES));
    let consulting = c.visible(CategoryFilter::Only(ServiceCategory::Consulting));
    assert_eq!(consulting.len(), 2);

    c.reorder(CategoryFilter::Only(ServiceCategory::Consulting), DragMove::new(1, 0))
        .unwrap();
    let titles: Vec<&str> = c.items().iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Web Development", "UI/UX Design", "SEO & Digital Marketing", "Technical Consulting"]
    );

    let created = c
        .create(ServiceDraft {
            title: "Audit".into(),
            description: "Accessibility audit".into(),
            category: ServiceCategory::Design,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(created.order, 5);
    assert_eq!(created.availability.as_deref(), Some("Available"));
    assert!(c.featured_first_n(3).is_empty());
}

#[test]
fn test_second_session_sees_first_sessions_writes() {
    let slot = MemorySlot::new();
    let mut first = Collection::open(PersistentStore::<Project, _>::new(slot.clone(), PROJECTS));
    first.delete("6").unwrap();

    let second = Collection::open(PersistentStore::<Project, _>::new(slot.clone(), PROJECTS));
    assert_eq!(second.load_source(), Some(&LoadSource::Stored));
    assert_eq!(second.items(), first.items());
}
