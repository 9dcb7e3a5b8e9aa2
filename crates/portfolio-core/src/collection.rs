//! Collection Controller
//!
//! In-memory source of truth for one entity kind during a session.
//! Every mutation builds the next list, persists it, and only then
//! replaces the in-memory copy, so memory and storage stay in sync.

use chrono::Utc;
use log::{debug, info};

use crate::domain::{CategoryFilter, DomainError, DomainResult, Entity};
use crate::reorder::{map_visible_move, move_item, renumber, DragMove};
use crate::storage::{KeyValueSlot, LoadSource, PersistentStore};

/// Lifecycle of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionState {
    Uninitialized,
    Loading,
    Ready,
}

/// Items of the given category, in their current relative order
pub fn filter_by_category<T: Entity>(all: &[T], filter: CategoryFilter<T::Category>) -> Vec<T> {
    all.iter()
        .filter(|item| filter.matches(item.category()))
        .cloned()
        .collect()
}

/// Featured items sorted by order, at most `limit` of them
pub fn featured<T: Entity>(all: &[T], limit: usize) -> Vec<T> {
    let mut picked: Vec<T> = all.iter().filter(|item| item.is_featured()).cloned().collect();
    picked.sort_by_key(|item| item.order());
    picked.truncate(limit);
    picked
}

/// Controller for one persisted collection
#[derive(Debug, Clone)]
pub struct Collection<T, S> {
    store: PersistentStore<T, S>,
    items: Vec<T>,
    state: CollectionState,
    load_source: Option<LoadSource>,
}

impl<T: Entity, S: KeyValueSlot> Collection<T, S> {
    /// Wrap a store without touching it yet
    pub fn new(store: PersistentStore<T, S>) -> Self {
        Self {
            store,
            items: Vec::new(),
            state: CollectionState::Uninitialized,
            load_source: None,
        }
    }

    /// Create and load in one step
    pub fn open(store: PersistentStore<T, S>) -> Self {
        let mut collection = Self::new(store);
        collection.load();
        collection
    }

    /// (Re)read the slot. Loaded items are sorted by order and renumbered
    /// densely in memory; storage is rewritten on the next mutation.
    pub fn load(&mut self) -> &LoadSource {
        self.state = CollectionState::Loading;
        let loaded = self.store.load();

        let mut items = loaded.items;
        // Records without an order sort last
        items.sort_by_key(|item| (item.order() == 0, item.order()));
        renumber(&mut items);

        self.items = items;
        self.state = CollectionState::Ready;
        self.load_source.insert(loaded.source)
    }

    fn ensure_ready(&mut self) {
        if self.state != CollectionState::Ready {
            self.load();
        }
    }

    pub fn state(&self) -> CollectionState {
        self.state
    }

    /// Outcome of the most recent load, if any
    pub fn load_source(&self) -> Option<&LoadSource> {
        self.load_source.as_ref()
    }

    pub fn store(&self) -> &PersistentStore<T, S> {
        &self.store
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// The currently displayed list for a filter
    pub fn visible(&self, filter: CategoryFilter<T::Category>) -> Vec<T> {
        filter_by_category(&self.items, filter)
    }

    /// Top-N featured items for the home page preview
    pub fn featured_first_n(&self, n: usize) -> Vec<T> {
        featured(&self.items, n)
    }

    /// Validate and append a new item with a timestamp id
    pub fn create(&mut self, draft: T::Draft) -> DomainResult<T> {
        self.create_at(draft, Utc::now().timestamp_millis())
    }

    /// Same as [`Collection::create`] with an explicit timestamp
    pub fn create_at(&mut self, draft: T::Draft, now_millis: i64) -> DomainResult<T> {
        self.ensure_ready();
        let id = self.next_id(now_millis);
        let item = T::from_draft(id, self.items.len() as u32 + 1, draft)?;

        let mut next = self.items.clone();
        next.push(item.clone());
        self.commit(next)?;
        info!("Created {} {}", T::KIND, item.id());
        Ok(item)
    }

    /// Merge a patch into the item with this id. Order is untouched.
    pub fn update(&mut self, id: &str, patch: T::Patch) -> DomainResult<T> {
        self.ensure_ready();
        let index = self.position(id)?;

        let mut next = self.items.clone();
        next[index].apply(patch);
        next[index].validate()?;
        let updated = next[index].clone();
        self.commit(next)?;
        info!("Updated {} {}", T::KIND, id);
        Ok(updated)
    }

    /// Remove an item and renumber the rest
    pub fn delete(&mut self, id: &str) -> DomainResult<T> {
        self.ensure_ready();
        let index = self.position(id)?;

        let mut next = self.items.clone();
        let removed = next.remove(index);
        renumber(&mut next);
        self.commit(next)?;
        info!("Deleted {} {}", T::KIND, id);
        Ok(removed)
    }

    /// Apply a drag gesture made over the list shown for `filter`.
    /// Returns whether anything changed; cancelled drops and same-slot
    /// drops are no-ops and skip persistence.
    pub fn reorder(&mut self, filter: CategoryFilter<T::Category>, gesture: DragMove) -> DomainResult<bool> {
        self.ensure_ready();
        let Some(destination) = gesture.destination else {
            debug!("Drop cancelled for {} at {}", T::KIND, gesture.source);
            return Ok(false);
        };

        let visible: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| filter.matches(item.category()))
            .map(|(i, _)| i)
            .collect();
        let (from, to) = map_visible_move(&visible, gesture.source, destination)?;
        if gesture.source == destination {
            return Ok(false);
        }

        let mut next = self.items.clone();
        move_item(&mut next, from, to)?;
        renumber(&mut next);
        self.commit(next)?;
        info!("Moved {} from {} to {}", T::KIND, from + 1, to + 1);
        Ok(true)
    }

    /// Replace the collection with the fallback catalog
    pub fn reset(&mut self) -> DomainResult<()> {
        self.items = self.store.reset()?;
        self.state = CollectionState::Ready;
        Ok(())
    }

    fn position(&self, id: &str) -> DomainResult<usize> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))
    }

    /// Timestamp id, bumped until it is unused in this collection
    fn next_id(&self, now_millis: i64) -> String {
        let mut candidate = now_millis;
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }

    fn commit(&mut self, next: Vec<T>) -> DomainResult<()> {
        self.store.save(&next)?;
        self.items = next;
        Ok(())
    }
}
