//! Persistent Store Adapter
//!
//! Reads and writes one collection as a JSON array under a fixed slot key.
//! Loading never fails: a missing, blank, or unreadable slot is healed by
//! writing the built-in fallback catalog back to it.

use std::marker::PhantomData;

use log::{debug, error, info, warn};
use serde_json::Value;
use thiserror::Error;

use super::slot::{KeyValueSlot, SlotError};
use crate::domain::Entity;

/// Errors surfaced by save/reset/clear
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Slot(#[from] SlotError),
    #[error("serialization failed: {0}")]
    Serialize(String),
    /// The slot did not hold what was just written
    #[error("write to '{key}' could not be verified")]
    VerificationFailed { key: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Why a load fell back to the built-in catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// Nothing stored under the key
    Missing,
    /// Stored text is blank
    Empty,
    /// Not JSON, not an array, or no element could be decoded
    Malformed(String),
    /// The slot itself could not be read
    Unavailable(String),
}

/// Where loaded items came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    Stored,
    Fallback(FallbackReason),
}

/// Result of a load
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub source: LoadSource,
}

impl<T> Loaded<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, LoadSource::Fallback(_))
    }
}

/// Typed access to one slot key
#[derive(Debug, Clone)]
pub struct PersistentStore<T, S> {
    key: String,
    slot: S,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Entity, S: KeyValueSlot> PersistentStore<T, S> {
    pub fn new(slot: S, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            slot,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Read the collection, healing the slot with the fallback catalog when needed
    pub fn load(&self) -> Loaded<T> {
        let reason = match self.slot.get(&self.key) {
            Err(e) => FallbackReason::Unavailable(e.to_string()),
            Ok(None) => FallbackReason::Missing,
            Ok(Some(text)) if text.trim().is_empty() => FallbackReason::Empty,
            Ok(Some(text)) => match self.decode(&text) {
                Ok(items) => {
                    info!("Loaded {} {}s from '{}'", items.len(), T::KIND, self.key);
                    return Loaded {
                        items,
                        source: LoadSource::Stored,
                    };
                }
                Err(reason) => reason,
            },
        };

        warn!("Using fallback {}s for '{}': {:?}", T::KIND, self.key, reason);
        let items = T::fallback();
        if let Err(e) = self.save(&items) {
            error!("Could not persist fallback {}s to '{}': {}", T::KIND, self.key, e);
        }
        Loaded {
            items,
            source: LoadSource::Fallback(reason),
        }
    }

    /// Serialize, write, and read back to confirm the write landed
    pub fn save(&self, items: &[T]) -> StoreResult<()> {
        let serialized =
            serde_json::to_string(items).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.slot.set(&self.key, &serialized)?;

        let verification = self.slot.get(&self.key)?;
        if verification.as_deref() != Some(serialized.as_str()) {
            error!("Verification failed: {}s were not saved to '{}'", T::KIND, self.key);
            return Err(StoreError::VerificationFailed {
                key: self.key.clone(),
            });
        }

        info!("Saved {} {}s to '{}'", items.len(), T::KIND, self.key);
        Ok(())
    }

    /// Overwrite the slot with the fallback catalog
    pub fn reset(&self) -> StoreResult<Vec<T>> {
        let items = T::fallback();
        self.save(&items)?;
        Ok(items)
    }

    /// Remove the slot; the next load falls back
    pub fn clear(&self) -> StoreResult<()> {
        self.slot.remove(&self.key)?;
        info!("Cleared '{}'", self.key);
        Ok(())
    }

    /// Decode a stored array element by element, skipping records that no
    /// longer match the entity shape
    fn decode(&self, text: &str) -> Result<Vec<T>, FallbackReason> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| FallbackReason::Malformed(e.to_string()))?;
        let Value::Array(elements) = value else {
            return Err(FallbackReason::Malformed("not an array".to_string()));
        };
        if elements.is_empty() {
            return Ok(Vec::new());
        }

        let total = elements.len();
        let items: Vec<T> = elements
            .into_iter()
            .enumerate()
            .filter_map(|(i, element)| match serde_json::from_value(element) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!("Skipping stored {} #{} in '{}': {}", T::KIND, i, self.key, e);
                    None
                }
            })
            .collect();

        if items.is_empty() {
            return Err(FallbackReason::Malformed(format!(
                "none of {} stored elements could be decoded",
                total
            )));
        }
        debug!("Decoded {}/{} stored {}s", items.len(), total, T::KIND);
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Project, Service};
    use crate::storage::MemorySlot;

    const KEY: &str = "portfolio-projects";

    fn store(slot: &MemorySlot) -> PersistentStore<Project, MemorySlot> {
        PersistentStore::new(slot.clone(), KEY)
    }

    #[test]
    fn test_missing_slot_heals_with_fallback() {
        let slot = MemorySlot::new();
        let loaded = store(&slot).load();
        assert_eq!(loaded.source, LoadSource::Fallback(FallbackReason::Missing));
        assert_eq!(loaded.items, Project::fallback());

        let again = store(&slot).load();
        assert_eq!(again.source, LoadSource::Stored);
        assert_eq!(again.items, loaded.items);
    }

    #[test]
    fn test_blank_and_malformed_text_fall_back() {
        let slot = MemorySlot::new();
        for (raw, blank) in [("   ", true), ("not json", false), (r#"{"id":"1"}"#, false)] {
            slot.put_raw(KEY, raw);
            let loaded = store(&slot).load();
            match loaded.source {
                LoadSource::Fallback(FallbackReason::Empty) => assert!(blank),
                LoadSource::Fallback(FallbackReason::Malformed(_)) => assert!(!blank),
                other => panic!("unexpected source {:?} for {:?}", other, raw),
            }
            assert!(slot.raw(KEY).unwrap().starts_with('['));
        }
    }

    #[test]
    fn test_undecodable_elements_are_skipped() {
        let slot = MemorySlot::new();
        slot.put_raw(
            KEY,
            r#"[{"id":"1","title":"A","description":"B","projectType":"web",
                 "technologies":["Rust"],"featured":false,"order":1},
                {"id":"2","title":"C","projectType":"mobile"}]"#,
        );
        let loaded = store(&slot).load();
        assert_eq!(loaded.source, LoadSource::Stored);
        assert_eq!(loaded.items.len(), 1);
        assert_eq!(loaded.items[0].id, "1");
    }

    #[test]
    fn test_no_decodable_elements_falls_back() {
        let slot = MemorySlot::new();
        slot.put_raw(KEY, r#"[1, 2, 3]"#);
        assert!(store(&slot).load().is_fallback());
    }

    #[test]
    fn test_unavailable_slot_still_returns_catalog() {
        let slot = MemorySlot::new();
        slot.set_unavailable(true);
        let loaded = store(&slot).load();
        assert!(matches!(
            loaded.source,
            LoadSource::Fallback(FallbackReason::Unavailable(_))
        ));
        assert_eq!(loaded.items.len(), 6);
        assert!(matches!(
            store(&slot).save(&loaded.items),
            Err(StoreError::Slot(SlotError::Unavailable(_)))
        ));
    }

    #[test]
    fn test_round_trip_including_empty() {
        let slot = MemorySlot::new();
        let s = store(&slot);
        let first = s.load().items;
        s.save(&first).unwrap();
        assert_eq!(s.load().items, first);

        s.save(&[]).unwrap();
        let loaded = s.load();
        assert_eq!(loaded.source, LoadSource::Stored);
        assert!(loaded.items.is_empty());
    }

    #[test]
    fn test_reset_and_clear() {
        let slot = MemorySlot::new();
        let services: PersistentStore<Service, _> = PersistentStore::new(slot.clone(), "svc");
        services.save(&[]).unwrap();
        let restored = services.reset().unwrap();
        assert_eq!(restored.len(), 4);
        assert_eq!(services.load().items, restored);

        services.clear().unwrap();
        assert_eq!(slot.raw("svc"), None);
        assert_eq!(
            services.load().source,
            LoadSource::Fallback(FallbackReason::Missing)
        );
    }

    #[test]
    fn test_keys_are_independent() {
        let slot = MemorySlot::new();
        let projects = store(&slot);
        let services: PersistentStore<Service, _> =
            PersistentStore::new(slot.clone(), "portfolio-services");
        projects.save(&[]).unwrap();
        assert!(services.load().is_fallback());
        assert!(projects.load().items.is_empty());
    }
}
