//! Key-Value Slot
//!
//! The narrow interface the store needs from browser-local storage.
//! Implementations: `MemorySlot` here, `LocalStorageSlot` in the UI crate.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Errors raised by a slot backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    /// Storage is not reachable at all (no window, privacy mode, ...)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("read failed for '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("write failed for '{key}': {reason}")]
    Write { key: String, reason: String },
}

pub type SlotResult<T> = Result<T, SlotError>;

/// String key-value storage scoped to the current origin
pub trait KeyValueSlot: Send + Sync {
    fn get(&self, key: &str) -> SlotResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> SlotResult<()>;

    fn remove(&self, key: &str) -> SlotResult<()>;
}

/// In-memory slot. Clones share the same map, like two handles on one origin.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    values: HashMap<String, String>,
    unavailable: bool,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate storage that refuses every access
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().unavailable = unavailable;
    }

    /// Write raw text, bypassing any store
    pub fn put_raw(&self, key: &str, value: &str) {
        self.lock().values.insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().values.get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        // A poisoned map is still a valid map
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check(inner: &MemoryInner) -> SlotResult<()> {
        if inner.unavailable {
            return Err(SlotError::Unavailable("memory slot disabled".to_string()));
        }
        Ok(())
    }
}

impl KeyValueSlot for MemorySlot {
    fn get(&self, key: &str) -> SlotResult<Option<String>> {
        let inner = self.lock();
        Self::check(&inner)?;
        Ok(inner.values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SlotResult<()> {
        let mut inner = self.lock();
        Self::check(&inner)?;
        inner.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SlotResult<()> {
        let mut inner = self.lock();
        Self::check(&inner)?;
        inner.values.remove(key);
        Ok(())
    }
}
