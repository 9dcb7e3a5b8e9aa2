//! Storage Layer
//!
//! Slot abstraction and the typed store built on it.

mod slot;
mod store;

pub use slot::{KeyValueSlot, MemorySlot, SlotError, SlotResult};
pub use store::{FallbackReason, LoadSource, Loaded, PersistentStore, StoreError, StoreResult};
