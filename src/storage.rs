//! Browser Local Storage Slot
//!
//! `window.localStorage` behind the core slot trait.

use portfolio_core::storage::{KeyValueSlot, SlotError, SlotResult};

/// Handle on the origin's localStorage. Looked up on every call, so the
/// handle itself carries no JS objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSlot;

fn local_storage() -> SlotResult<web_sys::Storage> {
    let window = web_sys::window().ok_or_else(|| SlotError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| SlotError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| SlotError::Unavailable("localStorage disabled".to_string()))
}

impl KeyValueSlot for LocalStorageSlot {
    fn get(&self, key: &str) -> SlotResult<Option<String>> {
        local_storage()?.get_item(key).map_err(|e| SlotError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> SlotResult<()> {
        // Quota errors surface here
        local_storage()?.set_item(key, value).map_err(|e| SlotError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn remove(&self, key: &str) -> SlotResult<()> {
        local_storage()?.remove_item(key).map_err(|e| SlotError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}
