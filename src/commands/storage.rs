//! localStorage Commands
//!
//! Browser-backed `KeyValueSlot` plus the config override lookup.

use gild_board_core::config::CONFIG_STORAGE_KEY;
use gild_board_core::{KeyValueSlot, StorageError, TrackerConfig};

/// Zero-sized handle; every call looks the storage object up again
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSlot;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl KeyValueSlot for LocalStorageSlot {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or_else(|| StorageError {
            key: key.to_string(),
            reason: "localStorage is unavailable".to_string(),
        })?;
        storage.set_item(key, value).map_err(|e| StorageError {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// Defaults merged with the JSON override stored under `gild-board-config`,
/// plus the parse error when that override was malformed
pub fn load_config() -> (TrackerConfig, Option<serde_json::Error>) {
    TrackerConfig::resolve_override(LocalStorageSlot.read(CONFIG_STORAGE_KEY).as_deref())
}
