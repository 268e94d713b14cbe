//! Storage Layer - Key/Value Slot
//!
//! Abstract interface over the persisted key/value area (browser local
//! storage in the app, an in-memory map in tests).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::StorageError;

/// A named-slot string store
pub trait KeyValueSlot {
    /// Read the raw value stored under `key`
    fn read(&self, key: &str) -> Option<String>;

    /// Overwrite the value stored under `key`
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory slot. Clones share the same backing map.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing any write failure switch
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// Make subsequent writes fail (quota exceeded, private mode...)
    pub fn set_fail_writes(&self, fail: bool) {
        if let Ok(mut flag) = self.fail_writes.lock() {
            *flag = fail;
        }
    }
}

impl KeyValueSlot for MemorySlot {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let failing = self.fail_writes.lock().map(|f| *f).unwrap_or(false);
        if failing {
            return Err(StorageError {
                key: key.to_string(),
                reason: "writes disabled".to_string(),
            });
        }
        let mut entries = self.entries.lock().map_err(|e| StorageError {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_slot_roundtrip() {
        let slot = MemorySlot::new();
        assert_eq!(slot.read("k"), None);
        slot.write("k", "v").unwrap();
        assert_eq!(slot.read("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_memory_slot_clones_share_state() {
        let slot = MemorySlot::new();
        let other = slot.clone();
        slot.write("k", "1").unwrap();
        assert_eq!(other.read("k").as_deref(), Some("1"));
    }

    #[test]
    fn test_memory_slot_write_failure() {
        let slot = MemorySlot::new().with_entry("k", "old");
        slot.set_fail_writes(true);
        let err = slot.write("k", "new").unwrap_err();
        assert_eq!(err.key, "k");
        assert_eq!(slot.read("k").as_deref(), Some("old"));
    }
}
