//! Completion Store
//!
//! Owns the set of completed item ids and mirrors it into a persisted slot.
//! Every mutation writes the whole set back before returning.

use std::collections::BTreeSet;

use crate::domain::{Catalog, ItemId, StorageError};
use crate::storage::KeyValueSlot;

/// Persisted set of completed ("gilded") item ids
#[derive(Debug, Clone)]
pub struct CompletionStore<S> {
    slot: S,
    key: String,
    completed: BTreeSet<ItemId>,
}

impl<S: KeyValueSlot> CompletionStore<S> {
    /// Load the set stored under `key`.
    ///
    /// Missing or malformed data yields an empty set; this never fails.
    pub fn load(slot: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let completed = match slot.read(&key) {
            None => BTreeSet::new(),
            Some(raw) => match serde_json::from_str::<Vec<ItemId>>(&raw) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    log::warn!(
                        "stored completion set under `{}` is unreadable, starting empty: {}",
                        key,
                        e
                    );
                    BTreeSet::new()
                }
            },
        };
        log::info!("completion store loaded: {} ids", completed.len());
        Self { slot, key, completed }
    }

    /// Overwrite the persisted slot with the current set
    pub fn save(&self) -> Result<(), StorageError> {
        let ids: Vec<&ItemId> = self.completed.iter().collect();
        let json = serde_json::to_string(&ids).map_err(|e| StorageError {
            key: self.key.clone(),
            reason: e.to_string(),
        })?;
        self.slot.write(&self.key, &json).inspect_err(|e| {
            log::error!("failed to persist completion set: {}", e);
        })
    }

    /// Flip membership of `id`. Returns the new membership.
    pub fn toggle(&mut self, id: &ItemId) -> Result<bool, StorageError> {
        let now_complete = if self.completed.remove(id) {
            false
        } else {
            self.completed.insert(id.clone());
            true
        };
        log::debug!("toggle {} -> {}", id, now_complete);
        self.save()?;
        Ok(now_complete)
    }

    pub fn mark_complete(&mut self, id: &ItemId) -> Result<(), StorageError> {
        self.completed.insert(id.clone());
        self.save()
    }

    pub fn unmark(&mut self, id: &ItemId) -> Result<(), StorageError> {
        self.completed.remove(id);
        self.save()
    }

    /// Empty the set (every item becomes outstanding)
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.completed.clear();
        self.save()
    }

    /// Mark every catalog item complete
    pub fn fill_all(&mut self, catalog: &Catalog) -> Result<(), StorageError> {
        self.completed
            .extend(catalog.items().iter().map(|item| item.id.clone()));
        self.save()
    }

    /// Replace the whole set with `ids` (duplicates collapse)
    pub fn replace<I>(&mut self, ids: I) -> Result<(), StorageError>
    where
        I: IntoIterator<Item = ItemId>,
    {
        self.completed = ids.into_iter().collect();
        log::info!("completion set replaced: {} ids", self.completed.len());
        self.save()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.completed.contains(id)
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Ids in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.completed.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Item};
    use crate::storage::MemorySlot;

    const KEY: &str = "balatro-gilded";

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Item::new("Joker", Category::Common, "+4 Mult", ""),
            Item::new("Blueprint", Category::Rare, "Copies ability", ""),
            Item::new("Perkeo", Category::Legendary, "Negative copy", ""),
        ])
        .unwrap()
    }

    #[test]
    fn test_load_missing_is_empty() {
        let store = CompletionStore::load(MemorySlot::new(), KEY);
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_corrupt_is_empty() {
        let slot = MemorySlot::new().with_entry(KEY, "{not json");
        let store = CompletionStore::load(slot, KEY);
        assert!(store.is_empty());

        let slot = MemorySlot::new().with_entry(KEY, r#"{"a": 1}"#);
        assert!(CompletionStore::load(slot, KEY).is_empty());
    }

    #[test]
    fn test_load_existing_dedups() {
        let slot = MemorySlot::new().with_entry(KEY, r#"["Joker", "Joker", "Perkeo"]"#);
        let store = CompletionStore::load(slot, KEY);
        assert_eq!(store.len(), 2);
        assert!(store.contains(&ItemId::from("Perkeo")));
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let slot = MemorySlot::new().with_entry(KEY, r#"["Perkeo"]"#);
        let mut store = CompletionStore::load(slot.clone(), KEY);
        store.save().unwrap();
        let before = slot.read(KEY);

        let id = ItemId::from("Joker");
        assert!(store.toggle(&id).unwrap());
        assert!(store.contains(&id));
        assert!(!store.toggle(&id).unwrap());
        assert!(!store.contains(&id));
        assert_eq!(slot.read(KEY), before);
    }

    #[test]
    fn test_mutations_persist() {
        let slot = MemorySlot::new();
        let mut store = CompletionStore::load(slot.clone(), KEY);
        store.mark_complete(&ItemId::from("Joker")).unwrap();
        assert_eq!(slot.read(KEY).as_deref(), Some(r#"["Joker"]"#));

        store.fill_all(&catalog()).unwrap();
        let reloaded = CompletionStore::load(slot.clone(), KEY);
        assert_eq!(reloaded.len(), 3);

        store.unmark(&ItemId::from("Blueprint")).unwrap();
        assert_eq!(CompletionStore::load(slot.clone(), KEY).len(), 2);

        store.clear().unwrap();
        assert_eq!(slot.read(KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_replace_dedups() {
        let slot = MemorySlot::new();
        let mut store = CompletionStore::load(slot.clone(), KEY);
        store
            .replace(["Joker", "Joker", "Unknown Joker"].map(ItemId::from))
            .unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.contains(&ItemId::from("Unknown Joker")));
        assert_eq!(CompletionStore::load(slot, KEY).len(), 2);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let slot = MemorySlot::new();
        let mut store = CompletionStore::load(slot.clone(), KEY);
        slot.set_fail_writes(true);
        let err = store.mark_complete(&ItemId::from("Joker")).unwrap_err();
        assert_eq!(err.key, KEY);
        // in-memory state still reflects the mutation
        assert!(store.contains(&ItemId::from("Joker")));
    }
}
