//! Tracker - explicit application state
//!
//! Catalog plus completion store. Views read it through the pure filter
//! functions; all mutation goes through the store.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{Catalog, ImportError, ItemId, StorageError};
use crate::filter::{self, Board, CollectionEntry, ViewFilterState};
use crate::progress::Progress;
use crate::storage::KeyValueSlot;
use crate::store::CompletionStore;
use crate::transfer::{self, ExportDocument, ImportSummary};

#[derive(Debug, Clone)]
pub struct Tracker<S> {
    catalog: Arc<Catalog>,
    store: CompletionStore<S>,
}

impl<S: KeyValueSlot> Tracker<S> {
    /// Load persisted progress for `catalog` from `slot`
    pub fn load(catalog: Arc<Catalog>, slot: S, storage_key: &str) -> Self {
        let store = CompletionStore::load(slot, storage_key);
        Self { catalog, store }
    }

    /// Shared handle for work that outlives a borrow (snapshot generation)
    pub fn catalog_handle(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    pub fn store(&self) -> &CompletionStore<S> {
        &self.store
    }

    pub fn board(&self) -> Board<'_> {
        filter::board(&self.catalog, &self.store)
    }

    pub fn collection(&self, view: &ViewFilterState) -> Vec<CollectionEntry<'_>> {
        filter::collection(&self.catalog, &self.store, view)
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.catalog, &self.store)
    }

    pub fn toggle(&mut self, id: &ItemId) -> Result<bool, StorageError> {
        self.store.toggle(id)
    }

    pub fn mark_complete(&mut self, id: &ItemId) -> Result<(), StorageError> {
        self.store.mark_complete(id)
    }

    pub fn unmark(&mut self, id: &ItemId) -> Result<(), StorageError> {
        self.store.unmark(id)
    }

    /// Every item back on the board
    pub fn reset_board(&mut self) -> Result<(), StorageError> {
        self.store.clear()
    }

    /// Every item marked complete; the board empties
    pub fn gild_all(&mut self) -> Result<(), StorageError> {
        self.store.fill_all(&self.catalog)
    }

    pub fn export_document(&self, now: DateTime<Utc>) -> ExportDocument {
        ExportDocument::build(&self.catalog, &self.store, now)
    }

    pub fn import_json(&mut self, text: &str) -> Result<ImportSummary, ImportError> {
        transfer::import_into(&self.catalog, &mut self.store, text)
    }
}
