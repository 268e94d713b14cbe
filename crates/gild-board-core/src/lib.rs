//! Gild Board Core
//!
//! Layered architecture:
//! - domain: catalog items and error types
//! - storage / store: persisted completion set
//! - filter / progress: pure view derivation
//! - transfer: JSON import/export
//! - snapshot: summary image layout and rendering
//! - tracker: the application state object tying them together
//!
//! Nothing here touches the DOM; browser pieces plug in through
//! `KeyValueSlot`, `SnapshotCanvas` and `AssetLoader`.

pub mod config;
pub mod domain;
pub mod filter;
pub mod progress;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod tracker;
pub mod transfer;

pub use config::{SnapshotConfig, SnapshotStyle, TrackerConfig};
pub use domain::{
    AssetError, Catalog, CatalogError, Category, ImportError, Item, ItemId, SnapshotError,
    StorageError,
};
pub use filter::{
    Board, BoardGroup, CategoryFilter, CollectionEntry, CompletionLookup, ViewFilterState,
};
pub use progress::Progress;
pub use storage::{KeyValueSlot, MemorySlot};
pub use store::CompletionStore;
pub use tracker::Tracker;
pub use transfer::{ExportDocument, ImportSummary};
