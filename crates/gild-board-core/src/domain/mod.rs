//! Domain Layer
//!
//! Catalog entities and error types. No browser or storage dependencies.

mod catalog;
mod error;
mod item;

pub use catalog::Catalog;
pub use error::{AssetError, CatalogError, ImportError, SnapshotError, StorageError};
pub use item::{Category, Item, ItemId};
