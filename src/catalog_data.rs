//! Bundled Catalog
//!
//! The full Joker list ships inside the binary.

use gild_board_core::{Catalog, CatalogError};

pub const CATALOG_JSON: &str = include_str!("../assets/jokers.json");

pub fn bundled_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json(CATALOG_JSON)
}
