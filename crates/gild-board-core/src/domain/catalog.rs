//! Catalog
//!
//! Immutable, ordered list of items parsed from the bundled catalog asset.
//! The asset format is a JSON array of `{name, rarity, effect, imgSrc}`.

use serde::Deserialize;
use std::collections::HashMap;

use super::error::CatalogError;
use super::item::{Category, Item, ItemId};

/// One record as it appears in the catalog asset
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogRecord {
    name: String,
    rarity: String,
    #[serde(default)]
    effect: String,
    #[serde(default)]
    img_src: String,
}

/// Ordered, read-only item catalog with id lookup
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Build from already-constructed items. Rejects duplicate ids.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(item.id.to_string()));
            }
        }
        Ok(Self { items, index })
    }

    /// Parse the catalog asset
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<CatalogRecord> = serde_json::from_str(json)?;
        let mut items = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            let category = Category::parse(&record.rarity).ok_or_else(|| {
                CatalogError::UnknownCategory {
                    index,
                    rarity: record.rarity.clone(),
                }
            })?;
            items.push(Item::new(record.name, category, record.effect, record.img_src));
        }
        let catalog = Self::new(items)?;
        log::debug!("catalog loaded: {} items", catalog.len());
        Ok(catalog)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.index.contains_key(id)
    }

    /// Catalog position of an id, used to order exports
    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Number of items per category, in fixed category order
    pub fn category_counts(&self) -> [(Category, usize); 4] {
        Category::ALL.map(|c| (c, self.items.iter().filter(|i| i.category == c).count()))
    }
}
