//! Item Entity
//!
//! A single catalog entry (one joker) and its category tier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a catalog item (the item's display name)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Category tier, in fixed display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Category {
    /// All tiers in board/snapshot order
    pub const ALL: [Category; 4] = [
        Category::Common,
        Category::Uncommon,
        Category::Rare,
        Category::Legendary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Common => "Common",
            Category::Uncommon => "Uncommon",
            Category::Rare => "Rare",
            Category::Legendary => "Legendary",
        }
    }

    /// Lowercase token used for CSS classes and filter buttons
    pub fn css_token(&self) -> &'static str {
        match self {
            Category::Common => "common",
            Category::Uncommon => "uncommon",
            Category::Rare => "rare",
            Category::Legendary => "legendary",
        }
    }

    /// Case-insensitive parse; `None` for anything else
    pub fn parse(s: &str) -> Option<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog item. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub category: Category,
    pub name: String,
    pub description: String,
    pub image_ref: String,
}

impl Item {
    /// Build an item whose id is its name
    pub fn new(
        name: impl Into<String>,
        category: Category,
        description: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            id: ItemId::new(name.clone()),
            category,
            name,
            description: description.into(),
            image_ref: image_ref.into(),
        }
    }

    /// Case-insensitive substring match against name or description.
    /// `query_lower` must already be lowercased.
    pub(crate) fn matches_lowered(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_is_name() {
        let item = Item::new("Joker", Category::Common, "+4 Mult", "img/joker.png");
        assert_eq!(item.id.as_str(), "Joker");
        assert_eq!(item.name, "Joker");
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("rare"), Some(Category::Rare));
        assert_eq!(Category::parse("LEGENDARY"), Some(Category::Legendary));
        assert_eq!(Category::parse("all"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_category_wire_names() {
        let json = serde_json::to_string(&Category::Uncommon).unwrap();
        assert_eq!(json, "\"Uncommon\"");
        let parsed: Category = serde_json::from_str("\"Legendary\"").unwrap();
        assert_eq!(parsed, Category::Legendary);
    }

    #[test]
    fn test_matches_lowered() {
        let item =
            Item::new("Blueprint", Category::Rare, "Copies ability of Joker to the right", "");
        assert!(item.matches_lowered("blue"));
        assert!(item.matches_lowered("joker to"));
        assert!(!item.matches_lowered("mult"));
    }
}
