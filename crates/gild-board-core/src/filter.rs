//! View Filter
//!
//! Pure functions deriving the two views from the catalog and the
//! completion set:
//! - board: outstanding items grouped by category
//! - collection: every item, narrowed by category and search text

use std::collections::{BTreeSet, HashSet};

use crate::domain::{Catalog, Category, Item, ItemId};
use crate::storage::KeyValueSlot;
use crate::store::CompletionStore;

/// Anything that can answer "is this id complete?"
pub trait CompletionLookup {
    fn is_complete(&self, id: &ItemId) -> bool;
}

impl<S: KeyValueSlot> CompletionLookup for CompletionStore<S> {
    fn is_complete(&self, id: &ItemId) -> bool {
        self.contains(id)
    }
}

impl CompletionLookup for BTreeSet<ItemId> {
    fn is_complete(&self, id: &ItemId) -> bool {
        self.contains(id)
    }
}

impl CompletionLookup for HashSet<ItemId> {
    fn is_complete(&self, id: &ItemId) -> bool {
        self.contains(id)
    }
}

/// Category restriction for the collection view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons in display order
    pub const CHOICES: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Common),
        CategoryFilter::Only(Category::Uncommon),
        CategoryFilter::Only(Category::Rare),
        CategoryFilter::Only(Category::Legendary),
    ];

    /// `"all"` or a category name; anything unknown means no restriction
    pub fn parse(token: &str) -> Self {
        Category::parse(token).map_or(CategoryFilter::All, CategoryFilter::Only)
    }

    pub fn token(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.css_token(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    pub fn accepts(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

/// Transient collection filter; reset on reload
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewFilterState {
    pub category_filter: CategoryFilter,
    pub search_text: String,
}

/// One category section of the board
#[derive(Debug, Clone, PartialEq)]
pub struct BoardGroup<'a> {
    pub category: Category,
    pub items: Vec<&'a Item>,
}

impl BoardGroup<'_> {
    /// Empty sections are hidden rather than drawn with zero rows
    pub fn hidden(&self) -> bool {
        self.items.is_empty()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }
}

/// Outstanding items, one group per category in fixed order
#[derive(Debug, Clone, PartialEq)]
pub struct Board<'a> {
    pub groups: Vec<BoardGroup<'a>>,
}

impl<'a> Board<'a> {
    pub fn outstanding_total(&self) -> usize {
        self.groups.iter().map(BoardGroup::count).sum()
    }

    /// True exactly when nothing is outstanding
    pub fn is_all_complete(&self) -> bool {
        self.outstanding_total() == 0
    }

    pub fn group(&self, category: Category) -> Option<&BoardGroup<'a>> {
        self.groups.iter().find(|g| g.category == category)
    }

    /// Non-empty groups only
    pub fn visible_groups(&self) -> impl Iterator<Item = &BoardGroup<'a>> {
        self.groups.iter().filter(|g| !g.hidden())
    }
}

/// A collection entry with its completion flag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectionEntry<'a> {
    pub item: &'a Item,
    pub completed: bool,
}

/// Items not yet complete, grouped by category in catalog order
pub fn board<'a, L: CompletionLookup + ?Sized>(catalog: &'a Catalog, done: &L) -> Board<'a> {
    let groups = Category::ALL
        .into_iter()
        .map(|category| BoardGroup {
            category,
            items: catalog
                .items()
                .iter()
                .filter(|item| item.category == category && !done.is_complete(&item.id))
                .collect(),
        })
        .collect();
    Board { groups }
}

/// Search predicate. Empty query passes everything; the query is not trimmed.
pub fn matches_search(item: &Item, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }
    item.matches_lowered(&search_text.to_lowercase())
}

/// Full catalog narrowed by category and search text, catalog order kept
pub fn collection<'a, L: CompletionLookup + ?Sized>(
    catalog: &'a Catalog,
    done: &L,
    filter: &ViewFilterState,
) -> Vec<CollectionEntry<'a>> {
    catalog
        .items()
        .iter()
        .filter(|item| filter.category_filter.accepts(item.category))
        .filter(|item| matches_search(item, &filter.search_text))
        .map(|item| CollectionEntry {
            item,
            completed: done.is_complete(&item.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Item::new("Joker", Category::Common, "+4 Mult", ""),
            Item::new("Greedy Joker", Category::Common, "Played Diamonds give +3 Mult", ""),
            Item::new("Blueprint", Category::Rare, "Copies ability of Joker to the right", ""),
            Item::new("Brainstorm", Category::Rare, "Copies the ability of leftmost Joker", ""),
            Item::new(
                "Perkeo",
                Category::Legendary,
                "Creates a Negative copy of 1 random consumable",
                "",
            ),
        ])
        .unwrap()
    }

    fn done(ids: &[&str]) -> BTreeSet<ItemId> {
        ids.iter().map(|s| ItemId::from(*s)).collect()
    }

    #[test]
    fn test_board_groups_outstanding_in_catalog_order() {
        let catalog = catalog();
        let board = board(&catalog, &done(&["Joker", "Perkeo"]));

        let common: Vec<&str> = board
            .group(Category::Common)
            .unwrap()
            .items
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(common, vec!["Greedy Joker"]);
        let rare: Vec<&str> = board
            .group(Category::Rare)
            .unwrap()
            .items
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(rare, vec!["Blueprint", "Brainstorm"]);

        assert!(board.group(Category::Uncommon).unwrap().hidden());
        assert!(board.group(Category::Legendary).unwrap().hidden());
        assert_eq!(board.outstanding_total(), 3);
        assert_eq!(board.visible_groups().count(), 2);
        assert!(!board.is_all_complete());
    }

    #[test]
    fn test_board_partitions_catalog() {
        let catalog = catalog();
        let completed = done(&["Greedy Joker", "Brainstorm"]);
        let board = board(&catalog, &completed);

        let outstanding: BTreeSet<&ItemId> = board
            .groups
            .iter()
            .flat_map(|g| g.items.iter().map(|i| &i.id))
            .collect();
        for item in catalog.items() {
            let in_board = outstanding.contains(&item.id);
            let in_done = completed.contains(&item.id);
            assert!(in_board ^ in_done, "{} must be in exactly one side", item.id);
        }
    }

    #[test]
    fn test_board_all_complete() {
        let catalog = catalog();
        let all: BTreeSet<ItemId> = catalog.items().iter().map(|i| i.id.clone()).collect();
        let board = board(&catalog, &all);
        assert!(board.is_all_complete());
        assert!(board.groups.iter().all(BoardGroup::hidden));
    }

    #[test]
    fn test_collection_empty_search_is_unfiltered() {
        let catalog = catalog();
        let entries = collection(&catalog, &done(&["Joker"]), &ViewFilterState::default());
        assert_eq!(entries.len(), catalog.len());
        assert!(entries[0].completed);
        assert!(!entries[1].completed);
    }

    #[test]
    fn test_collection_search_is_case_insensitive() {
        let catalog = catalog();
        let filter = ViewFilterState {
            category_filter: CategoryFilter::All,
            search_text: "COPIES".to_string(),
        };
        let names: Vec<&str> = collection(&catalog, &done(&[]), &filter)
            .iter()
            .map(|e| e.item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Blueprint", "Brainstorm"]);
    }

    #[test]
    fn test_collection_category_and_search_combine() {
        let catalog = catalog();
        let filter = ViewFilterState {
            category_filter: CategoryFilter::Only(Category::Common),
            search_text: "joker".to_string(),
        };
        let names: Vec<&str> = collection(&catalog, &done(&[]), &filter)
            .iter()
            .map(|e| e.item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Joker", "Greedy Joker"]);
    }

    #[test]
    fn test_collection_no_match_is_empty() {
        let catalog = catalog();
        let filter = ViewFilterState {
            category_filter: CategoryFilter::All,
            search_text: "zzz-nothing".to_string(),
        };
        assert!(collection(&catalog, &done(&[]), &filter).is_empty());
    }

    #[test]
    fn test_whitespace_query_is_literal() {
        let catalog = Catalog::new(vec![
            Item::new("Joker", Category::Common, "+4", ""),
            Item::new("Greedy Joker", Category::Common, "+3", ""),
        ])
        .unwrap();
        let filter = ViewFilterState {
            category_filter: CategoryFilter::All,
            search_text: " ".to_string(),
        };
        let names: Vec<&str> = collection(&catalog, &done(&[]), &filter)
            .iter()
            .map(|e| e.item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Greedy Joker"]);
        assert!(!matches_search(&catalog.items()[0], " "));
        assert!(matches_search(&catalog.items()[0], ""));
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("Rare"), CategoryFilter::Only(Category::Rare));
        assert_eq!(CategoryFilter::parse("bogus"), CategoryFilter::All);
        assert_eq!(CategoryFilter::Only(Category::Uncommon).token(), "uncommon");
    }
}
