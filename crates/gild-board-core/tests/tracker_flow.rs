//! End-to-end tracker flows over a full-size catalog.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use gild_board_core::{
    Catalog, Category, CategoryFilter, Item, ItemId, KeyValueSlot, MemorySlot, Progress, Tracker,
    ViewFilterState,
};

const KEY: &str = "balatro-gilded";

/// 61 common, 64 uncommon, 20 rare, 5 legendary
fn full_catalog() -> Arc<Catalog> {
    let tiers = [
        (Category::Common, 61),
        (Category::Uncommon, 64),
        (Category::Rare, 20),
        (Category::Legendary, 5),
    ];
    let items = tiers
        .iter()
        .flat_map(|&(category, n)| {
            (0..n).map(move |i| {
                Item::new(
                    format!("{category} Joker {i}"),
                    category,
                    format!("effect {i}"),
                    format!("img/{}_{i}.png", category.css_token()),
                )
            })
        })
        .collect();
    Arc::new(Catalog::new(items).expect("unique names"))
}

#[test]
fn forty_of_one_fifty_is_twenty_seven_percent() {
    let catalog = full_catalog();
    let mut tracker = Tracker::load(catalog.clone(), MemorySlot::new(), KEY);

    // every third non-legendary item, 40 in total
    let picks: Vec<ItemId> = catalog
        .items()
        .iter()
        .filter(|item| item.category != Category::Legendary)
        .step_by(3)
        .take(40)
        .map(|item| item.id.clone())
        .collect();
    assert_eq!(picks.len(), 40);
    for id in &picks {
        tracker.mark_complete(id).unwrap();
    }

    let progress = tracker.progress();
    assert_eq!(progress, Progress::new(40, 150));
    assert_eq!(progress.percent(), 27);

    let board = tracker.board();
    assert_eq!(board.outstanding_total(), 110);
    let per_group: usize = board.groups.iter().map(|g| g.count()).sum();
    assert_eq!(per_group, 110);
    assert_eq!(board.group(Category::Legendary).unwrap().count(), 5);
    for group in &board.groups {
        assert!(group.items.iter().all(|item| item.category == group.category));
    }
}

#[test]
fn state_survives_reload_and_corruption_resets() {
    let catalog = full_catalog();
    let slot = MemorySlot::new();
    {
        let mut tracker = Tracker::load(catalog.clone(), slot.clone(), KEY);
        tracker.mark_complete(&ItemId::from("Rare Joker 3")).unwrap();
        tracker.mark_complete(&ItemId::from("Common Joker 0")).unwrap();
    }
    let reloaded = Tracker::load(catalog.clone(), slot.clone(), KEY);
    assert_eq!(reloaded.progress().completed, 2);

    slot.write(KEY, "[\"unterminated").unwrap();
    let corrupted = Tracker::load(catalog, slot, KEY);
    assert_eq!(corrupted.progress().completed, 0);
}

#[test]
fn export_import_roundtrip_between_devices() {
    let catalog = full_catalog();
    let mut laptop = Tracker::load(catalog.clone(), MemorySlot::new(), KEY);
    laptop.gild_all().unwrap();
    laptop.unmark(&ItemId::from("Uncommon Joker 12")).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let json = laptop.export_document(now).to_json();

    let mut phone = Tracker::load(catalog, MemorySlot::new(), KEY);
    let summary = phone.import_json(&json).unwrap();
    assert_eq!(summary.marked, 149);

    let laptop_ids: Vec<&ItemId> = laptop.store().ids().collect();
    let phone_ids: Vec<&ItemId> = phone.store().ids().collect();
    assert_eq!(laptop_ids, phone_ids);
    assert_eq!(phone.board().outstanding_total(), 1);
}

#[test]
fn rejected_import_keeps_everything() {
    let catalog = full_catalog();
    let slot = MemorySlot::new();
    let mut tracker = Tracker::load(catalog, slot.clone(), KEY);
    tracker.mark_complete(&ItemId::from("Common Joker 5")).unwrap();
    let before = slot.read(KEY);

    assert!(tracker.import_json(r#"{"version": 1}"#).is_err());
    assert!(tracker.import_json("").is_err());
    assert_eq!(tracker.store().len(), 1);
    assert_eq!(slot.read(KEY), before);
}

#[test]
fn collection_filters_combine() {
    let catalog = full_catalog();
    let tracker = Tracker::load(catalog.clone(), MemorySlot::new(), KEY);

    let all = tracker.collection(&ViewFilterState::default());
    assert_eq!(all.len(), 150);

    let legendary = tracker.collection(&ViewFilterState {
        category_filter: CategoryFilter::Only(Category::Legendary),
        search_text: String::new(),
    });
    assert_eq!(legendary.len(), 5);

    let narrowed = tracker.collection(&ViewFilterState {
        category_filter: CategoryFilter::Only(Category::Rare),
        search_text: "JOKER 1".to_string(),
    });
    // Rare Joker 1, 10..19
    assert_eq!(narrowed.len(), 11);

    let none = tracker.collection(&ViewFilterState {
        category_filter: CategoryFilter::All,
        search_text: "no such joker".to_string(),
    });
    assert!(none.is_empty());
}
