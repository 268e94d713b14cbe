//! Gild Board Frontend App
//!
//! Progress header and toolbar on top, the board of outstanding Jokers,
//! then the full collection.

use std::sync::Arc;

use gild_board_core::{Tracker, TrackerConfig};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog_data;
use crate::commands::LocalStorageSlot;
use crate::components::{
    BoardView, CollectionView, NoticeBanner, ProgressHeader, SnapshotPanel, Toolbar,
};
use crate::context::AppContext;
use crate::store::UiState;

#[component]
pub fn App(config: TrackerConfig) -> impl IntoView {
    let catalog = match catalog_data::bundled_catalog() {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            log::error!("bundled catalog is invalid: {}", e);
            return view! {
                <div class="fatal-error">
                    <h1>"Balatro Gilding Board"</h1>
                    <p>{format!("The Joker catalog could not be loaded: {}", e)}</p>
                </div>
            }
            .into_any();
        }
    };
    log::info!("catalog loaded: {} items", catalog.len());

    let tracker = Tracker::load(catalog, LocalStorageSlot, &config.storage_key);
    let ui = Store::new(UiState::new(config.snapshot.style));
    let title = config.snapshot.title.clone();
    let snapshot_canvas = NodeRef::<leptos::html::Canvas>::new();

    // Provide context to all children
    provide_context(ui);
    provide_context(AppContext::new(tracker, ui, config));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>{title}</h1>
                <ProgressHeader />
                <Toolbar snapshot_canvas=snapshot_canvas />
            </header>

            <NoticeBanner />

            <main class="main-content">
                <BoardView />
                <SnapshotPanel snapshot_canvas=snapshot_canvas />
                <CollectionView />
            </main>
        </div>
    }
    .into_any()
}
