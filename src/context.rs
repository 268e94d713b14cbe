//! Application Context
//!
//! Shared state provided via Leptos Context API.

use chrono::Utc;
use gild_board_core::transfer::dated_filename;
use gild_board_core::{ItemId, StorageError, Tracker, TrackerConfig};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, LocalStorageSlot};
use crate::store::{store_dismiss_notice, store_push_notice, NoticeKind, UiStore};

pub type BrowserTracker = Tracker<LocalStorageSlot>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Catalog plus completion set; every view derives from it
    pub tracker: RwSignal<BrowserTracker>,
    /// View-only UI state
    pub ui: UiStore,
    config: StoredValue<TrackerConfig>,
}

impl AppContext {
    pub fn new(tracker: BrowserTracker, ui: UiStore, config: TrackerConfig) -> Self {
        Self {
            tracker: RwSignal::new(tracker),
            ui,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> TrackerConfig {
        self.config.get_value()
    }

    /// Show a notice that clears itself after the configured timeout
    pub fn notify(&self, kind: NoticeKind, text: impl Into<String>) {
        let seq = store_push_notice(&self.ui, kind, text.into());
        let timeout = self.config.with_value(|c| c.notice_timeout_ms);
        if timeout == 0 {
            return;
        }
        let ui = self.ui;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            store_dismiss_notice(&ui, seq);
        });
    }

    /// Apply a tracker mutation. The in-memory change always lands; a failed
    /// write replaces `success` with an error notice.
    fn mutate(
        &self,
        action: &str,
        success: Option<(NoticeKind, &str)>,
        f: impl FnOnce(&mut BrowserTracker) -> Result<(), StorageError>,
    ) {
        let mut outcome = Ok(());
        self.tracker.update(|tracker| outcome = f(tracker));
        if let Err(e) = &outcome {
            log::error!("{} not persisted: {}", action, e);
        }
        if let Some((kind, text)) = outcome_notice(&outcome, success) {
            self.notify(kind, text);
        }
    }

    /// Board click: the item leaves the board
    pub fn mark_complete(&self, id: ItemId) {
        log::debug!("mark complete: {}", id);
        self.mutate("mark complete", None, |t| t.mark_complete(&id));
    }

    /// Collection click: flip completion
    pub fn toggle(&self, id: ItemId) {
        self.mutate("toggle", None, |t| t.toggle(&id).map(|_| ()));
    }

    pub fn reset_board(&self) {
        log::info!("reset board");
        self.mutate(
            "reset",
            Some((NoticeKind::Info, "Board reset. Every Joker is back on the board.")),
            |t| t.reset_board(),
        );
    }

    pub fn gild_all(&self) {
        log::info!("gild all");
        self.mutate(
            "gild all",
            Some((NoticeKind::Success, "Every Joker marked as gilded.")),
            |t| t.gild_all(),
        );
    }

    /// Serialize progress and offer it as a dated JSON download
    pub fn export_progress(&self) {
        let now = Utc::now();
        let document = self.tracker.with_untracked(|t| t.export_document(now));
        let prefix = self.config.with_value(|c| c.export_prefix.clone());
        let filename = dated_filename(&prefix, now, "json");
        log::info!("export: {} ids to {}", document.gilded_count, filename);
        match commands::download_text(&filename, "application/json", &document.to_json()) {
            Ok(()) => {
                self.notify(NoticeKind::Success, format!("Progress exported to {}", filename))
            }
            Err(e) => {
                log::error!("export failed: {}", e);
                self.notify(NoticeKind::Error, format!("Export failed: {}", e));
            }
        }
    }

    /// Offer the logger's ring buffer as a dated text file
    pub fn export_log(&self) {
        let lines = rolling_logger::recent_lines();
        let filename = dated_filename("gild-board-log", Utc::now(), "txt");
        match commands::download_text(&filename, "text/plain", &lines.join("\n")) {
            Ok(()) => self.notify(
                NoticeKind::Info,
                format!("{} log lines saved to {}", lines.len(), filename),
            ),
            Err(e) => self.notify(NoticeKind::Error, format!("Log download failed: {}", e)),
        }
    }

    /// Replace progress with the contents of an exported file
    pub fn import_progress(&self, text: &str) {
        let mut outcome = None;
        self.tracker.update(|t| outcome = Some(t.import_json(text)));
        match outcome {
            Some(Ok(summary)) => self.notify(NoticeKind::Success, summary.message()),
            Some(Err(e)) => self.notify(NoticeKind::Error, e.to_string()),
            None => {}
        }
    }
}

/// Notice to show once a mutation finished; a storage failure always wins
pub fn outcome_notice(
    outcome: &Result<(), StorageError>,
    success: Option<(NoticeKind, &str)>,
) -> Option<(NoticeKind, String)> {
    match outcome {
        Err(e) => Some((
            NoticeKind::Error,
            format!("Progress could not be saved ({}). Changes will be lost on reload.", e.reason),
        )),
        Ok(()) => success.map(|(kind, text)| (kind, text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{store_push_notice, UiState, UiStateStoreFields};
    use gild_board_core::{Catalog, Category, Item, MemorySlot};
    use reactive_stores::Store;
    use std::sync::Arc;

    fn tracker(slot: MemorySlot) -> Tracker<MemorySlot> {
        let catalog = Catalog::new(vec![
            Item::new("Joker", Category::Common, "+4 Mult", ""),
            Item::new("Perkeo", Category::Legendary, "Negative copy", ""),
        ])
        .unwrap();
        Tracker::load(Arc::new(catalog), slot, "balatro-gilded")
    }

    #[test]
    fn test_failed_bulk_write_keeps_error_notice() {
        let slot = MemorySlot::new();
        slot.set_fail_writes(true);
        let mut t = tracker(slot);
        let outcome = t.gild_all();
        assert!(outcome.is_err());
        assert_eq!(t.progress().completed, 2);

        let store = Store::new(UiState::default());
        let (kind, text) =
            outcome_notice(&outcome, Some((NoticeKind::Success, "Every Joker marked as gilded.")))
                .unwrap();
        store_push_notice(&store, kind, text);

        let shown = store.notice().get_untracked().unwrap();
        assert_eq!(shown.kind, NoticeKind::Error);
        assert!(shown.text.starts_with("Progress could not be saved"));
    }

    #[test]
    fn test_successful_bulk_write_reports_success() {
        let mut t = tracker(MemorySlot::new());
        let outcome = t.reset_board();
        let notice = outcome_notice(&outcome, Some((NoticeKind::Info, "Board reset.")));
        assert_eq!(notice, Some((NoticeKind::Info, "Board reset.".to_string())));
    }

    #[test]
    fn test_silent_mutation_only_reports_failures() {
        assert_eq!(outcome_notice(&Ok(()), None), None);
        let failed = Err(StorageError {
            key: "balatro-gilded".to_string(),
            reason: "quota exceeded".to_string(),
        });
        let (kind, text) = outcome_notice(&failed, None).unwrap();
        assert_eq!(kind, NoticeKind::Error);
        assert!(text.contains("quota exceeded"));
    }
}
