//! UI State Store
//!
//! View-only state (filters, notices, snapshot flags) in a reactive_stores
//! store. Completion state lives in the tracker signal on `AppContext`.

use gild_board_core::{CategoryFilter, SnapshotStyle, ViewFilterState};
use leptos::prelude::*;
use reactive_stores::Store;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Info => "notice notice-info",
            NoticeKind::Warning => "notice notice-warning",
            NoticeKind::Error => "notice notice-error",
        }
    }
}

/// Transient message shown above the board
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    /// Sequence number; a dismiss timer only clears its own notice
    pub seq: u32,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Collection category filter
    pub category_filter: CategoryFilter,
    /// Collection search text, matched case-insensitively
    pub search_text: String,
    pub notice: Option<Notice>,
    pub notice_seq: u32,
    pub snapshot_style: SnapshotStyle,
    /// True while a snapshot is being generated
    pub snapshot_busy: bool,
    /// Set once a snapshot has been drawn; shows the preview panel
    pub snapshot_ready: bool,
}

impl UiState {
    pub fn new(snapshot_style: SnapshotStyle) -> Self {
        Self {
            snapshot_style,
            ..Default::default()
        }
    }
}

pub type UiStore = Store<UiState>;

pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current collection filters, tracked
pub fn store_view_filter(store: &UiStore) -> ViewFilterState {
    ViewFilterState {
        category_filter: store.category_filter().get(),
        search_text: store.search_text().get(),
    }
}

/// Replace the visible notice and return its sequence number
pub fn store_push_notice(store: &UiStore, kind: NoticeKind, text: String) -> u32 {
    let seq = store.notice_seq().get_untracked().wrapping_add(1);
    store.notice_seq().set(seq);
    store.notice().set(Some(Notice { seq, kind, text }));
    seq
}

/// Clear the notice if it is still the one numbered `seq`
pub fn store_dismiss_notice(store: &UiStore, seq: u32) {
    let current = store.notice().with_untracked(|n| n.as_ref().map(|n| n.seq));
    if current == Some(seq) {
        store.notice().set(None);
    }
}
