//! UI Components
//!
//! Reusable Leptos components.

mod board_view;
mod collection_view;
mod confirm_button;
mod joker_card;
mod notice_banner;
mod progress_header;
mod snapshot_panel;
mod toolbar;

pub use board_view::BoardView;
pub use collection_view::CollectionView;
pub use notice_banner::NoticeBanner;
pub use progress_header::ProgressHeader;
pub use snapshot_panel::SnapshotPanel;
pub use toolbar::Toolbar;
