//! Tracker configuration.
//!
//! Every field has a default; a partial JSON override is merged over them
//! and snapshot lengths are clamped to a drawable range.

use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_KEY: &str = "balatro-gilded";
pub const CONFIG_STORAGE_KEY: &str = "gild-board-config";

/// How outstanding items are drawn in the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotStyle {
    /// Card thumbnails
    #[default]
    Thumbnails,
    /// Plain text rows
    Text,
}

/// Snapshot canvas geometry and palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    pub style: SnapshotStyle,
    pub canvas_width: u32,
    pub padding: u32,
    pub title_height: u32,
    pub progress_bar_height: u32,
    pub min_progress_fill: u32,
    pub header_height: u32,
    pub section_gap: u32,
    pub cell_gap: u32,
    pub thumb_width: u32,
    pub thumb_height: u32,
    pub thumb_label_height: u32,
    pub text_cell_width: u32,
    pub text_row_height: u32,
    pub banner_height: u32,
    pub title: String,
    pub background: String,
    pub foreground: String,
    pub muted: String,
    pub bar_track: String,
    pub bar_fill: String,
    pub placeholder: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            style: SnapshotStyle::Thumbnails,
            canvas_width: 1200,
            padding: 32,
            title_height: 56,
            progress_bar_height: 20,
            min_progress_fill: 6,
            header_height: 44,
            section_gap: 28,
            cell_gap: 12,
            thumb_width: 96,
            thumb_height: 128,
            thumb_label_height: 20,
            text_cell_width: 260,
            text_row_height: 28,
            banner_height: 160,
            title: "Balatro Gilding Board".to_string(),
            background: "#0f1620".to_string(),
            foreground: "#f2f4f8".to_string(),
            muted: "#8a99ab".to_string(),
            bar_track: "#1f2b3a".to_string(),
            bar_fill: "#e6b422".to_string(),
            placeholder: "#1a2332".to_string(),
        }
    }
}

/// Widest canvas most browsers will still encode
pub const MAX_CANVAS_WIDTH: u32 = 8192;
const MIN_CANVAS_WIDTH: u32 = 320;
/// Upper bound for every other length in `SnapshotConfig`
const MAX_SPAN: u32 = 1024;

impl SnapshotConfig {
    /// Bring every length into a drawable range
    pub fn clamped(self) -> Self {
        let span = |v: u32| v.min(MAX_SPAN);
        let positive = |v: u32| v.clamp(1, MAX_SPAN);
        Self {
            canvas_width: self.canvas_width.clamp(MIN_CANVAS_WIDTH, MAX_CANVAS_WIDTH),
            padding: span(self.padding),
            title_height: span(self.title_height),
            progress_bar_height: span(self.progress_bar_height),
            min_progress_fill: span(self.min_progress_fill),
            header_height: span(self.header_height),
            section_gap: span(self.section_gap),
            cell_gap: span(self.cell_gap),
            thumb_width: positive(self.thumb_width),
            thumb_height: positive(self.thumb_height),
            thumb_label_height: span(self.thumb_label_height),
            text_cell_width: positive(self.text_cell_width),
            text_row_height: positive(self.text_row_height),
            banner_height: span(self.banner_height),
            ..self
        }
    }
}

/// Application-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub storage_key: String,
    pub export_prefix: String,
    pub snapshot_prefix: String,
    pub log_level: String,
    pub log_capacity: usize,
    pub notice_timeout_ms: u32,
    pub snapshot: SnapshotConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            export_prefix: "balatro-gilding-progress".to_string(),
            snapshot_prefix: "balatro-gilding-board".to_string(),
            log_level: default_log_level().to_string(),
            log_capacity: 500,
            notice_timeout_ms: 6000,
            snapshot: SnapshotConfig::default(),
        }
    }
}

impl TrackerConfig {
    /// Merge an optional JSON override over the defaults.
    ///
    /// Malformed input yields the defaults together with the parse error, so
    /// the caller can report it once logging is up.
    pub fn resolve_override(raw: Option<&str>) -> (Self, Option<serde_json::Error>) {
        let Some(raw) = raw else {
            return (Self::default(), None);
        };
        match serde_json::from_str::<Self>(raw) {
            Ok(config) => (
                Self {
                    snapshot: config.snapshot.clamped(),
                    ..config
                },
                None,
            ),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}

/// `debug` in debug builds, `info` in release builds
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}
