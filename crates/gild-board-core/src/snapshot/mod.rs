//! Snapshot Generator
//!
//! Summary image of outstanding items:
//! - layout: pure geometry, height sized to content
//! - assets: concurrent thumbnail preload, joined before drawing
//! - render: painting onto a canvas port, placeholders for missing art

mod assets;
mod layout;
mod render;

pub use assets::{preload, AssetLoader, LoadedAssets};
pub use layout::{
    column_count, progress_fill, ProgressBarPlan, Rect, SnapshotCell, SnapshotPlan, SnapshotSection,
};
pub use render::{fit_label, render, RenderStats, SnapshotCanvas, TextAlign};

use chrono::{DateTime, Utc};

use crate::config::SnapshotConfig;
use crate::domain::{AssetError, Catalog};
use crate::filter::{board, CompletionLookup};
use crate::progress::Progress;
use crate::transfer::dated_filename;

/// Outcome of one snapshot request
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotReport {
    pub width: u32,
    pub height: u32,
    pub outstanding: usize,
    pub stats: RenderStats,
    pub failed_assets: Vec<AssetError>,
}

/// Plan, preload, then draw. Individual asset failures never fail the whole run.
pub async fn generate<L, C, D>(
    catalog: &Catalog,
    done: &D,
    config: &SnapshotConfig,
    loader: &L,
    canvas: &mut C,
) -> SnapshotReport
where
    L: AssetLoader,
    C: SnapshotCanvas<Image = L::Image>,
    D: CompletionLookup + ?Sized,
{
    let board = board(catalog, done);
    let progress = Progress::of(catalog, done);
    let plan = SnapshotPlan::build(&board, progress, config);

    let assets = preload(loader, &plan).await;
    let stats = render(&plan, &assets, config, canvas);

    SnapshotReport {
        width: plan.width,
        height: plan.height,
        outstanding: board.outstanding_total(),
        stats,
        failed_assets: assets.failures().to_vec(),
    }
}

/// `{prefix}-YYYY-MM-DD.png`
pub fn snapshot_filename(prefix: &str, now: DateTime<Utc>) -> String {
    dated_filename(prefix, now, "png")
}
