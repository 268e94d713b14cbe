//! Snapshot Panel Component
//!
//! Hosts the snapshot canvas. The drawing stays on screen after export so it
//! can still be saved by hand when the browser refuses to encode it.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use gild_board_core::snapshot::{self, snapshot_filename, SnapshotReport};
use gild_board_core::{Catalog, ItemId, SnapshotError, TrackerConfig};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, CanvasSurface, ImageLoader};
use crate::context::AppContext;
use crate::store::{NoticeKind, UiStateStoreFields};

#[component]
pub fn SnapshotPanel(snapshot_canvas: NodeRef<html::Canvas>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let ui = ctx.ui;

    view! {
        <section class="snapshot-panel" class:hidden=move || !ui.snapshot_ready().get()>
            <div class="snapshot-panel-header">
                <h2>"Snapshot"</h2>
                <button class="snapshot-close" on:click=move |_| ui.snapshot_ready().set(false)>"×"</button>
            </div>
            <Show when=move || ui.snapshot_busy().get()>
                <p class="snapshot-status">"Loading card art and drawing..."</p>
            </Show>
            <canvas node_ref=snapshot_canvas class="snapshot-canvas"></canvas>
        </section>
    }
}

/// Draw the board onto the snapshot canvas and offer it as a PNG download
pub fn take_snapshot(ctx: AppContext, canvas_ref: NodeRef<html::Canvas>) {
    let ui = ctx.ui;
    if ui.snapshot_busy().get_untracked() {
        log::debug!("snapshot already running, request ignored");
        return;
    }
    let Some(canvas) = canvas_ref.get_untracked() else {
        log::error!("snapshot canvas is not mounted");
        ctx.notify(NoticeKind::Error, "Snapshot canvas is not ready yet.");
        return;
    };

    let mut config = ctx.config();
    config.snapshot.style = ui.snapshot_style().get_untracked();
    let (catalog, done) = ctx.tracker.with_untracked(|t| {
        (
            t.catalog_handle(),
            t.store().ids().cloned().collect::<BTreeSet<ItemId>>(),
        )
    });

    ui.snapshot_busy().set(true);
    ui.snapshot_ready().set(true);
    log::info!("snapshot requested: style={:?}", config.snapshot.style);

    spawn_local(async move {
        let outcome = draw_and_export(catalog, &done, &config, canvas).await;
        ui.snapshot_busy().set(false);
        match outcome {
            Ok((report, filename)) => {
                log::info!(
                    "snapshot {}x{}: {} outstanding, {} images, {} placeholders",
                    report.width,
                    report.height,
                    report.outstanding,
                    report.stats.images,
                    report.stats.placeholders
                );
                if report.failed_assets.is_empty() {
                    ctx.notify(NoticeKind::Success, format!("Snapshot saved as {}", filename));
                } else {
                    ctx.notify(
                        NoticeKind::Warning,
                        format!(
                            "Snapshot saved as {}. {} card images could not be loaded and were drawn as placeholders.",
                            filename,
                            report.failed_assets.len()
                        ),
                    );
                }
            }
            Err(SnapshotError::Tainted) => {
                log::warn!("snapshot export blocked by a tainted canvas");
                ctx.notify(NoticeKind::Warning, SnapshotError::Tainted.to_string());
            }
            Err(e) => {
                log::error!("snapshot failed: {}", e);
                ctx.notify(NoticeKind::Error, format!("Snapshot failed: {}", e));
            }
        }
    });
}

async fn draw_and_export(
    catalog: Arc<Catalog>,
    done: &BTreeSet<ItemId>,
    config: &TrackerConfig,
    canvas: web_sys::HtmlCanvasElement,
) -> Result<(SnapshotReport, String), SnapshotError> {
    let mut surface = CanvasSurface::new(canvas)?;
    let report =
        snapshot::generate(&catalog, done, &config.snapshot, &ImageLoader, &mut surface).await;
    let url = surface.to_png_data_url()?;
    let filename = snapshot_filename(&config.snapshot_prefix, Utc::now());
    commands::download_data_url(&filename, &url).map_err(SnapshotError::Encode)?;
    Ok((report, filename))
}
