//! Snapshot layout planning.
//!
//! Turns the board into absolute rectangles. The canvas height is summed
//! bottom-up from the sections, never fixed.

use crate::config::{SnapshotConfig, SnapshotStyle};
use crate::domain::{Category, ItemId};
use crate::filter::Board;
use crate::progress::Progress;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.w / 2.0
    }
}

/// One outstanding item's cell
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotCell {
    pub item_id: ItemId,
    pub name: String,
    pub image_ref: String,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotSection {
    pub category: Category,
    pub header: Rect,
    pub columns: usize,
    pub rows: usize,
    pub cells: Vec<SnapshotCell>,
}

impl SnapshotSection {
    /// "Rare (3)"
    pub fn title(&self) -> String {
        format!("{} ({})", self.category, self.cells.len())
    }

    pub fn bottom(&self) -> f64 {
        self.cells
            .iter()
            .map(|c| c.rect.bottom())
            .fold(self.header.bottom(), f64::max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBarPlan {
    pub track: Rect,
    pub fill_width: f64,
    pub label: String,
}

/// Fully positioned snapshot, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotPlan {
    pub width: u32,
    pub height: u32,
    pub style: SnapshotStyle,
    pub title: Rect,
    pub progress: ProgressBarPlan,
    pub sections: Vec<SnapshotSection>,
    /// Present exactly when nothing is outstanding
    pub banner: Option<Rect>,
}

impl SnapshotPlan {
    pub fn build(board: &Board<'_>, progress: Progress, config: &SnapshotConfig) -> Self {
        let pad = config.padding as f64;
        let width = config
            .canvas_width
            .max(config.padding.saturating_mul(2).saturating_add(1));
        let inner_w = width as f64 - 2.0 * pad;
        let gap = config.section_gap as f64;

        let mut y = pad;
        let title = Rect::new(pad, y, inner_w, config.title_height as f64);
        y = title.bottom();

        let track = Rect::new(pad, y, inner_w, config.progress_bar_height as f64);
        let progress_plan = ProgressBarPlan {
            track,
            fill_width: progress_fill(track.w, progress, config.min_progress_fill as f64),
            label: format!("{} gilded ({}%)", progress.label(), progress.percent()),
        };
        y = track.bottom() + gap;

        let mut sections = Vec::new();
        let mut banner = None;

        if board.is_all_complete() {
            let rect = Rect::new(pad, y, inner_w, config.banner_height as f64);
            y = rect.bottom();
            banner = Some(rect);
        } else {
            let (cell_w, cell_h) = cell_size(config);
            let cell_gap = config.cell_gap as f64;
            let columns = column_count(inner_w, cell_w, cell_gap);

            for group in board.visible_groups() {
                let header = Rect::new(pad, y, inner_w, config.header_height as f64);
                let top = header.bottom();
                let cells: Vec<SnapshotCell> = group
                    .items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let (col, row) = (i % columns, i / columns);
                        SnapshotCell {
                            item_id: item.id.clone(),
                            name: item.name.clone(),
                            image_ref: item.image_ref.clone(),
                            rect: Rect::new(
                                pad + col as f64 * (cell_w + cell_gap),
                                top + row as f64 * (cell_h + cell_gap),
                                cell_w,
                                cell_h,
                            ),
                        }
                    })
                    .collect();
                let rows = cells.len().div_ceil(columns);
                let grid_h = rows as f64 * cell_h + rows.saturating_sub(1) as f64 * cell_gap;
                sections.push(SnapshotSection {
                    category: group.category,
                    header,
                    columns,
                    rows,
                    cells,
                });
                y = top + grid_h + gap;
            }
            // no gap after the last section
            y -= gap;
        }

        let height = (y + pad).ceil() as u32;
        log::debug!(
            "snapshot plan: {}x{}, {} sections, banner={}",
            width,
            height,
            sections.len(),
            banner.is_some()
        );

        Self {
            width,
            height,
            style: config.style,
            title,
            progress: progress_plan,
            sections,
            banner,
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &SnapshotCell> {
        self.sections.iter().flat_map(|s| s.cells.iter())
    }

    pub fn cell_count(&self) -> usize {
        self.sections.iter().map(|s| s.cells.len()).sum()
    }
}

fn cell_size(config: &SnapshotConfig) -> (f64, f64) {
    match config.style {
        SnapshotStyle::Thumbnails => (
            config.thumb_width as f64,
            config.thumb_height as f64 + config.thumb_label_height as f64,
        ),
        SnapshotStyle::Text => (config.text_cell_width as f64, config.text_row_height as f64),
    }
}

/// How many cells of `cell_w` fit in `inner_w` with `gap` between them (at least one)
pub fn column_count(inner_w: f64, cell_w: f64, gap: f64) -> usize {
    if cell_w <= 0.0 {
        return 1;
    }
    (((inner_w + gap) / (cell_w + gap)).floor() as usize).max(1)
}

/// Proportional fill, but never invisible once anything is complete
pub fn progress_fill(track_w: f64, progress: Progress, min_fill: f64) -> f64 {
    let fill = track_w * progress.ratio();
    if progress.completed > 0 {
        fill.max(min_fill).min(track_w)
    } else {
        0.0
    }
}
