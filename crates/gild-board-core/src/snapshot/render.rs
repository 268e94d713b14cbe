//! Snapshot rendering onto an abstract canvas.

use super::assets::LoadedAssets;
use super::layout::{Rect, SnapshotCell, SnapshotPlan};
use crate::config::{SnapshotConfig, SnapshotStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Drawing surface the snapshot is painted on
pub trait SnapshotCanvas {
    type Image;

    fn resize(&mut self, width: u32, height: u32);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: &str, align: TextAlign);
    fn draw_image(&mut self, image: &Self::Image, rect: Rect);
}

const TITLE_FONT: &str = "bold 28px sans-serif";
const HEADER_FONT: &str = "bold 20px sans-serif";
const LABEL_FONT: &str = "12px sans-serif";
const ROW_FONT: &str = "15px sans-serif";
const BANNER_FONT: &str = "bold 30px sans-serif";

/// Rough glyph width used to shorten labels to their cell
const APPROX_CHAR_PX: f64 = 7.0;

/// What actually got drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    pub images: usize,
    pub placeholders: usize,
    pub text_rows: usize,
}

/// Paint `plan` onto `canvas`. Missing images become placeholders.
pub fn render<C: SnapshotCanvas>(
    plan: &SnapshotPlan,
    assets: &LoadedAssets<C::Image>,
    config: &SnapshotConfig,
    canvas: &mut C,
) -> RenderStats {
    let mut stats = RenderStats::default();

    canvas.resize(plan.width, plan.height);
    canvas.fill_rect(
        Rect::new(0.0, 0.0, plan.width as f64, plan.height as f64),
        &config.background,
    );

    canvas.fill_text(
        &config.title,
        plan.title.x,
        plan.title.y + plan.title.h * 0.6,
        TITLE_FONT,
        &config.foreground,
        TextAlign::Left,
    );
    canvas.fill_text(
        &plan.progress.label,
        plan.title.x + plan.title.w,
        plan.title.y + plan.title.h * 0.6,
        LABEL_FONT,
        &config.muted,
        TextAlign::Right,
    );

    let track = plan.progress.track;
    canvas.fill_rect(track, &config.bar_track);
    if plan.progress.fill_width > 0.0 {
        canvas.fill_rect(
            Rect::new(track.x, track.y, plan.progress.fill_width, track.h),
            &config.bar_fill,
        );
    }

    if let Some(banner) = plan.banner {
        canvas.fill_rect(banner, &config.placeholder);
        canvas.fill_text(
            "All Jokers gilded!",
            banner.center_x(),
            banner.y + banner.h / 2.0,
            BANNER_FONT,
            &config.bar_fill,
            TextAlign::Center,
        );
        return stats;
    }

    for section in &plan.sections {
        canvas.fill_text(
            &section.title(),
            section.header.x,
            section.header.y + section.header.h * 0.7,
            HEADER_FONT,
            &config.foreground,
            TextAlign::Left,
        );
        for cell in &section.cells {
            match plan.style {
                SnapshotStyle::Text => {
                    draw_text_row(canvas, cell, config);
                    stats.text_rows += 1;
                }
                SnapshotStyle::Thumbnails => match assets.get(&cell.image_ref) {
                    Some(image) => {
                        draw_thumbnail(canvas, cell, image, config);
                        stats.images += 1;
                    }
                    None => {
                        draw_placeholder(canvas, cell, config);
                        stats.placeholders += 1;
                    }
                },
            }
        }
    }

    log::debug!("snapshot rendered: {:?}", stats);
    stats
}

fn image_area(cell: &SnapshotCell, config: &SnapshotConfig) -> Rect {
    let label_h = config.thumb_label_height as f64;
    Rect::new(cell.rect.x, cell.rect.y, cell.rect.w, (cell.rect.h - label_h).max(0.0))
}

fn draw_label<C: SnapshotCanvas>(canvas: &mut C, cell: &SnapshotCell, config: &SnapshotConfig) {
    canvas.fill_text(
        &fit_label(&cell.name, cell.rect.w),
        cell.rect.center_x(),
        cell.rect.bottom() - 5.0,
        LABEL_FONT,
        &config.muted,
        TextAlign::Center,
    );
}

fn draw_thumbnail<C: SnapshotCanvas>(
    canvas: &mut C,
    cell: &SnapshotCell,
    image: &C::Image,
    config: &SnapshotConfig,
) {
    canvas.draw_image(image, image_area(cell, config));
    draw_label(canvas, cell, config);
}

fn draw_placeholder<C: SnapshotCanvas>(
    canvas: &mut C,
    cell: &SnapshotCell,
    config: &SnapshotConfig,
) {
    let area = image_area(cell, config);
    canvas.fill_rect(area, &config.placeholder);
    canvas.fill_text(
        &fit_label(&cell.name, area.w),
        area.center_x(),
        area.y + area.h / 2.0,
        LABEL_FONT,
        &config.foreground,
        TextAlign::Center,
    );
    draw_label(canvas, cell, config);
}

fn draw_text_row<C: SnapshotCanvas>(canvas: &mut C, cell: &SnapshotCell, config: &SnapshotConfig) {
    canvas.fill_text(
        &fit_label(&format!("• {}", cell.name), cell.rect.w),
        cell.rect.x,
        cell.rect.y + cell.rect.h * 0.7,
        ROW_FONT,
        &config.foreground,
        TextAlign::Left,
    );
}

/// Shorten `text` with an ellipsis so it roughly fits `width` pixels
pub fn fit_label(text: &str, width: f64) -> String {
    let max_chars = ((width / APPROX_CHAR_PX).floor() as usize).max(2);
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}
