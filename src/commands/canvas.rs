//! Canvas Commands
//!
//! `SnapshotCanvas` over a 2D context, plus PNG encoding.

use gild_board_core::snapshot::{Rect, SnapshotCanvas, TextAlign};
use gild_board_core::SnapshotError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SnapshotError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| SnapshotError::Canvas(format!("{:?}", e)))?
            .ok_or_else(|| SnapshotError::Canvas("2d context not supported".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SnapshotError::Canvas("unexpected context type".to_string()))?;
        Ok(Self { canvas, ctx })
    }

    /// PNG data URL of the current drawing.
    ///
    /// Fails with `SnapshotError::Tainted` when cross-origin art blocked the export;
    /// the drawing itself stays on screen.
    pub fn to_png_data_url(&self) -> Result<String, SnapshotError> {
        self.canvas
            .to_data_url_with_type("image/png")
            .map_err(|e| classify_export_error(&e))
    }
}

fn classify_export_error(err: &JsValue) -> SnapshotError {
    let name = js_sys::Reflect::get(err, &JsValue::from_str("name"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    if name == "SecurityError" {
        SnapshotError::Tainted
    } else {
        SnapshotError::Encode(format!("{:?}", err))
    }
}

impl SnapshotCanvas for CanvasSurface {
    type Image = HtmlImageElement;

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: &str, align: TextAlign) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
        if let Err(e) = self.ctx.fill_text(text, x, y) {
            log::warn!("fill_text failed for {:?}: {:?}", text, e);
        }
    }

    fn draw_image(&mut self, image: &HtmlImageElement, rect: Rect) {
        if let Err(e) = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image, rect.x, rect.y, rect.w, rect.h)
        {
            log::warn!("draw_image failed for {}: {:?}", image.src(), e);
        }
    }
}
