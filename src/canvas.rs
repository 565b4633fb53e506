use crate::core::{DrawSurface, Rgba};
use wasm_bindgen::JsCast;
use web_sys as web;

/// `DrawSurface` over an HTML canvas and its 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }
}

impl DrawSurface for CanvasSurface {
    fn resize(&mut self, width: f64, height: f64) {
        // Assigning the backing size always clears, even when unchanged.
        self.canvas.set_width(width.max(1.0) as u32);
        self.canvas.set_height(height.max(1.0) as u32);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn set_stroke(&mut self, color: Rgba, width: f64) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}
