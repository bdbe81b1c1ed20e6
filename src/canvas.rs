use kurbo::{BezPath, Rect};
use web_sys::{CanvasRenderingContext2d, Path2d};
use crate::surface::PaintSurface;
use crate::types::Rgba;

/// Paints onto an HTML canvas 2D context.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        CanvasSurface { ctx }
    }

    fn path2d(path: &BezPath) -> Option<Path2d> {
        match Path2d::new_with_path_string(&path.to_svg()) {
            Ok(p) => Some(p),
            Err(e) => {
                log::warn!("could not build Path2d: {:?}", e);
                None
            }
        }
    }
}

impl PaintSurface for CanvasSurface<'_> {
    fn fill_path(&mut self, path: &BezPath, color: Rgba) {
        if let Some(p) = Self::path2d(path) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.fill_with_path_2d(&p);
        }
    }

    fn stroke_path(&mut self, path: &BezPath, color: Rgba, width: f64) {
        if let Some(p) = Self::path2d(path) {
            self.ctx.set_stroke_style_str(&color.to_css());
            self.ctx.set_line_width(width);
            let _ = self.ctx.set_line_dash(&js_sys::Array::new());
            self.ctx.stroke_with_path(&p);
        }
    }

    fn push_clip(&mut self, rect: Rect) {
        self.ctx.save();
        self.ctx.begin_path();
        self.ctx.rect(rect.x0, rect.y0, rect.width(), rect.height());
        self.ctx.clip();
    }

    fn pop_clip(&mut self) {
        self.ctx.restore();
    }
}
