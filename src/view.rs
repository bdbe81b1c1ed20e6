use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;
use crate::canvas::CanvasSurface;
use crate::config::RatingConfig;
use crate::layout::MeasureSpec;
use crate::rating_bar::RatingBar;
use crate::surface::DrawOp;
use crate::svg::export_svg;
use crate::types::Insets;

/// JS-facing rating widget drawing onto a canvas.
#[wasm_bindgen]
pub struct RatingStarView {
    bar: RatingBar,
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn measure_spec(mode: &str, value: f64) -> MeasureSpec {
    match mode {
        "exactly" => MeasureSpec::Exactly(value),
        "at_most" => MeasureSpec::AtMost(value),
        _ => MeasureSpec::Unspecified,
    }
}

#[wasm_bindgen]
impl RatingStarView {
    /// `config` is a plain object with `RatingConfig` keys, or `undefined` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<RatingStarView, JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let config: RatingConfig = if config.is_undefined() || config.is_null() {
            RatingConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        config.validate().map_err(js_error)?;
        Ok(RatingStarView { bar: RatingBar::new(config) })
    }

    pub fn from_json(json: &str) -> Result<RatingStarView, JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let config = RatingConfig::from_json(json).map_err(js_error)?;
        Ok(RatingStarView { bar: RatingBar::new(config) })
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.bar.resize(width, height);
    }

    /// Returns `[width, height]`. Modes are `"exactly"`, `"at_most"` or anything else for
    /// unspecified.
    pub fn measure(&self, width_mode: &str, width: f64, height_mode: &str, height: f64) -> Vec<f64> {
        let size = self.bar.measure(measure_spec(width_mode, width), measure_spec(height_mode, height));
        vec![size.width, size.height]
    }

    pub fn set_rating(&mut self, rating: f64) -> bool {
        self.bar.set_rating(rating)
    }

    pub fn rating(&self) -> f64 {
        self.bar.rating()
    }

    pub fn star_count(&self) -> usize {
        self.bar.star_count()
    }

    pub fn set_star_num(&mut self, star_num: u32) {
        self.bar.set_star_num(star_num);
    }

    pub fn set_star_thickness(&mut self, factor: f64) {
        self.bar.set_star_thickness(factor);
    }

    pub fn set_star_margin(&mut self, margin: f64) {
        self.bar.set_star_margin(margin);
    }

    pub fn set_padding(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        self.bar.set_padding(Insets { left, top, right, bottom });
    }

    pub fn set_corner_radius(&mut self, radius: f64) {
        self.bar.set_corner_radius(radius);
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.bar.set_stroke_width(width);
    }

    pub fn set_draw_stroke_for_full_star(&mut self, draw: bool) {
        self.bar.set_draw_stroke_for_full_star(draw);
    }

    pub fn set_draw_stroke_for_half_star(&mut self, draw: bool) {
        self.bar.set_draw_stroke_for_half_star(draw);
    }

    pub fn set_draw_stroke_for_empty_star(&mut self, draw: bool) {
        self.bar.set_draw_stroke_for_empty_star(draw);
    }

    pub fn set_enable_select_rating(&mut self, enable: bool) {
        self.bar.set_enable_select_rating(enable);
    }

    /// Click-to-rate at a point in canvas coordinates. Returns whether the rating changed,
    /// in which case the caller should re-render.
    pub fn click(&mut self, x: f64, y: f64) -> bool {
        self.bar.click(x, y)
    }

    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let size = self.bar.size();
        ctx.save();
        ctx.clear_rect(0.0, 0.0, size.width, size.height);

        let background = self.bar.config().background_color;
        if !background.is_transparent() {
            ctx.set_fill_style_str(&background.to_css());
            ctx.fill_rect(0.0, 0.0, size.width, size.height);
        }

        self.bar.render(&mut CanvasSurface::new(ctx));
        ctx.restore();
    }

    pub fn export_svg(&self) -> String {
        export_svg(&self.bar)
    }

    pub fn draw_ops_json(&self) -> String {
        let mut ops: Vec<DrawOp> = Vec::new();
        self.bar.render(&mut ops);
        serde_json::to_string(&ops).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn get_config(&self) -> String {
        self.bar.config().to_json()
    }
}
