use kurbo::{Point, Rect, Size};
use crate::config::RatingConfig;
use crate::geometry::{clamp_thickness, StarGeometry};
use crate::layout::{measure, MeasureSpec, StarRow};
use crate::render::render_star;
use crate::surface::PaintSurface;
use crate::types::{FillState, Insets, StarStyle};

#[derive(Clone, Debug)]
pub struct RatingBar {
    config: RatingConfig,
    rating: f64,
    size: Size,
    row: StarRow,
}

impl Default for RatingBar {
    fn default() -> Self {
        RatingBar::new(RatingConfig::default())
    }
}

impl RatingBar {
    pub fn new(mut config: RatingConfig) -> Self {
        config.rating = clamp_rating(config.rating, config.star_num);
        config.star_thickness = clamp_thickness(config.star_thickness);
        RatingBar { rating: config.rating, config, size: Size::ZERO, row: StarRow::default() }
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn row(&self) -> &StarRow {
        &self.row
    }

    pub fn stars(&self) -> &[StarGeometry] {
        self.row.stars()
    }

    /// Number of stars actually laid out, which can be fewer than `star_num`.
    pub fn star_count(&self) -> usize {
        self.row.len()
    }

    pub fn style(&self) -> StarStyle {
        self.config.style()
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Sets the rating, clamped to `[0, star_num]`. Returns whether it changed.
    pub fn set_rating(&mut self, rating: f64) -> bool {
        let rating = clamp_rating(rating, self.config.star_num);
        if rating == self.rating {
            return false;
        }
        self.rating = rating;
        self.config.rating = rating;
        true
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        let size = Size::new(width, height);
        if size == self.size {
            return;
        }
        self.size = size;
        self.relayout();
    }

    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        measure(width, height, self.config.padding, self.config.star_num, self.config.star_margin)
    }

    pub fn set_star_num(&mut self, star_num: u32) {
        if star_num == self.config.star_num {
            return;
        }
        self.config.star_num = star_num;
        self.set_rating(self.rating);
        self.relayout();
    }

    pub fn set_star_margin(&mut self, margin: f64) {
        self.config.star_margin = margin.max(0.0);
        self.relayout();
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.config.padding = padding;
        self.relayout();
    }

    pub fn set_star_thickness(&mut self, factor: f64) {
        let factor = clamp_thickness(factor);
        self.config.star_thickness = factor;
        for star in self.row.stars_mut() {
            star.set_thickness(factor);
        }
    }

    pub fn set_corner_radius(&mut self, radius: f64) {
        self.config.corner_radius = radius.max(0.0);
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.config.stroke_width = width.max(0.0);
    }

    pub fn set_draw_stroke_for_full_star(&mut self, draw: bool) {
        self.config.draw_stroke_for_full_star = draw;
    }

    pub fn set_draw_stroke_for_half_star(&mut self, draw: bool) {
        self.config.draw_stroke_for_half_star = draw;
    }

    pub fn set_draw_stroke_for_empty_star(&mut self, draw: bool) {
        self.config.draw_stroke_for_empty_star = draw;
    }

    pub fn set_enable_select_rating(&mut self, enable: bool) {
        self.config.enable_select_rating = enable;
    }

    pub fn content_rect(&self) -> Rect {
        let p = self.config.padding;
        Rect::new(p.left, p.top, self.size.width - p.right, self.size.height - p.bottom)
    }

    pub fn fill_state(&self, index: usize) -> FillState {
        FillState::for_star(self.rating, index)
    }

    pub fn fill_states(&self) -> impl Iterator<Item = FillState> + '_ {
        (0..self.star_count()).map(|i| self.fill_state(i))
    }

    pub fn star_at(&self, x: f64, y: f64) -> Option<usize> {
        let p = Point::new(x, y);
        self.stars().iter().position(|star| {
            let b = star.bounding_box();
            p.x >= b.x0 && p.x <= b.x1 && p.y >= b.y0 && p.y <= b.y1
        })
    }

    /// Clicking the star that already matches the rating clears it.
    pub fn click(&mut self, x: f64, y: f64) -> bool {
        if !self.config.enable_select_rating {
            return false;
        }
        let Some(index) = self.star_at(x, y) else {
            return false;
        };
        let selected = (index + 1) as f64;
        if self.rating == selected {
            self.set_rating(0.0)
        } else {
            self.set_rating(selected)
        }
    }

    pub fn render<S: PaintSurface + ?Sized>(&self, surface: &mut S) {
        let style = self.style();
        for (star, fill) in self.stars().iter().zip(self.fill_states()) {
            render_star(surface, star, fill, &style);
        }
    }

    fn relayout(&mut self) {
        self.row = StarRow::layout(
            self.content_rect(),
            self.config.star_num,
            self.config.star_margin,
            self.config.star_thickness,
        );
    }
}

fn clamp_rating(rating: f64, star_num: u32) -> f64 {
    if rating.is_nan() {
        return 0.0;
    }
    rating.clamp(0.0, star_num as f64)
}
