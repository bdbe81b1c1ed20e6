use kurbo::{Rect, Size};
use crate::geometry::{star_width_for_height, StarGeometry};
use crate::types::Insets;

/// Height used when the host leaves it unconstrained.
pub const DEFAULT_STAR_HEIGHT: f64 = 32.0;

// extra horizontal gap after every star, on top of the margin
const STAR_GAP: f64 = 0.5;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MeasureSpec {
    Exactly(f64),
    AtMost(f64),
    Unspecified,
}

/// The stars that fit in a content box, left to right.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StarRow {
    stars: Vec<StarGeometry>,
    star_width: f64,
    star_height: f64,
}

impl StarRow {
    /// Stars are as tall as the smaller side of `content`.
    pub fn layout(content: Rect, star_num: u32, margin: f64, thickness: f64) -> Self {
        let star_height = content.height().min(content.width());
        if !(star_height > 0.0) {
            log::debug!("no room for stars in {content:?}");
            return StarRow::default();
        }
        let star_width = star_width_for_height(star_height);

        // count * width + (count - 1) * margin <= content width
        let fits = ((content.width() + margin) / (star_width + margin)).floor();
        let count = if fits > 0.0 { (fits as u32).min(star_num) } else { 0 };
        log::debug!(
            "drawing star count = {count}, content width = {}, star width = {star_width}, star height = {star_height}",
            content.width()
        );

        let mut left = content.x0;
        let stars = (0..count)
            .map(|_| {
                let mut star = StarGeometry::new(thickness);
                star.fit_to_box(left, content.y0, star_height);
                left += star_width + STAR_GAP + margin;
                star
            })
            .collect();

        StarRow { stars, star_width, star_height }
    }

    pub fn stars(&self) -> &[StarGeometry] {
        &self.stars
    }

    pub fn stars_mut(&mut self) -> &mut [StarGeometry] {
        &mut self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn star_width(&self) -> f64 {
        self.star_width
    }

    pub fn star_height(&self) -> f64 {
        self.star_height
    }
}

pub fn preferred_row_width(star_num: u32, star_height: f64, margin: f64) -> f64 {
    if star_num == 0 || !(star_height > 0.0) {
        return 0.0;
    }
    let n = star_num as f64;
    margin * (n - 1.0) + star_width_for_height(star_height) * n
}

/// Resolves the widget size from the host's constraints. Width is rounded up to a
/// whole pixel.
pub fn measure(
    width: MeasureSpec,
    height: MeasureSpec,
    padding: Insets,
    star_num: u32,
    margin: f64,
) -> Size {
    let height = match height {
        MeasureSpec::Exactly(h) => h,
        MeasureSpec::AtMost(h) => DEFAULT_STAR_HEIGHT.min(h),
        MeasureSpec::Unspecified => DEFAULT_STAR_HEIGHT,
    };
    let star_height = height - padding.vertical();

    let width = match width {
        MeasureSpec::Exactly(w) => w,
        spec => {
            let wanted = padding.horizontal() + preferred_row_width(star_num, star_height, margin);
            match spec {
                MeasureSpec::AtMost(w) => w.min(wanted),
                _ => wanted,
            }
        }
    };
    log::debug!("measured {width} x {height}, star height = {star_height}");

    Size::new(width.ceil(), height)
}
