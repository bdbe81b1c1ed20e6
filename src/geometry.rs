// Ten-vertex ring starting at the leftmost tip, clockwise: even indices are tips,
// odd indices the notches between them.

use kurbo::{Point, Rect, Vec2};

pub const VERTEX_COUNT: usize = 10;

pub const DEFAULT_THICKNESS: f64 = 0.5;
pub const MIN_THICKNESS: f64 = 0.3;
pub const MAX_THICKNESS: f64 = 0.9;

pub const CANONICAL_SCALE_FACTOR: f64 = 0.9511;

// unit circumcircle, y-up
const CANONICAL_OUTER: [(f64, f64); 5] = [
    (-0.9511, 0.3090), // left
    (0.0, 1.0),        // top
    (0.9511, 0.3090),  // right
    (0.5878, -0.8090), // bottom right
    (-0.5878, -0.8090), // bottom left
];

/// Height over width of the star's bounding box.
pub const ASPECT_RATIO: f64 = (CANONICAL_OUTER[1].1 - CANONICAL_OUTER[3].1)
    / (CANONICAL_OUTER[2].0 - CANONICAL_OUTER[0].0);

// Ring indices of the tips that bound the star in the canonical orientation.
const LEFT_TIP: usize = 0;
const TOP_TIP: usize = 2;
const RIGHT_TIP: usize = 4;
const BOTTOM_TIP: usize = 8;

pub fn star_width_for_height(height: f64) -> f64 {
    height / ASPECT_RATIO
}

pub fn clamp_thickness(factor: f64) -> f64 {
    if factor.is_nan() {
        return DEFAULT_THICKNESS;
    }
    factor.clamp(MIN_THICKNESS, MAX_THICKNESS)
}

pub fn next_index(index: usize) -> usize {
    (index + 1) % VERTEX_COUNT
}

pub fn is_outer(index: usize) -> bool {
    index % 2 == 0
}

#[derive(Clone, Debug, PartialEq)]
pub struct StarGeometry {
    vertices: [Point; VERTEX_COUNT],
    scale_factor: f64,
    thickness: f64,
    bounds: Rect,
}

impl Default for StarGeometry {
    fn default() -> Self {
        StarGeometry::new(DEFAULT_THICKNESS)
    }
}

impl StarGeometry {
    pub fn new(thickness: f64) -> Self {
        let mut star = StarGeometry {
            vertices: [Point::ZERO; VERTEX_COUNT],
            scale_factor: CANONICAL_SCALE_FACTOR,
            thickness: DEFAULT_THICKNESS,
            bounds: Rect::ZERO,
        };
        star.reset(thickness);
        star
    }

    pub fn reset(&mut self, thickness: f64) {
        self.scale_factor = CANONICAL_SCALE_FACTOR;
        self.load_canonical();
        self.update_bounds();
        self.apply_thickness(thickness);
        self.flip_to_screen();
    }

    /// Keeps size and position.
    pub fn set_thickness(&mut self, factor: f64) {
        let factor = clamp_thickness(factor);
        if factor == self.thickness {
            return;
        }
        let scale = self.scale_factor;
        let origin = self.bounds.origin();

        self.reset(factor);
        self.change_scale(scale);
        self.move_to(origin.x, origin.y);
    }

    /// Zero height collapses the star onto `(left, top)`; negative height mirrors it.
    pub fn fit_to_box(&mut self, left: f64, top: f64, height: f64) {
        if self.scale_factor == 0.0 {
            // a zero-height fit lost the shape, start over
            self.reset(self.thickness);
        }
        let origin = self.bounds.origin();
        self.offset(-origin.x, -origin.y);
        self.change_scale(star_width_for_height(height));
        self.offset(left, top);
        self.update_bounds();
    }

    pub fn move_to(&mut self, left: f64, top: f64) {
        self.offset(left - self.bounds.x0, top - self.bounds.y0);
        self.update_bounds();
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.offset(dx, dy);
        self.update_bounds();
    }

    pub fn bounding_box(&self) -> Rect {
        self.bounds
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn vertex(&self, index: usize) -> Point {
        self.vertices[index % VERTEX_COUNT]
    }

    pub fn vertices(&self) -> &[Point; VERTEX_COUNT] {
        &self.vertices
    }

    pub fn outer_vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.vertices.iter().copied().step_by(2)
    }

    pub fn inner_vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.vertices.iter().copied().skip(1).step_by(2)
    }

    fn load_canonical(&mut self) {
        for (i, &(x, y)) in CANONICAL_OUTER.iter().enumerate() {
            self.vertices[i * 2] = Point::new(x, y);
        }
        for i in (1..VERTEX_COUNT).step_by(2) {
            self.vertices[i] = self.vertices[i - 1].midpoint(self.vertices[next_index(i)]);
        }
    }

    fn apply_thickness(&mut self, factor: f64) {
        let factor = clamp_thickness(factor);
        for v in self.vertices.iter_mut().skip(1).step_by(2) {
            *v = (v.to_vec2() * factor).to_point();
        }
        self.thickness = factor;
    }

    fn flip_to_screen(&mut self) {
        // bounds are still y-up here, so y0 holds the topmost y
        let dx = -self.bounds.x0;
        let dy = self.bounds.y0;
        for v in self.vertices.iter_mut() {
            *v = Point::new((v.x + dx) / 2.0, (dy - v.y) / 2.0);
        }
        self.update_bounds();
    }

    fn offset(&mut self, dx: f64, dy: f64) {
        let delta = Vec2::new(dx, dy);
        for v in self.vertices.iter_mut() {
            *v += delta;
        }
    }

    fn change_scale(&mut self, new_factor: f64) {
        let scale = new_factor / self.scale_factor;
        if scale == 1.0 {
            return;
        }
        for v in self.vertices.iter_mut() {
            *v = (v.to_vec2() * scale).to_point();
        }
        self.scale_factor = new_factor;
    }

    // only valid while the star is never rotated
    fn update_bounds(&mut self) {
        self.bounds = Rect {
            x0: self.vertices[LEFT_TIP].x,
            y0: self.vertices[TOP_TIP].y,
            x1: self.vertices[RIGHT_TIP].x,
            y1: self.vertices[BOTTOM_TIP].y,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "{a} != {b}");
    }

    fn assert_rect_close(a: Rect, b: Rect) {
        assert_close(a.x0, b.x0);
        assert_close(a.y0, b.y0);
        assert_close(a.x1, b.x1);
        assert_close(a.y1, b.y1);
    }

    #[test]
    fn aspect_ratio_from_canonical_table() {
        assert!((ASPECT_RATIO - 1.809 / 1.9022).abs() < EPS);
    }

    #[test]
    fn reset_places_star_at_origin() {
        let star = StarGeometry::default();
        let b = star.bounding_box();
        assert_close(b.x0, 0.0);
        assert_close(b.y0, 0.0);
        assert_close(b.x1, 0.9511);
        assert_close(b.y1, 0.9045);
        assert_close(star.scale_factor(), CANONICAL_SCALE_FACTOR);
        assert_close(b.height() / b.width(), ASPECT_RATIO);
    }

    #[test]
    fn tips_stay_inside_the_box() {
        let mut star = StarGeometry::new(0.9);
        star.fit_to_box(10.0, 20.0, 48.0);
        let b = star.bounding_box();
        for v in star.vertices() {
            assert!(v.x >= b.x0 - EPS && v.x <= b.x1 + EPS);
            assert!(v.y >= b.y0 - EPS && v.y <= b.y1 + EPS);
        }
    }

    #[test]
    fn top_tip_is_centred() {
        let star = StarGeometry::default();
        let b = star.bounding_box();
        assert_close(star.vertex(2).x, b.center().x);
        assert_close(star.vertex(2).y, b.y0);
    }

    #[test]
    fn thickness_is_clamped() {
        assert_eq!(StarGeometry::new(0.1).thickness(), MIN_THICKNESS);
        assert_eq!(StarGeometry::new(2.0).thickness(), MAX_THICKNESS);

        let mut star = StarGeometry::default();
        star.set_thickness(-1.0);
        assert_eq!(star.thickness(), MIN_THICKNESS);
        star.set_thickness(0.95);
        assert_eq!(star.thickness(), MAX_THICKNESS);
    }

    #[test]
    fn nan_thickness_falls_back_to_default() {
        assert_eq!(StarGeometry::new(f64::NAN).thickness(), DEFAULT_THICKNESS);

        let mut star = StarGeometry::new(0.7);
        star.fit_to_box(0.0, 0.0, 40.0);
        star.set_thickness(f64::NAN);
        assert_eq!(star.thickness(), DEFAULT_THICKNESS);
        for v in star.vertices() {
            assert!(v.x.is_finite() && v.y.is_finite());
        }
        assert_close(star.bounding_box().height(), 40.0);
    }

    #[test]
    fn thickness_moves_only_inner_vertices() {
        let mut star = StarGeometry::default();
        star.fit_to_box(5.0, 7.0, 100.0);
        let before = star.clone();
        star.set_thickness(0.8);

        assert_rect_close(star.bounding_box(), before.bounding_box());
        for (a, b) in star.outer_vertices().zip(before.outer_vertices()) {
            assert_close(a.x, b.x);
            assert_close(a.y, b.y);
        }
        let centre = star.bounding_box().center();
        let thick = star.vertex(1).distance(centre);
        let thin = before.vertex(1).distance(centre);
        assert!(thick > thin);
    }

    #[test]
    fn same_thickness_is_noop() {
        let mut star = StarGeometry::new(0.4);
        star.fit_to_box(3.0, 3.0, 30.0);
        let before = star.clone();
        star.set_thickness(0.4);
        assert_eq!(star, before);
    }

    #[test]
    fn fit_to_box_sets_height() {
        let mut star = StarGeometry::default();
        star.fit_to_box(0.0, 0.0, 100.0);
        let b = star.bounding_box();
        assert_close(b.height(), 100.0);
        assert_close(b.width(), 100.0 / ASPECT_RATIO);
        assert_close(star.scale_factor(), b.width());
    }

    #[test]
    fn refit_ignores_prior_state() {
        let mut star = StarGeometry::new(0.7);
        star.fit_to_box(300.0, -40.0, 12.0);
        star.translate(-5.5, 9.0);
        star.fit_to_box(20.0, 30.0, 64.0);
        assert_rect_close(
            star.bounding_box(),
            Rect::new(20.0, 30.0, 20.0 + 64.0 / ASPECT_RATIO, 94.0),
        );
    }

    #[test]
    fn translate_keeps_size() {
        let mut star = StarGeometry::default();
        star.fit_to_box(0.0, 0.0, 40.0);
        let before = star.bounding_box();
        star.translate(12.0, -3.0);
        assert_rect_close(star.bounding_box(), before + Vec2::new(12.0, -3.0));
    }

    #[test]
    fn move_to_places_origin() {
        let mut star = StarGeometry::default();
        star.fit_to_box(50.0, 60.0, 40.0);
        star.move_to(1.0, 2.0);
        let b = star.bounding_box();
        assert_close(b.x0, 1.0);
        assert_close(b.y0, 2.0);
        assert_close(b.height(), 40.0);
    }

    #[test]
    fn zero_height_collapses_then_recovers() {
        let mut star = StarGeometry::default();
        star.fit_to_box(4.0, 4.0, 0.0);
        let b = star.bounding_box();
        assert_close(b.width(), 0.0);
        assert_close(b.height(), 0.0);
        assert!(star.vertices().iter().all(|v| v.x == 4.0 && v.y == 4.0));

        star.fit_to_box(0.0, 0.0, 10.0);
        assert_close(star.bounding_box().height(), 10.0);
    }

    #[test]
    fn negative_height_gives_negative_size() {
        let mut star = StarGeometry::default();
        star.fit_to_box(0.0, 0.0, -10.0);
        let b = star.bounding_box();
        assert!(b.width() < 0.0);
        assert!(b.height() < 0.0);
    }

    #[test]
    fn ring_wraps() {
        assert_eq!(next_index(9), 0);
        assert_eq!(next_index(3), 4);
        assert!(is_outer(0) && !is_outer(1));
        let star = StarGeometry::default();
        assert_eq!(star.vertex(10), star.vertex(0));
        assert_eq!(star.outer_vertices().count(), 5);
        assert_eq!(star.inner_vertices().count(), 5);
    }

    #[test]
    fn width_for_height_is_linear() {
        assert_close(star_width_for_height(20.0) / star_width_for_height(10.0), 2.0);
        assert_close(star_width_for_height(0.0), 0.0);
    }
}
