
use kurbo::{BezPath, Point, Rect};
use crate::geometry::{StarGeometry, VERTEX_COUNT};
use crate::surface::PaintSurface;
use crate::types::{FillState, Rgba, StarStyle};

// per inner notch 1, 3, 5, 7, 9
const CENTER_PATCH_OFFSETS: [(f64, f64); 5] = [
    (-1.0, -1.0),
    (1.5, -0.5),
    (1.5, 1.0),
    (0.0, 1.0),
    (-1.0, 1.0),
];

pub fn render_star<S: PaintSurface + ?Sized>(
    surface: &mut S,
    star: &StarGeometry,
    fill: FillState,
    style: &StarStyle,
) {
    match fill {
        FillState::Full => render_full(surface, star, style),
        FillState::Empty => render_empty(surface, star, style),
        FillState::Partial(fraction) => render_partial(surface, star, fraction, style),
    }
}

fn render_full<S: PaintSurface + ?Sized>(surface: &mut S, star: &StarGeometry, style: &StarStyle) {
    fill_solid(surface, star, style.fill_full, style.corner_radius);
    if style.stroke_on_full {
        stroke_outline(surface, star, style);
    }
}

fn render_empty<S: PaintSurface + ?Sized>(surface: &mut S, star: &StarGeometry, style: &StarStyle) {
    fill_solid(surface, star, style.fill_empty, style.corner_radius);
    if style.stroke_on_empty {
        stroke_outline(surface, star, style);
    }
}

fn render_partial<S: PaintSurface + ?Sized>(
    surface: &mut S,
    star: &StarGeometry,
    fraction: f64,
    style: &StarStyle,
) {
    if fraction <= 0.0 {
        return render_empty(surface, star, style);
    } else if fraction >= 1.0 {
        return render_full(surface, star, style);
    }
    log::debug!("partial star fraction = {fraction}");

    fill_solid(surface, star, style.fill_empty, style.corner_radius);

    let clip = partial_clip(star, fraction);
    surface.push_clip(clip);
    fill_solid(surface, star, style.fill_full, style.corner_radius);
    surface.pop_clip();

    if style.stroke_on_partial {
        stroke_outline(surface, star, style);
    }
}

pub fn divider_x(star: &StarGeometry, fraction: f64) -> f64 {
    let b = star.bounding_box();
    b.x0 + b.width() * fraction
}

pub fn partial_clip(star: &StarGeometry, fraction: f64) -> Rect {
    let b = star.bounding_box();
    Rect::new(b.x0, b.y0, divider_x(star, fraction), b.y1)
}

pub fn fill_solid<S: PaintSurface + ?Sized>(
    surface: &mut S,
    star: &StarGeometry,
    color: Rgba,
    corner_radius: f64,
) {
    for segment in point_segments(star, corner_radius) {
        surface.fill_path(&segment, color);
    }
    surface.fill_path(&center_patch(star), color);
}

pub fn stroke_outline<S: PaintSurface + ?Sized>(surface: &mut S, star: &StarGeometry, style: &StarStyle) {
    for segment in point_segments(star, style.corner_radius) {
        surface.stroke_path(&segment, style.stroke, style.stroke_width);
    }
}

/// The five `inner -> tip -> inner` polylines, starting at ring index 1.
pub fn point_segments(star: &StarGeometry, corner_radius: f64) -> impl Iterator<Item = BezPath> + '_ {
    (1..VERTEX_COUNT).step_by(2).map(move |i| {
        let points = [star.vertex(i), star.vertex(i + 1), star.vertex(i + 2)];
        corner_path(&points, corner_radius)
    })
}

pub fn center_patch(star: &StarGeometry) -> BezPath {
    let mut path = BezPath::new();
    for (n, (dx, dy)) in CENTER_PATCH_OFFSETS.iter().enumerate() {
        let v = star.vertex(n * 2 + 1);
        let p = Point::new(v.x + dx, v.y + dy);
        if n == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

/// Open polyline with interior corners rounded by quadratic curves.
pub fn corner_path(points: &[Point], radius: f64) -> BezPath {
    let mut path = BezPath::new();
    let Some((&first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(first);
    if radius <= 0.0 || points.len() < 3 {
        for &p in rest {
            path.line_to(p);
        }
        return path;
    }

    for w in points.windows(3) {
        let (prev, corner, next) = (w[0], w[1], w[2]);
        let d_in = corner - prev;
        let d_out = next - corner;
        let (len_in, len_out) = (d_in.hypot(), d_out.hypot());
        if len_in == 0.0 || len_out == 0.0 {
            path.line_to(corner);
            continue;
        }
        let cut_in = radius.min(len_in / 2.0);
        let cut_out = radius.min(len_out / 2.0);
        path.line_to(corner - d_in * (cut_in / len_in));
        path.quad_to(corner, corner + d_out * (cut_out / len_out));
    }
    if let Some(&last) = points.last() {
        path.line_to(last);
    }
    path
}
