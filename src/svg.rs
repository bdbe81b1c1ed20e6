use kurbo::{BezPath, Rect};
use crate::rating_bar::RatingBar;
use crate::surface::PaintSurface;
use crate::types::Rgba;

/// Collects paint instructions as SVG elements.
#[derive(Default)]
pub struct SvgSurface {
    defs: Vec<String>,
    body: String,
    next_clip_id: u32,
    open_groups: usize,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps everything painted so far in an `<svg>` document of the given size.
    pub fn finish(mut self, width: f64, height: f64, background: Rgba) -> String {
        for _ in 0..self.open_groups {
            self.body.push_str("</g>");
        }
        let defs_str = if self.defs.is_empty() { String::new() } else { format!("<defs>{}</defs>", self.defs.join("")) };
        let background_str = if background.is_transparent() {
            String::new()
        } else {
            format!(
                r#"<rect width="100%" height="100%" fill="{}" fill-opacity="{}" />"#,
                background.to_hex(), background.opacity()
            )
        };
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">{}{}{}</svg>"#,
            width, height, width, height, background_str, defs_str, self.body
        )
    }
}

impl PaintSurface for SvgSurface {
    fn fill_path(&mut self, path: &BezPath, color: Rgba) {
        self.body.push_str(&format!(
            r#"<path d="{}" fill="{}" fill-opacity="{}" />"#,
            path.to_svg(), color.to_hex(), color.opacity()
        ));
    }

    fn stroke_path(&mut self, path: &BezPath, color: Rgba, width: f64) {
        self.body.push_str(&format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}" />"#,
            path.to_svg(), color.to_hex(), color.opacity(), width
        ));
    }

    fn push_clip(&mut self, rect: Rect) {
        let id = format!("star-clip-{}", self.next_clip_id);
        self.next_clip_id += 1;
        self.defs.push(format!(
            r#"<clipPath id="{}"><rect x="{}" y="{}" width="{}" height="{}" /></clipPath>"#,
            id, rect.x0, rect.y0, rect.width(), rect.height()
        ));
        self.body.push_str(&format!(r#"<g clip-path="url(#{})">"#, id));
        self.open_groups += 1;
    }

    fn pop_clip(&mut self) {
        if self.open_groups > 0 {
            self.body.push_str("</g>");
            self.open_groups -= 1;
        }
    }
}

/// Renders the whole rating row as a standalone SVG document.
pub fn export_svg(bar: &RatingBar) -> String {
    let mut surface = SvgSurface::new();
    bar.render(&mut surface);
    let size = bar.size();
    surface.finish(size.width, size.height, bar.config().background_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RatingConfig;

    #[test]
    fn partial_star_gets_clip_path() {
        let mut bar = RatingBar::new(RatingConfig { rating: 1.5, ..Default::default() });
        bar.resize(200.0, 32.0);
        let svg = export_svg(&bar);

        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<clipPath").count(), 1);
        assert_eq!(svg.matches("<g clip-path=\"url(#star-clip-0)\">").count(), 1);
        assert_eq!(svg.matches("<g ").count(), svg.matches("</g>").count());
        assert!(svg.contains("fill=\"#ed4a4b\""));
        assert!(!svg.contains("<rect width=\"100%\""));
    }

    #[test]
    fn background_rect_when_opaque() {
        let config = RatingConfig { background_color: Rgba::rgb(0, 0, 0), ..Default::default() };
        let mut bar = RatingBar::new(config);
        bar.resize(100.0, 20.0);
        assert!(export_svg(&bar).contains("<rect width=\"100%\" height=\"100%\" fill=\"#000000\""));
    }

    #[test]
    fn unbalanced_clip_is_closed() {
        let mut surface = SvgSurface::new();
        surface.push_clip(Rect::new(0.0, 0.0, 1.0, 1.0));
        let svg = surface.finish(1.0, 1.0, Rgba::TRANSPARENT);
        assert!(svg.ends_with("</g></svg>"));
    }
}
