use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::geometry::DEFAULT_THICKNESS;
use crate::types::{Insets, Rgba, StarStyle};

/// Everything the host can set on a rating row. Missing JSON keys take the defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RatingConfig {
    pub star_num: u32,
    pub rating: f64,
    pub star_thickness: f64,
    pub corner_radius: f64,
    pub star_margin: f64,
    pub stroke_width: f64,
    pub star_foreground_color: Rgba,
    pub star_background_color: Rgba,
    pub stroke_color: Rgba,
    pub background_color: Rgba,
    pub draw_stroke_for_full_star: bool,
    pub draw_stroke_for_half_star: bool,
    pub draw_stroke_for_empty_star: bool,
    pub enable_select_rating: bool,
    pub padding: Insets,
}

impl Default for RatingConfig {
    fn default() -> Self {
        let style = StarStyle::default();
        RatingConfig {
            star_num: 5,
            rating: 0.0,
            star_thickness: DEFAULT_THICKNESS,
            corner_radius: style.corner_radius,
            star_margin: 8.0,
            stroke_width: style.stroke_width,
            star_foreground_color: style.fill_full,
            star_background_color: style.fill_empty,
            stroke_color: style.stroke,
            background_color: Rgba::TRANSPARENT,
            draw_stroke_for_full_star: style.stroke_on_full,
            draw_stroke_for_half_star: style.stroke_on_partial,
            draw_stroke_for_empty_star: style.stroke_on_empty,
            enable_select_rating: false,
            padding: Insets::default(),
        }
    }
}

impl RatingConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RatingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Rejects negative or non-finite sizes. Thickness only has to be finite; it is
    /// clamped when applied.
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("rating", self.rating),
            ("corner_radius", self.corner_radius),
            ("star_margin", self.star_margin),
            ("stroke_width", self.stroke_width),
            ("padding.left", self.padding.left),
            ("padding.top", self.padding.top),
            ("padding.right", self.padding.right),
            ("padding.bottom", self.padding.bottom),
        ];
        for (field, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidValue { field, value });
            }
        }
        if !self.star_thickness.is_finite() {
            return Err(Error::InvalidValue { field: "star_thickness", value: self.star_thickness });
        }
        Ok(())
    }

    pub fn style(&self) -> StarStyle {
        StarStyle {
            fill_full: self.star_foreground_color,
            fill_empty: self.star_background_color,
            stroke: self.stroke_color,
            stroke_width: self.stroke_width,
            corner_radius: self.corner_radius,
            stroke_on_full: self.draw_stroke_for_full_star,
            stroke_on_empty: self.draw_stroke_for_empty_star,
            stroke_on_partial: self.draw_stroke_for_half_star,
        }
    }
}
