use serde::{Serialize, Deserialize};
use std::fmt;
use crate::error::Error;

/// 8-bit RGBA color. Serialized as `#rrggbb` (opaque) or `#rrggbbaa`.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 0xff }
    }

    /// Unpacks a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Rgba {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgba()` form, used for canvas fill/stroke styles.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.opacity())
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xff {
            write!(f, "{}", self.to_hex())
        } else {
            write!(f, "{}{:02x}", self.to_hex(), self.a)
        }
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> String {
        color.to_string()
    }
}

impl TryFrom<String> for Rgba {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::str::FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Error::Color(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        let a = if hex.len() == 8 { channel(6)? } else { 0xff };
        Ok(Rgba::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

/// How much of one star is painted in the foreground color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FillState {
    Empty,
    Full,
    Partial(f64),
}

impl FillState {
    /// Collapses fractions at or beyond the ends of `(0, 1)` to `Empty` / `Full`.
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction >= 1.0 {
            FillState::Full
        } else if fraction > 0.0 {
            FillState::Partial(fraction)
        } else {
            FillState::Empty
        }
    }

    pub fn for_star(rating: f64, index: usize) -> Self {
        Self::from_fraction(rating - index as f64)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct StarStyle {
    pub fill_full: Rgba,
    pub fill_empty: Rgba,
    pub stroke: Rgba,
    pub stroke_width: f64,
    pub corner_radius: f64,
    pub stroke_on_full: bool,
    pub stroke_on_empty: bool,
    pub stroke_on_partial: bool,
}

impl Default for StarStyle {
    fn default() -> Self {
        StarStyle {
            fill_full: Rgba::from_argb(0xffed4a4b),
            fill_empty: Rgba::WHITE,
            stroke: Rgba::from_argb(0xffed4a4b),
            stroke_width: 2.0,
            corner_radius: 4.0,
            stroke_on_full: false,
            stroke_on_empty: true,
            stroke_on_partial: true,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
#[serde(default)]
pub struct Insets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Insets {
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!("#ED4A4B".parse::<Rgba>().unwrap(), Rgba::from_argb(0xffed4a4b));
        assert_eq!("#00000080".parse::<Rgba>().unwrap(), Rgba::new(0, 0, 0, 0x80));
        assert!("ED4A4B".parse::<Rgba>().is_err());
        assert!("#ED4A".parse::<Rgba>().is_err());
        assert!("#GGGGGG".parse::<Rgba>().is_err());
    }

    #[test]
    fn display_drops_opaque_alpha() {
        assert_eq!(Rgba::rgb(0xed, 0x4a, 0x4b).to_string(), "#ed4a4b");
        assert_eq!(Rgba::TRANSPARENT.to_string(), "#00000000");
    }

    #[test]
    fn fill_state_per_star() {
        assert_eq!(FillState::for_star(1.5, 0), FillState::Full);
        assert_eq!(FillState::for_star(1.5, 1), FillState::Partial(0.5));
        assert_eq!(FillState::for_star(1.5, 2), FillState::Empty);
        assert_eq!(FillState::for_star(3.0, 2), FillState::Full);
        assert_eq!(FillState::for_star(0.0, 0), FillState::Empty);
    }

    #[test]
    fn fill_state_collapses_bounds() {
        assert_eq!(FillState::from_fraction(0.0), FillState::Empty);
        assert_eq!(FillState::from_fraction(-0.2), FillState::Empty);
        assert_eq!(FillState::from_fraction(1.0), FillState::Full);
        assert_eq!(FillState::from_fraction(7.0), FillState::Full);
    }
}
