pub mod error;
pub mod types;
pub mod geometry;
pub mod surface;
pub mod render;
pub mod layout;
pub mod config;
pub mod rating_bar;
pub mod svg;
pub mod canvas;
pub mod view;

pub use error::{Error, Result};
pub use geometry::{star_width_for_height, StarGeometry, ASPECT_RATIO};
pub use render::render_star;
pub use surface::{DrawOp, PaintSurface};
pub use config::RatingConfig;
pub use rating_bar::RatingBar;
pub use view::RatingStarView;
pub use types::*;
