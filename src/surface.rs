use kurbo::{BezPath, Rect};
use serde::{Serialize, Serializer};
use crate::types::Rgba;

/// Clips nest: every `push_clip` is matched by a `pop_clip`.
pub trait PaintSurface {
    fn fill_path(&mut self, path: &BezPath, color: Rgba);
    fn stroke_path(&mut self, path: &BezPath, color: Rgba, width: f64);
    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);
}

/// One recorded paint instruction.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Fill {
        #[serde(serialize_with = "path_data")]
        path: BezPath,
        color: Rgba,
    },
    Stroke {
        #[serde(serialize_with = "path_data")]
        path: BezPath,
        color: Rgba,
        width: f64,
    },
    PushClip { rect: Rect },
    PopClip,
}

impl DrawOp {
    pub fn replay<S: PaintSurface + ?Sized>(&self, surface: &mut S) {
        match self {
            DrawOp::Fill { path, color } => surface.fill_path(path, *color),
            DrawOp::Stroke { path, color, width } => surface.stroke_path(path, *color, *width),
            DrawOp::PushClip { rect } => surface.push_clip(*rect),
            DrawOp::PopClip => surface.pop_clip(),
        }
    }
}

fn path_data<S: Serializer>(path: &BezPath, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_svg())
}

/// Records instead of painting.
impl PaintSurface for Vec<DrawOp> {
    fn fill_path(&mut self, path: &BezPath, color: Rgba) {
        self.push(DrawOp::Fill { path: path.clone(), color });
    }

    fn stroke_path(&mut self, path: &BezPath, color: Rgba, width: f64) {
        self.push(DrawOp::Stroke { path: path.clone(), color, width });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.push(DrawOp::PushClip { rect });
    }

    fn pop_clip(&mut self) {
        self.push(DrawOp::PopClip);
    }
}
