//! Editable board shapes.

use serde::{Deserialize, Serialize};

mod arc;
mod pad;
mod polygon;
mod segment;

pub use arc::Arc;
pub use pad::{Hole, RectCorner, RectPad};
pub use polygon::PolygonOutline;
pub use segment::Segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Segment,
    Arc,
    RectPad,
    Outline,
}

/// A shape the point editor can work on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Segment(Segment),
    Arc(Arc),
    RectPad(RectPad),
    Outline(PolygonOutline),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Arc(_) => ShapeKind::Arc,
            Shape::RectPad(_) => ShapeKind::RectPad,
            Shape::Outline(_) => ShapeKind::Outline,
        }
    }

    /// Whether the shape has discrete vertices that can be added or removed.
    pub fn supports_corners(&self) -> bool {
        matches!(self, Shape::Segment(_) | Shape::Outline(_))
    }

    /// Moves every point of the shape, saturating at the `i32` range.
    pub fn translate(&mut self, dx: i64, dy: i64) {
        match self {
            Shape::Segment(s) => s.translate(dx, dy),
            Shape::Arc(s) => s.translate(dx, dy),
            Shape::RectPad(s) => s.translate(dx, dy),
            Shape::Outline(s) => s.translate(dx, dy),
        }
    }
}

impl From<Segment> for Shape {
    fn from(s: Segment) -> Self {
        Shape::Segment(s)
    }
}

impl From<Arc> for Shape {
    fn from(s: Arc) -> Self {
        Shape::Arc(s)
    }
}

impl From<RectPad> for Shape {
    fn from(s: RectPad) -> Self {
        Shape::RectPad(s)
    }
}

impl From<PolygonOutline> for Shape {
    fn from(s: PolygonOutline) -> Self {
        Shape::Outline(s)
    }
}
