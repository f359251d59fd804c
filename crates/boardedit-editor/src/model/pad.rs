use boardedit_core::Point;
use serde::{Deserialize, Serialize};

/// One of the four corners of a rectangle, in y-down board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RectCorner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl RectCorner {
    /// Corners in handle order.
    pub const ALL: [RectCorner; 4] = [
        RectCorner::TopLeft,
        RectCorner::TopRight,
        RectCorner::BottomRight,
        RectCorner::BottomLeft,
    ];

    pub fn index(self) -> usize {
        match self {
            RectCorner::TopLeft => 0,
            RectCorner::TopRight => 1,
            RectCorner::BottomRight => 2,
            RectCorner::BottomLeft => 3,
        }
    }

    pub fn opposite(self) -> RectCorner {
        match self {
            RectCorner::TopLeft => RectCorner::BottomRight,
            RectCorner::TopRight => RectCorner::BottomLeft,
            RectCorner::BottomRight => RectCorner::TopLeft,
            RectCorner::BottomLeft => RectCorner::TopRight,
        }
    }

    /// True for corners on the left edge (minimum x).
    pub fn is_left(self) -> bool {
        matches!(self, RectCorner::TopLeft | RectCorner::BottomLeft)
    }

    /// True for corners on the top edge (minimum y).
    pub fn is_top(self) -> bool {
        matches!(self, RectCorner::TopLeft | RectCorner::TopRight)
    }
}

/// Axis-aligned drill or cutout inside a pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hole {
    pub min: Point,
    pub max: Point,
}

impl Hole {
    /// Builds a hole from two opposite corners in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn center(&self) -> Point {
        self.min.midpoint(&self.max)
    }

    /// Width and height as `(w, h)`.
    pub fn size(&self) -> (i64, i64) {
        (
            self.max.x as i64 - self.min.x as i64,
            self.max.y as i64 - self.min.y as i64,
        )
    }

    fn translate(&mut self, dx: i64, dy: i64) {
        self.min = self.min.translated(dx, dy);
        self.max = self.max.translated(dx, dy);
    }
}

/// Rectangular pad, optionally with a hole that must stay inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectPad {
    pub top_left: Point,
    pub bottom_right: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hole: Option<Hole>,
}

impl RectPad {
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
            hole: None,
        }
    }

    pub fn with_hole(mut self, hole: Hole) -> Self {
        self.hole = Some(hole);
        self
    }

    /// Corners as `[TL, TR, BR, BL]`.
    pub fn corners(&self) -> [Point; 4] {
        let (tl, br) = (self.top_left, self.bottom_right);
        [tl, Point::new(br.x, tl.y), br, Point::new(tl.x, br.y)]
    }

    pub fn corner(&self, corner: RectCorner) -> Point {
        self.corners()[corner.index()]
    }

    /// Takes the bounding box of the given corners.
    pub fn set_corners(&mut self, corners: &[Point; 4]) {
        let min_x = corners.iter().map(|p| p.x).min().unwrap_or(self.top_left.x);
        let min_y = corners.iter().map(|p| p.y).min().unwrap_or(self.top_left.y);
        let max_x = corners.iter().map(|p| p.x).max().unwrap_or(self.bottom_right.x);
        let max_y = corners.iter().map(|p| p.y).max().unwrap_or(self.bottom_right.y);
        self.top_left = Point::new(min_x, min_y);
        self.bottom_right = Point::new(max_x, max_y);
    }

    pub fn width(&self) -> i64 {
        self.bottom_right.x as i64 - self.top_left.x as i64
    }

    pub fn height(&self) -> i64 {
        self.bottom_right.y as i64 - self.top_left.y as i64
    }

    pub fn translate(&mut self, dx: i64, dy: i64) {
        self.top_left = self.top_left.translated(dx, dy);
        self.bottom_right = self.bottom_right.translated(dx, dy);
        if let Some(hole) = self.hole.as_mut() {
            hole.translate(dx, dy);
        }
    }
}
