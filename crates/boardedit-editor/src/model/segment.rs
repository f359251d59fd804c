use boardedit_core::Point;
use serde::{Deserialize, Serialize};

/// A straight graphic line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Splits the segment at `at`, returning `(start..at, at..end)`.
    pub fn split_at(&self, at: Point) -> (Segment, Segment) {
        (Segment::new(self.start, at), Segment::new(at, self.end))
    }

    pub fn translate(&mut self, dx: i64, dy: i64) {
        self.start = self.start.translated(dx, dy);
        self.end = self.end.translated(dx, dy);
    }
}
