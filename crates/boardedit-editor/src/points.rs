//! Draggable handles for a shape.
//!
//! A [`PointSet`] lists the handles of one shape in a fixed order: real
//! handles first, then the virtual edge midpoints. Dragging a virtual
//! midpoint inserts a new vertex instead of moving an existing one. The set
//! is rebuilt from scratch whenever the shape's topology changes.

use crate::model::{PolygonOutline, RectCorner, Shape};
use boardedit_core::Point;
use smallvec::SmallVec;
use tracing::debug;

/// Which feature of the shape a handle stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointRole {
    SegmentStart,
    SegmentEnd,
    /// Virtual midpoint of a segment.
    SegmentMidpoint,
    ArcStart,
    ArcMid,
    ArcEnd,
    ArcCenter,
    Corner(RectCorner),
    Vertex {
        contour: usize,
        vertex: usize,
    },
    /// Virtual midpoint of outline edge `edge` (vertex `edge` to `edge + 1`).
    Midpoint {
        contour: usize,
        edge: usize,
    },
}

impl PointRole {
    /// Virtual handles are never written back to the shape.
    pub fn is_virtual(&self) -> bool {
        matches!(self, PointRole::SegmentMidpoint | PointRole::Midpoint { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditPoint {
    pub position: Point,
    pub role: PointRole,
}

impl EditPoint {
    pub fn new(position: Point, role: PointRole) -> Self {
        Self { position, role }
    }
}

/// Ordered handles of one shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<EditPoint>,
    real_count: usize,
    /// Handle index where each outline contour starts.
    contour_starts: SmallVec<[usize; 4]>,
}

impl PointSet {
    /// Lays out the handles for `shape`.
    ///
    /// - segment: start, end, then the midpoint
    /// - arc: start, mid, end, center
    /// - rectangle: top-left, top-right, bottom-right, bottom-left
    /// - outline: every vertex of every contour, then one midpoint per edge
    pub fn build(shape: &Shape) -> PointSet {
        let mut set = PointSet::default();

        match shape {
            Shape::Segment(seg) => {
                set.push(seg.start, PointRole::SegmentStart);
                set.push(seg.end, PointRole::SegmentEnd);
                set.real_count = 2;
                set.push(seg.midpoint(), PointRole::SegmentMidpoint);
            }
            Shape::Arc(arc) => {
                set.push(arc.start, PointRole::ArcStart);
                set.push(arc.mid, PointRole::ArcMid);
                set.push(arc.end, PointRole::ArcEnd);
                set.push(arc.center, PointRole::ArcCenter);
                set.real_count = 4;
            }
            Shape::RectPad(pad) => {
                for (corner, p) in RectCorner::ALL.into_iter().zip(pad.corners()) {
                    set.push(p, PointRole::Corner(corner));
                }
                set.real_count = 4;
            }
            Shape::Outline(outline) => set.build_outline(outline),
        }

        set
    }

    fn build_outline(&mut self, outline: &PolygonOutline) {
        for (contour, pts) in outline.contours.iter().enumerate() {
            self.contour_starts.push(self.points.len());
            for (vertex, p) in pts.iter().enumerate() {
                self.push(*p, PointRole::Vertex { contour, vertex });
            }
        }
        self.real_count = self.points.len();

        for contour in 0..outline.contours.len() {
            for (edge, (a, b)) in outline.edges(contour).enumerate() {
                self.push(a.midpoint(&b), PointRole::Midpoint { contour, edge });
            }
        }
    }

    fn push(&mut self, position: Point, role: PointRole) {
        self.points.push(EditPoint::new(position, role));
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of real (non-virtual) handles.
    pub fn real_count(&self) -> usize {
        self.real_count
    }

    pub fn get(&self, index: usize) -> Option<&EditPoint> {
        self.points.get(index)
    }

    pub fn position(&self, index: usize) -> Option<Point> {
        self.points.get(index).map(|p| p.position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EditPoint> {
        self.points.iter()
    }

    pub fn contour_starts(&self) -> &[usize] {
        &self.contour_starts
    }

    pub(crate) fn set_position(&mut self, index: usize, position: Point) {
        if let Some(p) = self.points.get_mut(index) {
            p.position = position;
        }
    }

    /// Handle under `cursor`, if any.
    ///
    /// Real handles win over virtual ones; among the same kind the nearest
    /// handle within `tolerance` wins.
    pub fn find_point(&self, cursor: Point, tolerance: i32) -> Option<usize> {
        let tol = tolerance.max(0) as u64;
        let tol2 = tol * tol;

        let nearest = |range: std::ops::Range<usize>| {
            range
                .filter_map(|i| {
                    let d = self.points[i].position.distance_squared(&cursor);
                    (d <= tol2).then_some((d, i))
                })
                .min()
                .map(|(_, i)| i)
        };

        nearest(0..self.real_count).or_else(|| nearest(self.real_count..self.points.len()))
    }

    /// Maps an outline vertex handle back to `(contour, vertex)`.
    pub fn locate(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.real_count || self.contour_starts.is_empty() {
            return None;
        }
        let contour = self.contour_starts.partition_point(|&start| start <= index) - 1;
        Some((contour, index - self.contour_starts[contour]))
    }

    /// Handle index of an outline vertex.
    pub fn index_of_vertex(&self, contour: usize, vertex: usize) -> Option<usize> {
        let start = *self.contour_starts.get(contour)?;
        (vertex < self.contour_len(contour)).then_some(start + vertex)
    }

    fn contour_len(&self, contour: usize) -> usize {
        let start = self.contour_starts.get(contour).copied().unwrap_or(0);
        let end = self
            .contour_starts
            .get(contour + 1)
            .copied()
            .unwrap_or(self.real_count);
        end.saturating_sub(start)
    }

    /// Next vertex in the same contour, wrapping around.
    pub fn next_index(&self, index: usize) -> Option<usize> {
        let (contour, vertex) = self.locate(index)?;
        let len = self.contour_len(contour);
        self.index_of_vertex(contour, (vertex + 1) % len)
    }

    /// Previous vertex in the same contour, wrapping around.
    pub fn previous_index(&self, index: usize) -> Option<usize> {
        let (contour, vertex) = self.locate(index)?;
        let len = self.contour_len(contour);
        self.index_of_vertex(contour, (vertex + len - 1) % len)
    }

    /// Writes the real handle positions into a copy of `shape`.
    pub fn apply_to(&self, shape: &Shape) -> Shape {
        let mut out = shape.clone();
        let pos = |i: usize| self.points[i].position;

        match &mut out {
            Shape::Segment(seg) if self.real_count == 2 => {
                seg.start = pos(0);
                seg.end = pos(1);
            }
            Shape::Arc(arc) if self.real_count == 4 => {
                arc.start = pos(0);
                arc.mid = pos(1);
                arc.end = pos(2);
                arc.center = pos(3);
            }
            Shape::RectPad(pad) if self.real_count == 4 => {
                pad.set_corners(&[pos(0), pos(1), pos(2), pos(3)]);
            }
            Shape::Outline(outline) if self.real_count == outline.vertex_count() => {
                for p in &self.points[..self.real_count] {
                    if let PointRole::Vertex { contour, vertex } = p.role {
                        if let Err(err) = outline.set_vertex(contour, vertex, p.position) {
                            debug!("Skipping handle {:?}: {}", p.role, err);
                        }
                    }
                }
            }
            _ => debug!("Point set does not match {:?}; shape left unchanged", shape.kind()),
        }

        out
    }
}
