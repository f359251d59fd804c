//! Arc reconstruction from a single moved handle.
//!
//! Every routine starts from the arc as it was when the drag began and
//! returns a complete new arc (start, mid, end and center), or a
//! [`GeometryError`] when the construction degenerates. The caller keeps the
//! previous geometry in that case; [`ArcReconstructor::reconstruct`] does
//! this for you.
//!
//! | handle    | keep endpoints / tangent | keep center |
//! |-----------|--------------------------|-------------|
//! | start/end | [`endpoint_keep_tangent`](ArcReconstructor::endpoint_keep_tangent) | [`endpoint_keep_center`](ArcReconstructor::endpoint_keep_center) |
//! | mid       | [`mid_keep_endpoints`](ArcReconstructor::mid_keep_endpoints) | [`mid_keep_center`](ArcReconstructor::mid_keep_center) |
//! | center    | [`center_keep_endpoints`](ArcReconstructor::center_keep_endpoints) | [`translate`](ArcReconstructor::translate) |

use crate::geom::{self, Vec2};
use crate::model::Arc;
use crate::points::PointRole;
use boardedit_core::{in_safe_range, safe_bounds, ArcEditMode, GeometryError, Point};
use boardedit_settings::EditorSettings;
use tracing::debug;

/// Cursor positions closer than this to the fixed tangent line count as
/// collinear (ratio of the off-line component to the cursor distance).
const TANGENT_COLLINEAR_EPS: f64 = 1e-6;

/// Which arc handle is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcHandle {
    Start,
    Mid,
    End,
    Center,
}

impl ArcHandle {
    pub fn from_role(role: PointRole) -> Option<Self> {
        match role {
            PointRole::ArcStart => Some(ArcHandle::Start),
            PointRole::ArcMid => Some(ArcHandle::Mid),
            PointRole::ArcEnd => Some(ArcHandle::End),
            PointRole::ArcCenter => Some(ArcHandle::Center),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcLimits {
    /// Smallest radius a reconstructed arc may have.
    pub min_radius: i32,
    pub coords_padding: i32,
}

impl Default for ArcLimits {
    fn default() -> Self {
        Self::from(&EditorSettings::default())
    }
}

impl From<&EditorSettings> for ArcLimits {
    fn from(settings: &EditorSettings) -> Self {
        Self {
            min_radius: settings.min_arc_radius,
            coords_padding: settings.coords_padding,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArcReconstructor {
    pub mode: ArcEditMode,
    pub limits: ArcLimits,
}

impl ArcReconstructor {
    pub fn new(mode: ArcEditMode, limits: ArcLimits) -> Self {
        Self { mode, limits }
    }

    /// Rebuilds the arc for a drag of `handle` to `cursor`.
    ///
    /// `original` is the arc at drag start, `current` the last valid result.
    /// Degenerate constructions return `current` unchanged.
    pub fn reconstruct(&self, original: &Arc, current: &Arc, handle: ArcHandle, cursor: Point) -> Arc {
        match self.try_reconstruct(original, handle, cursor) {
            Ok(arc) => arc,
            Err(err) => {
                debug!("Arc {:?} drag to {} kept previous geometry: {}", handle, cursor, err);
                *current
            }
        }
    }

    pub fn try_reconstruct(&self, arc: &Arc, handle: ArcHandle, cursor: Point) -> Result<Arc, GeometryError> {
        match (handle, self.mode) {
            (ArcHandle::Start | ArcHandle::End, ArcEditMode::KeepEndpointsOrTangent) => {
                self.endpoint_keep_tangent(arc, handle, cursor)
            }
            (ArcHandle::Start | ArcHandle::End, ArcEditMode::KeepCenter) => {
                self.endpoint_keep_center(arc, handle, cursor)
            }
            (ArcHandle::Mid, ArcEditMode::KeepEndpointsOrTangent) => self.mid_keep_endpoints(arc, cursor),
            (ArcHandle::Mid, ArcEditMode::KeepCenter) => self.mid_keep_center(arc, cursor),
            (ArcHandle::Center, ArcEditMode::KeepEndpointsOrTangent) => {
                self.center_keep_endpoints(arc, cursor)
            }
            (ArcHandle::Center, ArcEditMode::KeepCenter) => self.translate(arc, cursor),
        }
    }

    /// Moves one endpoint to `cursor` while the tangent at the other endpoint
    /// keeps both its line and its direction of travel.
    ///
    /// The new center lies on the normal through the fixed endpoint, at equal
    /// distance from the fixed endpoint and the cursor. When the cursor
    /// crosses the fixed tangent line the curvature flips and so does the
    /// arc's sense.
    pub fn endpoint_keep_tangent(&self, arc: &Arc, moving: ArcHandle, cursor: Point) -> Result<Arc, GeometryError> {
        let fixed = match moving {
            ArcHandle::Start => arc.end,
            ArcHandle::End => arc.start,
            _ => return Err(GeometryError::CoincidentPoints { what: "handle is not an endpoint" }),
        };
        let center = arc.center.to_vector();
        let p1 = fixed.to_vector();
        let q = cursor.to_vector();

        let radial = p1 - center;
        let r = radial.norm();
        if r <= f64::EPSILON {
            return Err(GeometryError::DegenerateRadius {
                radius: r,
                min: self.limits.min_radius,
            });
        }
        let u1 = radial / r;

        let w = p1 - q;
        let w_len = w.norm();
        if w_len < 0.5 {
            return Err(GeometryError::CoincidentPoints {
                what: "cursor and fixed endpoint",
            });
        }
        let along = u1.dot(&w);
        if along.abs() / w_len < TANGENT_COLLINEAR_EPS {
            return Err(GeometryError::Collinear);
        }

        // |c' - p1| = |c' - q| with c' = p1 - t*u1
        let t = w.norm_squared() / (2.0 * along);
        let new_center = p1 - u1 * t;
        let ccw = arc.is_ccw() ^ (t < 0.0);

        let (start, end) = match moving {
            ArcHandle::Start => (q, p1),
            _ => (p1, q),
        };
        self.finish(new_center, start, end, ccw)
    }

    /// Moves one endpoint to the point of the existing circle nearest the
    /// cursor. Center, radius, the other endpoint and the sense are kept.
    pub fn endpoint_keep_center(&self, arc: &Arc, moving: ArcHandle, cursor: Point) -> Result<Arc, GeometryError> {
        let fixed = match moving {
            ArcHandle::Start => arc.end,
            ArcHandle::End => arc.start,
            _ => return Err(GeometryError::CoincidentPoints { what: "handle is not an endpoint" }),
        };
        let center = arc.center.to_vector();
        let r = (fixed.to_vector() - center).norm();

        let d = cursor.to_vector() - center;
        let len = d.norm();
        if len <= f64::EPSILON {
            return Err(GeometryError::CoincidentPoints {
                what: "cursor and arc center",
            });
        }
        let moved = center + d * (r / len);

        let (start, end) = match moving {
            ArcHandle::Start => (moved, fixed.to_vector()),
            _ => (fixed.to_vector(), moved),
        };
        self.finish(center, start, end, arc.is_ccw())
    }

    /// Slides the center along the perpendicular bisector of the fixed chord.
    pub fn center_keep_endpoints(&self, arc: &Arc, cursor: Point) -> Result<Arc, GeometryError> {
        let (s, e) = chord(arc)?;
        let m = (s + e) * 0.5;
        let center = geom::project_onto_line(cursor.to_vector(), m, geom::perp(e - s))
            .ok_or(GeometryError::Collinear)?;
        self.finish(center, s, e, arc.is_ccw())
    }

    /// Places the mid point on the perpendicular bisector of the fixed chord,
    /// on the side of the current mid and at least 1% of the chord off it.
    pub fn mid_keep_endpoints(&self, arc: &Arc, cursor: Point) -> Result<Arc, GeometryError> {
        let (s, e) = chord(arc)?;
        let m = (s + e) * 0.5;
        let chord_len = (e - s).norm();

        let mut normal = geom::perp(e - s) / chord_len;
        if (arc.mid.to_vector() - m).dot(&normal) < 0.0 {
            normal = -normal;
        }
        let min_offset = (chord_len / 100.0).max(1.0);
        let offset = (cursor.to_vector() - m).dot(&normal).max(min_offset);
        let mid = m + normal * offset;

        let center = geom::circumcenter(s, mid, e).ok_or(GeometryError::Collinear)?;
        let ccw = geom::cross(mid - s, e - s) > 0.0;
        self.finish(center, s, e, ccw)
    }

    /// Rotates the whole arc about its center so the mid point follows the
    /// cursor. The subtended angle is kept.
    pub fn mid_keep_center(&self, arc: &Arc, cursor: Point) -> Result<Arc, GeometryError> {
        let center = arc.center.to_vector();
        let ccw = arc.is_ccw();
        let s = arc.start.to_vector();
        let e = arc.end.to_vector();

        let d = cursor.to_vector() - center;
        if d.norm() <= f64::EPSILON {
            return Err(GeometryError::CoincidentPoints {
                what: "cursor and arc center",
            });
        }
        let true_mid = geom::arc_midpoint(center, s, e, ccw)?;
        let delta = geom::wrap_signed(geom::angle_of(d) - geom::angle_of(true_mid - center));

        let start = center + geom::rotate(s - center, delta);
        let end = center + geom::rotate(e - center, delta);
        self.finish(center, start, end, ccw)
    }

    /// Moves the arc rigidly so its center lands on `cursor`.
    pub fn translate(&self, arc: &Arc, cursor: Point) -> Result<Arc, GeometryError> {
        let dx = cursor.x as i64 - arc.center.x as i64;
        let dy = cursor.y as i64 - arc.center.y as i64;
        let (min, max) = safe_bounds(self.limits.coords_padding);
        let fits = |p: Point| {
            let x = p.x as i64 + dx;
            let y = p.y as i64 + dy;
            (min..=max).contains(&x) && (min..=max).contains(&y)
        };
        if ![arc.start, arc.mid, arc.end, arc.center].into_iter().all(fits) {
            return Err(GeometryError::OutOfRange);
        }
        let mut moved = *arc;
        moved.translate(dx, dy);
        Ok(moved)
    }

    /// Rounds a construction back onto the grid and checks it is usable.
    fn finish(&self, center: Vec2, start: Vec2, end: Vec2, ccw: bool) -> Result<Arc, GeometryError> {
        let radius = (start - center).norm();
        if !radius.is_finite() || radius < self.limits.min_radius as f64 {
            return Err(GeometryError::DegenerateRadius {
                radius,
                min: self.limits.min_radius,
            });
        }

        let mid = geom::arc_midpoint(center, start, end, ccw)?;

        let padding = self.limits.coords_padding;
        if ![center, start, mid, end].iter().all(|v| in_safe_range(*v, padding)) {
            return Err(GeometryError::OutOfRange);
        }
        let grid = |v: Vec2| Point::from_vector(v).ok_or(GeometryError::OutOfRange);
        let arc = Arc::new(grid(start)?, grid(mid)?, grid(end)?, grid(center)?);

        // Rounding can collapse a very flat or very short arc.
        if arc.start == arc.end || geom::orient(arc.start, arc.mid, arc.end) == 0 || arc.is_ccw() != ccw {
            return Err(GeometryError::DegenerateSweep);
        }
        Ok(arc)
    }
}

fn chord(arc: &Arc) -> Result<(Vec2, Vec2), GeometryError> {
    if arc.start == arc.end {
        return Err(GeometryError::CoincidentPoints {
            what: "arc start and end",
        });
    }
    Ok((arc.start.to_vector(), arc.end.to_vector()))
}
