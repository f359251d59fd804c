//! Hover and drag state machine.
//!
//! ```text
//! Idle ──pointer over handle──▶ Hover ──begin_drag──▶ Dragging
//!   ▲                                                    │
//!   └──────────── end_drag / cancel_drag ───────────────┘
//! ```
//!
//! Only one drag can be active. Corner insertion and removal are one-shot
//! edits that are refused while dragging.

use crate::arc_edit::{ArcHandle, ArcLimits, ArcReconstructor};
use crate::constraint::{partner_for, Constraint};
use crate::corner_pin::{pin_edited_corner, PinLimits};
use crate::geom;
use crate::host::{CommitSink, ModifierState, SelectionTracker, WarningSink};
use crate::model::{PolygonOutline, Segment, Shape};
use crate::outline::validate_outline;
use crate::points::{PointRole, PointSet};
use boardedit_core::{clamp_point, ArcEditMode, OutlineError, Point};
use boardedit_settings::EditorSettings;
use tracing::{debug, trace, warn};

/// An ongoing drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Handle being dragged. Changes once when a midpoint is promoted.
    pub index: usize,
    /// Handle position when the drag started.
    pub original: Point,
    /// The shape as it was before the drag, restored on cancel or rejection.
    pub original_shape: Shape,
    /// Reconstruction starts from this shape on every sample.
    base_shape: Shape,
    /// Second half of a segment split by dragging its midpoint.
    pub spawned: Option<Shape>,
    /// Whether the commit sink has been told about the edit.
    pub modified: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Hover {
        index: usize,
    },
    Dragging(DragSession),
}

impl EditState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, EditState::Dragging(_))
    }
}

/// Result of [`PointEditor::end_drag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    Committed,
    /// The edited outline was invalid and the drag was undone.
    Rejected(OutlineError),
    /// The handle never moved.
    Unchanged,
    NotDragging,
}

/// Point editor for one selected shape.
#[derive(Debug, Clone)]
pub struct PointEditor {
    settings: EditorSettings,
    arc_mode: ArcEditMode,
    shape: Option<Shape>,
    points: PointSet,
    state: EditState,
    constraint: Option<Constraint>,
}

impl PointEditor {
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            arc_mode: settings.arc_edit_mode,
            settings,
            shape: None,
            points: PointSet::default(),
            state: EditState::Idle,
            constraint: None,
        }
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// Reference point of the active snapping constraint.
    pub fn constrainer(&self) -> Option<Point> {
        self.constraint.map(|c| c.constrainer)
    }

    pub fn arc_edit_mode(&self) -> ArcEditMode {
        self.arc_mode
    }

    pub fn set_arc_edit_mode(&mut self, mode: ArcEditMode) {
        debug!("Arc edit mode set to {}", mode);
        self.arc_mode = mode;
    }

    pub fn toggle_arc_edit_mode(&mut self) -> ArcEditMode {
        self.set_arc_edit_mode(self.arc_mode.toggled());
        self.arc_mode
    }

    /// Replaces the selection. Any drag in progress is dropped without
    /// touching the commit sink.
    pub fn select(&mut self, shape: Option<Shape>) {
        if self.state.is_dragging() {
            warn!("Selection changed during a drag; discarding the drag");
        }
        self.points = shape.as_ref().map(PointSet::build).unwrap_or_default();
        debug!(
            "Selected {:?} with {} handles",
            shape.as_ref().map(Shape::kind),
            self.points.len()
        );
        self.shape = shape;
        self.state = EditState::Idle;
        self.constraint = None;
    }

    /// Hover tracking. Returns the handle under the cursor.
    pub fn pointer_moved(&mut self, cursor: Point) -> Option<usize> {
        if self.state.is_dragging() {
            return None;
        }
        let hit = self.hit(cursor);
        self.state = match hit {
            Some(index) => EditState::Hover { index },
            None => EditState::Idle,
        };
        hit
    }

    /// Starts dragging the hovered handle, or the one under `cursor`.
    pub fn begin_drag(&mut self, cursor: Point) -> bool {
        let index = match self.state {
            EditState::Dragging(_) => {
                trace!("begin_drag ignored: already dragging");
                return false;
            }
            EditState::Hover { index } => Some(index),
            EditState::Idle => self.hit(cursor),
        };

        let (Some(index), Some(shape)) = (index, self.shape.as_ref()) else {
            return false;
        };
        let Some(original) = self.points.position(index) else {
            return false;
        };

        debug!("Begin drag of handle {} at {}", index, original);
        self.state = EditState::Dragging(DragSession {
            index,
            original,
            original_shape: shape.clone(),
            base_shape: shape.clone(),
            spawned: None,
            modified: false,
        });
        self.constraint = None;
        true
    }

    /// Moves the dragged handle to `cursor` and recomputes the shape.
    pub fn drag_to(&mut self, cursor: Point, modifiers: impl ModifierState, commit: &mut dyn CommitSink) -> bool {
        let mut session = match std::mem::take(&mut self.state) {
            EditState::Dragging(session) => session,
            other => {
                self.state = other;
                trace!("drag_to ignored: not dragging");
                return false;
            }
        };

        let moved = self.drag_session(&mut session, cursor, modifiers, commit);
        self.state = EditState::Dragging(session);
        moved
    }

    fn drag_session(
        &mut self,
        session: &mut DragSession,
        cursor: Point,
        modifiers: impl ModifierState,
        commit: &mut dyn CommitSink,
    ) -> bool {
        let padding = self.settings.coords_padding;
        let mut cursor = clamp_point(cursor, padding);

        if !session.modified {
            if cursor == session.original {
                return false;
            }
            commit.modify(&session.original_shape);
            session.modified = true;
        }

        self.promote_midpoint(session, cursor);

        if modifiers.alt_constraint() {
            let constraint = match self.constraint {
                Some(c) => c,
                None => {
                    let partner = partner_for(&session.base_shape, &self.points, session.index, session.original);
                    let c = Constraint::new(partner, self.settings.alt_constraint);
                    trace!("Constraint active around {}", partner);
                    self.constraint = Some(c);
                    c
                }
            };
            cursor = clamp_point(constraint.apply(cursor), padding);
        } else {
            self.constraint = None;
        }

        let Some(role) = self.points.get(session.index).map(|p| p.role) else {
            return false;
        };
        let Some(current) = self.shape.as_ref() else {
            return false;
        };
        let updated = self.reconstruct(session, current, role, cursor);

        if let (Some(Shape::Segment(spawned)), Shape::Segment(edited)) = (session.spawned.as_mut(), &updated) {
            spawned.start = edited.end;
        }

        self.points = PointSet::build(&updated);
        self.shape = Some(updated);
        true
    }

    /// Turns a virtual midpoint into a real vertex on its first movement.
    fn promote_midpoint(&mut self, session: &mut DragSession, cursor: Point) {
        let Some(role) = self.points.get(session.index).map(|p| p.role) else {
            return;
        };

        let (shape, spawned) = match (role, &session.base_shape) {
            (PointRole::Midpoint { contour, edge }, Shape::Outline(outline)) => {
                let mut outline: PolygonOutline = outline.clone();
                if let Err(err) = outline.insert_vertex(contour, edge, cursor) {
                    warn!("Could not promote midpoint: {}", err);
                    return;
                }
                debug!("Promoted midpoint of edge {} in contour {}", edge, contour);
                (Shape::Outline(outline), None)
            }
            (PointRole::SegmentMidpoint, Shape::Segment(seg)) => {
                let (edited, spawned) = seg.split_at(cursor);
                debug!("Split segment at {}", cursor);
                (Shape::Segment(edited), Some(Shape::Segment(spawned)))
            }
            _ => return,
        };

        self.points = PointSet::build(&shape);
        session.index = match role {
            PointRole::Midpoint { contour, edge } => self
                .points
                .index_of_vertex(contour, edge + 1)
                .unwrap_or(session.index),
            // the new vertex is the end of the edited half
            _ => 1,
        };
        session.spawned = spawned;
        session.base_shape = shape.clone();
        self.shape = Some(shape);
    }

    fn reconstruct(&self, session: &DragSession, current: &Shape, role: PointRole, cursor: Point) -> Shape {
        match (&session.base_shape, current, role) {
            (Shape::Arc(base), Shape::Arc(current), role) => {
                let Some(handle) = ArcHandle::from_role(role) else {
                    return Shape::Arc(*current);
                };
                let reconstructor = ArcReconstructor::new(self.arc_mode, ArcLimits::from(&self.settings));
                Shape::Arc(reconstructor.reconstruct(base, current, handle, cursor))
            }
            (Shape::RectPad(base), _, PointRole::Corner(corner)) => {
                let mut corners = base.corners();
                corners[corner.index()] = cursor;
                let pinned = pin_edited_corner(corners, corner, base.hole.as_ref(), &PinLimits::from(&self.settings));
                let mut pad = *base;
                pad.set_corners(&pinned);
                Shape::RectPad(pad)
            }
            _ => {
                let mut points = self.points.clone();
                points.set_position(session.index, cursor);
                points.apply_to(current)
            }
        }
    }

    /// Finishes the drag. Outlines are validated first; an invalid outline
    /// is reverted and reported through `warnings`.
    pub fn end_drag(&mut self, commit: &mut dyn CommitSink, warnings: &mut dyn WarningSink) -> DragOutcome {
        let session = match std::mem::take(&mut self.state) {
            EditState::Dragging(session) => session,
            other => {
                self.state = other;
                trace!("end_drag ignored: not dragging");
                return DragOutcome::NotDragging;
            }
        };
        self.constraint = None;

        if !session.modified {
            return DragOutcome::Unchanged;
        }

        let Some(shape) = self.shape.clone() else {
            commit.revert();
            return DragOutcome::NotDragging;
        };

        if let Shape::Outline(outline) = &shape {
            if let Err(err) = validate_outline(outline) {
                warn!("Rejected outline edit: {}", err);
                self.restore(session.original_shape);
                commit.revert();
                warnings.show_warning(&err.to_string());
                return DragOutcome::Rejected(err);
            }
        }

        if let Some(spawned) = session.spawned {
            commit.add(spawned);
        }
        commit.push("Drag point", &shape);
        debug!("Committed drag of handle {}", session.index);
        DragOutcome::Committed
    }

    /// Abandons the drag and restores the shape it started from.
    pub fn cancel_drag(&mut self, commit: &mut dyn CommitSink) -> bool {
        let session = match std::mem::take(&mut self.state) {
            EditState::Dragging(session) => session,
            other => {
                self.state = other;
                return false;
            }
        };
        self.constraint = None;
        if session.modified {
            commit.revert();
        }
        debug!("Cancelled drag of handle {}", session.index);
        self.restore(session.original_shape);
        true
    }

    fn restore(&mut self, shape: Shape) {
        self.points = PointSet::build(&shape);
        self.shape = Some(shape);
    }

    /// Inserts a vertex at the cursor's projection onto the nearest edge, or
    /// splits a segment there.
    pub fn add_corner(
        &mut self,
        cursor: Point,
        tracker: &dyn SelectionTracker,
        commit: &mut dyn CommitSink,
        warnings: &mut dyn WarningSink,
    ) -> bool {
        let Some(shape) = self.editable_for_corners(tracker) else {
            return false;
        };
        let cursor = clamp_point(cursor, self.settings.coords_padding);

        match &shape {
            Shape::Outline(outline) => {
                let Some((contour, edge, at)) = outline.nearest_edge(cursor) else {
                    return false;
                };
                let mut edited = outline.clone();
                let checked = edited
                    .insert_vertex(contour, edge, at)
                    .and_then(|()| validate_outline(&edited));
                if let Err(err) = checked {
                    warn!("Cannot add corner at {}: {}", at, err);
                    warnings.show_warning(&err.to_string());
                    return false;
                }
                commit.modify(&shape);
                let edited = Shape::Outline(edited);
                commit.push("Add corner", &edited);
                self.restore(edited);
            }
            Shape::Segment(seg) => {
                let at = geom::nearest_on_segment(cursor.to_vector(), seg.start.to_vector(), seg.end.to_vector());
                let Some(at) = Point::from_vector(at) else {
                    return false;
                };
                if at == seg.start || at == seg.end {
                    return false;
                }
                let (first, second): (Segment, Segment) = seg.split_at(at);
                commit.modify(&shape);
                commit.add(Shape::Segment(second));
                let edited = Shape::Segment(first);
                commit.push("Split segment", &edited);
                self.restore(edited);
            }
            _ => return false,
        }

        self.state = EditState::Idle;
        true
    }

    /// Removes the hovered outline vertex.
    pub fn remove_corner(
        &mut self,
        tracker: &dyn SelectionTracker,
        commit: &mut dyn CommitSink,
        warnings: &mut dyn WarningSink,
    ) -> bool {
        let EditState::Hover { index } = self.state else {
            trace!("remove_corner needs a hovered vertex");
            return false;
        };
        let Some(Shape::Outline(outline)) = self.editable_for_corners(tracker) else {
            return false;
        };
        let Some((contour, vertex)) = self.points.locate(index) else {
            return false;
        };

        let mut edited = outline.clone();
        let checked = edited
            .remove_vertex(contour, vertex)
            .and_then(|()| validate_outline(&edited));
        if let Err(err) = checked {
            warn!("Cannot remove corner {} of contour {}: {}", vertex, contour, err);
            warnings.show_warning(&err.to_string());
            return false;
        }

        commit.modify(&Shape::Outline(outline));
        let edited = Shape::Outline(edited);
        commit.push("Remove corner", &edited);
        self.restore(edited);
        self.state = EditState::Idle;
        true
    }

    fn editable_for_corners(&self, tracker: &dyn SelectionTracker) -> Option<Shape> {
        if self.state.is_dragging() {
            trace!("Corner edit ignored: dragging");
            return None;
        }
        let shape = self.shape.as_ref()?;
        if !tracker.can_edit_corners(shape) {
            debug!("Corner edit not available for {:?}", shape.kind());
            return None;
        }
        Some(shape.clone())
    }

    fn hit(&self, cursor: Point) -> Option<usize> {
        let cursor = clamp_point(cursor, self.settings.coords_padding);
        self.points.find_point(cursor, self.settings.hover_tolerance)
    }

    /// Whether a handle is under the cursor.
    pub fn has_point(&self, cursor: Point) -> bool {
        self.hit(cursor).is_some()
    }

    /// Whether the handle under the cursor is a virtual midpoint.
    pub fn has_midpoint(&self, cursor: Point) -> bool {
        self.hit(cursor)
            .and_then(|i| self.points.get(i))
            .is_some_and(|p| p.role.is_virtual())
    }

    /// Whether the handle under the cursor is a removable outline vertex.
    pub fn has_corner(&self, cursor: Point) -> bool {
        self.hit(cursor)
            .and_then(|i| self.points.get(i))
            .is_some_and(|p| matches!(p.role, PointRole::Vertex { .. }))
    }
}
