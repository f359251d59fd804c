//! # boardedit editor
//!
//! The geometry engine behind on-canvas point editing of board shapes.
//! When a shape is selected the editor lays out a set of draggable handles
//! for it; dragging one handle recomputes the shape under the constraints of
//! its kind.
//!
//! ## Architecture
//!
//! ```text
//! PointEditor (controller, hover/drag state machine)
//!   ├── PointSet (handles for the selected shape)
//!   │     └── outline builder (flattened polygon contours)
//!   ├── Constraint (45° / line snapping while a modifier is held)
//!   ├── ArcReconstructor (five arc algorithms + translate)
//!   ├── pin_edited_corner (rectangle pads with holes)
//!   └── validate_outline (rejects broken polygons before commit)
//! ```
//!
//! The host supplies the collaborators in [`host`]: a commit sink for undo
//! transactions, a warning sink, and a selection tracker that knows about
//! locked items.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boardedit_editor::{PointEditor, Shape, Segment};
//!
//! let mut editor = PointEditor::new(settings);
//! editor.select(Some(Shape::Segment(Segment::new(a, b))));
//! editor.pointer_moved(a);
//! editor.begin_drag(a);
//! editor.drag_to(cursor, false, &mut commit);
//! editor.end_drag(&mut commit, &mut warnings);
//! ```

pub mod arc_edit;
pub mod constraint;
pub mod controller;
pub mod corner_pin;
pub mod geom;
pub mod host;
pub mod model;
pub mod outline;
pub mod points;

pub use arc_edit::{ArcHandle, ArcLimits, ArcReconstructor};
pub use constraint::{compute_constrainer, partner_for, Constraint};
pub use controller::{DragOutcome, DragSession, EditState, PointEditor};
pub use corner_pin::{pin_edited_corner, PinLimits};
pub use host::{
    CommitSink, ModifierState, RecordingCommit, RecordingWarnings, SelectionTracker, Unlocked,
    WarningSink,
};
pub use model::{Arc, Hole, PolygonOutline, RectCorner, RectPad, Segment, Shape, ShapeKind};
pub use outline::{is_valid_outline, validate_outline};
pub use points::{EditPoint, PointRole, PointSet};

pub use boardedit_core::{ArcEditMode, ConstraintMode, GeometryError, OutlineError, Point};
