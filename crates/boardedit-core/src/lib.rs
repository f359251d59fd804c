//! # boardedit core
//!
//! Core types shared by the point-editing engine and its settings:
//! integer board coordinates, the safe coordinate domain, edit-mode
//! preferences, and the error types for every layer.

pub mod coords;
pub mod error;
pub mod modes;
pub mod point;

pub use coords::{clamp_point, clamp_vector, in_safe_range, safe_bounds, COORDS_PADDING};
pub use error::{Error, GeometryError, OutlineError, Result};
pub use modes::{ArcEditMode, ConstraintMode};
pub use point::Point;
