//! Error handling for boardedit
//!
//! Provides error types for every layer of the point editor:
//! - Geometry errors (degenerate constructions, recovered by fallback)
//! - Outline errors (invalid polygons, recovered by rejecting the edit)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised by the reconstruction routines when a construction would produce
/// a degenerate or unrepresentable shape. Callers recover by keeping the
/// last valid geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Radius collapsed below the usable minimum
    #[error("Arc radius {radius:.1} is below the minimum {min}")]
    DegenerateRadius {
        /// The radius that was computed.
        radius: f64,
        /// The configured minimum.
        min: i32,
    },

    /// Arc span collapsed to nothing or a full turn
    #[error("Arc span is degenerate")]
    DegenerateSweep,

    /// Points that must not be collinear are collinear
    #[error("Points are collinear; arc would be a straight segment")]
    Collinear,

    /// Two points that must differ coincide
    #[error("Coincident points: {what}")]
    CoincidentPoints {
        /// Which points coincide.
        what: &'static str,
    },

    /// A constructed coordinate left the safe domain
    #[error("Constructed geometry is outside the coordinate range")]
    OutOfRange,
}

/// Outline error type
///
/// Describes why an edited polygon outline was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutlineError {
    /// A contour has fewer than three vertices
    #[error("Contour {contour} has {count} vertices; at least 3 are required")]
    TooFewVertices {
        /// The contour index (0 is the outer boundary).
        contour: usize,
        /// The number of vertices it has.
        count: usize,
    },

    /// Two consecutive vertices coincide
    #[error("Contour {contour} has a zero-length edge at vertex {vertex}")]
    DegenerateEdge {
        /// The contour index.
        contour: usize,
        /// The vertex starting the empty edge.
        vertex: usize,
    },

    /// Edges of one contour cross each other
    #[error("Contour {contour} intersects itself")]
    SelfIntersection {
        /// The contour index.
        contour: usize,
    },

    /// Edges of two different contours cross
    #[error("Contours {first} and {second} cross each other")]
    ContourCrossing {
        /// The lower contour index.
        first: usize,
        /// The higher contour index.
        second: usize,
    },

    /// A contour or vertex index does not exist
    #[error("No contour {contour} / vertex {vertex} in outline")]
    InvalidIndex {
        /// The requested contour.
        contour: usize,
        /// The requested vertex.
        vertex: usize,
    },
}

/// Main error type for boardedit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Outline error
    #[error(transparent)]
    Outline(#[from] OutlineError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is an outline error
    pub fn is_outline_error(&self) -> bool {
        matches!(self, Error::Outline(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
