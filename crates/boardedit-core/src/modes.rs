//! User-selectable editing policies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which invariant an arc drag preserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcEditMode {
    /// Endpoint drags keep the tangent at the other end; mid and center
    /// drags keep both endpoints.
    KeepEndpointsOrTangent,
    /// The center stays put; endpoints slide around the circle and a mid
    /// drag rotates the whole arc.
    KeepCenter,
}

impl ArcEditMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::KeepEndpointsOrTangent => Self::KeepCenter,
            Self::KeepCenter => Self::KeepEndpointsOrTangent,
        }
    }
}

impl Default for ArcEditMode {
    fn default() -> Self {
        Self::KeepEndpointsOrTangent
    }
}

impl fmt::Display for ArcEditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeepEndpointsOrTangent => write!(f, "Keep endpoints / tangent"),
            Self::KeepCenter => write!(f, "Keep center"),
        }
    }
}

impl FromStr for ArcEditMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep_endpoints_or_tangent" | "keep_endpoints" | "keep_tangent" => {
                Ok(Self::KeepEndpointsOrTangent)
            }
            "keep_center" => Ok(Self::KeepCenter),
            _ => Err(format!("Unknown arc edit mode: {}", s)),
        }
    }
}

/// How the alternate (modifier-held) constraint snaps a dragged point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintMode {
    /// Snap onto the nearest of the 8 axis/diagonal rays from the partner.
    FortyFive,
    /// Slide along the nearest of the 0°, 45°, 90° and 135° lines through the
    /// partner, passing through it if needed.
    Line,
}

impl Default for ConstraintMode {
    fn default() -> Self {
        Self::FortyFive
    }
}

impl fmt::Display for ConstraintMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FortyFive => write!(f, "45°"),
            Self::Line => write!(f, "Line"),
        }
    }
}
