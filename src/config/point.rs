//! Waypoints and poses in field coordinates.

use serde::Deserialize;

use super::units::{Degrees, Inches};

/// One waypoint of the planned path.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PathPoint {
    /// X coordinate.
    pub x: Inches,
    /// Y coordinate.
    pub y: Inches,
}

impl PathPoint {
    /// Create a waypoint from raw inch values.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x: Inches(x),
            y: Inches(y),
        }
    }

    /// Straight-line distance to another point.
    pub fn distance_to(&self, other: &PathPoint) -> Inches {
        Inches(libm::hypot(other.x.0 - self.x.0, other.y.0 - self.y.0))
    }

    /// Check both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Robot position plus heading.
///
/// Written as `{ x, y, rotation }` in routine files.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pose {
    /// X coordinate.
    pub x: Inches,
    /// Y coordinate.
    pub y: Inches,
    /// Heading in degrees.
    #[serde(rename = "rotation", default)]
    pub heading: Degrees,
}

impl Pose {
    /// Create a pose from raw inch and degree values.
    #[inline]
    pub const fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            x: Inches(x),
            y: Inches(y),
            heading: Degrees(heading),
        }
    }

    /// Position part of the pose.
    #[inline]
    pub const fn position(&self) -> PathPoint {
        PathPoint {
            x: self.x,
            y: self.y,
        }
    }

    /// Same position with the heading wrapped into `[0, 360)`.
    pub fn normalized(&self) -> Self {
        Self {
            heading: self.heading.normalized(),
            ..*self
        }
    }

    /// Check all three fields are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.heading.is_finite()
    }
}
