//! Start pose policy.

use serde::Deserialize;

use super::point::{PathPoint, Pose};

/// Distance in inches under which a start pose counts as on the first waypoint.
pub const START_TOLERANCE: f64 = 1e-6;

/// How the start pose relates to the first path waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum StartPolicy {
    /// Start pose is independent data.
    #[default]
    Independent,
    /// Start pose must sit on the first waypoint.
    PathStart,
}

impl StartPolicy {
    /// Check a start pose against the first waypoint.
    ///
    /// Returns `None` if the pose is acceptable, or the offending distance.
    pub fn check(self, start: &Pose, first: &PathPoint) -> Option<f64> {
        match self {
            StartPolicy::Independent => None,
            StartPolicy::PathStart => {
                let distance = start.position().distance_to(first).value();
                if distance <= START_TOLERANCE {
                    None
                } else {
                    Some(distance)
                }
            }
        }
    }
}
