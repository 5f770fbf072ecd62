//! Built-in routines.

use crate::config::{Pose, RoutineConfig, TimingMode};
use crate::error::Result;

use super::RoutineBuilder;

/// The sample routine: score the preload, sweep two samples, return.
///
/// Starts at (84, 132) facing 315 degrees.
pub fn sample_routine() -> Result<RoutineConfig> {
    RoutineBuilder::new()
        .default_templates()
        .start(Pose::new(84.0, 132.0, 315.0))
        .point(84.0, 132.0)
        .point(84.0, 120.0)
        .point(84.0, 108.0)
        .point(104.0, 108.0)
        .point(132.0, 108.0)
        .point(104.0, 120.0)
        .point(84.0, 120.0)
        .function("score", Pose::new(84.0, 120.0, 315.0), TimingMode::WaitTill)
        .function("intake", Pose::new(104.0, 108.0, 0.0), TimingMode::RunWhileMoving)
        .function("intake", Pose::new(132.0, 108.0, 0.0), TimingMode::RunWhileMoving)
        .build()
}
