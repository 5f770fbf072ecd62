//! Routine validation.

use crate::error::{ConfigError, Error, FunctionError, PathError, Result};

use super::RoutineConfig;

/// Validate a routine.
///
/// Checks:
/// - The path has at least one waypoint
/// - Every coordinate and heading is finite
/// - Template names are unique
/// - Every function record names a registered template, rotation points aside
/// - The start pose sits on the first waypoint when the start policy asks for it
pub fn validate_routine(routine: &RoutineConfig) -> Result<()> {
    let first = routine
        .path()
        .first()
        .ok_or(Error::Path(PathError::Empty))?;

    if !routine.path().iter().all(|p| p.is_finite()) {
        return Err(Error::Config(ConfigError::NonFinite("path")));
    }

    if !routine.start_position().is_finite() {
        return Err(Error::Config(ConfigError::NonFinite("start pose")));
    }

    if !routine.functions().iter().all(|f| f.target_pose.is_finite()) {
        return Err(Error::Config(ConfigError::NonFinite("function pose")));
    }

    if let Some(duplicate) = routine.templates().first_duplicate() {
        return Err(Error::Config(ConfigError::DuplicateTemplate(
            crate::error::truncated(duplicate),
        )));
    }

    for (index, function) in routine.functions().iter().enumerate() {
        if function.category.requires_template()
            && !routine.templates().contains(function.name.as_str())
        {
            warn!("function #{} names unknown template {}", index, function.name.as_str());
            return Err(Error::Function(FunctionError::UnknownTemplate {
                index,
                name: function.name.clone(),
            }));
        }
    }

    if let Some(distance) = routine
        .start_policy()
        .check(&routine.start_position(), first)
    {
        return Err(Error::Path(PathError::StartOffPath { distance }));
    }

    trace!(
        "routine valid: {} waypoints, {} functions",
        routine.path().len(),
        routine.functions().len()
    );

    Ok(())
}
