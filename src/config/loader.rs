//! Routine loading from TOML files (std only).

use std::fs;
use std::path::Path;

use crate::error::{truncated, ConfigError, Error, Result};

use super::routine::RoutineFile;
use super::RoutineConfig;

/// Load a routine from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
///
/// # Example
///
/// ```rust,ignore
/// use auto_routine::load_routine;
///
/// let routine = load_routine("routines/sample.toml")?;
/// ```
pub fn load_routine<P: AsRef<Path>>(path: P) -> Result<RoutineConfig> {
    let path = path.as_ref();
    let content = read_file(path)?;

    let routine = parse_routine(&content)?;
    info!(
        "loaded routine {}: {} waypoints, {} functions",
        path.to_str().unwrap_or("<non-utf8 path>"),
        routine.path().len(),
        routine.functions().len()
    );

    Ok(routine)
}

/// Parse a routine from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_routine(content: &str) -> Result<RoutineConfig> {
    let file: RoutineFile = toml::from_str(content)
        .map_err(|e| Error::Config(ConfigError::Parse(truncated(e.message()))))?;

    // Validate the routine
    file.into_routine()
}

pub(crate) fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        warn!(
            "cannot read {}",
            path.to_str().unwrap_or("<non-utf8 path>")
        );
        Error::Config(ConfigError::Io(truncated(&e.to_string())))
    })
}
