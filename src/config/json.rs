//! Path planner JSON format (`json` feature).
//!
//! The path planning tool saves a routine as two files side by side:
//! `path.json` with the waypoints, and `functions.json` with the function
//! records, templates and start pose.

use std::path::{Path, PathBuf};

use heapless::Vec;
use serde::Deserialize;

use crate::error::{truncated, ConfigError, Error, Result};
use crate::routine::TemplateRegistry;

use super::loader::read_file;
use super::{FunctionRecord, PathPoint, Pose, RoutineConfig, StartPolicy};
use super::{MAX_FUNCTIONS, MAX_PATH_POINTS};

#[derive(Deserialize)]
struct PathDocument {
    #[serde(default)]
    path: Vec<PathPoint, MAX_PATH_POINTS>,
}

#[derive(Deserialize)]
struct FunctionsDocument {
    #[serde(default)]
    functions: Vec<FunctionRecord, MAX_FUNCTIONS>,
    #[serde(default)]
    templates: Option<TemplateRegistry>,
    #[serde(default)]
    start_pos: Option<Pose>,
}

fn parse_error(e: serde_json::Error) -> Error {
    Error::Config(ConfigError::Parse(truncated(&e.to_string())))
}

/// Parse a routine from the contents of a path document and a functions
/// document.
///
/// Missing templates fall back to the defaults; a missing start pose is an
/// error.
///
/// # Errors
///
/// Returns an error if either document is invalid JSON or the routine fails
/// validation.
pub fn parse_routine_json(path_doc: &str, functions_doc: &str) -> Result<RoutineConfig> {
    let path: PathDocument = serde_json::from_str(path_doc).map_err(parse_error)?;
    let functions: FunctionsDocument = serde_json::from_str(functions_doc).map_err(parse_error)?;

    let start = functions
        .start_pos
        .ok_or(Error::Config(ConfigError::MissingStartPose))?;

    RoutineConfig::from_parts(
        path.path,
        start,
        functions.functions,
        functions
            .templates
            .unwrap_or_else(TemplateRegistry::with_defaults),
        StartPolicy::Independent,
    )
}

/// Load a routine from a path file and a functions file.
///
/// # Errors
///
/// Returns an error if either file cannot be read or parsed, or the routine
/// fails validation.
pub fn load_routine_json<P: AsRef<Path>, Q: AsRef<Path>>(
    path_file: P,
    functions_file: Q,
) -> Result<RoutineConfig> {
    let path_doc = read_file(path_file.as_ref())?;
    let functions_doc = read_file(functions_file.as_ref())?;

    let routine = parse_routine_json(&path_doc, &functions_doc)?;
    info!(
        "loaded routine pair {} + {}: {} waypoints, {} functions",
        path_file.as_ref().to_str().unwrap_or("<non-utf8 path>"),
        functions_file.as_ref().to_str().unwrap_or("<non-utf8 path>"),
        routine.path().len(),
        routine.functions().len()
    );

    Ok(routine)
}

/// Load a routine from either file of a pair, locating the other with
/// [`companion_file`].
///
/// # Errors
///
/// Returns an error if the file name names neither half of a pair, or
/// loading fails.
pub fn load_routine_json_pair<P: AsRef<Path>>(file: P) -> Result<RoutineConfig> {
    let file = file.as_ref();
    let companion = companion_file(file).ok_or_else(|| {
        let name = file.to_str().unwrap_or("<non-utf8 path>");
        warn!("no companion file for {}", name);
        Error::Config(ConfigError::NoCompanion(truncated(name)))
    })?;

    if file_name(file).contains("path") {
        load_routine_json(file, companion)
    } else {
        load_routine_json(companion, file)
    }
}

/// The other half of a path/functions file pair.
///
/// `path.json` pairs with `functions.json`, `red_path_2.json` with
/// `red_functions_2.json`, and the reverse. Returns `None` when the file name
/// contains neither `path` nor `functions`.
pub fn companion_file(file: &Path) -> Option<PathBuf> {
    let name = file_name(file);
    let companion = if name.contains("path") {
        name.replace("path", "functions")
    } else if name.contains("functions") {
        name.replace("functions", "path")
    } else {
        return None;
    };

    Some(file.with_file_name(companion))
}

fn file_name(file: &Path) -> &str {
    file.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ActionCategory, TimingMode};
    use crate::error::{FunctionError, PathError};

    const PATH_DOC: &str = r#"{ "path": [ { "x": 84, "y": 132 }, { "x": 84, "y": 120 } ] }"#;

    #[test]
    fn test_parse_pair() {
        let functions_doc = r#"{
            "functions": [
                { "name": "score", "x": 84, "y": 120, "rotation": 315,
                  "type": "wait_till", "action": "function" }
            ],
            "templates": ["intake", "outtake", "score", "park"],
            "start_pos": { "x": 84, "y": 132, "rotation": 315 }
        }"#;

        let routine = parse_routine_json(PATH_DOC, functions_doc).unwrap();
        assert_eq!(routine.path().len(), 2);
        assert_eq!(routine.functions()[0].timing_mode, TimingMode::WaitTill);
        assert_eq!(routine.start_position(), Pose::new(84.0, 132.0, 315.0));
    }

    #[test]
    fn test_parse_rotation_point() {
        let functions_doc = r#"{
            "functions": [
                { "name": "rotate", "x": 84, "y": 120, "rotation": 90,
                  "type": "wait_till", "action": "rotate_only" },
                { "name": "score", "x": 84, "y": 120, "rotation": 90,
                  "type": "wait_till", "action": "function" }
            ],
            "templates": ["intake", "outtake", "score", "park"],
            "start_pos": { "x": 84, "y": 132, "rotation": 315 }
        }"#;

        let routine = parse_routine_json(PATH_DOC, functions_doc).unwrap();
        let rotate = &routine.functions()[0];
        assert_eq!(rotate.category, ActionCategory::RotateOnly);
        assert_eq!(rotate.target_pose, Pose::new(84.0, 120.0, 90.0));
        assert!(rotate.blocks_motion());
        assert_eq!(routine.functions()[1].category, ActionCategory::Function);
    }

    #[test]
    fn test_rotate_name_as_function_rejected() {
        let functions_doc = r#"{
            "functions": [
                { "name": "rotate", "x": 84, "y": 120, "rotation": 90,
                  "type": "wait_till", "action": "function" }
            ],
            "start_pos": { "x": 84, "y": 132, "rotation": 315 }
        }"#;

        assert!(matches!(
            parse_routine_json(PATH_DOC, functions_doc),
            Err(Error::Function(FunctionError::UnknownTemplate { index: 0, .. }))
        ));
    }

    #[test]
    fn test_pair_without_companion() {
        match load_routine_json_pair("autos/routine.json") {
            Err(Error::Config(ConfigError::NoCompanion(file))) => {
                assert_eq!(file.as_str(), "autos/routine.json");
            }
            other => panic!("expected missing companion, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_start_pose() {
        let functions_doc = r#"{ "functions": [] }"#;
        assert_eq!(
            parse_routine_json(PATH_DOC, functions_doc),
            Err(Error::Config(ConfigError::MissingStartPose))
        );
    }

    #[test]
    fn test_missing_templates_use_defaults() {
        let functions_doc = r#"{ "start_pos": { "x": 0, "y": 0, "rotation": 0 } }"#;
        let routine = parse_routine_json(PATH_DOC, functions_doc).unwrap();
        assert_eq!(routine.templates(), &TemplateRegistry::with_defaults());
    }

    #[test]
    fn test_missing_path_is_empty() {
        let functions_doc = r#"{ "start_pos": { "x": 0, "y": 0, "rotation": 0 } }"#;
        assert_eq!(
            parse_routine_json("{}", functions_doc),
            Err(Error::Path(PathError::Empty))
        );
    }

    #[test]
    fn test_companion_file() {
        assert_eq!(
            companion_file(Path::new("autos/path.json")),
            Some(PathBuf::from("autos/functions.json"))
        );
        assert_eq!(
            companion_file(Path::new("red_functions_2.json")),
            Some(PathBuf::from("red_path_2.json"))
        );
        assert_eq!(companion_file(Path::new("routine.json")), None);
    }
}
