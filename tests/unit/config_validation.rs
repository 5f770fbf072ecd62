//! Unit tests for routine validation.

use auto_routine::config::{parse_routine, validate_routine, Pose, TimingMode};
use auto_routine::error::{ConfigError, Error, FunctionError, PathError};
use auto_routine::RoutineBuilder;

/// Test validation of a valid routine.
#[test]
fn test_valid_routine_passes_validation() {
    let routine = RoutineBuilder::new()
        .default_templates()
        .start(Pose::new(84.0, 132.0, 315.0))
        .point(84.0, 132.0)
        .function("park", Pose::new(84.0, 132.0, 0.0), TimingMode::WaitTill)
        .build()
        .expect("routine should build");

    assert!(validate_routine(&routine).is_ok());
}

/// Test validation fails for a function naming an unregistered template.
#[test]
fn test_function_invalid_template_reference() {
    let toml_str = r#"
start = { x = 0.0, y = 0.0 }
path = [{ x = 0.0, y = 0.0 }]

[[functions]]
name = "nonexistent_action"
x = 0.0
y = 0.0
"#;

    let result = parse_routine(toml_str);
    assert!(matches!(
        result,
        Err(Error::Function(FunctionError::UnknownTemplate { index: 0, .. }))
    ));
}

/// Test validation fails for duplicate template names.
#[test]
fn test_duplicate_templates() {
    let toml_str = r#"
templates = ["intake", "score", "intake"]
start = { x = 0.0, y = 0.0 }
path = [{ x = 0.0, y = 0.0 }]
"#;

    match parse_routine(toml_str) {
        Err(Error::Config(ConfigError::DuplicateTemplate(name))) => {
            assert_eq!(name.as_str(), "intake")
        }
        other => panic!("expected duplicate template, got {:?}", other),
    }
}

/// Test validation fails for non-finite coordinates.
#[test]
fn test_non_finite_path() {
    let toml_str = r#"
start = { x = 0.0, y = 0.0 }
path = [{ x = 0.0, y = 0.0 }, { x = nan, y = 0.0 }]
"#;

    assert_eq!(
        parse_routine(toml_str),
        Err(Error::Config(ConfigError::NonFinite("path")))
    );
}

/// Test validation fails for an infinite function heading.
#[test]
fn test_non_finite_function_pose() {
    let toml_str = r#"
start = { x = 0.0, y = 0.0 }
path = [{ x = 0.0, y = 0.0 }]

[[functions]]
name = "park"
x = 0.0
y = 0.0
rotation = inf
"#;

    assert_eq!(
        parse_routine(toml_str),
        Err(Error::Config(ConfigError::NonFinite("function pose")))
    );
}

/// Test the path-start policy rejects a start pose away from the first waypoint.
#[test]
fn test_path_start_policy() {
    let toml_str = r#"
start_policy = "path_start"
start = { x = 84.0, y = 132.0, rotation = 315.0 }
path = [{ x = 84.0, y = 120.0 }]
"#;

    match parse_routine(toml_str) {
        Err(Error::Path(PathError::StartOffPath { distance })) => {
            assert!((distance - 12.0).abs() < 1e-9)
        }
        other => panic!("expected start off path, got {:?}", other),
    }
}
