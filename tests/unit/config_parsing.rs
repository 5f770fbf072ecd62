//! Unit tests for TOML routine parsing.

use auto_routine::config::{parse_routine, ActionCategory, RoutineConfig, StartPolicy, TimingMode};

/// Test parsing a routine with every key written out.
#[test]
fn test_parse_full_routine() {
    let toml_str = r#"
templates = ["intake", "score"]
start_policy = "path_start"
start = { x = 12.0, y = 36.0, rotation = 90.0 }
path = [{ x = 12.0, y = 36.0 }, { x = 36.0, y = 36.0 }]

[[functions]]
name = "intake"
x = 36.0
y = 36.0
rotation = 180.0
type = "run_while_moving"
action = "function"
"#;

    let routine = parse_routine(toml_str).expect("Failed to parse TOML");

    assert_eq!(routine.start_policy(), StartPolicy::PathStart);
    assert_eq!(routine.start_position().heading.value(), 90.0);
    assert_eq!(routine.path()[1].x.value(), 36.0);

    let intake = &routine.functions()[0];
    assert_eq!(intake.name.as_str(), "intake");
    assert_eq!(intake.target_pose.heading.value(), 180.0);
    assert_eq!(intake.timing_mode, TimingMode::RunWhileMoving);
    assert_eq!(intake.category, ActionCategory::Function);
    assert!(routine.templates().names().eq(["intake", "score"].into_iter()));
}

/// Test that rotation points parse without a matching template.
#[test]
fn test_parse_rotation_point() {
    let toml_str = r#"
templates = ["score"]
start = { x = 84.0, y = 132.0, rotation = 315.0 }
path = [{ x = 84.0, y = 132.0 }, { x = 84.0, y = 120.0 }]

[[functions]]
name = "rotate"
x = 84.0
y = 120.0
rotation = 90.0
type = "wait_till"
action = "rotate_only"
"#;

    let routine: RoutineConfig = toml::from_str(toml_str).expect("rotation point should validate");
    let rotate = &routine.functions()[0];
    assert_eq!(rotate.category, ActionCategory::RotateOnly);
    assert!(rotate.blocks_motion());
    assert!(!routine.templates().contains("rotate"));
}

/// Test that deserializing straight through serde also validates.
#[test]
fn test_serde_deserialize_validates() {
    let toml_str = r#"
templates = ["park"]
start = { x = 0.0, y = 0.0 }
path = [{ x = 0.0, y = 0.0 }]

[[functions]]
name = "score"
x = 0.0
y = 0.0
"#;

    let result: Result<RoutineConfig, _> = toml::from_str(toml_str);
    let err = result.expect_err("unknown template should be rejected");
    assert!(err.to_string().contains("unknown template 'score'"));
}

/// Test that a template name over the name capacity is rejected while parsing.
#[test]
fn test_long_template_rejected() {
    let toml_str = r#"
templates = ["a_template_name_that_is_far_too_long_to_store"]
start = { x = 0.0, y = 0.0 }
path = [{ x = 0.0, y = 0.0 }]
"#;

    assert!(parse_routine(toml_str).is_err());
}

/// Test that an unknown timing mode is a parse error.
#[test]
fn test_unknown_timing_mode_rejected() {
    let toml_str = r#"
start = { x = 0.0, y = 0.0 }
path = [{ x = 0.0, y = 0.0 }]

[[functions]]
name = "park"
x = 0.0
y = 0.0
type = "whenever"
"#;

    assert!(parse_routine(toml_str).is_err());
}

/// Test that a missing start pose is a parse error.
#[test]
fn test_missing_start_rejected() {
    let toml_str = r#"
path = [{ x = 0.0, y = 0.0 }]
"#;

    assert!(parse_routine(toml_str).is_err());
}
