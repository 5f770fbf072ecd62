//! Example: Routine summary.
//!
//! This example demonstrates how to:
//! - Load a routine from TOML, or fall back to the built-in sample
//! - Walk the path, start pose and function records the way an executor would
//! - Anchor each function to its nearest waypoint
//!
//! Run with: `cargo run --example routine_summary -- routines/sample.toml`

use auto_routine::{load_routine, sample_routine, ActionCategory, Result, RoutineConfig};

fn main() -> Result<()> {
    println!("=== Autonomous Routine Summary ===\n");

    let routine: RoutineConfig = match std::env::args().nth(1) {
        Some(file) => {
            println!("Loading {}", file);
            load_routine(&file)?
        }
        None => {
            println!("No file given, using the built-in sample routine");
            sample_routine()?
        }
    };
    println!();

    let start = routine.start_position();
    println!(
        "Start: ({}, {}) @ {}° [{:?}]",
        start.x.value(),
        start.y.value(),
        start.heading.normalized().value(),
        routine.start_policy()
    );
    println!();

    println!("Path ({} waypoints, {:.1} in):", routine.path().len(), routine.path_length().value());
    for (i, point) in routine.path().iter().enumerate() {
        println!("  {:>2}. ({}, {})", i, point.x.value(), point.y.value());
    }
    println!();

    println!("Functions:");
    for record in routine.functions() {
        let mode = if record.category == ActionCategory::RotateOnly {
            "turn in place"
        } else if record.blocks_motion() {
            "wait till done"
        } else {
            "run while moving"
        };
        let anchor = routine
            .anchor(record)
            .map(|(i, d)| format!("waypoint {} ({:.1} in away)", i, d.value()))
            .unwrap_or_else(|| "no waypoint".to_string());

        println!(
            "  - {} at ({}, {}) @ {}°, {} → {}",
            record.name,
            record.target_pose.x.value(),
            record.target_pose.y.value(),
            record.target_pose.heading.value(),
            mode,
            anchor
        );
    }
    println!();

    print!("Templates: ");
    for (i, name) in routine.templates().names().enumerate() {
        if i > 0 {
            print!(", ");
        }
        print!("{}", name);
    }
    println!();

    println!("\n=== Summary Complete ===");

    Ok(())
}
