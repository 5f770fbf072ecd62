//! # auto-routine
//!
//! Configuration-driven autonomous routine data for competition robots.
//!
//! A routine is a fixed description an autonomous executor reads before and
//! during a match:
//!
//! - an ordered path of field waypoints,
//! - the start pose,
//! - function records: named actions (`score`, `intake`, ...) triggered at a
//!   target pose, either blocking motion or running while moving,
//! - the templates those action names come from.
//!
//! ## Features
//!
//! - **Configuration-driven**: Define routines in TOML files
//! - **Validated on construction**: Every routine is checked once, then read-only
//! - **no_std compatible**: Core library works without standard library
//! - **Planner compatible**: Reads the path planner's `path.json`/`functions.json` pair
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use auto_routine::{load_routine, RoutineConfig};
//!
//! // Load a routine from TOML
//! let routine: RoutineConfig = auto_routine::load_routine("routines/sample.toml")?;
//!
//! // Hand it to the executor by reference
//! executor.reset_pose(routine.start_position());
//! for record in routine.functions() {
//!     if record.blocks_motion() { /* stop, run, resume */ }
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `json`: Enables the path planner's JSON file pair
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Enables `log` facade logging for hosted targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// This must go first so the logging macros are visible to every module
#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod routine;

// Re-exports for ergonomic API
pub use config::{
    validate_routine, ActionCategory, FunctionRecord, PathPoint, Pose, RoutineConfig,
    StartPolicy, TimingMode,
};
pub use error::{Error, Result};
pub use routine::{sample_routine, RoutineBuilder, TemplateRegistry};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_routine, parse_routine};

#[cfg(feature = "json")]
pub use config::{load_routine_json, load_routine_json_pair, parse_routine_json};

// Unit types
pub use config::units::{Degrees, Inches};
