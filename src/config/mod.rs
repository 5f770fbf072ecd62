//! Configuration module for auto-routine.
//!
//! Provides the routine data types and loads them from TOML files (with the
//! `std` feature), the path planner's JSON pair (with the `json` feature), or
//! pre-parsed data.

mod function;
mod point;
mod policy;
mod routine;
pub mod units;
#[cfg(feature = "std")]
mod loader;
#[cfg(feature = "json")]
mod json;
mod validation;

pub use function::{name, ActionCategory, FunctionRecord, Name, TimingMode, NAME_CAPACITY, ROTATION_NAME};
pub use point::{PathPoint, Pose};
pub use policy::{StartPolicy, START_TOLERANCE};
pub use routine::{RoutineConfig, MAX_FUNCTIONS, MAX_PATH_POINTS};
pub use validation::validate_routine;

#[cfg(feature = "std")]
pub use loader::{load_routine, parse_routine};

#[cfg(feature = "json")]
pub use json::{companion_file, load_routine_json, load_routine_json_pair, parse_routine_json};

// Re-export unit types at config level
pub use units::{Degrees, Inches, UnitExt};
