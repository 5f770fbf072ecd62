//! Routine module for auto-routine.
//!
//! Provides template storage, programmatic routine building, and the
//! built-in routines.

mod builder;
mod builtin;
mod registry;

pub use builder::RoutineBuilder;
pub use builtin::sample_routine;
pub use registry::{TemplateRegistry, DEFAULT_TEMPLATES, MAX_TEMPLATES};
