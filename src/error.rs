//! Error types for auto-routine.
//!
//! Provides unified error handling across configuration loading, path checks,
//! and function record checks.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all auto-routine operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Path waypoint error
    Path(PathError),
    /// Function record error
    Function(FunctionError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse a routine document
    Parse(heapless::String<128>),
    /// Routine has no start pose
    MissingStartPose,
    /// Template listed more than once
    DuplicateTemplate(heapless::String<32>),
    /// Name longer than the fixed name capacity
    NameTooLong {
        /// Length of the rejected name in bytes
        len: usize,
        /// Maximum length in bytes
        max: usize,
    },
    /// NaN or infinite coordinate or heading
    NonFinite(&'static str),
    /// Fixed-capacity collection is full
    CapacityExceeded {
        /// Collection that overflowed
        what: &'static str,
        /// Its capacity
        max: usize,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    Io(heapless::String<128>),
    /// File name names neither half of a path/functions pair (std only)
    #[cfg(feature = "std")]
    NoCompanion(heapless::String<128>),
}

/// Path-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// Path has no waypoints
    Empty,
    /// Start pose is not on the first waypoint
    StartOffPath {
        /// Distance from the start pose to the first waypoint, in inches
        distance: f64,
    },
}

/// Function record errors.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionError {
    /// Function record names a template that is not registered
    UnknownTemplate {
        /// Position of the record in the function list
        index: usize,
        /// The unregistered name
        name: heapless::String<32>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Path(e) => write!(f, "Path error: {}", e),
            Error::Function(e) => write!(f, "Function error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MissingStartPose => write!(f, "Start pose is not set"),
            ConfigError::DuplicateTemplate(name) => write!(f, "Duplicate template: '{}'", name),
            ConfigError::NameTooLong { len, max } => {
                write!(f, "Name of {} bytes exceeds maximum of {}", len, max)
            }
            ConfigError::NonFinite(field) => write!(f, "Non-finite value in {}", field),
            ConfigError::CapacityExceeded { what, max } => {
                write!(f, "Too many {} (max {})", what, max)
            }
            #[cfg(feature = "std")]
            ConfigError::Io(msg) => write!(f, "I/O error: {}", msg),
            #[cfg(feature = "std")]
            ConfigError::NoCompanion(file) => write!(f, "No companion file for {}", file),
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Empty => write!(f, "Path has no waypoints"),
            PathError::StartOffPath { distance } => {
                write!(f, "Start pose is {} in from the first waypoint", distance)
            }
        }
    }
}

impl fmt::Display for FunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionError::UnknownTemplate { index, name } => {
                write!(f, "Function #{} uses unknown template '{}'", index, name)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<PathError> for Error {
    fn from(e: PathError) -> Self {
        Error::Path(e)
    }
}

impl From<FunctionError> for Error {
    fn from(e: FunctionError) -> Self {
        Error::Function(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for PathError {}

#[cfg(feature = "std")]
impl std::error::Error for FunctionError {}

/// Copy `s` into a fixed-capacity string, dropping whatever does not fit.
pub(crate) fn truncated<const N: usize>(s: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
