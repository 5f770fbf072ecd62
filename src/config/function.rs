//! Function records: named actions triggered along the path.

use heapless::String;
use serde::Deserialize;

use super::point::Pose;
use super::units::{Degrees, Inches};
use crate::error::{ConfigError, Error, Result};

/// Name the planner gives every rotation point.
pub const ROTATION_NAME: &str = "rotate";

/// Maximum length of a function or template name in bytes.
pub const NAME_CAPACITY: usize = 32;

/// Fixed-capacity action name.
pub type Name = String<NAME_CAPACITY>;

/// Build a [`Name`], rejecting names longer than [`NAME_CAPACITY`].
pub fn name(value: &str) -> Result<Name> {
    Name::try_from(value).map_err(|_| {
        Error::Config(ConfigError::NameTooLong {
            len: value.len(),
            max: NAME_CAPACITY,
        })
    })
}

/// How an action is scheduled against path traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum TimingMode {
    /// Dispatch the action and keep driving.
    #[serde(alias = "RUN_WHILE_MOVING")]
    RunWhileMoving,
    /// Stop at the target pose until the action completes.
    #[default]
    #[serde(alias = "WAIT_TILL")]
    WaitTill,
}

impl TimingMode {
    /// Whether the executor must hold motion until the action finishes.
    #[inline]
    pub const fn blocks_motion(self) -> bool {
        matches!(self, TimingMode::WaitTill)
    }
}

/// Category of a triggered action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ActionCategory {
    /// A named robot function such as `intake` or `score`.
    #[default]
    #[serde(alias = "FUNCTION")]
    Function,
    /// Turn in place to the target heading. Named [`ROTATION_NAME`] and not
    /// bound to a template.
    #[serde(alias = "ROTATE_ONLY")]
    RotateOnly,
}

impl ActionCategory {
    /// Whether records of this category must name a registered template.
    #[inline]
    pub const fn requires_template(self) -> bool {
        !matches!(self, ActionCategory::RotateOnly)
    }
}

/// A named action with the pose it is triggered at.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "FunctionEntry")]
pub struct FunctionRecord {
    /// Action name; should match a registered template.
    pub name: Name,
    /// Pose at which the action fires.
    pub target_pose: Pose,
    /// Scheduling against motion.
    pub timing_mode: TimingMode,
    /// Action category.
    pub category: ActionCategory,
}

impl FunctionRecord {
    /// Create a `Function`-category record.
    ///
    /// # Errors
    ///
    /// Returns an error if the name exceeds [`NAME_CAPACITY`].
    pub fn new(action: &str, target_pose: Pose, timing_mode: TimingMode) -> Result<Self> {
        Ok(Self {
            name: name(action)?,
            target_pose,
            timing_mode,
            category: ActionCategory::Function,
        })
    }

    /// Create a rotation point: turn to `target_pose.heading` and wait.
    ///
    /// # Errors
    ///
    /// Never fails in practice; returns `Result` to match [`FunctionRecord::new`].
    pub fn rotation(target_pose: Pose) -> Result<Self> {
        Ok(Self {
            name: name(ROTATION_NAME)?,
            target_pose,
            timing_mode: TimingMode::WaitTill,
            category: ActionCategory::RotateOnly,
        })
    }

    /// Whether the executor must hold motion until this action finishes.
    #[inline]
    pub fn blocks_motion(&self) -> bool {
        self.timing_mode.blocks_motion()
    }
}

/// Flat on-disk shape of a function record.
#[derive(Deserialize)]
struct FunctionEntry {
    name: Name,
    x: Inches,
    y: Inches,
    #[serde(default)]
    rotation: Degrees,
    #[serde(default, rename = "type")]
    timing: TimingMode,
    #[serde(default)]
    action: ActionCategory,
}

impl From<FunctionEntry> for FunctionRecord {
    fn from(entry: FunctionEntry) -> Self {
        Self {
            name: entry.name,
            target_pose: Pose {
                x: entry.x,
                y: entry.y,
                heading: entry.rotation,
            },
            timing_mode: entry.timing,
            category: entry.action,
        }
    }
}
