//! Routine configuration - root configuration structure.

use heapless::Vec;
use serde::{Deserialize, Deserializer};

use super::function::FunctionRecord;
use super::point::{PathPoint, Pose};
use super::policy::StartPolicy;
use super::units::Inches;
use crate::routine::TemplateRegistry;

/// Maximum number of waypoints in a path.
pub const MAX_PATH_POINTS: usize = 128;

/// Maximum number of function records in a routine.
pub const MAX_FUNCTIONS: usize = 32;

/// One autonomous routine: path, start pose, triggered functions and
/// the templates those functions draw their names from.
///
/// A `RoutineConfig` is only obtainable through validating constructors
/// ([`RoutineBuilder`](crate::routine::RoutineBuilder), the loaders, or
/// deserialization) and has no mutating methods.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutineConfig {
    path: Vec<PathPoint, MAX_PATH_POINTS>,
    start: Pose,
    functions: Vec<FunctionRecord, MAX_FUNCTIONS>,
    templates: TemplateRegistry,
    start_policy: StartPolicy,
}

impl RoutineConfig {
    /// Assemble and validate a routine.
    pub(crate) fn from_parts(
        path: Vec<PathPoint, MAX_PATH_POINTS>,
        start: Pose,
        functions: Vec<FunctionRecord, MAX_FUNCTIONS>,
        templates: TemplateRegistry,
        start_policy: StartPolicy,
    ) -> crate::Result<Self> {
        let routine = Self {
            path,
            start,
            functions,
            templates,
            start_policy,
        };
        super::validation::validate_routine(&routine)?;
        Ok(routine)
    }

    /// Waypoints in traversal order.
    pub fn path(&self) -> &[PathPoint] {
        &self.path
    }

    /// Pose the robot starts the routine at.
    pub fn start_position(&self) -> Pose {
        self.start
    }

    /// Function records in execution order.
    pub fn functions(&self) -> &[FunctionRecord] {
        &self.functions
    }

    /// Registered template names.
    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// How the start pose relates to the first waypoint.
    pub fn start_policy(&self) -> StartPolicy {
        self.start_policy
    }

    /// Function records with the given name, in execution order.
    pub fn function<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FunctionRecord> + 'a {
        self.functions
            .iter()
            .filter(move |f| f.name.as_str() == name)
    }

    /// Whether the start pose lies within `tolerance` of the first waypoint.
    pub fn start_on_path(&self, tolerance: Inches) -> bool {
        self.path
            .first()
            .is_some_and(|first| {
                self.start.position().distance_to(first).value() <= tolerance.value()
            })
    }

    /// Total length of the path's straight segments.
    pub fn path_length(&self) -> Inches {
        self.path
            .windows(2)
            .fold(Inches(0.0), |total, pair| total + pair[0].distance_to(&pair[1]))
    }

    /// Index of the waypoint closest to `point`, with its distance.
    ///
    /// The earliest waypoint wins on ties.
    pub fn nearest_waypoint(&self, point: &PathPoint) -> Option<(usize, Inches)> {
        self.path
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.distance_to(point)))
            .fold(None, |best: Option<(usize, Inches)>, (i, d)| match best {
                Some((_, best_d)) if best_d.value() <= d.value() => best,
                _ => Some((i, d)),
            })
    }

    /// Waypoint a function record fires nearest to.
    pub fn anchor(&self, record: &FunctionRecord) -> Option<(usize, Inches)> {
        self.nearest_waypoint(&record.target_pose.position())
    }
}

fn default_templates() -> TemplateRegistry {
    TemplateRegistry::with_defaults()
}

/// On-disk shape of a routine before validation.
#[derive(Deserialize)]
pub(crate) struct RoutineFile {
    pub(crate) path: Vec<PathPoint, MAX_PATH_POINTS>,
    pub(crate) start: Pose,
    #[serde(default)]
    pub(crate) functions: Vec<FunctionRecord, MAX_FUNCTIONS>,
    #[serde(default = "default_templates")]
    pub(crate) templates: TemplateRegistry,
    #[serde(default)]
    pub(crate) start_policy: StartPolicy,
}

impl RoutineFile {
    /// Validate into a routine.
    pub(crate) fn into_routine(self) -> crate::Result<RoutineConfig> {
        RoutineConfig::from_parts(
            self.path,
            self.start,
            self.functions,
            self.templates,
            self.start_policy,
        )
    }
}

impl<'de> Deserialize<'de> for RoutineConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use core::fmt::Write;
        RoutineFile::deserialize(deserializer)?
            .into_routine()
            .map_err(|e| {
                let mut buf = heapless::String::<128>::new();
                let _ = write!(buf, "{}", e);
                serde::de::Error::custom(buf.as_str())
            })
    }
}
