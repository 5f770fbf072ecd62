//! Routine builder for programmatic routine creation.

use heapless::Vec;

use crate::config::{
    FunctionRecord, PathPoint, Pose, RoutineConfig, StartPolicy, TimingMode, MAX_FUNCTIONS,
    MAX_PATH_POINTS,
};
use crate::error::{ConfigError, Error, Result};

use super::TemplateRegistry;

/// Builder for creating validated routines.
///
/// Setter failures (over-long names, full collections) are held until
/// [`RoutineBuilder::build`], which reports the first one.
#[derive(Debug, Clone)]
pub struct RoutineBuilder {
    path: Vec<PathPoint, MAX_PATH_POINTS>,
    start: Option<Pose>,
    functions: Vec<FunctionRecord, MAX_FUNCTIONS>,
    templates: TemplateRegistry,
    start_policy: StartPolicy,
    error: Option<Error>,
}

impl Default for RoutineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutineBuilder {
    /// Create a new routine builder with no templates.
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            start: None,
            functions: Vec::new(),
            templates: TemplateRegistry::new(),
            start_policy: StartPolicy::Independent,
            error: None,
        }
    }

    /// Set the start pose.
    pub fn start(mut self, pose: Pose) -> Self {
        self.start = Some(pose);
        self
    }

    /// Append a waypoint.
    pub fn point(mut self, x: f64, y: f64) -> Self {
        if self.path.push(PathPoint::new(x, y)).is_err() {
            self.fail(Error::Config(ConfigError::CapacityExceeded {
                what: "path points",
                max: MAX_PATH_POINTS,
            }));
        }
        self
    }

    /// Append multiple waypoints.
    pub fn points(mut self, points: &[PathPoint]) -> Self {
        for point in points {
            self = self.point(point.x.value(), point.y.value());
        }
        self
    }

    /// Append a `Function`-category record.
    pub fn function(mut self, name: &str, pose: Pose, timing: TimingMode) -> Self {
        match FunctionRecord::new(name, pose, timing) {
            Ok(record) => self.record(record),
            Err(e) => {
                self.fail(e);
                self
            }
        }
    }

    /// Append a rotation point: turn in place to `heading` at `(x, y)`.
    pub fn rotation(mut self, x: f64, y: f64, heading: f64) -> Self {
        match FunctionRecord::rotation(Pose::new(x, y, heading)) {
            Ok(record) => self.record(record),
            Err(e) => {
                self.fail(e);
                self
            }
        }
    }

    /// Append a prepared function record.
    pub fn record(mut self, record: FunctionRecord) -> Self {
        if self.functions.push(record).is_err() {
            self.fail(Error::Config(ConfigError::CapacityExceeded {
                what: "functions",
                max: MAX_FUNCTIONS,
            }));
        }
        self
    }

    /// Register a template name.
    pub fn template(mut self, name: &str) -> Self {
        if let Err(e) = self.templates.register(name) {
            self.fail(e);
        }
        self
    }

    /// Register `intake`, `outtake`, `score` and `park`.
    pub fn default_templates(mut self) -> Self {
        for name in super::DEFAULT_TEMPLATES {
            self = self.template(name);
        }
        self
    }

    /// Replace the template set wholesale.
    pub fn templates(mut self, templates: TemplateRegistry) -> Self {
        self.templates = templates;
        self
    }

    /// Set how the start pose relates to the first waypoint.
    pub fn start_policy(mut self, policy: StartPolicy) -> Self {
        self.start_policy = policy;
        self
    }

    fn fail(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Build the routine.
    ///
    /// # Errors
    ///
    /// Returns the first setter failure, a missing start pose, or any
    /// validation failure.
    pub fn build(self) -> Result<RoutineConfig> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let start = self
            .start
            .ok_or(Error::Config(ConfigError::MissingStartPose))?;

        let routine = RoutineConfig::from_parts(
            self.path,
            start,
            self.functions,
            self.templates,
            self.start_policy,
        )?;

        debug!(
            "built routine: {} waypoints, {} functions, {} templates",
            routine.path().len(),
            routine.functions().len(),
            routine.templates().len()
        );

        Ok(routine)
    }
}
