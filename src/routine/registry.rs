//! Template registry for action name lookup.

use heapless::Vec;
use serde::Deserialize;

use crate::config::{name, Name};
use crate::error::{ConfigError, Error, Result};

/// Maximum number of templates in the registry.
pub const MAX_TEMPLATES: usize = 16;

/// Templates every new routine starts with.
pub const DEFAULT_TEMPLATES: [&str; 4] = ["intake", "outtake", "score", "park"];

/// Ordered list of action template names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TemplateRegistry {
    templates: Vec<Name, MAX_TEMPLATES>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            templates: Vec::new(),
        }
    }

    /// Create a registry holding [`DEFAULT_TEMPLATES`].
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for template in DEFAULT_TEMPLATES {
            let registered = registry.register(template);
            debug_assert!(registered.is_ok(), "default template {} rejected", template);
        }
        registry
    }

    /// Register a template name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already registered, too long, or the
    /// registry is full.
    pub fn register(&mut self, template: &str) -> Result<()> {
        let name = name(template)?;

        if self.contains(template) {
            return Err(Error::Config(ConfigError::DuplicateTemplate(name)));
        }

        self.templates.push(name).map_err(|_| {
            Error::Config(ConfigError::CapacityExceeded {
                what: "templates",
                max: MAX_TEMPLATES,
            })
        })
    }

    /// Check if a template exists.
    pub fn contains(&self, template: &str) -> bool {
        self.templates.iter().any(|t| t.as_str() == template)
    }

    /// First name registered more than once, if any.
    pub fn first_duplicate(&self) -> Option<&str> {
        self.templates
            .iter()
            .enumerate()
            .find(|&(i, t)| self.templates[..i].contains(t))
            .map(|(_, t)| t.as_str())
    }

    /// Get the number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Get an iterator over template names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|s| s.as_str())
    }

    /// Template names as a slice.
    pub fn as_slice(&self) -> &[Name] {
        &self.templates
    }
}

impl<'a> IntoIterator for &'a TemplateRegistry {
    type Item = &'a Name;
    type IntoIter = core::slice::Iter<'a, Name>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}
