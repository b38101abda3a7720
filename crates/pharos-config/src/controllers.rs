//! Explicit controller enumeration.
//!
//! Controllers are enumerated by explicit lists rather than a directory
//! scan. Two lists exist: the application's own controllers and the
//! framework-provided ones, and registration always visits the application
//! list first so application routes win on overlapping matches.

use pharos_core::ControllerName;

/// The ordered set of controllers to register.
///
/// # Example
///
/// ```
/// use pharos_config::ControllerSet;
///
/// let mut set = ControllerSet::new();
/// set.push_framework("controllers::StatusController");
/// set.push_application("controllers::tools::ToolsController");
///
/// let names: Vec<_> = set.iter().map(|n| n.as_str().to_string()).collect();
/// assert_eq!(
///     names,
///     ["controllers::tools::ToolsController", "controllers::StatusController"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ControllerSet {
    application: Vec<ControllerName>,
    framework: Vec<ControllerName>,
}

impl ControllerSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a controller from the application tree.
    pub fn push_application(&mut self, name: impl Into<ControllerName>) {
        self.application.push(name.into());
    }

    /// Adds a controller from the framework tree.
    pub fn push_framework(&mut self, name: impl Into<ControllerName>) {
        self.framework.push(name.into());
    }

    /// Returns the controllers in registration order: the application list
    /// first, then the framework list, each in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ControllerName> {
        self.application.iter().chain(self.framework.iter())
    }

    /// Returns `true` if either list contains the identity.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|n| n.as_str() == name)
    }

    /// Returns the total number of controllers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.application.len() + self.framework.len()
    }

    /// Returns `true` if both lists are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.application.is_empty() && self.framework.is_empty()
    }
}

impl<'a> IntoIterator for &'a ControllerSet {
    type Item = &'a ControllerName;
    type IntoIter = std::iter::Chain<
        std::slice::Iter<'a, ControllerName>,
        std::slice::Iter<'a, ControllerName>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.application.iter().chain(self.framework.iter())
    }
}
