//! String-keyed controller registry.
//!
//! The registry is the dispatcher's only collaborator for turning a
//! controller identity into an instance: a simple keyed factory with no
//! cycle resolution. Factories are registered once at bootstrap and invoked
//! per resolution; a shared instance can be registered instead when the
//! controller is stateless.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::{Controller, PharosError, PharosResult};

/// Factory producing a controller instance on each resolution.
pub type ControllerFactory = Arc<dyn Fn() -> Arc<dyn Controller> + Send + Sync>;

/// A keyed factory for controller instances.
///
/// # Example
///
/// ```
/// use pharos_core::{ControllerRegistry, FnController, HandlerDescriptor};
/// use std::sync::Arc;
///
/// let mut registry = ControllerRegistry::new();
/// registry.register("controllers::HomeController", || {
///     Arc::new(
///         FnController::builder("controllers::HomeController")
///             .handler(HandlerDescriptor::new("indexAction"), |_, _| None)
///             .build(),
///     )
/// });
///
/// let controller = registry.get("controllers::HomeController").unwrap();
/// assert_eq!(controller.descriptor().handlers().len(), 1);
/// ```
#[derive(Default)]
pub struct ControllerRegistry {
    factories: HashMap<String, ControllerFactory>,
}

impl ControllerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers a factory under a controller identity.
    ///
    /// Re-registering an identity replaces the previous factory.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn() -> Arc<dyn Controller> + Send + Sync + 'static,
    ) {
        self.factories.insert(name.into(), Arc::new(factory));
    }

    /// Registers a shared instance under a controller identity.
    ///
    /// Every resolution returns a clone of the same `Arc`.
    pub fn register_instance(&mut self, name: impl Into<String>, instance: Arc<dyn Controller>) {
        self.register(name, move || Arc::clone(&instance));
    }

    /// Resolves a controller instance by identity.
    ///
    /// # Errors
    ///
    /// Returns [`PharosError::ControllerNotRegistered`] when no factory is
    /// registered for `name`.
    pub fn get(&self, name: &str) -> PharosResult<Arc<dyn Controller>> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| PharosError::controller_not_registered(name))
    }

    /// Checks whether an identity is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Returns the number of registered identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns `true` if no identities are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Returns the registered identities in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl fmt::Debug for ControllerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerRegistry")
            .field("controller_count", &self.factories.len())
            .finish()
    }
}
