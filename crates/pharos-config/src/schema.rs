//! Declarative route configuration schema.
//!
//! The parsed shape is deliberately small: a `routes` list of explicit
//! route entries and a `controllers` list of base-path mounts. Unknown
//! fields are rejected so typos fail at load time instead of silently
//! producing an empty table.

use http::Method;
use serde::Deserialize;

use pharos_router::{BasePath, BasePathTable, RouteSources};

use crate::ConfigError;

/// The root configuration document.
///
/// ```toml
/// [[routes]]
/// controller = "controllers::UserController"
/// action = "showAction"
/// method = "get"
/// path = "/user/{id}"
///
/// [[controllers]]
/// namespace = "controllers::tools"
/// path = "/utils"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutesConfig {
    /// Explicit route declarations.
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
    /// Controller base-path mounts.
    #[serde(default)]
    pub controllers: Vec<MountEntry>,
}

/// One explicit route declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteEntry {
    /// The controller identity, e.g. `controllers::UserController`.
    pub controller: String,
    /// The handler name on that controller.
    pub action: String,
    /// The HTTP method, any casing. Defaults to `GET` when omitted.
    #[serde(default)]
    pub method: Option<String>,
    /// The route path template.
    pub path: String,
}

/// One controller base-path mount.
///
/// Exactly one of `controller` (an exact identity) or `namespace` (a prefix
/// covering every controller under it) must be set. An absent or null `path`
/// derives the base path from the controller's namespace.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MountEntry {
    /// Exact controller identity this mount applies to.
    #[serde(default)]
    pub controller: Option<String>,
    /// Namespace prefix this mount applies to.
    #[serde(default)]
    pub namespace: Option<String>,
    /// The configured base path.
    #[serde(default)]
    pub path: Option<String>,
}

impl RoutesConfig {
    /// Appends another document's entries after this one's.
    ///
    /// Later files extend earlier ones; registration order across files is
    /// file order.
    pub fn extend(&mut self, other: Self) {
        self.routes.extend(other.routes);
        self.controllers.extend(other.controllers);
    }

    /// Builds the declarative route source map.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMethod`] if a route entry's method
    /// string is not a valid HTTP method.
    pub fn route_sources(&self) -> Result<RouteSources, ConfigError> {
        let mut sources = RouteSources::new();
        for entry in &self.routes {
            let method = entry.parsed_method()?;
            sources.insert(&entry.controller, &entry.action, method, &entry.path);
        }
        Ok(sources)
    }

    /// Builds the controller base-path table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMount`] if a mount entry sets neither
    /// or both of `controller` and `namespace`.
    pub fn base_paths(&self) -> Result<BasePathTable, ConfigError> {
        let mut table = BasePathTable::new();
        for (index, entry) in self.controllers.iter().enumerate() {
            let base = BasePath::parse(entry.path.as_deref());
            match (&entry.controller, &entry.namespace) {
                (Some(controller), None) => table.set_controller(controller, base),
                (None, Some(namespace)) => table.set_namespace(namespace, base),
                (Some(_), Some(_)) => {
                    return Err(ConfigError::invalid_mount(
                        index,
                        "sets both 'controller' and 'namespace'",
                    ))
                }
                (None, None) => {
                    return Err(ConfigError::invalid_mount(
                        index,
                        "must set either 'controller' or 'namespace'",
                    ))
                }
            }
        }
        Ok(table)
    }
}

impl RouteEntry {
    /// Parses the entry's method string, defaulting to `GET`.
    fn parsed_method(&self) -> Result<Method, ConfigError> {
        match &self.method {
            None => Ok(Method::GET),
            Some(raw) => Method::from_bytes(raw.to_uppercase().as_bytes())
                .map_err(|_| ConfigError::invalid_method(raw, &self.controller, &self.action)),
        }
    }
}
