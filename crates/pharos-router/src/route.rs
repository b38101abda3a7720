//! Compiled route entries.

use http::Method;

use crate::template::PathTemplate;

/// One immutable entry in the route table.
///
/// A compiled route binds an HTTP method and a compiled path template to the
/// controller/handler pair that serves it. Entries are created during
/// registration and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    method: Method,
    path: PathTemplate,
    controller: String,
    handler: String,
}

impl CompiledRoute {
    /// Creates a new compiled route.
    #[must_use]
    pub fn new(
        method: Method,
        path: PathTemplate,
        controller: impl Into<String>,
        handler: impl Into<String>,
    ) -> Self {
        Self {
            method,
            path,
            controller: controller.into(),
            handler: handler.into(),
        }
    }

    /// Returns the HTTP method this route serves.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the compiled path template.
    #[must_use]
    pub const fn path(&self) -> &PathTemplate {
        &self.path
    }

    /// Returns the normalized template string.
    #[must_use]
    pub fn template(&self) -> &str {
        self.path.template()
    }

    /// Returns the controller identity.
    #[must_use]
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// Returns the handler name.
    #[must_use]
    pub fn handler(&self) -> &str {
        &self.handler
    }

    /// Returns `true` if this route accepts the request method.
    ///
    /// Methods must match exactly, except that a `HEAD` request also matches
    /// a registered `GET` route.
    #[must_use]
    pub fn accepts_method(&self, request: &Method) -> bool {
        self.method == *request || (*request == Method::HEAD && self.method == Method::GET)
    }
}
