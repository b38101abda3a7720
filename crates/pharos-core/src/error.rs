//! Error types for Pharos.
//!
//! This module provides the [`PharosError`] type, which is the standard error
//! type used throughout the Pharos framework. Each variant carries the
//! structured context needed to render a response body, and maps to an HTTP
//! status code via [`PharosError::status_code`].

use http::StatusCode;
use thiserror::Error;

/// Result type alias using [`PharosError`].
pub type PharosResult<T> = Result<T, PharosError>;

/// Standard error type for Pharos dispatch.
///
/// Route templates are trusted, author-supplied strings, so malformed
/// templates and duplicate placeholder names are developer errors and do not
/// appear here. The dispatch taxonomy is deliberately small:
///
/// - [`PharosError::NoRouteMatch`] and [`PharosError::InvalidParameter`] are
///   rendered as 404 responses.
/// - [`PharosError::UnsupportedParameterType`] and
///   [`PharosError::UnknownHandler`] are rendered as 500 responses.
/// - [`PharosError::ControllerNotRegistered`] is never rendered by the core;
///   it propagates to the caller as a fatal registry failure.
///
/// # Example
///
/// ```
/// use pharos_core::{PharosError, PharosResult};
///
/// fn lookup(path: &str) -> PharosResult<()> {
///     if path.is_empty() {
///         return Err(PharosError::no_route_match("GET", "/"));
///     }
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum PharosError {
    /// No table entry matched the request.
    #[error("no route matched {method} {path}")]
    NoRouteMatch {
        /// HTTP method of the request.
        method: String,
        /// Normalized request path.
        path: String,
    },

    /// A captured value failed coercion to its declared parameter kind.
    #[error("invalid value {value:?} for parameter '{name}': expected {expected}")]
    InvalidParameter {
        /// The declared parameter name.
        name: String,
        /// The expected kind (e.g. `int`, `bool`).
        expected: String,
        /// The raw captured value.
        value: String,
    },

    /// A handler declared a parameter type the binder does not support.
    #[error("unsupported type '{declared}' for parameter '{name}'")]
    UnsupportedParameterType {
        /// The declared parameter name.
        name: String,
        /// The unrecognized type name as declared.
        declared: String,
    },

    /// The controller registry has no factory for the requested identity.
    #[error("controller '{name}' is not registered")]
    ControllerNotRegistered {
        /// The controller identity that failed to resolve.
        name: String,
    },

    /// A route referenced a handler its controller does not expose.
    ///
    /// This indicates a descriptor/invocation mismatch and is always a
    /// developer error.
    #[error("controller '{controller}' has no handler '{handler}'")]
    UnknownHandler {
        /// The controller identity.
        controller: String,
        /// The missing handler name.
        handler: String,
    },
}

impl PharosError {
    /// Creates a [`PharosError::NoRouteMatch`].
    #[must_use]
    pub fn no_route_match(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self::NoRouteMatch {
            method: method.into(),
            path: path.into(),
        }
    }

    /// Creates a [`PharosError::InvalidParameter`].
    #[must_use]
    pub fn invalid_parameter(
        name: impl Into<String>,
        expected: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            expected: expected.into(),
            value: value.into(),
        }
    }

    /// Creates a [`PharosError::UnsupportedParameterType`].
    #[must_use]
    pub fn unsupported_parameter_type(
        name: impl Into<String>,
        declared: impl Into<String>,
    ) -> Self {
        Self::UnsupportedParameterType {
            name: name.into(),
            declared: declared.into(),
        }
    }

    /// Creates a [`PharosError::ControllerNotRegistered`].
    #[must_use]
    pub fn controller_not_registered(name: impl Into<String>) -> Self {
        Self::ControllerNotRegistered { name: name.into() }
    }

    /// Creates a [`PharosError::UnknownHandler`].
    #[must_use]
    pub fn unknown_handler(controller: impl Into<String>, handler: impl Into<String>) -> Self {
        Self::UnknownHandler {
            controller: controller.into(),
            handler: handler.into(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NoRouteMatch { .. } | Self::InvalidParameter { .. } => StatusCode::NOT_FOUND,
            Self::UnsupportedParameterType { .. }
            | Self::ControllerNotRegistered { .. }
            | Self::UnknownHandler { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns `true` if this error must propagate instead of being rendered.
    ///
    /// Registry failures are surfaced to the embedder untouched; everything
    /// else becomes a structured response body.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::ControllerNotRegistered { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_route_match_is_404() {
        let err = PharosError::no_route_match("GET", "/missing");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("/missing"));
    }

    #[test]
    fn test_invalid_parameter_is_404() {
        let err = PharosError::invalid_parameter("id", "int", "12a");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        let msg = err.to_string();
        assert!(msg.contains("'id'"));
        assert!(msg.contains("int"));
        assert!(msg.contains("12a"));
    }

    #[test]
    fn test_unsupported_parameter_type_is_500() {
        let err = PharosError::unsupported_parameter_type("when", "DateTime");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("DateTime"));
    }

    #[test]
    fn test_controller_not_registered_is_fatal() {
        let err = PharosError::controller_not_registered("controllers::MissingController");
        assert!(err.is_fatal());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unknown_handler_is_500() {
        let err = PharosError::unknown_handler("controllers::ToolsController", "ghostAction");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("ghostAction"));
    }
}
