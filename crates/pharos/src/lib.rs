//! # Pharos
//!
//! **Route registry and request dispatcher**
//!
//! Pharos turns a set of registered controllers into a compiled routing
//! table and dispatches incoming method/path pairs against it:
//!
//! - **Three route sources, one precedence** – an explicit route declaration
//!   on the handler beats a declarative config entry, which beats the
//!   `Action`-suffix naming convention
//! - **Compiled path templates** – `{name}` placeholders become anchored
//!   single-segment matchers with ordered parameter extraction
//! - **Typed parameter binding** – captured values are coerced to the
//!   handler's declared kinds with per-kind 404/500 error semantics
//! - **No reflection** – controllers describe their handlers through static
//!   descriptors built at registration time
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use http::Method;
//! use pharos::prelude::*;
//!
//! let controller = FnController::builder("controllers::UserController")
//!     .handler(
//!         HandlerDescriptor::new("showAction")
//!             .with_route(RouteSpec::new("/user/{id}"))
//!             .with_param(ParamSpec::int("id")),
//!         |args, _response| Some(format!("user {}", args.int("id").unwrap_or_default())),
//!     )
//!     .build();
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.register_controller(Arc::new(controller)).unwrap();
//!
//! let response = dispatcher.dispatch(&Method::GET, "/user/42").unwrap();
//! assert_eq!(response.body_text(), "user 42");
//! ```
//!
//! ## Registration and dispatch
//!
//! Registration runs once, single-threaded, at bootstrap; each controller
//! contributes zero or more routes in handler declaration order. After that
//! the table is read-only and the dispatcher can be shared across threads.

#![doc(html_root_url = "https://docs.rs/pharos/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use pharos_core as core;

// Re-export routing types
pub use pharos_router as router;

// Re-export configuration types
pub use pharos_config as config;

// Re-export dispatch types
pub use pharos_dispatch as dispatch;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```
/// use pharos::prelude::*;
/// ```
pub mod prelude {
    pub use pharos_core::{
        Args, Controller, ControllerDescriptor, ControllerName, ControllerRegistry, FnController,
        HandlerDescriptor, ParamKind, ParamSpec, ParamValue, PharosError, PharosResult, Response,
        RouteSpec,
    };

    pub use pharos_router::{
        BasePath, BasePathTable, CompiledRoute, PathParams, PathTemplate, RouteResolver,
        RouteSources, RouteTable,
    };

    pub use pharos_config::{ConfigLoader, ControllerSet, RoutesConfig};

    pub use pharos_dispatch::Dispatcher;
}
