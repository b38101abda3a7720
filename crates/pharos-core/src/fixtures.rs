//! Test fixtures for Pharos development and testing.
//!
//! This module provides pre-built controllers and a populated registry that
//! can be used in tests across the Pharos codebase.
//!
//! # Example
//!
//! ```
//! use pharos_core::fixtures;
//!
//! let registry = fixtures::registry();
//! assert!(registry.contains("controllers::tools::ToolsController"));
//! ```

use std::sync::Arc;

use crate::{
    Controller, ControllerRegistry, FnController, HandlerDescriptor, ParamSpec, RouteSpec,
};

/// Identity of the fixture tools controller.
pub const TOOLS_CONTROLLER: &str = "controllers::tools::ToolsController";

/// Identity of the fixture user controller.
pub const USER_CONTROLLER: &str = "controllers::UserController";

/// Creates a convention-routed controller under the `tools` namespace.
///
/// Handlers:
/// - `indexAction` — convention route `GET /tools`
/// - `getProfileAction` — convention route `GET /tools/profile`
/// - `postSubmitAction` — convention route `POST /tools/submit`
/// - `helperMethod` — no `Action` suffix, never routed
#[must_use]
pub fn tools_controller() -> Arc<dyn Controller> {
    Arc::new(
        FnController::builder(TOOLS_CONTROLLER)
            .handler(HandlerDescriptor::new("indexAction"), |_args, _response| {
                Some("tools index".to_string())
            })
            .handler(
                HandlerDescriptor::new("getProfileAction"),
                |_args, _response| Some("tools profile".to_string()),
            )
            .handler(
                HandlerDescriptor::new("postSubmitAction"),
                |_args, _response| Some("submitted".to_string()),
            )
            .handler(HandlerDescriptor::new("helperMethod"), |_args, _response| {
                Some("never routed".to_string())
            })
            .build(),
    )
}

/// Creates a controller with an explicit `GET /user/{id}` route and a typed
/// `int` parameter.
#[must_use]
pub fn user_controller() -> Arc<dyn Controller> {
    Arc::new(
        FnController::builder(USER_CONTROLLER)
            .handler(
                HandlerDescriptor::new("showAction")
                    .with_route(RouteSpec::new("/user/{id}").with_method(http::Method::GET))
                    .with_param(ParamSpec::int("id")),
                |args, _response| Some(format!("user {}", args.int("id").unwrap_or_default())),
            )
            .build(),
    )
}

/// Creates a registry populated with the fixture controllers.
#[must_use]
pub fn registry() -> ControllerRegistry {
    let mut registry = ControllerRegistry::new();
    registry.register_instance(TOOLS_CONTROLLER, tools_controller());
    registry.register_instance(USER_CONTROLLER, user_controller());
    registry
}
