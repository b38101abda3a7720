//! Declarative route configuration for the pharos framework.
//!
//! This crate parses route configuration files into a [`RoutesConfig`]
//! document and converts the document into the routing inputs the resolver
//! consumes: a [`pharos_router::RouteSources`] map of explicit route entries
//! and a [`pharos_router::BasePathTable`] of controller mounts. It also
//! provides [`ControllerSet`], the explicit controller enumeration that
//! drives registration order.
//!
//! # Example
//!
//! ```
//! use pharos_config::ConfigLoader;
//!
//! let config = ConfigLoader::new()
//!     .with_string(
//!         r#"
//!         [[routes]]
//!         controller = "controllers::UserController"
//!         action = "showAction"
//!         method = "get"
//!         path = "/user/{id}"
//!         "#,
//!         "toml",
//!     )
//!     .unwrap()
//!     .load();
//!
//! let sources = config.route_sources().unwrap();
//! assert!(sources.get("controllers::UserController", "showAction").is_some());
//! ```

#![doc(html_root_url = "https://docs.rs/pharos-config/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controllers;
mod error;
mod loader;
mod schema;

pub use controllers::ControllerSet;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{MountEntry, RouteEntry, RoutesConfig};
