//! Route compilation, resolution, and matching for the pharos framework.
//!
//! This crate turns handler descriptors and declarative config into an
//! ordered [`RouteTable`] of compiled routes, then matches incoming
//! method/path pairs against it:
//!
//! - [`PathTemplate`] compiles `{name}` templates into anchored matchers.
//! - [`RouteResolver`] decides each handler's method and path, preferring an
//!   explicit route declaration, then a config entry, then the
//!   `Action`-suffix naming convention.
//! - [`RouteTable`] holds the compiled entries and serves first-match-wins
//!   lookups in registration order.
//!
//! # Example
//!
//! ```
//! use http::Method;
//! use pharos_router::{CompiledRoute, PathTemplate, RouteTable};
//!
//! let mut table = RouteTable::new();
//! table.register(CompiledRoute::new(
//!     Method::GET,
//!     PathTemplate::compile("/user/{id}").unwrap(),
//!     "controllers::UserController",
//!     "showAction",
//! ));
//!
//! let found = table.match_route(&Method::GET, "/user/42").unwrap();
//! assert_eq!(found.params().get("id"), Some("42"));
//! ```

#![doc(html_root_url = "https://docs.rs/pharos-router/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod params;
mod resolver;
mod route;
mod table;
mod template;

pub use params::PathParams;
pub use resolver::{BasePath, BasePathTable, RouteResolver, RouteSources, SourceEntry};
pub use route::CompiledRoute;
pub use table::{RouteMatch, RouteTable};
pub use template::{strip_trailing_slash, PathTemplate, TemplateError};
