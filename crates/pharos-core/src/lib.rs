//! # Pharos Core
//!
//! Core types and traits for the Pharos routing framework.
//!
//! This crate provides the foundational types used throughout Pharos:
//!
//! - [`ControllerName`] - Controller identity and naming rules
//! - [`ControllerDescriptor`] / [`Controller`] - Static handler descriptions
//!   and the invocation trait
//! - [`ControllerRegistry`] - String-keyed controller factory
//! - [`Args`] / [`ParamValue`] - Bound handler arguments
//! - [`Response`] - Per-request mutable response object
//! - [`PharosError`] - Standard error types

#![doc(html_root_url = "https://docs.rs/pharos-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
pub mod fixtures;
mod invocation;
mod name;
mod registry;
mod response;

pub use controller::{
    Controller, ControllerDescriptor, FnController, FnControllerBuilder, HandlerDescriptor,
    HandlerFn, ParamKind, ParamSpec, RouteSpec,
};
pub use error::{PharosError, PharosResult};
pub use invocation::{Args, ParamValue};
pub use name::ControllerName;
pub use registry::{ControllerFactory, ControllerRegistry};
pub use response::Response;
