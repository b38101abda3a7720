//! # Pharos Test
//!
//! In-memory testing utilities for the pharos framework. A [`TestClient`]
//! wraps a fully registered dispatcher and dispatches requests directly, so
//! routing and handler behavior can be tested without a network listener or
//! port binding. Responses come back as [`TestResponse`] with chainable
//! assertion helpers.
//!
//! # Example
//!
//! ```
//! use pharos_core::fixtures;
//! use pharos_dispatch::Dispatcher;
//! use pharos_test::TestClient;
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.register_controller(fixtures::user_controller()).unwrap();
//!
//! let client = TestClient::new(dispatcher);
//! client.get("/user/7").assert_ok().assert_body("user 7");
//! ```

#![doc(html_root_url = "https://docs.rs/pharos-test/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod response;

pub use client::TestClient;
pub use response::TestResponse;
