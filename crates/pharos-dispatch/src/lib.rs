//! Request dispatch for the pharos framework.
//!
//! The [`Dispatcher`] is the runtime half of the framework: controllers are
//! registered once at bootstrap, each contributing compiled routes through
//! the resolver, and incoming method/path pairs are then dispatched against
//! the resulting read-only table. Dispatch is synchronous and performs no
//! I/O; matching, parameter coercion, and invocation are pure computation
//! over the structures built at registration time.

#![doc(html_root_url = "https://docs.rs/pharos-dispatch/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bind;
mod dispatcher;

pub use bind::bind_args;
pub use dispatcher::Dispatcher;
