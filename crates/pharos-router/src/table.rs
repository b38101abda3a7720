//! The ordered route table.

use http::Method;

use crate::params::PathParams;
use crate::route::CompiledRoute;
use crate::template::strip_trailing_slash;

/// A successful table lookup: the matched route and its captured parameters.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    route: &'a CompiledRoute,
    params: PathParams,
}

impl<'a> RouteMatch<'a> {
    /// Returns the matched route entry.
    #[must_use]
    pub const fn route(&self) -> &'a CompiledRoute {
        self.route
    }

    /// Returns the captured path parameters.
    #[must_use]
    pub const fn params(&self) -> &PathParams {
        &self.params
    }

    /// Consumes the match and returns the captured parameters.
    #[must_use]
    pub fn into_params(self) -> PathParams {
        self.params
    }
}

/// An append-only, insertion-ordered collection of compiled routes.
///
/// Entries are appended during the registration phase and read-only during
/// dispatch. Registration order is dispatch priority: when several entries
/// could match a request, the earliest registered wins. Re-registering a
/// controller produces duplicate entries rather than an error; the
/// first-registered entry keeps winning.
///
/// # Example
///
/// ```
/// use http::Method;
/// use pharos_router::{CompiledRoute, PathTemplate, RouteTable};
///
/// let mut table = RouteTable::new();
/// table.register(CompiledRoute::new(
///     Method::GET,
///     PathTemplate::compile("/user/{id}").unwrap(),
///     "controllers::UserController",
///     "showAction",
/// ));
///
/// let found = table.match_route(&Method::GET, "/user/42").unwrap();
/// assert_eq!(found.route().handler(), "showAction");
/// assert_eq!(found.params().get("id"), Some("42"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
}

impl RouteTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a route. There is no removal operation.
    pub fn register(&mut self, route: CompiledRoute) {
        self.routes.push(route);
    }

    /// Returns the routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledRoute> {
        self.routes.iter()
    }

    /// Returns the first entry registered for a controller/handler pair.
    #[must_use]
    pub fn find(&self, controller: &str, handler: &str) -> Option<&CompiledRoute> {
        self.routes
            .iter()
            .find(|r| r.controller() == controller && r.handler() == handler)
    }

    /// Matches a request against the table in registration order.
    ///
    /// The path has a single trailing slash stripped (the root `/` is left
    /// untouched) before matching. A `HEAD` request also matches `GET`
    /// entries.
    #[must_use]
    pub fn match_route(&self, method: &Method, path: &str) -> Option<RouteMatch<'_>> {
        let normalized = strip_trailing_slash(path);
        for route in &self.routes {
            if !route.accepts_method(method) {
                continue;
            }
            if let Some(params) = route.path().captures(normalized) {
                return Some(RouteMatch { route, params });
            }
        }
        None
    }

    /// Returns the number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no routes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a CompiledRoute;
    type IntoIter = std::slice::Iter<'a, CompiledRoute>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
