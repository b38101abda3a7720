//! The dispatcher: registration and request dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;

use pharos_core::{
    Controller, ControllerDescriptor, ControllerRegistry, PharosError, PharosResult, Response,
};
use pharos_router::{
    BasePathTable, CompiledRoute, PathTemplate, RouteResolver, RouteSources, RouteTable,
    TemplateError,
};

use crate::bind::bind_args;

/// Matches requests against a route table and invokes controllers.
///
/// A dispatcher is built in two phases. During registration, controllers are
/// added one by one; each handler that any route source covers produces one
/// compiled table entry, in handler declaration order. After registration
/// the dispatcher is read-only: [`dispatch`](Self::dispatch) takes `&self`
/// and the dispatcher can be shared across threads.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use http::Method;
/// use pharos_core::{FnController, HandlerDescriptor};
/// use pharos_dispatch::Dispatcher;
///
/// let controller = FnController::builder("controllers::tools::ToolsController")
///     .handler(HandlerDescriptor::new("indexAction"), |_args, _response| {
///         Some("tools index".to_string())
///     })
///     .build();
///
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.register_controller(Arc::new(controller)).unwrap();
///
/// let response = dispatcher.dispatch(&Method::GET, "/tools").unwrap();
/// assert_eq!(response.status(), http::StatusCode::OK);
/// assert_eq!(response.body_text(), "tools index");
/// ```
pub struct Dispatcher {
    table: RouteTable,
    registry: ControllerRegistry,
    descriptors: HashMap<String, ControllerDescriptor>,
    sources: RouteSources,
    base_paths: BasePathTable,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Creates a dispatcher with no declarative route sources.
    ///
    /// Routes come from handler route declarations and the naming
    /// convention only.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RouteSources::new(), BasePathTable::new())
    }

    /// Creates a dispatcher with declarative route sources and base paths.
    #[must_use]
    pub fn with_config(sources: RouteSources, base_paths: BasePathTable) -> Self {
        Self {
            table: RouteTable::new(),
            registry: ControllerRegistry::new(),
            descriptors: HashMap::new(),
            sources,
            base_paths,
        }
    }

    /// Registers a shared controller instance.
    ///
    /// Returns the number of routes the controller contributed. Handlers no
    /// route source covers contribute nothing and are not an error.
    /// Re-registering a controller appends duplicate table entries; the
    /// first-registered entry keeps winning at dispatch time.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if a resolved path template fails to
    /// compile.
    pub fn register_controller(
        &mut self,
        controller: Arc<dyn Controller>,
    ) -> Result<usize, TemplateError> {
        let descriptor = controller.descriptor();
        self.registry
            .register_instance(descriptor.name().as_str(), controller);
        self.register_descriptor(descriptor)
    }

    /// Registers a controller produced by a factory on each resolution.
    ///
    /// The descriptor is supplied separately so registration does not need
    /// to build a throwaway instance.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if a resolved path template fails to
    /// compile.
    pub fn register_factory(
        &mut self,
        descriptor: ControllerDescriptor,
        factory: impl Fn() -> Arc<dyn Controller> + Send + Sync + 'static,
    ) -> Result<usize, TemplateError> {
        self.registry.register(descriptor.name().as_str(), factory);
        self.register_descriptor(descriptor)
    }

    fn register_descriptor(
        &mut self,
        descriptor: ControllerDescriptor,
    ) -> Result<usize, TemplateError> {
        let name = descriptor.name().clone();
        let resolver = RouteResolver::new(&self.sources, &self.base_paths);

        let mut registered = 0;
        for handler in descriptor.handlers() {
            let Some((method, path)) = resolver.resolve(&name, handler) else {
                continue;
            };
            let template = PathTemplate::compile(&path)?;
            tracing::debug!(
                controller = name.as_str(),
                handler = handler.name.as_str(),
                method = %method,
                template = template.template(),
                "registered route"
            );
            self.table.register(CompiledRoute::new(
                method,
                template,
                name.as_str(),
                &handler.name,
            ));
            registered += 1;
        }

        self.descriptors.insert(name.as_str().to_string(), descriptor);
        Ok(registered)
    }

    /// Returns the compiled route table.
    #[must_use]
    pub const fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Dispatches one request.
    ///
    /// Matching walks the table in registration order; a `HEAD` request
    /// also matches `GET` entries, and a single trailing slash on the path
    /// is ignored. On a match the captured values are coerced to the
    /// handler's declared parameter kinds and the handler is invoked with a
    /// seeded `200 OK` response it may mutate; its returned text becomes
    /// the body.
    ///
    /// Dispatch failures are rendered as structured responses: no match or
    /// a failed coercion yields a 404, an unsupported declared kind a 500.
    /// A type error after a match is terminal; matching never falls through
    /// to a later entry.
    ///
    /// # Errors
    ///
    /// Returns [`PharosError::ControllerNotRegistered`] when the matched
    /// entry's controller cannot be resolved. Registry failures are never
    /// masked as responses.
    pub fn dispatch(&self, method: &Method, path: &str) -> PharosResult<Response> {
        let Some(found) = self.table.match_route(method, path) else {
            tracing::debug!(method = %method, path, "no route matched");
            return render(PharosError::no_route_match(method.as_str(), path));
        };

        let route = found.route();
        let controller = self.registry.get(route.controller())?;

        let Some(handler) = self
            .descriptors
            .get(route.controller())
            .and_then(|d| d.handler(route.handler()))
        else {
            return render(PharosError::unknown_handler(
                route.controller(),
                route.handler(),
            ));
        };

        let args = match bind_args(&handler.params, found.params()) {
            Ok(args) => args,
            Err(err) => {
                tracing::debug!(
                    controller = route.controller(),
                    handler = route.handler(),
                    error = %err,
                    "parameter binding failed"
                );
                return render(err);
            }
        };

        let mut response = Response::ok();
        match controller.invoke(route.handler(), &args, &mut response) {
            Ok(body) => {
                if let Some(text) = body {
                    response.append_body(text);
                }
                Ok(response)
            }
            Err(err) => render(err),
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("routes", &self.table.len())
            .field("controllers", &self.descriptors.len())
            .finish()
    }
}

/// Renders a non-fatal error as a response; fatal errors propagate.
fn render(err: PharosError) -> PharosResult<Response> {
    if err.is_fatal() {
        Err(err)
    } else {
        Ok(Response::from_error(&err))
    }
}
