//! Controller descriptors and the [`Controller`] trait.
//!
//! Pharos performs no runtime reflection. Every controller describes its
//! handlers up front through a [`ControllerDescriptor`]: handler names, an
//! optional explicit route declaration, and an ordered, typed parameter list.
//! The descriptor is read once when the controller is registered and never
//! mutated afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use http::Method;

use crate::invocation::Args;
use crate::{ControllerName, PharosError, PharosResult, Response};

/// The closed set of parameter kinds the binder understands.
///
/// Kinds are resolved once at registration time from the declared type name;
/// they are never re-derived per request. A declared type outside the closed
/// set is carried as [`ParamKind::Unsupported`] and fails binding with a
/// 500-class error, preserving the per-request error semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKind {
    /// Unsigned decimal integer (digits only, no sign).
    Int,
    /// General numeric value, including decimals and scientific notation.
    Float,
    /// Fixed truthy/falsy token set (`1/0`, `true/false`, `yes/no`, `on/off`).
    Bool,
    /// Pass-through string.
    Str,
    /// Unconstrained parameter; the raw capture is passed through.
    Any,
    /// A declared type name outside the closed set.
    Unsupported(String),
}

impl ParamKind {
    /// Resolves a declared type name into a kind.
    ///
    /// # Example
    ///
    /// ```
    /// use pharos_core::ParamKind;
    ///
    /// assert_eq!(ParamKind::parse("int"), ParamKind::Int);
    /// assert_eq!(ParamKind::parse("string"), ParamKind::Str);
    /// assert_eq!(
    ///     ParamKind::parse("DateTime"),
    ///     ParamKind::Unsupported("DateTime".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn parse(declared: &str) -> Self {
        match declared {
            "int" => Self::Int,
            "float" => Self::Float,
            "bool" => Self::Bool,
            "string" => Self::Str,
            "" => Self::Any,
            other => Self::Unsupported(other.to_string()),
        }
    }

    /// Returns the kind name used in error messages.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Str => "string",
            Self::Any => "any",
            Self::Unsupported(declared) => declared,
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single declared handler parameter: name plus kind, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    /// The parameter name, matched against captured placeholder names.
    pub name: String,
    /// The declared kind.
    pub kind: ParamKind,
}

impl ParamSpec {
    /// Creates a parameter spec with an explicit kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Creates an `int` parameter.
    #[must_use]
    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Int)
    }

    /// Creates a `float` parameter.
    #[must_use]
    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Float)
    }

    /// Creates a `bool` parameter.
    #[must_use]
    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Bool)
    }

    /// Creates a `string` parameter.
    #[must_use]
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Str)
    }

    /// Creates an unconstrained parameter.
    #[must_use]
    pub fn any(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Any)
    }
}

/// An explicit route declaration attached to a handler.
///
/// This is the highest-priority route source: when present it is used
/// verbatim and both the declarative config and the naming convention are
/// ignored for the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    /// The route template, e.g. `/user/{id}`.
    pub path: String,
    /// The HTTP method; `None` defaults to `GET` at resolution time.
    pub method: Option<Method>,
}

impl RouteSpec {
    /// Creates a route declaration with the default method.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: None,
        }
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }
}

/// The static description of one handler method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerDescriptor {
    /// The handler name, e.g. `getProfileAction`.
    pub name: String,
    /// The explicit route declaration, if any.
    pub route: Option<RouteSpec>,
    /// Declared parameters in declaration order.
    pub params: Vec<ParamSpec>,
}

impl HandlerDescriptor {
    /// Creates a descriptor with no route declaration and no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            route: None,
            params: Vec::new(),
        }
    }

    /// Attaches an explicit route declaration.
    #[must_use]
    pub fn with_route(mut self, route: RouteSpec) -> Self {
        self.route = Some(route);
        self
    }

    /// Appends a declared parameter.
    #[must_use]
    pub fn with_param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }
}

/// The static description of a controller: identity plus handler list.
///
/// # Example
///
/// ```
/// use pharos_core::{ControllerDescriptor, HandlerDescriptor, ParamSpec};
///
/// let descriptor = ControllerDescriptor::new("controllers::tools::ToolsController")
///     .with_handler(HandlerDescriptor::new("indexAction"))
///     .with_handler(
///         HandlerDescriptor::new("getProfileAction").with_param(ParamSpec::int("id")),
///     );
///
/// assert_eq!(descriptor.handlers().len(), 2);
/// assert!(descriptor.handler("indexAction").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerDescriptor {
    name: ControllerName,
    handlers: Vec<HandlerDescriptor>,
}

impl ControllerDescriptor {
    /// Creates an empty descriptor for the given identity.
    #[must_use]
    pub fn new(name: impl Into<ControllerName>) -> Self {
        Self {
            name: name.into(),
            handlers: Vec::new(),
        }
    }

    /// Appends a handler descriptor.
    #[must_use]
    pub fn with_handler(mut self, handler: HandlerDescriptor) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Returns the controller identity.
    #[must_use]
    pub const fn name(&self) -> &ControllerName {
        &self.name
    }

    /// Returns the handlers in declaration order.
    #[must_use]
    pub fn handlers(&self) -> &[HandlerDescriptor] {
        &self.handlers
    }

    /// Looks up a handler descriptor by name.
    #[must_use]
    pub fn handler(&self, name: &str) -> Option<&HandlerDescriptor> {
        self.handlers.iter().find(|h| h.name == name)
    }
}

/// A routable controller.
///
/// Implementations expose their static [`ControllerDescriptor`] and invoke a
/// handler by name. The dispatcher only calls [`invoke`](Self::invoke) with
/// handler names taken from the descriptor, so an unknown name indicates a
/// descriptor/invocation mismatch.
pub trait Controller: Send + Sync + fmt::Debug {
    /// Returns the static description of this controller.
    fn descriptor(&self) -> ControllerDescriptor;

    /// Invokes a handler with bound arguments and the per-request response.
    ///
    /// Returns the handler's body text; `None` (or an empty string) becomes
    /// an empty response body.
    ///
    /// # Errors
    ///
    /// Returns [`PharosError::UnknownHandler`] when `handler` is not one of
    /// the descriptor's handlers.
    fn invoke(
        &self,
        handler: &str,
        args: &Args,
        response: &mut Response,
    ) -> PharosResult<Option<String>>;
}

/// Boxed handler body shared by [`FnController`].
pub type HandlerFn = Arc<dyn Fn(&Args, &mut Response) -> Option<String> + Send + Sync>;

/// A closure-backed [`Controller`].
///
/// `FnController` pairs each [`HandlerDescriptor`] with a closure, which
/// keeps the descriptor and the invocation table in one registration call
/// site.
///
/// # Example
///
/// ```
/// use pharos_core::{Controller, FnController, HandlerDescriptor};
///
/// let controller = FnController::builder("controllers::HomeController")
///     .handler(HandlerDescriptor::new("indexAction"), |_args, _response| {
///         Some("welcome".to_string())
///     })
///     .build();
///
/// assert_eq!(controller.descriptor().handlers().len(), 1);
/// ```
pub struct FnController {
    descriptor: ControllerDescriptor,
    bodies: HashMap<String, HandlerFn>,
}

impl FnController {
    /// Starts building a controller for the given identity.
    #[must_use]
    pub fn builder(name: impl Into<ControllerName>) -> FnControllerBuilder {
        FnControllerBuilder {
            descriptor: ControllerDescriptor::new(name),
            bodies: HashMap::new(),
        }
    }
}

impl fmt::Debug for FnController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnController")
            .field("name", &self.descriptor.name())
            .field("handlers", &self.descriptor.handlers().len())
            .finish()
    }
}

impl Controller for FnController {
    fn descriptor(&self) -> ControllerDescriptor {
        self.descriptor.clone()
    }

    fn invoke(
        &self,
        handler: &str,
        args: &Args,
        response: &mut Response,
    ) -> PharosResult<Option<String>> {
        let body = self.bodies.get(handler).ok_or_else(|| {
            PharosError::unknown_handler(self.descriptor.name().as_str(), handler)
        })?;
        Ok(body(args, response))
    }
}

/// Builder for [`FnController`].
pub struct FnControllerBuilder {
    descriptor: ControllerDescriptor,
    bodies: HashMap<String, HandlerFn>,
}

impl FnControllerBuilder {
    /// Adds a handler descriptor together with its body.
    #[must_use]
    pub fn handler(
        mut self,
        descriptor: HandlerDescriptor,
        body: impl Fn(&Args, &mut Response) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.bodies.insert(descriptor.name.clone(), Arc::new(body));
        self.descriptor = self.descriptor.with_handler(descriptor);
        self
    }

    /// Finishes the controller.
    #[must_use]
    pub fn build(self) -> FnController {
        FnController {
            descriptor: self.descriptor,
            bodies: self.bodies,
        }
    }
}
