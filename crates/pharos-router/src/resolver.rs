//! Route resolution: precedence, naming convention, and base paths.
//!
//! For each handler the resolver decides the effective HTTP method and path
//! template from three candidate sources, first satisfied wins:
//!
//! 1. The explicit route declaration on the handler descriptor.
//! 2. A declarative [`RouteSources`] entry keyed by controller and handler.
//! 3. The naming convention, which only applies to handlers whose name ends
//!    in `Action`; anything else is silently skipped.

use std::collections::HashMap;

use http::Method;
use indexmap::IndexMap;

use pharos_core::{ControllerName, HandlerDescriptor};

/// Handler-name suffix required for convention routing.
const ACTION_SUFFIX: &str = "Action";

/// Method prefixes recognized by convention, checked case-insensitively.
const METHOD_PREFIXES: [(&str, Method); 7] = [
    ("get", Method::GET),
    ("post", Method::POST),
    ("put", Method::PUT),
    ("delete", Method::DELETE),
    ("patch", Method::PATCH),
    ("options", Method::OPTIONS),
    ("head", Method::HEAD),
];

/// A controller's configured base path.
///
/// Controls how convention-derived routes are nested. The composition rules
/// per variant, for short controller name `c` and action `a`:
///
/// | variant        | index route | other routes      |
/// |----------------|-------------|-------------------|
/// | `Derive`       | `/<ns>`     | `/<ns>/a`         |
/// | `Root`         | `/`         | `/a`              |
/// | `Slash`        | `/c`        | `/c/a`            |
/// | `Prefix(p)`    | `p/c`       | `p/c/a`           |
///
/// where `<ns>` is the namespace path derived from the controller identity
/// (empty namespace collapses to the root `/`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BasePath {
    /// Derive the prefix from the controller's namespace. Used both for
    /// controllers absent from the config and for an explicitly null path.
    #[default]
    Derive,
    /// Configured as `""`: routes mount at the root, controller segment
    /// omitted.
    Root,
    /// Configured as `"/"`: routes mount at the root under the controller
    /// segment.
    Slash,
    /// Any other configured prefix; trailing slashes are ignored.
    Prefix(String),
}

impl BasePath {
    /// Interprets a configured base path value.
    ///
    /// `None` (absent or explicit null in the config) derives from the
    /// namespace; `""` and `"/"` have their special meanings; anything else
    /// is an explicit prefix.
    #[must_use]
    pub fn parse(configured: Option<&str>) -> Self {
        match configured {
            None => Self::Derive,
            Some("") => Self::Root,
            Some("/") => Self::Slash,
            Some(prefix) => Self::Prefix(prefix.to_string()),
        }
    }
}

/// A declarative route entry from the external config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// The HTTP method.
    pub method: Method,
    /// The route template.
    pub path: String,
}

/// Declarative route entries keyed by `controller::handler`.
///
/// Built once from the parsed config and read-only afterwards. Insertion
/// order is preserved, mirroring the order of the config file.
#[derive(Debug, Clone, Default)]
pub struct RouteSources {
    inner: IndexMap<String, SourceEntry>,
}

impl RouteSources {
    /// Creates an empty source map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry for a controller/handler pair.
    ///
    /// A later insert for the same pair replaces the earlier one.
    pub fn insert(
        &mut self,
        controller: &str,
        handler: &str,
        method: Method,
        path: impl Into<String>,
    ) {
        self.inner.insert(
            Self::key(controller, handler),
            SourceEntry {
                method,
                path: path.into(),
            },
        );
    }

    /// Looks up the entry for a controller/handler pair.
    #[must_use]
    pub fn get(&self, controller: &str, handler: &str) -> Option<&SourceEntry> {
        self.inner.get(&Self::key(controller, handler))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn key(controller: &str, handler: &str) -> String {
        format!("{controller}::{handler}")
    }
}

/// Configured base paths, by exact controller identity or by namespace.
///
/// Lookup precedence: an exact controller entry wins over namespace entries;
/// among namespace entries the longest (most specific) match wins; a
/// controller matched by neither derives its base path from its namespace.
#[derive(Debug, Clone, Default)]
pub struct BasePathTable {
    controllers: HashMap<String, BasePath>,
    namespaces: Vec<(String, BasePath)>,
}

impl BasePathTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base path for an exact controller identity.
    pub fn set_controller(&mut self, name: impl Into<String>, base: BasePath) {
        self.controllers.insert(name.into(), base);
    }

    /// Sets the base path for every controller under a namespace.
    pub fn set_namespace(&mut self, namespace: impl Into<String>, base: BasePath) {
        self.namespaces.push((namespace.into(), base));
    }

    /// Resolves the effective base path for a controller.
    #[must_use]
    pub fn lookup(&self, name: &ControllerName) -> BasePath {
        if let Some(base) = self.controllers.get(name.as_str()) {
            return base.clone();
        }
        self.namespaces
            .iter()
            .filter(|(ns, _)| name.in_namespace(ns))
            .max_by_key(|(ns, _)| ns.len())
            .map(|(_, base)| base.clone())
            .unwrap_or_default()
    }
}

/// Resolves handlers to `(method, template)` pairs.
///
/// # Example
///
/// ```
/// use http::Method;
/// use pharos_core::{ControllerName, HandlerDescriptor};
/// use pharos_router::{BasePathTable, RouteResolver, RouteSources};
///
/// let sources = RouteSources::new();
/// let base_paths = BasePathTable::new();
/// let resolver = RouteResolver::new(&sources, &base_paths);
///
/// let controller = ControllerName::parse("controllers::tools::ToolsController");
/// let handler = HandlerDescriptor::new("getProfileAction");
///
/// let (method, path) = resolver.resolve(&controller, &handler).unwrap();
/// assert_eq!(method, Method::GET);
/// assert_eq!(path, "/tools/profile");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteResolver<'a> {
    sources: &'a RouteSources,
    base_paths: &'a BasePathTable,
}

impl<'a> RouteResolver<'a> {
    /// Creates a resolver over the given declarative inputs.
    #[must_use]
    pub const fn new(sources: &'a RouteSources, base_paths: &'a BasePathTable) -> Self {
        Self {
            sources,
            base_paths,
        }
    }

    /// Resolves the effective method and path template for a handler.
    ///
    /// Returns `None` when no source applies: the handler carries no route
    /// declaration, has no config entry, and its name lacks the `Action`
    /// suffix. Such handlers contribute nothing to the table.
    #[must_use]
    pub fn resolve(
        &self,
        controller: &ControllerName,
        handler: &HandlerDescriptor,
    ) -> Option<(Method, String)> {
        if let Some(route) = &handler.route {
            let method = route.method.clone().unwrap_or(Method::GET);
            return Some((method, route.path.clone()));
        }

        if let Some(entry) = self.sources.get(controller.as_str(), &handler.name) {
            return Some((entry.method.clone(), entry.path.clone()));
        }

        self.convention(controller, &handler.name)
    }

    /// Applies the `Action`-suffix naming convention.
    fn convention(&self, controller: &ControllerName, name: &str) -> Option<(Method, String)> {
        let stem = name.strip_suffix(ACTION_SUFFIX)?;
        let (method, raw_action) = split_method_prefix(stem);
        let action = normalize_action(raw_action);
        let base = self.base_paths.lookup(controller);
        Some((method, compose_path(controller, &base, &action)))
    }
}

/// Splits a recognized HTTP-method prefix off the handler-name stem.
///
/// The prefix check is case-insensitive. Because every convention-eligible
/// name carries the `Action` suffix, the "followed by more text" requirement
/// is always satisfied once the stem starts with a prefix.
fn split_method_prefix(stem: &str) -> (Method, &str) {
    for (prefix, method) in METHOD_PREFIXES {
        let n = prefix.len();
        if stem.len() >= n && stem.is_char_boundary(n) && stem[..n].eq_ignore_ascii_case(prefix) {
            return (method, &stem[n..]);
        }
    }
    (Method::GET, stem)
}

/// Normalizes a raw action name into its URL form.
///
/// Empty names and any casing of `index` become the literal `index`. All
/// other names get a hyphen inserted between a lowercase/digit character and
/// a following uppercase character, underscores replaced with hyphens, and
/// the result lower-cased: `base64Encode` becomes `base64-encode`.
fn normalize_action(raw: &str) -> String {
    if raw.is_empty() || raw.eq_ignore_ascii_case("index") {
        return "index".to_string();
    }

    let mut out = String::with_capacity(raw.len() + 4);
    let mut prev_lower_or_digit = false;
    for ch in raw.chars() {
        if ch == '_' {
            out.push('-');
            prev_lower_or_digit = false;
            continue;
        }
        if ch.is_ascii_uppercase() && prev_lower_or_digit {
            out.push('-');
        }
        prev_lower_or_digit = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        for lower in ch.to_lowercase() {
            out.push(lower);
        }
    }
    out
}

/// Composes the route path for an action under a base path.
fn compose_path(controller: &ControllerName, base: &BasePath, action: &str) -> String {
    let index = action == "index";
    let raw = match base {
        BasePath::Derive => {
            let ns = controller.namespace_path();
            if index {
                ns
            } else if ns.is_empty() {
                action.to_string()
            } else {
                format!("{ns}/{action}")
            }
        }
        BasePath::Root => {
            if index {
                String::new()
            } else {
                action.to_string()
            }
        }
        BasePath::Slash => {
            let short = controller.short_name();
            if index {
                short
            } else {
                format!("{short}/{action}")
            }
        }
        BasePath::Prefix(prefix) => {
            let prefix = prefix.trim_end_matches('/');
            let short = controller.short_name();
            if index {
                format!("{prefix}/{short}")
            } else {
                format!("{prefix}/{short}/{action}")
            }
        }
    };

    let trimmed = raw.trim_start_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharos_core::RouteSpec;

    fn resolve_with(
        controller: &str,
        handler: HandlerDescriptor,
        sources: &RouteSources,
        base_paths: &BasePathTable,
    ) -> Option<(Method, String)> {
        let name = ControllerName::parse(controller);
        RouteResolver::new(sources, base_paths).resolve(&name, &handler)
    }

    fn resolve_plain(controller: &str, handler: &str) -> Option<(Method, String)> {
        resolve_with(
            controller,
            HandlerDescriptor::new(handler),
            &RouteSources::new(),
            &BasePathTable::new(),
        )
    }

    #[test]
    fn test_explicit_route_wins_over_source_entry() {
        let mut sources = RouteSources::new();
        sources.insert(
            "controllers::UserController",
            "showAction",
            Method::POST,
            "/from-config",
        );

        let handler = HandlerDescriptor::new("showAction")
            .with_route(RouteSpec::new("/from-annotation").with_method(Method::GET));
        let (method, path) = resolve_with(
            "controllers::UserController",
            handler,
            &sources,
            &BasePathTable::new(),
        )
        .unwrap();

        assert_eq!(method, Method::GET);
        assert_eq!(path, "/from-annotation");
    }

    #[test]
    fn test_explicit_route_defaults_to_get() {
        let handler = HandlerDescriptor::new("anyName").with_route(RouteSpec::new("/x"));
        let (method, _) = resolve_with(
            "controllers::XController",
            handler,
            &RouteSources::new(),
            &BasePathTable::new(),
        )
        .unwrap();
        assert_eq!(method, Method::GET);
    }

    #[test]
    fn test_source_entry_wins_over_convention() {
        let mut sources = RouteSources::new();
        sources.insert(
            "controllers::tools::ToolsController",
            "getProfileAction",
            Method::PUT,
            "/custom/profile",
        );

        let (method, path) = resolve_with(
            "controllers::tools::ToolsController",
            HandlerDescriptor::new("getProfileAction"),
            &sources,
            &BasePathTable::new(),
        )
        .unwrap();

        assert_eq!(method, Method::PUT);
        assert_eq!(path, "/custom/profile");
    }

    #[test]
    fn test_non_action_handler_is_skipped() {
        assert!(resolve_plain("controllers::tools::ToolsController", "helperMethod").is_none());
        assert!(resolve_plain("controllers::tools::ToolsController", "actionHelper").is_none());
    }

    #[test]
    fn test_source_entry_applies_to_non_action_handler() {
        let mut sources = RouteSources::new();
        sources.insert(
            "controllers::tools::ToolsController",
            "helperMethod",
            Method::GET,
            "/helper",
        );

        let resolved = resolve_with(
            "controllers::tools::ToolsController",
            HandlerDescriptor::new("helperMethod"),
            &sources,
            &BasePathTable::new(),
        );
        assert_eq!(resolved, Some((Method::GET, "/helper".to_string())));
    }

    #[test]
    fn test_method_prefix_inference() {
        let cases = [
            ("getProfileAction", Method::GET, "/tools/profile"),
            ("postSubmitAction", Method::POST, "/tools/submit"),
            ("putUpdateAction", Method::PUT, "/tools/update"),
            ("deleteRemoveAction", Method::DELETE, "/tools/remove"),
            ("patchFixAction", Method::PATCH, "/tools/fix"),
            ("optionsProbeAction", Method::OPTIONS, "/tools/probe"),
            ("headPeekAction", Method::HEAD, "/tools/peek"),
        ];
        for (name, method, path) in cases {
            let (m, p) = resolve_plain("controllers::tools::ToolsController", name).unwrap();
            assert_eq!(m, method, "{name}");
            assert_eq!(p, path, "{name}");
        }
    }

    #[test]
    fn test_no_prefix_defaults_to_get() {
        let (method, path) =
            resolve_plain("controllers::tools::ToolsController", "summaryAction").unwrap();
        assert_eq!(method, Method::GET);
        assert_eq!(path, "/tools/summary");
    }

    #[test]
    fn test_bare_prefix_becomes_index() {
        let (method, path) =
            resolve_plain("controllers::tools::ToolsController", "postAction").unwrap();
        assert_eq!(method, Method::POST);
        assert_eq!(path, "/tools");
    }

    #[test]
    fn test_prefix_is_greedy_over_words() {
        // "posterAction" starts with the "post" prefix; the remainder "er"
        // becomes the action name.
        let (method, path) =
            resolve_plain("controllers::tools::ToolsController", "posterAction").unwrap();
        assert_eq!(method, Method::POST);
        assert_eq!(path, "/tools/er");
    }

    #[test]
    fn test_action_normalization() {
        let (_, path) =
            resolve_plain("controllers::tools::ToolsController", "base64EncodeAction").unwrap();
        assert_eq!(path, "/tools/base64-encode");

        let (_, path) =
            resolve_plain("controllers::tools::ToolsController", "getSnake_caseAction").unwrap();
        assert_eq!(path, "/tools/snake-case");

        let (_, path) =
            resolve_plain("controllers::tools::ToolsController", "getIndexAction").unwrap();
        assert_eq!(path, "/tools");
    }

    #[test]
    fn test_derived_empty_namespace_index_is_root() {
        let (_, path) = resolve_plain("controllers::HomeController", "indexAction").unwrap();
        assert_eq!(path, "/");

        let (_, path) = resolve_plain("controllers::HomeController", "getAboutAction").unwrap();
        assert_eq!(path, "/about");
    }

    #[test]
    fn test_derived_namespace_paths() {
        let (_, path) =
            resolve_plain("controllers::tools::TextController", "indexAction").unwrap();
        assert_eq!(path, "/tools");

        let (_, path) =
            resolve_plain("controllers::Admin::Tools::TextController", "getListAction").unwrap();
        assert_eq!(path, "/admin/tools/list");
    }

    #[test]
    fn test_base_path_root() {
        let mut base_paths = BasePathTable::new();
        base_paths.set_controller("controllers::SiteController", BasePath::Root);

        let sources = RouteSources::new();
        let resolve = |handler: &str| {
            resolve_with(
                "controllers::SiteController",
                HandlerDescriptor::new(handler),
                &sources,
                &base_paths,
            )
        };

        assert_eq!(resolve("indexAction").unwrap().1, "/");
        assert_eq!(resolve("getContactAction").unwrap().1, "/contact");
    }

    #[test]
    fn test_base_path_slash() {
        let mut base_paths = BasePathTable::new();
        base_paths.set_controller("controllers::tools::ToolsController", BasePath::Slash);

        let sources = RouteSources::new();
        let resolve = |handler: &str| {
            resolve_with(
                "controllers::tools::ToolsController",
                HandlerDescriptor::new(handler),
                &sources,
                &base_paths,
            )
        };

        assert_eq!(resolve("indexAction").unwrap().1, "/tools");
        assert_eq!(resolve("getProfileAction").unwrap().1, "/tools/profile");
    }

    #[test]
    fn test_base_path_prefix_inserts_controller_segment() {
        let mut base_paths = BasePathTable::new();
        base_paths.set_controller(
            "controllers::TextController",
            BasePath::Prefix("/utils/".to_string()),
        );

        let sources = RouteSources::new();
        let resolve = |handler: &str| {
            resolve_with(
                "controllers::TextController",
                HandlerDescriptor::new(handler),
                &sources,
                &base_paths,
            )
        };

        assert_eq!(resolve("indexAction").unwrap().1, "/utils/text");
        assert_eq!(resolve("postTrimAction").unwrap().1, "/utils/text/trim");
    }

    #[test]
    fn test_base_path_parse() {
        assert_eq!(BasePath::parse(None), BasePath::Derive);
        assert_eq!(BasePath::parse(Some("")), BasePath::Root);
        assert_eq!(BasePath::parse(Some("/")), BasePath::Slash);
        assert_eq!(
            BasePath::parse(Some("/utils")),
            BasePath::Prefix("/utils".to_string())
        );
    }

    #[test]
    fn test_base_path_table_precedence() {
        let mut table = BasePathTable::new();
        table.set_namespace("controllers", BasePath::Root);
        table.set_namespace("controllers::tools", BasePath::Slash);
        table.set_controller(
            "controllers::tools::SpecialController",
            BasePath::Prefix("/x".to_string()),
        );

        let special = ControllerName::parse("controllers::tools::SpecialController");
        assert_eq!(table.lookup(&special), BasePath::Prefix("/x".to_string()));

        let tools = ControllerName::parse("controllers::tools::TextController");
        assert_eq!(table.lookup(&tools), BasePath::Slash);

        let top = ControllerName::parse("controllers::HomeController");
        assert_eq!(table.lookup(&top), BasePath::Root);

        let elsewhere = ControllerName::parse("lib::OtherController");
        assert_eq!(table.lookup(&elsewhere), BasePath::Derive);
    }

    #[test]
    fn test_route_sources_replacement() {
        let mut sources = RouteSources::new();
        sources.insert("controllers::A", "x", Method::GET, "/first");
        sources.insert("controllers::A", "x", Method::POST, "/second");

        assert_eq!(sources.len(), 1);
        let entry = sources.get("controllers::A", "x").unwrap();
        assert_eq!(entry.method, Method::POST);
        assert_eq!(entry.path, "/second");
    }
}
