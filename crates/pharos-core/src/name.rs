//! Controller identity and naming rules.
//!
//! Controllers are identified by a `::`-separated path such as
//! `controllers::tools::Base64Controller`. The identity is the registry key
//! and also drives the convention-routing rules: the short name and namespace
//! path derived here feed base-path composition in the route resolver.

use std::fmt;

/// Namespace root that is stripped when deriving the namespace path.
const NAMESPACE_ROOT: &str = "controllers";

/// Class-name suffix that is stripped when deriving the short name.
const CONTROLLER_SUFFIX: &str = "Controller";

/// A fully-qualified controller identity.
///
/// # Example
///
/// ```
/// use pharos_core::ControllerName;
///
/// let name = ControllerName::parse("controllers::tools::Base64Controller");
/// assert_eq!(name.short_name(), "base64");
/// assert_eq!(name.namespace_path(), "tools");
/// assert_eq!(name.as_str(), "controllers::tools::Base64Controller");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControllerName {
    full: String,
}

impl ControllerName {
    /// Parses a controller identity from its fully-qualified form.
    ///
    /// Any non-empty string is a valid identity; the segments are interpreted
    /// lazily by [`short_name`](Self::short_name) and
    /// [`namespace_path`](Self::namespace_path).
    #[must_use]
    pub fn parse(full: impl Into<String>) -> Self {
        Self { full: full.into() }
    }

    /// Returns the fully-qualified identity.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// Returns the derived short controller name.
    ///
    /// The short name is the last `::` segment with a trailing `Controller`
    /// suffix removed, lower-cased. `Base64Controller` becomes `base64`.
    #[must_use]
    pub fn short_name(&self) -> String {
        let last = self.full.rsplit("::").next().unwrap_or(&self.full);
        let stripped = last.strip_suffix(CONTROLLER_SUFFIX).unwrap_or(last);
        stripped.to_lowercase()
    }

    /// Returns the derived namespace path.
    ///
    /// All segments before the class name, with a leading `controllers` root
    /// stripped case-insensitively, lower-cased and joined with `/`. An
    /// identity directly under the root has an empty namespace path.
    #[must_use]
    pub fn namespace_path(&self) -> String {
        let segments: Vec<&str> = self.full.split("::").collect();
        if segments.len() < 2 {
            return String::new();
        }
        let inner = &segments[..segments.len() - 1];
        let inner = match inner.first() {
            Some(first) if first.eq_ignore_ascii_case(NAMESPACE_ROOT) => &inner[1..],
            _ => inner,
        };
        inner
            .iter()
            .map(|s| s.to_lowercase())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Returns `true` if this identity lives under the given namespace.
    ///
    /// The namespace is compared segment-wise against the fully-qualified
    /// identity, so `controllers::tools` covers
    /// `controllers::tools::TextController` but not
    /// `controllers::toolsmith::TextController`.
    #[must_use]
    pub fn in_namespace(&self, namespace: &str) -> bool {
        match self.full.strip_prefix(namespace) {
            Some(rest) => rest.starts_with("::"),
            None => false,
        }
    }
}

impl fmt::Display for ControllerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl From<&str> for ControllerName {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for ControllerName {
    fn from(value: String) -> Self {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_strips_suffix() {
        let name = ControllerName::parse("controllers::tools::Base64Controller");
        assert_eq!(name.short_name(), "base64");
    }

    #[test]
    fn test_short_name_without_suffix() {
        let name = ControllerName::parse("controllers::tools::Helpers");
        assert_eq!(name.short_name(), "helpers");
    }

    #[test]
    fn test_namespace_path_strips_root() {
        let name = ControllerName::parse("controllers::tools::TextController");
        assert_eq!(name.namespace_path(), "tools");
    }

    #[test]
    fn test_namespace_path_root_level() {
        let name = ControllerName::parse("controllers::IndexController");
        assert_eq!(name.namespace_path(), "");
    }

    #[test]
    fn test_namespace_path_nested() {
        let name = ControllerName::parse("controllers::Admin::Tools::TextController");
        assert_eq!(name.namespace_path(), "admin/tools");
    }

    #[test]
    fn test_namespace_path_case_insensitive_root() {
        let name = ControllerName::parse("Controllers::Tools::TextController");
        assert_eq!(name.namespace_path(), "tools");
    }

    #[test]
    fn test_namespace_path_bare_name() {
        let name = ControllerName::parse("ToolsController");
        assert_eq!(name.namespace_path(), "");
        assert_eq!(name.short_name(), "tools");
    }

    #[test]
    fn test_in_namespace() {
        let name = ControllerName::parse("controllers::tools::TextController");
        assert!(name.in_namespace("controllers::tools"));
        assert!(name.in_namespace("controllers"));
        assert!(!name.in_namespace("controllers::toolsmith"));
        assert!(!name.in_namespace("controllers::tools::TextController"));
    }

    #[test]
    fn test_display_is_full_identity() {
        let name = ControllerName::parse("controllers::ToolsController");
        assert_eq!(name.to_string(), "controllers::ToolsController");
    }
}
