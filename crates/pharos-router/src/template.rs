//! Route template compilation.
//!
//! A [`PathTemplate`] is compiled once from a template string such as
//! `/user/{id}` and matched against request paths at dispatch time. Each
//! `{name}` placeholder becomes a positional capture matching one or more
//! non-`/` characters; everything else is literal text. The compiled matcher
//! is anchored to the full path.

use regex::Regex;
use thiserror::Error;

use crate::params::PathParams;

/// Placeholder syntax: one or more word characters between braces.
const PLACEHOLDER_PATTERN: &str = r"\{([A-Za-z0-9_]+)\}";

/// Error compiling a route template.
///
/// Templates are trusted, author-supplied strings; the only failure mode is
/// the regex engine rejecting the built pattern, which registration
/// propagates instead of sanitizing.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The built matcher failed to compile.
    #[error("failed to compile route template '{template}'")]
    Compile {
        /// The offending template.
        template: String,
        /// The regex engine error.
        #[source]
        source: Box<regex::Error>,
    },
}

/// A compiled route template: anchored matcher plus ordered parameter names.
///
/// # Example
///
/// ```
/// use pharos_router::PathTemplate;
///
/// let template = PathTemplate::compile("/user/{id}").unwrap();
/// assert_eq!(template.param_names(), &["id"]);
///
/// let params = template.captures("/user/123").unwrap();
/// assert_eq!(params.get("id"), Some("123"));
/// assert!(template.captures("/user/123/extra").is_none());
/// ```
///
/// # Placeholder rules
///
/// - A placeholder matches a single path segment; it never spans a `/`.
/// - Parameter names are recorded left to right.
/// - Duplicate placeholder names are not rejected; lookups return the last
///   occurrence's captured value.
/// - Braces that do not wrap a word-character identifier (including an
///   unterminated `{`) are treated as literal text.
/// - A single trailing slash is stripped from both template and path before
///   matching; the root template `/` is left untouched.
#[derive(Debug, Clone)]
pub struct PathTemplate {
    template: String,
    regex: Regex,
    param_names: Vec<String>,
}

impl PathTemplate {
    /// Compiles a template into an anchored matcher.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Compile`] if the regex engine rejects the
    /// built pattern.
    pub fn compile(template: &str) -> Result<Self, TemplateError> {
        let normalized = strip_trailing_slash(template);

        let placeholder = Regex::new(PLACEHOLDER_PATTERN).map_err(|source| {
            TemplateError::Compile {
                template: template.to_string(),
                source: Box::new(source),
            }
        })?;

        let mut pattern = String::with_capacity(normalized.len() + 16);
        pattern.push('^');
        let mut param_names = Vec::new();
        let mut last = 0;
        for found in placeholder.find_iter(normalized) {
            pattern.push_str(&regex::escape(&normalized[last..found.start()]));
            pattern.push_str("([^/]+)");
            // Trim the surrounding braces off the match.
            param_names.push(normalized[found.start() + 1..found.end() - 1].to_string());
            last = found.end();
        }
        pattern.push_str(&regex::escape(&normalized[last..]));
        pattern.push('$');

        let regex = Regex::new(&pattern).map_err(|source| TemplateError::Compile {
            template: template.to_string(),
            source: Box::new(source),
        })?;

        Ok(Self {
            template: normalized.to_string(),
            regex,
            param_names,
        })
    }

    /// Returns the normalized template string.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the parameter names in left-to-right template order.
    #[must_use]
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Matches a path and extracts parameters.
    ///
    /// Returns `None` if the path does not match. Captured values are zipped
    /// with the parameter names in template order.
    #[must_use]
    pub fn captures(&self, path: &str) -> Option<PathParams> {
        let normalized = strip_trailing_slash(path);
        let caps = self.regex.captures(normalized)?;

        let mut params = PathParams::with_capacity(self.param_names.len());
        for (name, group) in self.param_names.iter().zip(caps.iter().skip(1)) {
            if let Some(value) = group {
                params.push(name.clone(), value.as_str().to_string());
            }
        }
        Some(params)
    }

    /// Returns `true` if the path matches without extracting parameters.
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(strip_trailing_slash(path))
    }
}

/// Strips a single trailing slash, leaving the root path untouched.
#[must_use]
pub fn strip_trailing_slash(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_literal_template() {
        let template = PathTemplate::compile("/tools/profile").unwrap();
        assert!(template.is_match("/tools/profile"));
        assert!(!template.is_match("/tools"));
        assert!(!template.is_match("/tools/profile/extra"));
        assert!(template.param_names().is_empty());
    }

    #[test]
    fn test_single_param_round_trip() {
        let template = PathTemplate::compile("/user/{id}").unwrap();
        assert_eq!(template.param_names(), &["id"]);

        let params = template.captures("/user/123").unwrap();
        assert_eq!(params.get("id"), Some("123"));
    }

    #[test]
    fn test_multiple_params_ordered() {
        let template = PathTemplate::compile("/orgs/{org}/users/{user}").unwrap();
        assert_eq!(template.param_names(), &["org", "user"]);

        let params = template.captures("/orgs/acme/users/42").unwrap();
        assert_eq!(params.get("org"), Some("acme"));
        assert_eq!(params.get("user"), Some("42"));
    }

    #[test]
    fn test_param_never_spans_slash() {
        let template = PathTemplate::compile("/files/{name}").unwrap();
        assert!(template.captures("/files/a/b").is_none());
    }

    #[test]
    fn test_param_requires_one_char() {
        let template = PathTemplate::compile("/user/{id}").unwrap();
        assert!(template.captures("/user/").is_none());
        assert!(template.captures("/user").is_none());
    }

    #[test]
    fn test_embedded_placeholder() {
        let template = PathTemplate::compile("/download/file-{name}.txt").unwrap();
        let params = template.captures("/download/file-report.txt").unwrap();
        assert_eq!(params.get("name"), Some("report"));
    }

    #[test]
    fn test_trailing_slash_stripped_from_template_and_path() {
        let template = PathTemplate::compile("/tools/").unwrap();
        assert_eq!(template.template(), "/tools");
        assert!(template.is_match("/tools"));
        assert!(template.is_match("/tools/"));
    }

    #[test]
    fn test_root_template() {
        let template = PathTemplate::compile("/").unwrap();
        assert!(template.is_match("/"));
        assert!(!template.is_match("/x"));
    }

    #[test]
    fn test_unterminated_brace_is_literal() {
        let template = PathTemplate::compile("/odd/{name").unwrap();
        assert!(template.param_names().is_empty());
        assert!(template.is_match("/odd/{name"));
        assert!(!template.is_match("/odd/value"));
    }

    #[test]
    fn test_non_word_brace_is_literal() {
        let template = PathTemplate::compile("/odd/{a-b}").unwrap();
        assert!(template.param_names().is_empty());
        assert!(template.is_match("/odd/{a-b}"));
    }

    #[test]
    fn test_literal_regex_metacharacters_escaped() {
        let template = PathTemplate::compile("/api/v1.0/{id}").unwrap();
        assert!(template.captures("/api/v1.0/7").is_some());
        assert!(template.captures("/api/v1X0/7").is_none());
    }

    #[test]
    fn test_duplicate_placeholder_last_wins() {
        let template = PathTemplate::compile("/pair/{x}/{x}").unwrap();
        assert_eq!(template.param_names(), &["x", "x"]);

        let params = template.captures("/pair/first/second").unwrap();
        assert_eq!(params.get("x"), Some("second"));
    }

    proptest! {
        /// Matching is invariant under a single trailing slash on the path.
        #[test]
        fn prop_trailing_slash_idempotent(segment in "[a-z]{1,8}", value in "[a-z0-9]{1,8}") {
            let template = PathTemplate::compile(&format!("/{segment}/{{v}}")).unwrap();
            let bare = format!("/{segment}/{value}");
            let slashed = format!("{bare}/");

            let a = template.captures(&bare);
            let b = template.captures(&slashed);
            prop_assert_eq!(a.is_some(), b.is_some());
            if let (Some(a), Some(b)) = (a, b) {
                prop_assert_eq!(a.get("v"), b.get("v"));
            }
        }

        /// A compiled template always records one name per placeholder.
        #[test]
        fn prop_param_count_matches_placeholders(names in prop::collection::vec("[a-z]{1,6}", 1..4)) {
            let template_str: String = names
                .iter()
                .map(|n| format!("/{{{n}}}"))
                .collect();
            let template = PathTemplate::compile(&template_str).unwrap();
            prop_assert_eq!(template.param_names().len(), names.len());
        }
    }
}
