//! Bound handler arguments.
//!
//! After a route matches, the dispatcher coerces each captured path value to
//! its declared kind and collects the results into [`Args`], preserving the
//! handler's parameter declaration order. Parameters declared by the handler
//! but absent from the captured set are bound as [`ParamValue::Absent`]
//! rather than rejected.

/// A single coerced argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// A validated integer.
    Int(i64),
    /// A validated float.
    Float(f64),
    /// A validated boolean.
    Bool(bool),
    /// A pass-through string.
    Str(String),
    /// Declared by the handler but not captured from the path.
    Absent,
}

impl ParamValue {
    /// Returns the integer value, if this is an [`ParamValue::Int`].
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the float value, if this is a [`ParamValue::Float`].
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a [`ParamValue::Bool`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string value, if this is a [`ParamValue::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Returns `true` if the parameter was not captured.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// The ordered argument list passed to a handler invocation.
///
/// # Example
///
/// ```
/// use pharos_core::{Args, ParamValue};
///
/// let mut args = Args::new();
/// args.push("id", ParamValue::Int(123));
/// args.push("name", ParamValue::Str("alice".to_string()));
///
/// assert_eq!(args.int("id"), Some(123));
/// assert_eq!(args.str("name"), Some("alice"));
/// assert!(args.get("missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    inner: Vec<(String, ParamValue)>,
}

impl Args {
    /// Creates an empty argument list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an argument, preserving declaration order.
    pub fn push(&mut self, name: impl Into<String>, value: ParamValue) {
        self.inner.push((name.into(), value));
    }

    /// Returns the value bound to a name, including absent bindings.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.inner
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Convenience accessor for an integer argument.
    #[must_use]
    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ParamValue::as_int)
    }

    /// Convenience accessor for a float argument.
    #[must_use]
    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(ParamValue::as_float)
    }

    /// Convenience accessor for a boolean argument.
    #[must_use]
    pub fn bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(ParamValue::as_bool)
    }

    /// Convenience accessor for a string argument.
    #[must_use]
    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_str)
    }

    /// Returns the number of bound arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if no arguments are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the arguments in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.inner.iter().map(|(n, v)| (n.as_str(), v))
    }
}
