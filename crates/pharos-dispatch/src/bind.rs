//! Parameter binding and coercion.
//!
//! After a route matches, each parameter the handler declares is looked up
//! in the captured path values and coerced to its declared kind. Parameters
//! the path did not capture bind as absent without error; captured values
//! that fail coercion reject the request.

use pharos_core::{Args, ParamKind, ParamSpec, ParamValue, PharosError, PharosResult};
use pharos_router::PathParams;

/// Binds captured path values to a handler's declared parameters.
///
/// Arguments come out in declaration order, not capture order.
///
/// # Errors
///
/// Returns [`PharosError::InvalidParameter`] when a captured value fails
/// coercion, and [`PharosError::UnsupportedParameterType`] when the handler
/// declares a kind outside the closed set.
pub fn bind_args(specs: &[ParamSpec], captured: &PathParams) -> PharosResult<Args> {
    let mut args = Args::new();
    for spec in specs {
        let value = match captured.get(&spec.name) {
            None => ParamValue::Absent,
            Some(raw) => coerce(spec, raw)?,
        };
        args.push(spec.name.clone(), value);
    }
    Ok(args)
}

/// Coerces one captured value to its declared kind.
fn coerce(spec: &ParamSpec, raw: &str) -> PharosResult<ParamValue> {
    match &spec.kind {
        ParamKind::Int => parse_int(raw)
            .map(ParamValue::Int)
            .ok_or_else(|| invalid(spec, raw)),
        ParamKind::Float => parse_float(raw)
            .map(ParamValue::Float)
            .ok_or_else(|| invalid(spec, raw)),
        ParamKind::Bool => parse_bool(raw)
            .map(ParamValue::Bool)
            .ok_or_else(|| invalid(spec, raw)),
        ParamKind::Str | ParamKind::Any => Ok(ParamValue::Str(raw.to_string())),
        ParamKind::Unsupported(declared) => Err(PharosError::unsupported_parameter_type(
            &spec.name, declared,
        )),
    }
}

fn invalid(spec: &ParamSpec, raw: &str) -> PharosError {
    PharosError::invalid_parameter(&spec.name, spec.kind.label(), raw)
}

/// Integer rule: decimal digits only. No sign, no whitespace, no empty
/// string.
fn parse_int(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Float rule: anything Rust's `f64` parser accepts, as long as the result
/// is finite. Scientific notation and a leading sign are allowed.
fn parse_float(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Boolean rule: a fixed truthy/falsy token set, case-insensitive.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
