//! Lenient numeric parsing for upstream indicator values.
//!
//! Upstream values arrive as strings, numbers or null. A value that cannot be
//! read as a finite number becomes `0.0`; the record itself is always kept.

use serde_json::Value;

/// Parse a raw indicator value, substituting `0.0` on failure.
///
/// Surrounding whitespace is ignored. Empty strings, non-numeric text and
/// non-finite results (`NaN`, `inf`) all yield `0.0`.
#[must_use]
pub fn parse_indicator_value(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Read an indicator value from a JSON field that may be a string, a number or absent.
#[must_use]
pub fn indicator_value_from_json(raw: Option<&Value>) -> f64 {
    match raw {
        Some(Value::String(s)) => parse_indicator_value(s),
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        _ => 0.0,
    }
}
