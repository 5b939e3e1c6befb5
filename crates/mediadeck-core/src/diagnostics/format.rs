//! Value formatting for the diagnostics overlay.
//!
//! Both functions are total: they accept any value and always return text.
//! Serialization failures degrade to a descriptive message instead of
//! propagating.

use serde::Serialize;
use serde_json::{Number, Value};

/// Placeholder summary for absent or falsy data.
pub const NO_DATA: &str = "No data";

/// Keys listed by [`summarize_shape`] before the ellipsis.
const SUMMARY_KEYS: usize = 3;

/// Render any serializable value as display text.
///
/// - null → `"null"`
/// - strings → unchanged, without quotes
/// - booleans and numbers → their canonical text
/// - arrays and objects → pretty JSON, 2-space indent, keys in insertion order
///
/// Values that cannot be serialized produce `"[Unserializable value: …]"`.
pub fn format_value<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(v) => format_json(&v),
        Err(e) => unserializable(&e),
    }
}

/// [`format_value`] for an optional field; `None` prints as `"null"`.
pub fn format_optional(value: Option<&Value>) -> String {
    value.map(format_json).unwrap_or_else(|| "null".to_string())
}

fn format_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => canonical_number(n),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|e| unserializable(&e))
        }
    }
}

/// Integral floats print without a trailing `.0`.
fn canonical_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        _ => n.to_string(),
    }
}

fn unserializable(err: &serde_json::Error) -> String {
    tracing::debug!(error = %err, "format: value could not be serialized");
    format!("[Unserializable value: {err}]")
}

/// One-line description of a value's shape.
///
/// Absent and falsy values (`null`, `false`, `0`, `""`) read `"No data"`.
pub fn summarize_shape(value: Option<&Value>) -> String {
    let Some(value) = value.filter(|v| !is_falsy(v)) else {
        return NO_DATA.to_string();
    };

    match value {
        Value::Array(items) => format!("Array ({} items)", items.len()),
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().take(SUMMARY_KEYS).map(String::as_str).collect();
            let more = if map.len() > SUMMARY_KEYS { "..." } else { "" };
            format!(
                "Object ({} properties: {}{})",
                map.len(),
                keys.join(", "),
                more
            )
        }
        Value::String(_) => "string".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Null => NO_DATA.to_string(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
