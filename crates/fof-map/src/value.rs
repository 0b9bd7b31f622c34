//! Cell parsing and formatting per semantic type.

use fof_model::{FieldKind, FieldValue};

/// Parse a non-empty cell according to `kind`.
pub fn parse_cell(kind: FieldKind, raw: &str) -> Result<FieldValue, String> {
    match kind {
        FieldKind::Int => raw
            .parse::<i64>()
            .map(FieldValue::Int)
            .map_err(|e| e.to_string()),
        FieldKind::Real => raw
            .parse::<f64>()
            .map(FieldValue::Real)
            .map_err(|e| e.to_string()),
        FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
        FieldKind::Bool => parse_bool(raw)
            .map(FieldValue::Bool)
            .ok_or_else(|| "expected true or false".to_string()),
    }
}

/// Accepts the same spellings the game tooling writes: 1/0, t/f, true/false
/// in lower, upper, or title case.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// Format a value for a CSV cell.
///
/// Reals use Rust's shortest representation that parses back to the same
/// `f64`.
pub fn format_cell(value: &FieldValue) -> String {
    match value {
        FieldValue::Int(value) => value.to_string(),
        FieldValue::Real(value) => value.to_string(),
        FieldValue::Text(value) => value.clone(),
        FieldValue::Bool(value) => value.to_string(),
    }
}
