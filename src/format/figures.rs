use serde_json::Value;

/// Round a figure to the nearest integer for display
///
/// Missing and non-finite values become 0 instead of an error, so a table
/// cell always renders. Display-only: not meant to feed further math.
pub fn round_figure(value: Option<f64>) -> i64 {
    match value {
        Some(v) if v.is_finite() => v.round() as i64,
        _ => 0,
    }
}

/// Round a loosely-typed JSON field for display
///
/// Numbers round, numeric strings parse then round, everything else
/// (null, booleans, arrays, objects, non-numeric strings) becomes 0.
pub fn round_figure_value(value: &Value) -> i64 {
    round_figure(extract_number(value))
}

fn extract_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
