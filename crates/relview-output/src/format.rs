//! Type-tagged value formatting

use chrono::DateTime;
use relview_core::{Value, ValueType};

/// How much of a value's type shows through in its text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueStyle {
    /// The value's own `Display` text
    #[default]
    Plain,
    /// Coerced to the declared type, with strings quoted and symbols prefixed
    Tagged,
}

/// Format a cell value
///
/// With [`ValueStyle::Tagged`] the declared column type decides the
/// rendering: an integer in a `Float64` column shows as `3.0`, a
/// one-character string in a `Char` column as `'c'`, a millisecond
/// timestamp in a `DateTime` column as RFC 3339. Values that do not fit
/// their declared type fall back to their own tagged rendering.
pub fn format_value(value: &Value, declared: Option<&ValueType>, style: ValueStyle) -> String {
    match style {
        ValueStyle::Plain => value.to_string(),
        ValueStyle::Tagged => {
            let value_type = declared.cloned().unwrap_or_else(|| value.value_type());
            coerce(value, &value_type).unwrap_or_else(|| tagged(value))
        }
    }
}

fn coerce(value: &Value, value_type: &ValueType) -> Option<String> {
    match (value_type, value) {
        (ValueType::Float16 | ValueType::Float32 | ValueType::Float64, _) => {
            let float = match value {
                Value::Float(v) => *v,
                Value::Int(v) => *v as f64,
                Value::UInt(v) => *v as f64,
                _ => return None,
            };
            Some(format_float(float))
        }
        (t, Value::Float(v)) if t.is_numeric() && v.fract() == 0.0 && v.is_finite() => {
            Some(format!("{}", *v as i128))
        }
        (t, Value::Int(0) | Value::UInt(0)) if t.is_boolean() => Some("false".to_string()),
        (t, Value::Int(1) | Value::UInt(1)) if t.is_boolean() => Some("true".to_string()),
        (ValueType::Char, Value::String(s)) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(quote_char(c)),
                _ => None,
            }
        }
        (ValueType::Symbol, Value::String(s)) => Some(format!(":{}", s)),
        (ValueType::Date, Value::DateTime(dt)) => Some(dt.date_naive().format("%Y-%m-%d").to_string()),
        (ValueType::DateTime, Value::Int(ms)) => {
            DateTime::from_timestamp_millis(*ms).map(|dt| dt.to_rfc3339())
        }
        _ => None,
    }
}

fn tagged(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s.escape_debug()),
        Value::Char(c) => quote_char(*c),
        Value::Float(v) => format_float(*v),
        other => other.to_string(),
    }
}

fn quote_char(c: char) -> String {
    format!("'{}'", c.escape_debug())
}

/// Floats always show a fractional part so they read differently from integers
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
