//! Core value types for relview

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single cell value inside a relation column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Missing value
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer up to 64 bits
    Int(i64),
    /// Unsigned integer up to 64 bits
    UInt(u64),
    /// 128-bit signed integer
    Int128(i128),
    /// Floating point
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Single character
    Char(char),
    /// Symbol value (stored without the leading `:`)
    Symbol(String),
    /// Calendar date
    Date(NaiveDate),
    /// Timestamp (UTC)
    DateTime(DateTime<Utc>),
    /// Binary data
    Bytes(Vec<u8>),
    /// JSON document
    Json(serde_json::Value),
}

impl Value {
    /// Check if the value is missing
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::UInt(v) => i64::try_from(*v).ok(),
            Value::Int128(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// The type this value naturally carries, used when a column has no marker
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Missing,
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int64,
            Value::UInt(_) => ValueType::UInt64,
            Value::Int128(_) => ValueType::Int128,
            Value::Float(_) => ValueType::Float64,
            Value::String(_) | Value::Json(_) => ValueType::String,
            Value::Char(_) => ValueType::Char,
            Value::Symbol(_) => ValueType::Symbol,
            Value::Date(_) => ValueType::Date,
            Value::DateTime(_) => ValueType::DateTime,
            Value::Bytes(_) => ValueType::Other("Bytes".to_string()),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "missing"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::UInt(v) => write!(f, "{}", v),
            Value::Int128(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{}", v),
            Value::Char(v) => write!(f, "{}", v),
            Value::Symbol(v) => write!(f, ":{}", v),
            Value::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            Value::DateTime(v) => write!(f, "{}", v.to_rfc3339()),
            Value::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            Value::Json(v) => write!(f, "{}", v),
        }
    }
}

/// Primitive type marker found in a relation id
///
/// Parsing is total: unknown markers are kept verbatim in `Other`, so
/// `ValueType::parse(t.as_str())` always gives back `t`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValueType {
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    UInt128,
    Float16,
    Float32,
    Float64,
    Bool,
    Bool8,
    String,
    Char,
    Symbol,
    Date,
    DateTime,
    Missing,
    Other(String),
}

impl ValueType {
    /// Parse a type marker
    pub fn parse(marker: &str) -> Self {
        match marker {
            "Int8" => Self::Int8,
            "Int16" => Self::Int16,
            "Int32" => Self::Int32,
            "Int64" => Self::Int64,
            "Int128" => Self::Int128,
            "UInt8" => Self::UInt8,
            "UInt16" => Self::UInt16,
            "UInt32" => Self::UInt32,
            "UInt64" => Self::UInt64,
            "UInt128" => Self::UInt128,
            "Float16" => Self::Float16,
            "Float32" => Self::Float32,
            "Float64" => Self::Float64,
            "Bool" => Self::Bool,
            "Bool8" => Self::Bool8,
            "String" => Self::String,
            "Char" => Self::Char,
            "Symbol" => Self::Symbol,
            "Date" => Self::Date,
            "DateTime" => Self::DateTime,
            "Missing" => Self::Missing,
            other => Self::Other(other.to_string()),
        }
    }

    /// The marker text as it appears in a relation id
    pub fn as_str(&self) -> &str {
        match self {
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Int128 => "Int128",
            Self::UInt8 => "UInt8",
            Self::UInt16 => "UInt16",
            Self::UInt32 => "UInt32",
            Self::UInt64 => "UInt64",
            Self::UInt128 => "UInt128",
            Self::Float16 => "Float16",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Bool => "Bool",
            Self::Bool8 => "Bool8",
            Self::String => "String",
            Self::Char => "Char",
            Self::Symbol => "Symbol",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Missing => "Missing",
            Self::Other(s) => s,
        }
    }

    /// Whether values of this type are numeric
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Int128
                | Self::UInt8
                | Self::UInt16
                | Self::UInt32
                | Self::UInt64
                | Self::UInt128
                | Self::Float16
                | Self::Float32
                | Self::Float64
        )
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Bool | Self::Bool8)
    }

    /// Whether values of this type are textual
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::String | Self::Char)
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ValueType {
    fn from(marker: String) -> Self {
        Self::parse(&marker)
    }
}

impl From<ValueType> for String {
    fn from(value_type: ValueType) -> Self {
        value_type.as_str().to_string()
    }
}

#[cfg(test)]
mod tests;
