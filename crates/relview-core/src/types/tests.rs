//! Tests for value types

use super::*;

#[test]
fn test_value_type_parse_known_markers() {
    assert_eq!(ValueType::parse("Int64"), ValueType::Int64);
    assert_eq!(ValueType::parse("String"), ValueType::String);
    assert_eq!(ValueType::parse("Char"), ValueType::Char);
    assert_eq!(ValueType::parse("Float64"), ValueType::Float64);
}

#[test]
fn test_value_type_keeps_unknown_marker_text() {
    let marker = ValueType::parse("FixedDecimal{64,2}");
    assert_eq!(marker, ValueType::Other("FixedDecimal{64,2}".to_string()));
    assert_eq!(marker.to_string(), "FixedDecimal{64,2}");
}

#[test]
fn test_value_type_serde_as_plain_string() {
    let json = serde_json::to_string(&ValueType::UInt32).unwrap();
    assert_eq!(json, "\"UInt32\"");
    let parsed: ValueType = serde_json::from_str("\"Date\"").unwrap();
    assert_eq!(parsed, ValueType::Date);
}

#[test]
fn test_value_type_categories() {
    assert!(ValueType::Int128.is_numeric());
    assert!(ValueType::Float16.is_numeric());
    assert!(!ValueType::String.is_numeric());
    assert!(ValueType::Char.is_textual());
    assert!(!ValueType::Symbol.is_textual());
}

#[test]
fn test_value_display() {
    assert_eq!(Value::Int(-4).to_string(), "-4");
    assert_eq!(Value::Symbol("output".to_string()).to_string(), ":output");
    assert_eq!(Value::Bytes(vec![1, 2, 3]).to_string(), "<3 bytes>");
    assert_eq!(Value::Null.to_string(), "missing");
    let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    assert_eq!(Value::Date(date).to_string(), "2024-02-29");
}

#[test]
fn test_value_as_i64_narrowing() {
    assert_eq!(Value::UInt(7).as_i64(), Some(7));
    assert_eq!(Value::UInt(u64::MAX).as_i64(), None);
    assert_eq!(Value::Int128(-9).as_i64(), Some(-9));
    assert_eq!(Value::String("9".to_string()).as_i64(), None);
}
