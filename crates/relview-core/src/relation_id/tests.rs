//! Tests for relation id parsing

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_classifies_symbols_and_types() {
    let id = RelationId::parse("/:output/:users/Int64/String");

    assert_eq!(
        id.segments(),
        &[
            PathSegment::Symbol("output".to_string()),
            PathSegment::Symbol("users".to_string()),
            PathSegment::Type(ValueType::Int64),
            PathSegment::Type(ValueType::String),
        ]
    );
    assert_eq!(id.name(), Some("output"));
    assert_eq!(id.arity(), 2);
    assert_eq!(id.symbols().collect::<Vec<_>>(), vec!["output", "users"]);
    assert_eq!(id.type_markers().collect::<Vec<_>>(), vec!["Int64", "String"]);
}

#[test]
fn test_parse_drops_empty_segments() {
    let id = RelationId::parse("//:a///Int64/");
    assert_eq!(id.segments().len(), 2);
    assert_eq!(id.to_path(), "/:a/Int64");
}

#[test]
fn test_parse_empty_string() {
    let id = RelationId::parse("");
    assert!(id.segments().is_empty());
    assert_eq!(id.name(), None);
    assert_eq!(id.to_path(), "");
}

#[test]
fn test_reparse_is_idempotent() {
    let inputs = [
        "/:output/:a/Int64",
        "Int64/String",
        ":x//:y/Char/",
        "/:output/FixedDecimal{64,2}/:z",
        "",
        "///",
    ];

    for input in inputs {
        let parsed = RelationId::parse(input);
        let reparsed = RelationId::parse(&parsed.to_path());
        assert_eq!(parsed, reparsed, "re-splitting {input:?} changed segments");

        let expected: Vec<&str> = input.split('/').filter(|s| !s.is_empty()).collect();
        let rendered: Vec<String> = parsed.segments().iter().map(|s| s.to_string()).collect();
        assert_eq!(rendered, expected);
    }
}

#[test]
fn test_suffix_without_name() {
    let named = RelationId::parse("/:output/:a/Int64");
    assert_eq!(named.suffix().len(), 2);

    let anonymous = RelationId::parse("/Int64/:a");
    assert_eq!(anonymous.name(), None);
    assert_eq!(anonymous.suffix().len(), 2);
}

#[test]
fn test_starts_with_symbols() {
    let id = RelationId::parse("/:rel/:catalog/:diagnostic/:code/Int64/String");
    assert!(id.starts_with_symbols(&["rel", "catalog", "diagnostic"]));
    assert!(!id.starts_with_symbols(&["rel", "diagnostic"]));
    assert!(id.has_symbol("code"));
    assert!(!id.has_symbol("Int64"));
}

#[test]
fn test_ordering_follows_path_text() {
    let mut ids = vec![
        RelationId::parse("/:output/:b/Int64"),
        RelationId::parse("/:output/:a/String"),
        RelationId::parse("/:abc/Int64"),
    ];
    ids.sort();
    let paths: Vec<String> = ids.iter().map(RelationId::to_path).collect();
    assert_eq!(paths, vec!["/:abc/Int64", "/:output/:a/String", "/:output/:b/Int64"]);
}

#[test]
fn test_serde_round_trips_through_path_text() {
    let id = RelationId::parse("/:output/Int64");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"/:output/Int64\"");
}
