//! Tests for diagnostics

use super::*;
use pretty_assertions::assert_eq;

fn field(name: &str, rows: &[(i64, &str)]) -> Relation {
    Relation::new(
        format!("/:rel/:catalog/:diagnostic/:{name}/Int64/String").as_str(),
        vec![
            rows.iter().map(|(i, _)| Value::Int(*i)).collect(),
            rows.iter().map(|(_, v)| Value::String((*v).to_string())).collect(),
        ],
    )
    .unwrap()
}

fn range(end: &str, coordinate: &str, rows: &[(i64, i64, i64)]) -> Relation {
    Relation::new(
        format!("/:rel/:catalog/:diagnostic/:range/:{end}/:{coordinate}/Int64/Int64/Int64").as_str(),
        vec![
            rows.iter().map(|r| Value::Int(r.0)).collect(),
            rows.iter().map(|r| Value::Int(r.1)).collect(),
            rows.iter().map(|r| Value::Int(r.2)).collect(),
        ],
    )
    .unwrap()
}

fn diagnostic(code: &str) -> Diagnostic {
    Diagnostic {
        code: code.to_string(),
        message: format!("{code} happened"),
        ..Diagnostic::default()
    }
}

#[test]
fn test_assembles_fields_by_index() {
    let relations = vec![
        field("code", &[(2, "UNDEFINED"), (1, "PARSE_ERROR")]),
        field("message", &[(1, "unexpected token"), (2, "`foo` is undefined")]),
        field("severity", &[(1, "error"), (2, "Warning")]),
        field("model", &[(2, "models/main")]),
        range("start", "line", &[(2, 1, 4)]),
        range("start", "character", &[(2, 1, 7)]),
        range("end", "line", &[(2, 1, 4), (2, 2, 99)]),
        Relation::new("/:output/Int64", vec![vec![Value::Int(1)]]).unwrap(),
    ];

    let diagnostics = diagnostics_from_relations(&relations);
    assert_eq!(diagnostics.len(), 2);

    assert_eq!(diagnostics[0].code, "PARSE_ERROR");
    assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Error);
    assert_eq!(diagnostics[0].range, None);

    let second = &diagnostics[1];
    assert_eq!(second.message, "`foo` is undefined");
    assert_eq!(second.severity, DiagnosticSeverity::Warning);
    assert_eq!(second.model.as_deref(), Some("models/main"));
    assert_eq!(
        second.range,
        Some(DiagnosticRange {
            start: SourcePosition { line: 4, character: 7 },
            end: SourcePosition { line: 4, character: 0 },
        })
    );
}

#[test]
fn test_unknown_range_end_leaves_no_range_behind() {
    let relations = vec![
        field("code", &[(1, "UNDEFINED")]),
        range("middle", "line", &[(1, 0, 3)]),
        range("start", "column", &[(1, 0, 5)]),
        range("start", "line", &[(1, 1, 7)]),
    ];

    let diagnostics = diagnostics_from_relations(&relations);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].range.map(|r| r.start.line), Some(7));
}

#[test]
fn test_lowest_range_index_is_reported() {
    let relations = vec![
        field("code", &[(1, "UNDEFINED")]),
        range("start", "line", &[(1, 3, 30), (1, 2, 20)]),
        range("end", "line", &[(1, 3, 31), (1, 2, 21)]),
    ];

    let diagnostics = diagnostics_from_relations(&relations);
    assert_eq!(
        diagnostics[0].range,
        Some(DiagnosticRange {
            start: SourcePosition { line: 20, character: 0 },
            end: SourcePosition { line: 21, character: 0 },
        })
    );
}

#[test]
fn test_severity_parse_defaults_to_error() {
    assert_eq!(DiagnosticSeverity::parse("INFO"), DiagnosticSeverity::Info);
    assert_eq!(DiagnosticSeverity::parse("exception"), DiagnosticSeverity::Exception);
    assert_eq!(DiagnosticSeverity::parse("fatal"), DiagnosticSeverity::Error);
}

#[test]
fn test_duplicates_capped_in_first_seen_order() {
    let a = diagnostic("A");
    let b = diagnostic("B");
    let input = vec![a.clone(), b.clone(), a.clone(), a.clone(), a.clone()];

    let filtered = filter_duplicate_diagnostics(input, 2);
    assert_eq!(filtered, vec![a.clone(), b, a]);
}

#[test]
fn test_non_duplicates_always_retained() {
    let input: Vec<Diagnostic> = ["A", "B", "C"].into_iter().map(diagnostic).collect();
    assert_eq!(filter_duplicate_diagnostics(input.clone(), 0), input);
}

#[test]
fn test_zero_cap_keeps_first_occurrence() {
    let a = diagnostic("A");
    let filtered = filter_duplicate_diagnostics(vec![a.clone(), a.clone(), a.clone()], 0);
    assert_eq!(filtered, vec![a]);
}

#[test]
fn test_structural_difference_is_not_a_duplicate() {
    let a = diagnostic("A");
    let mut a_elsewhere = a.clone();
    a_elsewhere.model = Some("other".to_string());

    let filtered = filter_duplicate_diagnostics(vec![a.clone(), a_elsewhere.clone(), a.clone()], 1);
    assert_eq!(filtered, vec![a, a_elsewhere]);
}
