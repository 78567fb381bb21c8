//! Tests for logical tables

use super::*;
use pretty_assertions::assert_eq;
use relview_core::Value;

fn relation(id: &str, columns: Vec<Vec<Value>>) -> Relation {
    Relation::new(id, columns).unwrap()
}

#[test]
fn test_groups_by_relation_name() {
    let relations = vec![
        relation("/:output/:b/String", vec![vec![Value::String("x".into())]]),
        relation("/:debug/Int64", vec![vec![Value::Int(9)]]),
        relation("/:output/:a/String", vec![vec![Value::String("y".into())]]),
    ];

    let tables = logical_tables(&relations);
    let titles: Vec<&str> = tables.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec![":debug", ":output"]);

    let output = &tables[1];
    assert_eq!(output.row_count(), 2);
    assert_eq!(output.row_texts(0), Some(vec![":a", "\"y\""]));
    assert_eq!(output.row_texts(1), Some(vec![":b", "\"x\""]));
    assert_eq!(
        output.columns,
        vec![TableColumn::symbol("Symbol"), TableColumn::value("String")]
    );
}

#[test]
fn test_mixed_widths_are_padded_and_headers_cleared() {
    let relations = vec![
        relation(
            "/:output/Int64/Float64",
            vec![vec![Value::Int(1)], vec![Value::Int(2)]],
        ),
        relation("/:output/String", vec![vec![Value::String("z".into())]]),
    ];

    let tables = logical_tables(&relations);
    assert_eq!(tables.len(), 1);
    let table = &tables[0];

    assert_eq!(table.column_count(), 2);
    assert_eq!(table.columns[0].name, "");
    assert_eq!(table.columns[1].name, "Float64");
    assert_eq!(table.row_texts(0), Some(vec!["1", "2.0"]));
    assert_eq!(table.row_texts(1), Some(vec!["\"z\"", ""]));
}

#[test]
fn test_unnamed_relations_share_an_untitled_table() {
    let relations = vec![relation("/Int64", vec![vec![Value::Int(5), Value::Int(6)]])];
    let tables = logical_tables(&relations);
    assert_eq!(tables[0].title, "");
    assert_eq!(tables[0].row_count(), 2);
}

#[test]
fn test_nullary_relation_contributes_symbol_row() {
    let relations = vec![relation("/:output/:done", vec![])];
    let tables = logical_tables(&relations);
    assert_eq!(tables[0].row_texts(0), Some(vec![":done"]));
}

#[test]
fn test_empty_input() {
    assert!(logical_tables(&[]).is_empty());
}
