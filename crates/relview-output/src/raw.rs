//! Raw mode: untouched grids plus a metadata side panel

use crate::format::{ValueStyle, format_value};
use crate::table::{Cell, Table, TableColumn};
use relview_core::{Relation, ValueType};
use serde::{Deserialize, Serialize};

/// Side-panel facts about one relation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationMetadata {
    pub relation_id: String,
    pub name: Option<String>,
    pub arity: usize,
    pub row_count: usize,
    pub column_types: Vec<ValueType>,
    pub symbols: Vec<String>,
}

impl RelationMetadata {
    pub fn of(relation: &Relation) -> Self {
        let id = relation.id();
        Self {
            relation_id: id.to_path(),
            name: id.name().map(str::to_string),
            arity: relation.arity(),
            row_count: relation.row_count(),
            column_types: relation.column_types(),
            symbols: id.symbols().map(str::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawView {
    pub metadata: RelationMetadata,
    pub table: Table,
}

/// One raw view per relation, in input order
///
/// The grid holds only the value columns, formatted with their plain text.
pub fn raw_views(relations: &[Relation]) -> Vec<RawView> {
    relations
        .iter()
        .map(|relation| {
            let types = relation.column_types();
            let columns = types
                .iter()
                .map(|value_type| TableColumn::value(value_type.to_string()))
                .collect();
            let mut table = Table::new(relation.id().to_path(), columns);
            for index in 0..relation.row_count() {
                let Some(row) = relation.row(index) else {
                    break;
                };
                table.push_row(
                    row.into_iter()
                        .zip(&types)
                        .map(|(value, value_type)| {
                            Cell::plain(format_value(value, Some(value_type), ValueStyle::Plain))
                        })
                        .collect(),
                );
            }
            RawView {
                metadata: RelationMetadata::of(relation),
                table,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use relview_core::Value;

    #[test]
    fn test_raw_views_keep_input_order_and_metadata() {
        let relations = vec![
            Relation::new("/:output/:z/Char", vec![vec![Value::Char('q')]]).unwrap(),
            Relation::new("/:output/:a/Int64", vec![vec![Value::Int(1), Value::Int(2)]]).unwrap(),
        ];

        let views = raw_views(&relations);
        assert_eq!(views[0].metadata.relation_id, "/:output/:z/Char");
        assert_eq!(views[0].table.row_texts(0), Some(vec!["q"]));

        let meta = &views[1].metadata;
        assert_eq!(meta.name.as_deref(), Some("output"));
        assert_eq!(meta.arity, 1);
        assert_eq!(meta.row_count, 2);
        assert_eq!(meta.column_types, vec![ValueType::Int64]);
        assert_eq!(meta.symbols, vec!["output".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_nullary_relation_has_empty_grid_rows() {
        let views = raw_views(&[Relation::new("/:output/:ok", vec![]).unwrap()]);
        assert_eq!(views[0].table.column_count(), 0);
        assert_eq!(views[0].table.row_count(), 1);
        assert_eq!(views[0].metadata.row_count, 1);
    }
}
