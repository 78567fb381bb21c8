//! Physical mode: one key/value grid per relation

use crate::format::{ValueStyle, format_value};
use crate::table::{Cell, Table, TableColumn};
use relview_core::{PathSegment, Relation};

/// Build one table per relation, sorted by relation id
///
/// Every id segment becomes a column. Symbol columns repeat their key on
/// each row as an emphasized cell; type columns hold the plain values.
pub fn physical_tables(relations: &[Relation]) -> Vec<Table> {
    let mut sorted: Vec<&Relation> = relations.iter().collect();
    sorted.sort_by(|a, b| a.id().cmp(b.id()));

    sorted.into_iter().map(physical_table).collect()
}

fn physical_table(relation: &Relation) -> Table {
    let segments = relation.id().segments();
    let columns = segments
        .iter()
        .map(|segment| match segment {
            PathSegment::Symbol(_) => TableColumn::symbol(segment.to_string()),
            PathSegment::Type(value_type) => TableColumn::value(value_type.to_string()),
        })
        .collect();

    let mut table = Table::new(relation.id().to_path(), columns);
    for tuple in relation.tuples() {
        let row = segments
            .iter()
            .zip(&tuple)
            .map(|(segment, value)| match segment {
                PathSegment::Symbol(_) => Cell::emphasized(segment.to_string()),
                PathSegment::Type(value_type) => {
                    Cell::plain(format_value(value, Some(value_type), ValueStyle::Plain))
                }
            })
            .collect();
        table.push_row(row);
    }
    table
}
