//! Logical mode: one type-coerced table per relation name

use crate::format::{ValueStyle, format_value};
use crate::table::{Cell, ColumnKind, Table, TableColumn};
use relview_core::{PathSegment, Relation};
use std::collections::BTreeMap;

/// Build logical tables, one per relation name, ordered by name
///
/// Relations sharing a name are merged: every row starts with the
/// relation-id suffix (symbols as `:name` cells, values coerced to their
/// declared type), so `/:output/:a/Int64` and `/:output/:b/String` land in
/// the same `:output` table. Within a table, relations are taken in id order
/// and keep their own row order.
pub fn logical_tables(relations: &[Relation]) -> Vec<Table> {
    let mut groups: BTreeMap<String, Vec<&Relation>> = BTreeMap::new();
    for relation in relations {
        let title = relation
            .id()
            .name()
            .map(|name| format!(":{}", name))
            .unwrap_or_default();
        groups.entry(title).or_default().push(relation);
    }

    groups
        .into_iter()
        .map(|(title, mut members)| {
            members.sort_by(|a, b| a.id().cmp(b.id()));
            logical_table(title, &members)
        })
        .collect()
}

fn logical_table(title: String, members: &[&Relation]) -> Table {
    let mut table = Table::new(title, logical_columns(members));

    for relation in members {
        let suffix = relation.id().suffix();
        let leading = relation.id().segments().len() - suffix.len();
        for tuple in relation.tuples() {
            let row = suffix
                .iter()
                .zip(tuple.iter().skip(leading))
                .map(|(segment, value)| match segment {
                    PathSegment::Symbol(name) => Cell::plain(format!(":{}", name)),
                    PathSegment::Type(value_type) => {
                        Cell::plain(format_value(value, Some(value_type), ValueStyle::Tagged))
                    }
                })
                .collect();
            table.push_row(row);
        }
    }

    tracing::trace!(
        title = %table.title,
        relations = members.len(),
        rows = table.row_count(),
        "built logical table"
    );
    table
}

/// Headers name the segment type when every relation agrees on it
fn logical_columns(members: &[&Relation]) -> Vec<TableColumn> {
    let width = members
        .iter()
        .map(|relation| relation.id().suffix().len())
        .max()
        .unwrap_or(0);

    (0..width)
        .map(|position| {
            let mut labels = members
                .iter()
                .filter_map(|relation| relation.id().suffix().get(position))
                .map(|segment| match segment {
                    PathSegment::Symbol(_) => (ColumnKind::Symbol, "Symbol".to_string()),
                    PathSegment::Type(value_type) => (ColumnKind::Value, value_type.to_string()),
                });

            let Some(first) = labels.next() else {
                return TableColumn::value("");
            };
            let (mut kind, mut name) = first;
            for (other_kind, other_name) in labels {
                if other_kind != kind {
                    kind = ColumnKind::Value;
                }
                if other_name != name {
                    name.clear();
                }
            }
            TableColumn { name, kind }
        })
        .collect()
}

#[cfg(test)]
mod tests;
