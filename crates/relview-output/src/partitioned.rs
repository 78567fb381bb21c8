//! Partitioned mode: logical tables laid out in panes

use crate::display_mode::PartitionLayout;
use crate::logical::logical_tables;
use crate::table::Table;
use relview_core::Relation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pane {
    pub title: String,
    /// Share of the layout axis given to this pane, proportional to its rows
    pub fraction: f64,
    pub table: Table,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionedView {
    pub layout: PartitionLayout,
    pub panes: Vec<Pane>,
}

impl PartitionedView {
    pub fn pane(&self, title: &str) -> Option<&Pane> {
        self.panes.iter().find(|pane| pane.title == title)
    }
}

/// Split relations into one pane per relation name
///
/// Every pane gets at least one row's worth of space so empty relations
/// stay visible.
pub fn partition(relations: &[Relation], layout: PartitionLayout) -> PartitionedView {
    let tables = logical_tables(relations);
    let weights: Vec<usize> = tables.iter().map(|t| t.row_count().max(1)).collect();
    let total: usize = weights.iter().sum();

    let panes = tables
        .into_iter()
        .zip(weights)
        .map(|(table, weight)| Pane {
            title: table.title.clone(),
            fraction: weight as f64 / total as f64,
            table,
        })
        .collect();

    PartitionedView { layout, panes }
}
