//! Render-ready table structures handed to the data grid

use serde::{Deserialize, Serialize};

/// Whether a column came from a symbolic key or a typed value column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Symbol,
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    /// Header text (may be empty)
    pub name: String,
    pub kind: ColumnKind,
}

impl TableColumn {
    pub fn symbol(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Symbol,
        }
    }

    pub fn value(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Value,
        }
    }
}

/// A formatted cell. `emphasis` marks symbolic keys, which the grid renders bold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub emphasis: bool,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: true,
        }
    }

    pub fn blank() -> Self {
        Self::plain("")
    }
}

/// A titled grid of cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub title: String,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(title: impl Into<String>, columns: Vec<TableColumn>) -> Self {
        Self {
            title: title.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding with blank cells up to the column count
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        if row.len() < self.columns.len() {
            row.resize(self.columns.len(), Cell::blank());
        }
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Cell texts of one row, mostly useful for assertions and clipboard export
    pub fn row_texts(&self, index: usize) -> Option<Vec<&str>> {
        self.rows
            .get(index)
            .map(|row| row.iter().map(|cell| cell.text.as_str()).collect())
    }
}
