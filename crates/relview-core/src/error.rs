//! Error types for relview

use thiserror::Error;

/// Core error type for relview operations
#[derive(Error, Debug)]
pub enum RelviewError {
    #[error("Relation {relation_id} has {actual} columns but its id declares {expected}")]
    ColumnCountMismatch {
        relation_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("Relation {relation_id}: column {column} has {actual} values, expected {expected}")]
    ColumnLengthMismatch {
        relation_id: String,
        column: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid relation: {0}")]
    InvalidRelation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for relview operations
pub type Result<T> = std::result::Result<T, RelviewError>;
