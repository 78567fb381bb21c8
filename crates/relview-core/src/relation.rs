//! Columnar relations

use crate::{PathSegment, RelationId, RelviewError, Result, Value, ValueType};
use serde::{Deserialize, Serialize};

/// A columnar value set tagged by its relation id
///
/// There is one column per type marker in the id, and all columns have the
/// same length. A relation whose id has no type markers holds a single
/// nullary tuple unless it was built with [`Relation::empty`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RelationData", into = "RelationData")]
pub struct Relation {
    id: RelationId,
    columns: Vec<Vec<Value>>,
    row_count: usize,
}

impl Relation {
    /// Create a relation, checking columns against the id's type markers
    pub fn new(id: impl Into<RelationId>, columns: Vec<Vec<Value>>) -> Result<Self> {
        let id = id.into();
        let expected = id.arity();
        if columns.len() != expected {
            return Err(RelviewError::ColumnCountMismatch {
                relation_id: id.to_path(),
                expected,
                actual: columns.len(),
            });
        }

        let row_count = match columns.first() {
            Some(first) => first.len(),
            None => 1,
        };
        for (column, values) in columns.iter().enumerate() {
            if values.len() != row_count {
                return Err(RelviewError::ColumnLengthMismatch {
                    relation_id: id.to_path(),
                    column,
                    expected: row_count,
                    actual: values.len(),
                });
            }
        }

        Ok(Self {
            id,
            columns,
            row_count,
        })
    }

    /// Create a relation with no rows
    pub fn empty(id: impl Into<RelationId>) -> Self {
        let id = id.into();
        let columns = vec![Vec::new(); id.arity()];
        Self {
            id,
            columns,
            row_count: 0,
        }
    }

    pub fn id(&self) -> &RelationId {
        &self.id
    }

    pub fn columns(&self) -> &[Vec<Value>] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&[Value]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Number of value columns
    pub fn arity(&self) -> usize {
        self.columns.len()
    }

    /// Type markers of the value columns
    pub fn column_types(&self) -> Vec<ValueType> {
        self.id.column_types().cloned().collect()
    }

    /// Values of one row, one per value column
    pub fn row(&self, index: usize) -> Option<Vec<&Value>> {
        if index >= self.row_count {
            return None;
        }
        Some(self.columns.iter().map(|column| &column[index]).collect())
    }

    /// One full tuple: every id segment in order, with symbols as
    /// `Value::Symbol` and type markers replaced by that row's values
    pub fn tuple(&self, index: usize) -> Option<Vec<Value>> {
        if index >= self.row_count {
            return None;
        }
        let mut column = 0;
        let tuple = self
            .id
            .segments()
            .iter()
            .map(|segment| match segment {
                PathSegment::Symbol(name) => Value::Symbol(name.clone()),
                PathSegment::Type(_) => {
                    let value = self.columns[column][index].clone();
                    column += 1;
                    value
                }
            })
            .collect();
        Some(tuple)
    }

    /// Iterate over all full tuples
    pub fn tuples(&self) -> impl Iterator<Item = Vec<Value>> + '_ {
        (0..self.row_count).filter_map(move |index| self.tuple(index))
    }

    /// All string values of the relation, row by row
    pub fn string_values(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.row_count).flat_map(move |index| {
            self.columns
                .iter()
                .filter_map(move |column| column[index].as_str())
        })
    }
}

/// Serialized form of a relation: the id text plus its columns
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RelationData {
    relation_id: String,
    #[serde(default)]
    columns: Vec<Vec<Value>>,
    /// Only meaningful for relations without value columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    row_count: Option<usize>,
}

impl TryFrom<RelationData> for Relation {
    type Error = RelviewError;

    fn try_from(data: RelationData) -> Result<Self> {
        let mut relation = Relation::new(data.relation_id.as_str(), data.columns)?;
        if relation.arity() == 0 {
            if let Some(rows) = data.row_count {
                relation.row_count = rows.min(1);
            }
        }
        Ok(relation)
    }
}

impl From<Relation> for RelationData {
    fn from(relation: Relation) -> Self {
        let row_count = (relation.arity() == 0).then_some(relation.row_count);
        Self {
            relation_id: relation.id.to_path(),
            columns: relation.columns,
            row_count,
        }
    }
}

/// Parse a JSON array of relations
pub fn relations_from_json(json: &str) -> Result<Vec<Relation>> {
    let relations: Vec<Relation> = serde_json::from_str(json)?;
    tracing::debug!(count = relations.len(), "parsed relations from JSON");
    Ok(relations)
}
