//! Relation id parsing
//!
//! A relation id is a `/`-separated path such as `/:output/:users/Int64/String`.
//! Segments starting with `:` are symbolic keys; every other segment is a
//! primitive type marker that owns one value column. Empty segments are
//! dropped, and there is no escaping: a key cannot contain `/`.

use crate::ValueType;
use serde::{Deserialize, Serialize};

/// One classified segment of a relation id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Symbolic key, stored without the leading `:`
    Symbol(String),
    /// Primitive type marker
    Type(ValueType),
}

impl PathSegment {
    /// Classify a single non-empty segment
    pub fn classify(segment: &str) -> Self {
        match segment.strip_prefix(':') {
            Some(name) => PathSegment::Symbol(name.to_string()),
            None => PathSegment::Type(ValueType::parse(segment)),
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, PathSegment::Symbol(_))
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            PathSegment::Symbol(name) => Some(name),
            PathSegment::Type(_) => None,
        }
    }

    pub fn as_type(&self) -> Option<&ValueType> {
        match self {
            PathSegment::Type(value_type) => Some(value_type),
            PathSegment::Symbol(_) => None,
        }
    }
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSegment::Symbol(name) => write!(f, ":{}", name),
            PathSegment::Type(value_type) => write!(f, "{}", value_type),
        }
    }
}

/// A parsed relation id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RelationId {
    segments: Vec<PathSegment>,
}

impl RelationId {
    /// Parse a relation id string. Never fails.
    pub fn parse(id: &str) -> Self {
        let segments = id
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(PathSegment::classify)
            .collect();
        Self { segments }
    }

    /// Build an id from already classified segments
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Symbolic keys, in id order
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(PathSegment::as_symbol)
    }

    /// Type markers, in id order. One value column exists per marker.
    pub fn column_types(&self) -> impl Iterator<Item = &ValueType> {
        self.segments.iter().filter_map(PathSegment::as_type)
    }

    /// Type marker text, in id order
    pub fn type_markers(&self) -> impl Iterator<Item = &str> {
        self.column_types().map(ValueType::as_str)
    }

    /// Number of value columns
    pub fn arity(&self) -> usize {
        self.column_types().count()
    }

    /// The relation name: the leading symbol, if the id starts with one
    pub fn name(&self) -> Option<&str> {
        self.segments.first().and_then(PathSegment::as_symbol)
    }

    /// Segments after the relation name (all segments when there is no name)
    pub fn suffix(&self) -> &[PathSegment] {
        match self.name() {
            Some(_) => &self.segments[1..],
            None => &self.segments,
        }
    }

    /// Whether any symbolic key equals `symbol`
    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.symbols().any(|s| s == symbol)
    }

    /// Whether the id starts with the given symbol path
    pub fn starts_with_symbols(&self, prefix: &[&str]) -> bool {
        prefix.len() <= self.segments.len()
            && prefix
                .iter()
                .zip(&self.segments)
                .all(|(expected, segment)| segment.as_symbol() == Some(*expected))
    }

    /// Re-join the segments as `/seg/seg/...`
    pub fn to_path(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for RelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl From<String> for RelationId {
    fn from(id: String) -> Self {
        Self::parse(&id)
    }
}

impl From<&str> for RelationId {
    fn from(id: &str) -> Self {
        Self::parse(id)
    }
}

impl From<RelationId> for String {
    fn from(id: RelationId) -> Self {
        id.to_path()
    }
}

impl PartialOrd for RelationId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Ids order by their path text, matching how the console lists relations
impl Ord for RelationId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_path().cmp(&other.to_path())
    }
}

#[cfg(test)]
mod tests;
