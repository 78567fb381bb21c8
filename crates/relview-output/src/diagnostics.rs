//! Diagnostics reported alongside query results
//!
//! Diagnostics arrive as relations under `/:rel/:catalog/:diagnostic`, one
//! relation per field, keyed by a leading `Int64` diagnostic index:
//!
//! ```text
//! /:rel/:catalog/:diagnostic/:code/Int64/String
//! /:rel/:catalog/:diagnostic/:message/Int64/String
//! /:rel/:catalog/:diagnostic/:range/:start/:line/Int64/Int64/Int64
//! ```

use relview_core::{Relation, Value};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

const DIAGNOSTIC_PREFIX: [&str; 3] = ["rel", "catalog", "diagnostic"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// Unknown severities are treated as errors
    #[default]
    Error,
    Exception,
    Warning,
    Info,
}

impl DiagnosticSeverity {
    pub fn parse(severity: &str) -> Self {
        match severity.trim().to_ascii_lowercase().as_str() {
            "warning" => Self::Warning,
            "info" | "information" => Self::Info,
            "exception" => Self::Exception,
            _ => Self::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SourcePosition {
    pub line: i64,
    pub character: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DiagnosticRange {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    pub severity: DiagnosticSeverity,
    pub model: Option<String>,
    pub report: Option<String>,
    pub range: Option<DiagnosticRange>,
}

#[derive(Default)]
struct DiagnosticParts {
    diagnostic: Diagnostic,
    /// Ranges by range index; the lowest index is reported
    ranges: BTreeMap<i64, DiagnosticRange>,
}

/// Assemble diagnostics from their per-field relations, ordered by index
pub fn diagnostics_from_relations(relations: &[Relation]) -> Vec<Diagnostic> {
    let mut parts: BTreeMap<i64, DiagnosticParts> = BTreeMap::new();

    for relation in relations {
        let id = relation.id();
        if !id.starts_with_symbols(&DIAGNOSTIC_PREFIX) {
            continue;
        }
        let fields: Vec<&str> = id.symbols().skip(DIAGNOSTIC_PREFIX.len()).collect();
        match fields.as_slice() {
            [field] => collect_field(&mut parts, relation, field),
            ["range", end, coordinate] => collect_range(&mut parts, relation, end, coordinate),
            _ => tracing::debug!(relation_id = %id, "skipping unrecognized diagnostic relation"),
        }
    }

    parts
        .into_values()
        .map(|mut part| {
            part.diagnostic.range = part.ranges.into_values().next();
            part.diagnostic
        })
        .collect()
}

fn collect_field(parts: &mut BTreeMap<i64, DiagnosticParts>, relation: &Relation, field: &str) {
    let (Some(indices), Some(values)) = (relation.column(0), relation.column(1)) else {
        return;
    };
    for (index, value) in indices.iter().zip(values) {
        let Some(index) = index.as_i64() else {
            continue;
        };
        let text = text_of(value);
        let diagnostic = &mut parts.entry(index).or_default().diagnostic;
        match field {
            "code" => diagnostic.code = text,
            "message" => diagnostic.message = text,
            "severity" => diagnostic.severity = DiagnosticSeverity::parse(&text),
            "model" => diagnostic.model = Some(text),
            "report" => diagnostic.report = Some(text),
            _ => {}
        }
    }
}

fn collect_range(
    parts: &mut BTreeMap<i64, DiagnosticParts>,
    relation: &Relation,
    end: &str,
    coordinate: &str,
) {
    let is_start = match end {
        "start" => true,
        "end" => false,
        _ => {
            tracing::debug!(relation_id = %relation.id(), end, "skipping unknown range end");
            return;
        }
    };
    let is_line = match coordinate {
        "line" => true,
        "character" => false,
        _ => {
            tracing::debug!(relation_id = %relation.id(), coordinate, "skipping unknown range coordinate");
            return;
        }
    };

    let (Some(indices), Some(range_indices), Some(values)) =
        (relation.column(0), relation.column(1), relation.column(2))
    else {
        return;
    };
    for ((index, range_index), value) in indices.iter().zip(range_indices).zip(values) {
        let (Some(index), Some(range_index), Some(value)) =
            (index.as_i64(), range_index.as_i64(), value.as_i64())
        else {
            continue;
        };
        let range = parts
            .entry(index)
            .or_default()
            .ranges
            .entry(range_index)
            .or_default();
        let position = if is_start { &mut range.start } else { &mut range.end };
        if is_line {
            position.line = value;
        } else {
            position.character = value;
        }
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Drop repeated diagnostics beyond `cap` copies each
///
/// Structurally identical diagnostics keep their first `cap` occurrences in
/// first-seen order. A diagnostic that appears once is always kept, so a cap
/// of 0 behaves like 1.
pub fn filter_duplicate_diagnostics(diagnostics: Vec<Diagnostic>, cap: usize) -> Vec<Diagnostic> {
    let cap = cap.max(1);
    let mut seen: HashMap<&Diagnostic, usize> = HashMap::new();
    let keep: Vec<bool> = diagnostics
        .iter()
        .map(|diagnostic| {
            let count = seen.entry(diagnostic).or_insert(0);
            *count += 1;
            *count <= cap
        })
        .collect();
    drop(seen);

    let dropped = keep.iter().filter(|kept| !**kept).count();
    if dropped > 0 {
        tracing::debug!(dropped, cap, "filtered duplicate diagnostics");
    }

    diagnostics
        .into_iter()
        .zip(keep)
        .filter_map(|(diagnostic, kept)| kept.then_some(diagnostic))
        .collect()
}

#[cfg(test)]
mod tests;
