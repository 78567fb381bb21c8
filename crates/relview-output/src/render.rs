//! Display-mode dispatch

use crate::diagnostics::{Diagnostic, diagnostics_from_relations, filter_duplicate_diagnostics};
use crate::display_mode::{DisplayMode, PartitionLayout};
use crate::logical::logical_tables;
use crate::mime::{MimeOutput, detect_mime, mime_output};
use crate::partitioned::{PartitionedView, partition};
use crate::physical::physical_tables;
use crate::raw::{RawView, raw_views};
use crate::table::Table;
use relview_core::Relation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub mode: DisplayMode,
    pub partition_layout: PartitionLayout,
    /// Copies kept of each repeated diagnostic
    pub diagnostic_duplicate_cap: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Logical,
            partition_layout: PartitionLayout::Horizontal,
            diagnostic_duplicate_cap: 3,
        }
    }
}

impl RenderOptions {
    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Tables produced by one display mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "data", rename_all = "lowercase")]
pub enum RenderedOutput {
    Logical(Vec<Table>),
    Physical(Vec<Table>),
    Raw(Vec<RawView>),
    Partitioned(PartitionedView),
}

impl RenderedOutput {
    pub fn mode(&self) -> DisplayMode {
        match self {
            RenderedOutput::Logical(_) => DisplayMode::Logical,
            RenderedOutput::Physical(_) => DisplayMode::Physical,
            RenderedOutput::Raw(_) => DisplayMode::Raw,
            RenderedOutput::Partitioned(_) => DisplayMode::Partitioned,
        }
    }
}

/// Render relations in the given display mode
pub fn render(relations: &[Relation], mode: DisplayMode, layout: PartitionLayout) -> RenderedOutput {
    match mode {
        DisplayMode::Logical => RenderedOutput::Logical(logical_tables(relations)),
        DisplayMode::Physical => RenderedOutput::Physical(physical_tables(relations)),
        DisplayMode::Raw => RenderedOutput::Raw(raw_views(relations)),
        DisplayMode::Partitioned => RenderedOutput::Partitioned(partition(relations, layout)),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "body", rename_all = "lowercase")]
pub enum Content {
    /// The relation set declared a document MIME type
    ///
    /// Relations under other names are still rendered, as `tables`.
    Document {
        document: MimeOutput,
        tables: Option<RenderedOutput>,
    },
    Tables(RenderedOutput),
}

/// Everything the results panel shows for one transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub content: Content,
    pub diagnostics: Vec<Diagnostic>,
}

/// Split diagnostics from output relations, then render the output
///
/// A relation set that declares a document MIME type is decoded as that
/// document, and relations under any other name are rendered in
/// `options.mode` next to it. Everything else, including undecodable
/// documents, is rendered in `options.mode`.
pub fn render_output(relations: &[Relation], options: &RenderOptions) -> Output {
    let (diagnostic_relations, output_relations): (Vec<Relation>, Vec<Relation>) = relations
        .iter()
        .cloned()
        .partition(|relation| relation.id().starts_with_symbols(&["rel", "catalog", "diagnostic"]));

    let diagnostics = filter_duplicate_diagnostics(
        diagnostics_from_relations(&diagnostic_relations),
        options.diagnostic_duplicate_cap,
    );

    let content = match mime_output(&output_relations) {
        Some(document) => {
            let declared = detect_mime(&output_relations)
                .and_then(|(_, relation)| relation.id().name().map(str::to_string));
            let others: Vec<Relation> = output_relations
                .iter()
                .filter(|relation| relation.id().name() != declared.as_deref())
                .cloned()
                .collect();
            let tables = (!others.is_empty())
                .then(|| render(&others, options.mode, options.partition_layout));
            Content::Document { document, tables }
        }
        None => Content::Tables(render(&output_relations, options.mode, options.partition_layout)),
    };

    tracing::debug!(
        relations = output_relations.len(),
        diagnostics = diagnostics.len(),
        mode = %options.mode,
        "rendered output"
    );

    Output {
        content,
        diagnostics,
    }
}

#[cfg(test)]
mod tests;
