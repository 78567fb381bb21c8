//! relview Output - Relation sets to render-ready tables
//!
//! This crate converts columnar relations into structures a data grid or a
//! tree view can consume directly. One relation set can be shown in four
//! display modes:
//!
//! - [`DisplayMode::Logical`] - Type-coerced table per relation name
//! - [`DisplayMode::Physical`] - One key/value grid per relation, sorted by id
//! - [`DisplayMode::Raw`] - Untouched grids with a metadata side panel
//! - [`DisplayMode::Partitioned`] - Logical tables split into panes
//!
//! Relation sets that declare a `:mime` relation are dispatched to a
//! [`MimeOutput`] first (JSON, images, HTML, ...).

mod diagnostics;
mod display_mode;
mod format;
mod logical;
mod mime;
mod partitioned;
mod physical;
mod raw;
mod render;
mod table;

pub use diagnostics::{
    Diagnostic, DiagnosticRange, DiagnosticSeverity, SourcePosition, diagnostics_from_relations,
    filter_duplicate_diagnostics,
};
pub use display_mode::{DisplayMode, PartitionLayout, convert_display_mode};
pub use format::{ValueStyle, format_value};
pub use logical::logical_tables;
pub use mime::{ImageFormat, MimeKind, MimeOutput, detect_mime, mime_output};
pub use partitioned::{Pane, PartitionedView, partition};
pub use physical::physical_tables;
pub use raw::{RawView, RelationMetadata, raw_views};
pub use render::{Content, Output, RenderOptions, RenderedOutput, render, render_output};
pub use table::{Cell, ColumnKind, Table, TableColumn};
