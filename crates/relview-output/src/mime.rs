//! MIME dispatch for relation sets that describe a document instead of a table
//!
//! A relation set declares its MIME type through a relation carrying a
//! `:mime` key and a `String` column, e.g. `/:output/:mime/String`. The
//! payload is every other relation with the same name.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use relview_core::{Relation, Value};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Svg,
    Webp,
}

impl ImageFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Svg => "image/svg+xml",
            ImageFormat::Webp => "image/webp",
        }
    }
}

/// Known MIME kinds, with an explicit fallback for everything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MimeKind {
    Json,
    Image(ImageFormat),
    Html,
    Markdown,
    PlainText,
    Table,
    Other(String),
}

impl MimeKind {
    /// Parse a MIME string; parameters after `;` and ASCII case are ignored
    pub fn parse(mime: &str) -> Self {
        let essence = mime.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        match essence.as_str() {
            "application/json" | "text/json" => MimeKind::Json,
            "image/png" => MimeKind::Image(ImageFormat::Png),
            "image/jpeg" | "image/jpg" => MimeKind::Image(ImageFormat::Jpeg),
            "image/gif" => MimeKind::Image(ImageFormat::Gif),
            "image/svg+xml" => MimeKind::Image(ImageFormat::Svg),
            "image/webp" => MimeKind::Image(ImageFormat::Webp),
            "text/html" => MimeKind::Html,
            "text/markdown" => MimeKind::Markdown,
            "text/plain" => MimeKind::PlainText,
            "table" | "application/x-relation" => MimeKind::Table,
            _ => MimeKind::Other(essence),
        }
    }

    /// Whether this kind is rendered through the table modes
    pub fn is_tabular(&self) -> bool {
        matches!(self, MimeKind::Table | MimeKind::Other(_))
    }
}

/// A document payload decoded from a MIME-typed relation set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MimeOutput {
    Json { value: serde_json::Value },
    Image { format: ImageFormat, data: String },
    Html { text: String },
    Markdown { text: String },
    Text { text: String },
}

/// Find the declared MIME kind and the relation that declared it
pub fn detect_mime(relations: &[Relation]) -> Option<(MimeKind, &Relation)> {
    let mut candidates: Vec<&Relation> = relations
        .iter()
        .filter(|relation| relation.id().has_symbol("mime"))
        .collect();
    candidates.sort_by(|a, b| a.id().cmp(b.id()));

    candidates.into_iter().find_map(|relation| {
        relation
            .string_values()
            .next()
            .map(|mime| (MimeKind::parse(mime), relation))
    })
}

/// Decode the relation set into a document, if it declares a non-tabular MIME type
///
/// Payloads that cannot be decoded for their declared kind are logged and
/// yield `None`, so the caller falls back to table rendering.
pub fn mime_output(relations: &[Relation]) -> Option<MimeOutput> {
    let (kind, declaring) = detect_mime(relations)?;
    if kind.is_tabular() {
        return None;
    }

    let name = declaring.id().name();
    let payload: Vec<&Relation> = relations
        .iter()
        .filter(|relation| relation.id().name() == name && !relation.id().has_symbol("mime"))
        .collect();

    let output = match kind {
        MimeKind::Json => json_payload(&payload).map(|value| MimeOutput::Json { value }),
        MimeKind::Image(format) => {
            image_payload(&payload, format).map(|data| MimeOutput::Image { format, data })
        }
        MimeKind::Html => Some(MimeOutput::Html {
            text: text_payload(&payload),
        }),
        MimeKind::Markdown => Some(MimeOutput::Markdown {
            text: text_payload(&payload),
        }),
        MimeKind::PlainText => Some(MimeOutput::Text {
            text: text_payload(&payload),
        }),
        MimeKind::Table | MimeKind::Other(_) => None,
    };

    if output.is_none() {
        tracing::warn!(
            relation_id = %declaring.id(),
            "MIME payload could not be decoded, falling back to table output"
        );
    }
    output
}

fn text_payload(payload: &[&Relation]) -> String {
    payload
        .iter()
        .flat_map(|relation| relation.string_values())
        .collect()
}

fn json_payload(payload: &[&Relation]) -> Option<serde_json::Value> {
    let embedded = payload.iter().find_map(|relation| {
        relation.columns().iter().flatten().find_map(|value| match value {
            Value::Json(json) => Some(json.clone()),
            _ => None,
        })
    });
    if embedded.is_some() {
        return embedded;
    }

    let text = text_payload(payload);
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse JSON payload");
            None
        }
    }
}

/// Image data is returned base64-encoded
fn image_payload(payload: &[&Relation], format: ImageFormat) -> Option<String> {
    let bytes: Vec<u8> = payload
        .iter()
        .flat_map(|relation| relation.columns().iter().flatten())
        .filter_map(|value| match value {
            Value::Bytes(bytes) => Some(bytes.as_slice()),
            _ => None,
        })
        .flatten()
        .copied()
        .collect();
    if !bytes.is_empty() {
        return Some(BASE64.encode(bytes));
    }

    let text = text_payload(payload);
    if text.is_empty() {
        return None;
    }
    if format == ImageFormat::Svg && text.trim_start().starts_with('<') {
        return Some(BASE64.encode(text.as_bytes()));
    }
    match BASE64.decode(text.trim()) {
        Ok(_) => Some(text.trim().to_string()),
        Err(e) => {
            tracing::warn!(error = %e, format = format.mime_type(), "image payload is not valid base64");
            None
        }
    }
}
