//! JSON rendering of the loaded package model.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Board, Metadata, Package, Slide};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serializable view of a package, with slides in presentation order.
#[derive(Serialize)]
struct JsonDocument<'a> {
    metadata: &'a Metadata,
    board: &'a Board,
    slides: Vec<&'a Slide>,
}

/// Convert a package to JSON.
///
/// Slides are emitted in presentation order; order entries with no matching
/// slide are skipped, same as the HTML artifact.
pub fn to_json(package: &Package, format: JsonFormat) -> Result<String> {
    let doc = JsonDocument {
        metadata: &package.metadata,
        board: &package.board,
        slides: package.ordered_slides().collect(),
    };

    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&doc),
        JsonFormat::Compact => serde_json::to_string(&doc),
    };

    result.map_err(|e| Error::Other(format!("JSON serialization error: {}", e)))
}
