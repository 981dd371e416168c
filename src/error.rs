//! Error and warning types for the unboard library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for unboard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors that abort a conversion run.
///
/// Everything that goes wrong while *building the model* is downgraded to a
/// [`Warning`] instead; only I/O on the package root and the output location
/// surfaces here.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The package root does not exist or is not a directory.
    #[error("Package directory not found: {0}")]
    PackageNotFound(PathBuf),

    /// Error parsing XML structure.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Encoding error during XML parsing.
    #[error("Encoding error: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// A required field is missing from a document.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The output location cannot be created or written.
    #[error("Cannot write output location {path}: {source}")]
    OutputLocation {
        /// The output path that failed
        path: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

/// Non-fatal diagnostics collected while building the model.
///
/// Warnings are surfaced to the operator (logged via `log::warn!` and
/// carried on the package) but never abort the run: the artifact is produced
/// whenever the output location is writable, even if degraded defaults leave
/// it visually near-empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// An optional top-level document is absent; defaults substituted.
    #[error("{0} not found, using defaults")]
    MissingFile(String),

    /// One XML unit failed to parse; that unit is dropped.
    #[error("Malformed document {file}: {reason}")]
    MalformedDocument {
        /// File that failed to parse
        file: String,
        /// Parse failure description
        reason: String,
    },

    /// An `id://` reference has no registry entry; the image is omitted.
    #[error("Unresolved resource reference: {0}")]
    UnresolvedResource(String),

    /// Two slide files declare the same id; the later file (in sorted
    /// filename order) wins.
    #[error("Duplicate slide id {id}: {dropped} overridden by {kept}")]
    DuplicateSlideId {
        /// The duplicated slide id
        id: String,
        /// Slide file whose entry was kept
        kept: String,
        /// Slide file whose entry was discarded
        dropped: String,
    },

    /// The board order lists a slide id no slide file declares.
    #[error("Slide id {0} is listed in the board order but has no slide file")]
    UnknownSlideId(String),
}
