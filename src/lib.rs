//! # unboard
//!
//! Convert interactive-whiteboard (ENBX) packages into self-contained,
//! browser-viewable HTML slideshows.
//!
//! An ENBX package is a directory (or zip archive) of interlinked XML
//! documents plus binary assets. This library parses the four document
//! kinds (Document.xml, Board.xml, Reference.xml, Slides/*.xml) into a
//! unified slide model, resolves `id://` resource references, and renders
//! text and image elements into styled markup with correct coordinate,
//! rotation, alignment, and color semantics.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unboard::{convert_dir, ConvertOptions};
//!
//! fn main() -> unboard::Result<()> {
//!     // Convert an extracted package directory to output/index.html
//!     let summary = convert_dir("lecture", "lecture_html", &ConvertOptions::new())?;
//!     println!("{} slides rendered", summary.slides_rendered);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Graceful degradation**: missing files, malformed slides, and
//!   unresolved resources degrade locally and never abort the run
//! - **Deterministic output**: converting the same package twice yields
//!   byte-identical artifacts
//! - **Parallel processing**: independent slide files parse with Rayon
//! - **Single atomic artifact**: the HTML is assembled in memory and
//!   written in one operation, never leaving a truncated file

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{convert_dir, ConvertOptions, ConvertSummary};
pub use error::{Error, Result, Warning};
pub use model::{
    Board, Element, ElementKind, Geometry, HorizontalAlignment, Metadata, Package, ResourceRegistry,
    RichText, RunStyle, Slide, TextLine, TextRun, VerticalAlignment,
};
pub use parser::{PackageLoader, ParseOptions};
pub use render::{to_html, to_json, HtmlRenderer, JsonFormat, RenderOptions};

use std::path::Path;

/// Load an extracted package directory into a structured model.
///
/// # Example
///
/// ```no_run
/// use unboard::load_package;
///
/// let package = load_package("lecture").unwrap();
/// println!("{} slides", package.board.slide_count());
/// ```
pub fn load_package<P: AsRef<Path>>(path: P) -> Result<Package> {
    PackageLoader::new(path)?.load()
}

/// Load a package with custom options.
///
/// # Example
///
/// ```no_run
/// use unboard::{load_package_with_options, ParseOptions};
///
/// let options = ParseOptions::new().sequential();
/// let package = load_package_with_options("lecture", options).unwrap();
/// ```
pub fn load_package_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<Package> {
    PackageLoader::with_options(path, options)?.load()
}

/// Render a package directory straight to an HTML string without writing
/// anything to disk.
pub fn render_package<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let package = load_package(path)?;
    Ok(to_html(&package, options))
}
