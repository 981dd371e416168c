//! Document model types for whiteboard package content.
//!
//! This module defines the intermediate representation (IR) that bridges
//! package parsing and HTML rendering. The model is built in one pass by the
//! loader, held read-only, and discarded after emission.

mod document;
mod registry;
mod slide;
mod text;

pub use document::{Board, Metadata, Package, UNKNOWN};
pub use registry::{ResourceRegistry, ID_SCHEME};
pub use slide::{Element, ElementKind, Geometry, Slide};
pub use text::{HorizontalAlignment, RichText, RunStyle, TextLine, TextRun, VerticalAlignment};
