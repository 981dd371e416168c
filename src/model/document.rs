//! Package-level types: metadata, board geometry, and the loaded package.

use super::{ResourceRegistry, Slide};
use crate::error::Warning;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel substituted for any absent metadata field.
pub const UNKNOWN: &str = "Unknown";

/// Document metadata from `Document.xml`.
///
/// Every field is a plain string straight from the source document; the
/// authoring application writes its own date formatting, so no date parsing
/// is attempted. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document name
    pub name: String,

    /// Document creator/author
    pub creator: String,

    /// Creation timestamp as written by the authoring application
    pub created: String,

    /// Last-modified timestamp as written by the authoring application
    pub modified: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            name: UNKNOWN.to_string(),
            creator: UNKNOWN.to_string(),
            created: UNKNOWN.to_string(),
            modified: UNKNOWN.to_string(),
        }
    }
}

/// Board geometry and presentation order from `Board.xml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Canvas width in pixels. The 1280 fallback is applied at emission
    /// time only, never here.
    pub width: Option<f32>,

    /// Canvas height in pixels. The 720 fallback is applied at emission
    /// time only, never here.
    pub height: Option<f32>,

    /// Ordered slide ids defining presentation order. Duplicates are
    /// permitted and render multiple times.
    pub slide_order: Vec<String>,
}

impl Board {
    /// Number of entries in the presentation order.
    pub fn slide_count(&self) -> usize {
        self.slide_order.len()
    }
}

/// A fully loaded whiteboard package.
///
/// Built in one pass by [`PackageLoader`](crate::parser::PackageLoader) and
/// threaded by value through the pipeline; nothing mutates it after
/// construction.
#[derive(Debug)]
pub struct Package {
    /// Document metadata
    pub metadata: Metadata,

    /// Board geometry and slide order
    pub board: Board,

    /// Resource id to relative path registry
    pub registry: ResourceRegistry,

    /// Slides keyed by their self-declared id (not filename)
    pub slides: BTreeMap<String, Slide>,

    /// Non-fatal diagnostics collected while loading
    pub warnings: Vec<Warning>,
}

impl Package {
    /// Iterate slides in presentation order.
    ///
    /// An order entry with no matching slide is skipped; it never shifts the
    /// position of subsequent valid slides and never fails.
    pub fn ordered_slides(&self) -> impl Iterator<Item = &Slide> {
        self.board
            .slide_order
            .iter()
            .filter_map(|id| self.slides.get(id))
    }

    /// Get a slide by its declared id.
    pub fn get_slide(&self, id: &str) -> Option<&Slide> {
        self.slides.get(id)
    }

    /// Check whether the package contains any renderable slides.
    pub fn is_empty(&self) -> bool {
        self.ordered_slides().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_defaults_to_unknown() {
        let meta = Metadata::default();
        assert_eq!(meta.name, UNKNOWN);
        assert_eq!(meta.creator, UNKNOWN);
        assert_eq!(meta.created, UNKNOWN);
        assert_eq!(meta.modified, UNKNOWN);
    }

    #[test]
    fn test_board_default_has_no_dimensions() {
        let board = Board::default();
        assert!(board.width.is_none());
        assert!(board.height.is_none());
        assert_eq!(board.slide_count(), 0);
    }

    #[test]
    fn test_ordered_slides_skips_missing_ids() {
        let mut slides = BTreeMap::new();
        slides.insert("a".to_string(), Slide::new("a"));
        slides.insert("c".to_string(), Slide::new("c"));

        let package = Package {
            metadata: Metadata::default(),
            board: Board {
                width: None,
                height: None,
                slide_order: vec!["a".into(), "b".into(), "c".into()],
            },
            registry: ResourceRegistry::new(),
            slides,
            warnings: Vec::new(),
        };

        let ids: Vec<&str> = package.ordered_slides().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_ordered_slides_renders_duplicates_twice() {
        let mut slides = BTreeMap::new();
        slides.insert("a".to_string(), Slide::new("a"));

        let package = Package {
            metadata: Metadata::default(),
            board: Board {
                width: None,
                height: None,
                slide_order: vec!["a".into(), "a".into()],
            },
            registry: ResourceRegistry::new(),
            slides,
            warnings: Vec::new(),
        };

        assert_eq!(package.ordered_slides().count(), 2);
    }
}
