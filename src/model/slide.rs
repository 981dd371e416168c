//! Slide-level types: canvas elements with shared geometry.

use super::RichText;
use serde::{Deserialize, Serialize};

/// A single slide, keyed by its self-declared id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// The slide's declared id from its own `Id` node (not the filename)
    pub id: String,

    /// Raw background image reference (`id://` form), resolved at render
    /// time through the registry
    pub background: Option<String>,

    /// Canvas elements in document order
    pub elements: Vec<Element>,
}

impl Slide {
    /// Create an empty slide with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            background: None,
            elements: Vec::new(),
        }
    }

    /// Number of elements on the slide.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

/// Pixel geometry shared by every canvas element.
///
/// Every field defaults to 0 when the source node is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Left offset in pixels
    pub x: f32,
    /// Top offset in pixels
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
    /// Clockwise rotation in degrees; 0 emits no transform
    pub rotation: f32,
}

/// A positioned canvas element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Position, size, and rotation
    pub geometry: Geometry,

    /// The classified element variant
    pub kind: ElementKind,
}

/// Element variants, classified by structure rather than tag name alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    /// A plain text element carrying a rich-text subtree
    Text(RichText),

    /// An activity item: rich text plus an optional background image.
    ///
    /// Text always wins over a direct foreground source on the same
    /// element; the background image is independent of that rule.
    Activity {
        /// The rich-text content
        text: RichText,
        /// Raw background image reference (`id://` form)
        background: Option<String>,
    },

    /// An image element with a direct resource reference
    Image {
        /// Raw image reference (`id://` form)
        source: String,
    },

    /// Ink strokes, animations, and other unsupported variants; renders
    /// with no visible content, never an error
    Unsupported,
}

impl ElementKind {
    /// Check if this element carries rich text.
    pub fn is_text_bearing(&self) -> bool {
        matches!(self, ElementKind::Text(_) | ElementKind::Activity { .. })
    }

    /// Check if this is a plain image element.
    pub fn is_image(&self) -> bool {
        matches!(self, ElementKind::Image { .. })
    }
}
