//! Rich-text types: ordered lines of ordered runs with per-run styling.

use serde::{Deserialize, Serialize};

/// Container-level vertical alignment of a rich-text block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    /// Align lines to the top of the container (default)
    #[default]
    Top,
    /// Center lines vertically
    Center,
    /// Align lines to the bottom of the container
    Bottom,
}

impl VerticalAlignment {
    /// Map a source document alignment name; unrecognized names fall back
    /// to `Top`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Center" => Self::Center,
            "Bottom" => Self::Bottom,
            _ => Self::Top,
        }
    }
}

/// Per-line horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
}

impl HorizontalAlignment {
    /// Map a source document alignment name; unrecognized names fall back
    /// to `Left`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Center" => Self::Center,
            "Right" => Self::Right,
            _ => Self::Left,
        }
    }
}

/// A rich-text block: vertically aligned ordered lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    /// Container-level vertical alignment
    pub vertical: VerticalAlignment,

    /// Lines in document order
    pub lines: Vec<TextLine>,
}

impl RichText {
    /// Get unstyled text content, one string per line.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(TextLine::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check whether no line carries any text.
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.plain_text().is_empty())
    }
}

/// A single line: horizontally aligned ordered runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    /// Horizontal alignment of this line
    pub alignment: HorizontalAlignment,

    /// Runs in document order
    pub runs: Vec<TextRun>,
}

impl TextLine {
    /// Concatenated run text of this line.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// A run of text with one consistent style.
///
/// Each run's style composes independently of its siblings: an absent
/// attribute falls back to the platform default, never to the previous
/// run's resolved value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content; an empty run produces no markup node
    pub text: String,

    /// Independent optional styling
    pub style: RunStyle,
}

impl TextRun {
    /// Create a run with default styling.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::default(),
        }
    }

    /// Check if this run carries no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Optional per-run character styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStyle {
    /// Font size in pixels
    pub font_size: Option<f32>,

    /// Font family name
    pub font_family: Option<String>,

    /// Color literal, typically `#AARRGGBB`; other forms pass through
    /// verbatim to the artifact
    pub color: Option<String>,

    /// Bold weight
    pub bold: bool,
}

impl RunStyle {
    /// Check if any styling attribute is set.
    pub fn has_styling(&self) -> bool {
        self.font_size.is_some()
            || self.font_family.is_some()
            || self.color.is_some()
            || self.bold
    }
}
