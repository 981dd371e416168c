//! Per-slide document parsing and element classification.

use super::xml::XmlNode;
use crate::error::{Error, Result};
use crate::model::{
    Element, ElementKind, Geometry, HorizontalAlignment, RichText, RunStyle, Slide, TextLine,
    TextRun, VerticalAlignment,
};

/// Parse one slide document into the model.
///
/// A slide without a declared `Id` is malformed: the caller drops it and
/// the rest of the run proceeds.
pub fn parse_slide(source: &str) -> Result<Slide> {
    let root = XmlNode::parse(source)?;
    let id = root
        .child_text("Id")
        .ok_or(Error::MissingField("Id"))?
        .to_string();

    let mut slide = Slide::new(id);
    slide.background = background_source(&root);

    if let Some(elements) = root.child("Elements") {
        slide.elements = elements.children.iter().map(classify_element).collect();
    }

    Ok(slide)
}

/// Raw `Background/ImageBrush/Source` reference, when present.
fn background_source(node: &XmlNode) -> Option<String> {
    node.descendant(&["Background", "ImageBrush", "Source"])
        .and_then(XmlNode::value)
        .map(str::to_string)
}

/// Classify a canvas element by structure, not just tag name.
///
/// A `Text` element with a `RichText` child is a text element; an
/// `ActivityItem` with a nested `Text/RichText` subtree is an activity item
/// whose text wins over any direct foreground `Source` on the same element.
/// Absent text content, a direct `Source` child makes it an image element.
/// Everything else (ink strokes, animations) degrades to no visible content.
fn classify_element(node: &XmlNode) -> Element {
    Element {
        geometry: parse_geometry(node),
        kind: classify_kind(node),
    }
}

fn classify_kind(node: &XmlNode) -> ElementKind {
    match node.tag.as_str() {
        "Text" => {
            if let Some(rich) = node.child("RichText") {
                return ElementKind::Text(parse_rich_text(rich));
            }
        }
        "ActivityItem" => {
            if let Some(rich) = node.descendant(&["Text", "RichText"]) {
                return ElementKind::Activity {
                    text: parse_rich_text(rich),
                    background: background_source(node),
                };
            }
        }
        _ => {}
    }

    if let Some(source) = node.child_text("Source") {
        return ElementKind::Image {
            source: source.to_string(),
        };
    }

    ElementKind::Unsupported
}

/// Shared element geometry; every absent field defaults to 0.
fn parse_geometry(node: &XmlNode) -> Geometry {
    Geometry {
        x: node.child_float("X").unwrap_or(0.0),
        y: node.child_float("Y").unwrap_or(0.0),
        width: node.child_float("Width").unwrap_or(0.0),
        height: node.child_float("Height").unwrap_or(0.0),
        rotation: node.child_float("Rotation").unwrap_or(0.0),
    }
}

fn parse_rich_text(node: &XmlNode) -> RichText {
    let vertical = node
        .child_text("VerticalTextAlignment")
        .map(VerticalAlignment::from_name)
        .unwrap_or_default();

    let lines = node
        .child("TextLines")
        .map(|lines| lines.children_named("TextLine").map(parse_line).collect())
        .unwrap_or_default();

    RichText { vertical, lines }
}

fn parse_line(node: &XmlNode) -> TextLine {
    let alignment = node
        .child_text("TextAlignment")
        .map(HorizontalAlignment::from_name)
        .unwrap_or_default();

    let runs = node
        .child("TextRuns")
        .map(|runs| runs.children_named("TextRun").map(parse_run).collect())
        .unwrap_or_default();

    TextLine { alignment, runs }
}

fn parse_run(node: &XmlNode) -> TextRun {
    TextRun {
        text: node.child_text("Text").unwrap_or_default().to_string(),
        style: RunStyle {
            font_size: node.child_float("FontSize"),
            font_family: node
                .descendant(&["FontFamily", "Source"])
                .and_then(XmlNode::value)
                .map(str::to_string),
            color: node
                .descendant(&["Foreground", "ColorBrush"])
                .and_then(XmlNode::value)
                .map(str::to_string),
            bold: node.child_text("FontWeight") == Some("Bold"),
        },
    }
}
