//! Loosely-typed XML fragments with explicit optional accessors.
//!
//! The package schema is element-text only (no attributes carry data), so
//! the event stream folds into a plain owned tree. Schema fields are read
//! through optional-typed accessors, making "node absent" a visible branch
//! with one documented default at each call site.

use crate::error::{Error, Result};
use quick_xml::events::Event;
use quick_xml::reader::Reader;

/// An owned XML element: tag name, accumulated text, child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    /// Element tag name
    pub tag: String,

    /// Concatenated character data directly under this element
    pub text: String,

    /// Child elements in document order
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Parse a complete XML document into its root element.
    pub fn parse(input: &str) -> Result<Self> {
        let mut reader = Reader::from_str(input);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let tag = reader.decoder().decode(e.name().as_ref())?.into_owned();
                    stack.push(XmlNode {
                        tag,
                        ..Default::default()
                    });
                }
                Event::Empty(e) => {
                    let tag = reader.decoder().decode(e.name().as_ref())?.into_owned();
                    let node = XmlNode {
                        tag,
                        ..Default::default()
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => return Ok(node),
                    }
                }
                Event::Text(e) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&reader.decoder().decode(&e)?);
                    }
                }
                Event::CData(e) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&String::from_utf8_lossy(&e));
                    }
                }
                Event::GeneralRef(e) => {
                    if let Some(top) = stack.last_mut() {
                        let entity = reader.decoder().decode(&e)?.into_owned();
                        top.text.push_str(&decode_entity(&entity));
                    }
                }
                Event::End(_) => {
                    let node = stack.pop().ok_or_else(|| {
                        Error::Other("unbalanced closing tag".to_string())
                    })?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => return Ok(node),
                    }
                }
                Event::Eof => {
                    return Err(Error::Other("document has no root element".to_string()));
                }
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            }
            buf.clear();
        }
    }

    /// First child element with the given tag.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.tag == name)
    }

    /// All child elements with the given tag, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.children.iter().filter(move |c| c.tag == name)
    }

    /// Trimmed text of this element; `None` when empty.
    pub fn value(&self) -> Option<&str> {
        let text = self.text.trim();
        (!text.is_empty()).then_some(text)
    }

    /// Trimmed text of the named child; `None` when the child is absent or
    /// carries no text.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(XmlNode::value)
    }

    /// Named child's text parsed as a float; `None` when absent or
    /// unparseable.
    pub fn child_float(&self, name: &str) -> Option<f32> {
        self.child_text(name).and_then(|t| t.parse().ok())
    }

    /// Walk a chain of child tags, yielding the final node if every step
    /// exists.
    pub fn descendant(&self, path: &[&str]) -> Option<&XmlNode> {
        path.iter()
            .try_fold(self, |node, name| node.child(name))
    }
}

/// Decode a general entity reference into its character data.
fn decode_entity(entity: &str) -> String {
    match entity {
        "lt" => "<".to_string(),
        "gt" => ">".to_string(),
        "amp" => "&".to_string(),
        "apos" => "'".to_string(),
        "quot" => "\"".to_string(),
        _ => {
            // Numeric character references: &#NN; and &#xNN;
            if let Some(num) = entity.strip_prefix('#') {
                let code = if let Some(hex) = num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
                    u32::from_str_radix(hex, 16).ok()
                } else {
                    num.parse().ok()
                };
                if let Some(c) = code.and_then(char::from_u32) {
                    return c.to_string();
                }
            }
            String::new()
        }
    }
}
