//! Rendering module for emitting the HTML slideshow artifact.

mod html;
mod json;
mod options;
mod richtext;

pub use html::{to_html, HtmlRenderer, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use richtext::{css_color, render_rich_text};
