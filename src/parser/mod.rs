//! Package parsing module.

mod loader;
mod slide;
mod xml;

pub use loader::{PackageLoader, ParseOptions};
pub use slide::parse_slide;
pub use xml::XmlNode;
