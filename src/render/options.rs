//! Rendering options and configuration.

/// Options for rendering the HTML artifact.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Page title override; defaults to the document's metadata name.
    pub title: Option<String>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
