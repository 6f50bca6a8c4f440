//! Configuration for HTML rendering

/// Configuration options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for console-owned CSS class names (e.g. "sv-" for
    /// "sv-button--secondary"); third-party icon classes are never prefixed
    pub class_prefix: Option<String>,

    /// Whether page output includes the doctype and document shell
    pub standalone: bool,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            pretty_print: true,
            class_prefix: None,
            standalone: true,
        }
    }
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Set whether page output is a standalone document
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }
}
