//! Vault Console - HTML view rendering for a signing-vault administration console
//!
//! This library renders the models section of the console: localized HTML
//! tables of model records, each row carrying an edit-action link and the
//! model's brand, name, revision and signing authority/key identifiers.
//!
//! # Example
//!
//! ```rust
//! use vault_console::{parse_models, render_models_page};
//!
//! let models = parse_models(r#"
//! [[models]]
//! id = "42"
//! brand-id = "vendorco"
//! model = "edge-gateway"
//! revision = 2
//! authority-id = "vendorco"
//! key-id = "61abf588e52be7a3"
//! "#).unwrap();
//!
//! let html = render_models_page(&models);
//! assert!(html.contains(r#"href="/models/42/edit""#));
//! ```

pub mod html;
pub mod intl;
pub mod model;
pub mod view;

pub use html::{HtmlBuilder, HtmlConfig};
pub use intl::{CatalogError, MessageCatalog, PatternError};
pub use model::{load_models, parse_models, ModelRecord, RecordError, Revision};

use std::path::Path;

use thiserror::Error;

/// Errors that can occur in the load-and-render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error loading the records file
    #[error("records error: {0}")]
    Records(#[from] RecordError),

    /// Error loading the message catalog
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// HTML output configuration
    pub html: HtmlConfig,
    /// Message catalog for localized labels
    pub catalog: MessageCatalog,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML configuration
    pub fn with_html(mut self, config: HtmlConfig) -> Self {
        self.html = config;
        self
    }

    /// Set the message catalog
    pub fn with_catalog(mut self, catalog: MessageCatalog) -> Self {
        self.catalog = catalog;
        self
    }
}

/// Render the models page with default configuration
///
/// This is the main entry point for the library: built-in English labels,
/// pretty-printed standalone document.
pub fn render_models_page(models: &[ModelRecord]) -> String {
    render_models_page_with_config(models, &RenderConfig::default())
}

/// Render the models page with custom configuration
///
/// # Example
///
/// ```rust
/// use vault_console::{render_models_page_with_config, HtmlConfig, RenderConfig};
///
/// let config = RenderConfig::new()
///     .with_html(HtmlConfig::default().with_standalone(false));
///
/// let html = render_models_page_with_config(&[], &config);
/// assert!(html.contains("No models found."));
/// ```
pub fn render_models_page_with_config(models: &[ModelRecord], config: &RenderConfig) -> String {
    view::render_models_page(models, &config.catalog, &config.html)
}

/// Load records and an optional catalog from disk and render the page
pub fn render_models_file(
    models_path: &Path,
    catalog_path: Option<&Path>,
) -> Result<String, RenderError> {
    let models = load_models(models_path)?;
    let catalog = match catalog_path {
        Some(path) => MessageCatalog::from_file(path)?,
        None => MessageCatalog::default(),
    };
    let config = RenderConfig::new().with_catalog(catalog);
    Ok(render_models_page_with_config(&models, &config))
}
