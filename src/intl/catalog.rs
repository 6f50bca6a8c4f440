//! Message catalogs for console localization
//!
//! A catalog maps stable message ids (`edit-model`, `signing-key`, ...) to
//! localized text for one locale. Catalogs are TOML files; lookups fall
//! back to a built-in English catalog and finally to the message id itself,
//! so rendering never fails on a missing translation.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::pattern::{interpolate, parse_pattern, PatternError};

/// Errors that can occur when loading or parsing message catalogs
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read message catalog: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse message catalog TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A message catalog for one locale
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    /// BCP 47 locale tag, e.g. "en", "zh-TW"
    pub locale: Option<String>,
    /// Optional display name for the catalog
    pub name: Option<String>,
    /// Message mappings: id -> pattern
    pub messages: HashMap<String, String>,
}

/// TOML structure for deserializing catalogs
#[derive(Deserialize)]
struct TomlCatalog {
    metadata: Option<TomlMetadata>,
    messages: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    locale: Option<String>,
    name: Option<String>,
}

/// Built-in English messages, used when a catalog has no entry for an id
const DEFAULT_MESSAGES: &str = r#"
[metadata]
locale = "en"
name = "English"

[messages]
models = "Models"
brand = "Brand"
model = "Model"
revision = "Revision"
signing-key = "Signing Key"
edit-model = "Edit Model"
add-new-model = "Add New Model"
no-models = "No models found."
confirm-model-deletion = "Delete model {model}?"
"#;

/// A validation finding for one catalog message
#[derive(Debug)]
pub struct CatalogFinding {
    /// Message id whose pattern is malformed
    pub id: String,
    /// The offending pattern text
    pub pattern: String,
    /// The structural error
    pub error: PatternError,
}

impl MessageCatalog {
    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a catalog from a TOML string
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let parsed: TomlCatalog = toml::from_str(content)?;

        Ok(MessageCatalog {
            locale: parsed.metadata.as_ref().and_then(|m| m.locale.clone()),
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            messages: parsed.messages,
        })
    }

    /// Look up a message pattern in this catalog only
    ///
    /// Returns None if the id is not defined here.
    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.messages.get(id).map(|s| s.as_str())
    }

    /// Resolve a message id to localized text
    ///
    /// Fallback order:
    /// 1. this catalog
    /// 2. the built-in English catalog
    /// 3. the id itself
    pub fn format(&self, id: &str) -> String {
        if let Some(pattern) = self.resolve(id) {
            return pattern.to_string();
        }

        let default = Self::default();
        if let Some(pattern) = default.resolve(id) {
            return pattern.to_string();
        }

        id.to_string()
    }

    /// Resolve a message id and substitute `{placeholder}` values
    ///
    /// A malformed pattern falls back to its raw text; formatting at render
    /// time never fails. Use [`MessageCatalog::validate`] to surface
    /// malformed patterns ahead of time.
    pub fn format_with(&self, id: &str, values: &HashMap<String, String>) -> String {
        let pattern = self.format(id);
        interpolate(&pattern, values).unwrap_or(pattern)
    }

    /// Check every pattern in this catalog for structural errors
    pub fn validate(&self) -> Vec<CatalogFinding> {
        let mut findings: Vec<CatalogFinding> = self
            .messages
            .iter()
            .filter_map(|(id, pattern)| match parse_pattern(pattern) {
                Ok(_) => None,
                Err(error) => Some(CatalogFinding {
                    id: id.clone(),
                    pattern: pattern.clone(),
                    error,
                }),
            })
            .collect();
        findings.sort_by(|a, b| a.id.cmp(&b.id));
        findings
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::from_str(DEFAULT_MESSAGES).expect("Default catalog should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = MessageCatalog::default();
        assert_eq!(catalog.locale.as_deref(), Some("en"));
        assert!(catalog.messages.contains_key("edit-model"));
        assert!(catalog.messages.contains_key("signing-key"));
    }

    #[test]
    fn test_format_resolves_own_message() {
        let catalog = MessageCatalog::from_str(
            r#"
[metadata]
locale = "de"

[messages]
edit-model = "Modell bearbeiten"
"#,
        )
        .expect("Should parse");
        assert_eq!(catalog.format("edit-model"), "Modell bearbeiten");
    }

    #[test]
    fn test_format_falls_back_to_builtin() {
        let catalog = MessageCatalog::from_str("[messages]\n").expect("Should parse");
        assert_eq!(catalog.format("edit-model"), "Edit Model");
        assert_eq!(catalog.format("signing-key"), "Signing Key");
    }

    #[test]
    fn test_format_falls_back_to_id() {
        let catalog = MessageCatalog::default();
        assert_eq!(catalog.format("unknown-message"), "unknown-message");
    }

    #[test]
    fn test_format_with_values() {
        let catalog = MessageCatalog::default();
        let mut values = HashMap::new();
        values.insert("model".to_string(), "edge-gateway".to_string());
        assert_eq!(
            catalog.format_with("confirm-model-deletion", &values),
            "Delete model edge-gateway?"
        );
    }

    #[test]
    fn test_format_with_malformed_pattern_keeps_raw_text() {
        let catalog = MessageCatalog::from_str(
            r#"
[messages]
broken = "oops {model"
"#,
        )
        .expect("Should parse");
        assert_eq!(
            catalog.format_with("broken", &HashMap::new()),
            "oops {model"
        );
    }

    #[test]
    fn test_validate_reports_malformed_patterns() {
        let catalog = MessageCatalog::from_str(
            r#"
[messages]
good = "fine"
broken = "oops {model"
also-broken = "bad } text"
"#,
        )
        .expect("Should parse");
        let findings = catalog.validate();
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].id, "also-broken");
        assert_eq!(findings[1].id, "broken");
    }

    #[test]
    fn test_parse_toml_without_metadata() {
        let catalog = MessageCatalog::from_str(
            r#"
[messages]
brand = "Marke"
"#,
        )
        .expect("Should parse");
        assert_eq!(catalog.locale, None);
        assert_eq!(catalog.resolve("brand"), Some("Marke"));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = MessageCatalog::from_str("not toml {{{{");
        assert!(matches!(result, Err(CatalogError::ParseError(_))));
    }
}
