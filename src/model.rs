//! Model records as supplied by the vault backend
//!
//! A model record describes one signed device model: its brand, name,
//! revision and the signing authority/key pair it is registered under.
//! The console never mutates records; it only renders them.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Errors that can occur when loading a models file
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Failed to read models file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse models TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A model revision, kept textually so both `revision = 3` and
/// `revision = "3-beta"` render unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Revision(String);

impl Revision {
    pub fn new(value: impl Into<String>) -> Self {
        Revision(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Revision {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Revision(n.to_string()),
            Raw::Text(s) => Revision(s),
        })
    }
}

/// One model record from the vault
///
/// All fields default to empty when absent in the source file; a record
/// with missing fields renders as blank cells rather than failing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModelRecord {
    /// Identifier used in console URLs
    pub id: String,
    /// Brand account the model belongs to
    #[serde(rename = "brand-id")]
    pub brand_id: String,
    /// Model name
    pub model: String,
    /// Model revision (string or number in the source file)
    pub revision: Revision,
    /// Signing authority account
    #[serde(rename = "authority-id")]
    pub authority_id: String,
    /// Signing key fingerprint
    #[serde(rename = "key-id")]
    pub key_id: String,
}

impl ModelRecord {
    /// Console path for editing this model
    pub fn edit_path(&self) -> String {
        format!("/models/{}/edit", self.id)
    }

    /// The combined authority/key cell text, e.g. `canonical/61abf...`
    pub fn signing_key(&self) -> String {
        format!("{}/{}", self.authority_id, self.key_id)
    }
}

/// TOML structure for deserializing a models file
#[derive(Deserialize)]
struct ModelsFile {
    #[serde(default)]
    models: Vec<ModelRecord>,
}

/// Load model records from a TOML file
pub fn load_models(path: &Path) -> Result<Vec<ModelRecord>, RecordError> {
    let content = std::fs::read_to_string(path)?;
    parse_models(&content)
}

/// Parse model records from a TOML string
pub fn parse_models(content: &str) -> Result<Vec<ModelRecord>, RecordError> {
    let parsed: ModelsFile = toml::from_str(content)?;
    Ok(parsed.models)
}
