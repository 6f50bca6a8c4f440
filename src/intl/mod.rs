//! Localization support for console views
//!
//! Message catalogs resolve stable message ids to localized text; the
//! pattern module handles `{placeholder}` interpolation inside messages.

pub mod catalog;
pub mod pattern;

pub use catalog::{CatalogError, CatalogFinding, MessageCatalog};
pub use pattern::{interpolate, parse_pattern, PatternError, Segment};
