//! HTML output layer
//!
//! This module provides the markup builder and escaping used by the view
//! renderers, with configuration for pretty printing and CSS class
//! namespacing.

pub mod builder;
pub mod config;
pub mod escape;

pub use builder::HtmlBuilder;
pub use config::HtmlConfig;
