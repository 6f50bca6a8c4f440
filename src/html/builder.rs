//! HTML generation for console views

use super::escape::{escape_attr, escape_text};
use super::HtmlConfig;

/// Build HTML markup incrementally
///
/// Lines are collected with the current nesting depth and joined on
/// [`HtmlBuilder::finish`]; with pretty printing disabled the markup is
/// emitted as a single unindented line.
pub struct HtmlBuilder {
    config: HtmlConfig,
    lines: Vec<String>,
    indent: usize,
}

impl HtmlBuilder {
    /// Create a new HTML builder
    pub fn new(config: HtmlConfig) -> Self {
        Self {
            config,
            lines: vec![],
            indent: 0,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn push(&mut self, markup: String) {
        self.lines.push(format!("{}{}", self.indent_str(), markup));
    }

    /// Render a class attribute for console-owned classes, applying the
    /// configured prefix. Empty input renders nothing.
    fn class_attr(&self, classes: &[&str]) -> String {
        if classes.is_empty() {
            return String::new();
        }
        let prefix = self.prefix();
        let list = classes
            .iter()
            .map(|c| format!("{}{}", prefix, c))
            .collect::<Vec<_>>()
            .join(" ");
        format!(r#" class="{}""#, list)
    }

    /// Emit a raw markup line (doctype, meta tags)
    pub fn raw_line(&mut self, markup: &str) {
        self.push(markup.to_string());
    }

    /// Open a container element and increase nesting
    pub fn open_element(&mut self, tag: &str, classes: &[&str]) {
        let class_attr = self.class_attr(classes);
        self.push(format!("<{}{}>", tag, class_attr));
        self.indent += 1;
    }

    /// Close a container element opened with [`HtmlBuilder::open_element`]
    pub fn close_element(&mut self, tag: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.push(format!("</{}>", tag));
    }

    /// Emit a single-line element with escaped text content
    pub fn text_element(&mut self, tag: &str, text: &str) {
        self.push(format!("<{}>{}</{}>", tag, escape_text(text), tag));
    }

    /// Add a table data cell
    pub fn add_cell(&mut self, text: &str) {
        self.text_element("td", text);
    }

    /// Add a table header cell
    pub fn add_header_cell(&mut self, text: &str) {
        self.text_element("th", text);
    }

    /// Add a data cell spanning multiple columns
    pub fn add_colspan_cell(&mut self, text: &str, columns: usize) {
        self.push(format!(
            r#"<td colspan="{}">{}</td>"#,
            columns,
            escape_text(text)
        ));
    }

    /// Add an icon-link action cell
    ///
    /// The anchor carries the console button class and a localized tooltip;
    /// the Font Awesome icon classes are third-party and never prefixed.
    pub fn add_action_link_cell(&mut self, href: &str, title: &str) {
        let class_attr = self.class_attr(&["button--secondary"]);
        self.push(format!(
            r#"<td><a href="{}"{} title="{}"><i class="fa fa-pencil"></i></a></td>"#,
            escape_attr(href),
            class_attr,
            escape_attr(title)
        ));
    }

    /// Assemble the final markup
    pub fn finish(self) -> String {
        if self.config.pretty_print {
            self.lines.join("\n")
        } else {
            self.lines.join("")
        }
    }
}
