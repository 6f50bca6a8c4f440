//! Models table and page rendering

use crate::html::{HtmlBuilder, HtmlConfig};
use crate::intl::MessageCatalog;
use crate::model::ModelRecord;

use super::model_row::write_model_row;

/// Column count of the models table: action column plus four data columns
const TABLE_COLUMNS: usize = 5;

/// Message ids for the data column headers, in display order
const HEADER_IDS: [&str; 4] = ["brand", "model", "revision", "signing-key"];

/// Write the models table: localized header row, then one row per record
///
/// An empty record slice renders a single localized empty-state row in
/// place of the body rows.
pub fn write_models_table(
    builder: &mut HtmlBuilder,
    models: &[ModelRecord],
    catalog: &MessageCatalog,
) {
    builder.open_element("table", &[]);

    builder.open_element("thead", &[]);
    builder.open_element("tr", &[]);
    // Unlabeled action column
    builder.add_header_cell("");
    for id in HEADER_IDS {
        builder.add_header_cell(&catalog.format(id));
    }
    builder.close_element("tr");
    builder.close_element("thead");

    builder.open_element("tbody", &[]);
    if models.is_empty() {
        builder.open_element("tr", &[]);
        builder.add_colspan_cell(&catalog.format("no-models"), TABLE_COLUMNS);
        builder.close_element("tr");
    } else {
        for model in models {
            write_model_row(builder, model, catalog);
        }
    }
    builder.close_element("tbody");

    builder.close_element("table");
}

/// Render the models table as standalone markup
pub fn render_models_table(
    models: &[ModelRecord],
    catalog: &MessageCatalog,
    config: &HtmlConfig,
) -> String {
    let mut builder = HtmlBuilder::new(config.clone());
    write_models_table(&mut builder, models, catalog);
    builder.finish()
}

/// Render the models page
///
/// With `config.standalone` set the table is wrapped in a full HTML
/// document whose title and heading come from the `models` message;
/// otherwise only the heading and table section is emitted.
pub fn render_models_page(
    models: &[ModelRecord],
    catalog: &MessageCatalog,
    config: &HtmlConfig,
) -> String {
    let mut builder = HtmlBuilder::new(config.clone());
    let title = catalog.format("models");

    if config.standalone {
        builder.raw_line("<!DOCTYPE html>");
        builder.open_element("html", &[]);
        builder.open_element("head", &[]);
        builder.raw_line(r#"<meta charset="utf-8">"#);
        builder.text_element("title", &title);
        builder.close_element("head");
        builder.open_element("body", &[]);
    }

    builder.open_element("section", &[]);
    builder.text_element("h2", &title);
    write_models_table(&mut builder, models, catalog);
    builder.close_element("section");

    if config.standalone {
        builder.close_element("body");
        builder.close_element("html");
    }

    builder.finish()
}
