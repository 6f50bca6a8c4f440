//! Table row for one model record
//!
//! Five cells: an edit-action icon link, then brand, model, revision and
//! the combined authority/key identifier. This mirrors the row layout of
//! the console's models listing.

use crate::html::{HtmlBuilder, HtmlConfig};
use crate::intl::MessageCatalog;
use crate::model::ModelRecord;

/// Write one model row into an open table body
///
/// The edit link targets `/models/{id}/edit` and carries the localized
/// `edit-model` tooltip. Empty record fields render as blank cells.
pub fn write_model_row(builder: &mut HtmlBuilder, model: &ModelRecord, catalog: &MessageCatalog) {
    builder.open_element("tr", &[]);
    builder.add_action_link_cell(&model.edit_path(), &catalog.format("edit-model"));
    builder.add_cell(&model.brand_id);
    builder.add_cell(&model.model);
    builder.add_cell(model.revision.as_str());
    builder.add_cell(&model.signing_key());
    builder.close_element("tr");
}

/// Render one model row as standalone markup
pub fn render_model_row(
    model: &ModelRecord,
    catalog: &MessageCatalog,
    config: &HtmlConfig,
) -> String {
    let mut builder = HtmlBuilder::new(config.clone());
    write_model_row(&mut builder, model, catalog);
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Revision;

    fn sample_model() -> ModelRecord {
        ModelRecord {
            id: "42".to_string(),
            brand_id: "vendorco".to_string(),
            model: "edge-gateway".to_string(),
            revision: Revision::new("2"),
            authority_id: "vendorco".to_string(),
            key_id: "61abf588e52be7a3".to_string(),
        }
    }

    #[test]
    fn test_row_has_five_cells() {
        let html = render_model_row(
            &sample_model(),
            &MessageCatalog::default(),
            &HtmlConfig::default(),
        );
        assert_eq!(html.matches("<td").count(), 5);
    }

    #[test]
    fn test_edit_link_target() {
        let html = render_model_row(
            &sample_model(),
            &MessageCatalog::default(),
            &HtmlConfig::default(),
        );
        assert!(html.contains(r#"href="/models/42/edit""#));
    }

    #[test]
    fn test_edit_tooltip_is_localized() {
        let catalog = MessageCatalog::from_str(
            r#"
[messages]
edit-model = "Modell bearbeiten"
"#,
        )
        .expect("Should parse");
        let html = render_model_row(&sample_model(), &catalog, &HtmlConfig::default());
        assert!(html.contains(r#"title="Modell bearbeiten""#));
    }

    #[test]
    fn test_signing_key_cell_joins_authority_and_key() {
        let html = render_model_row(
            &sample_model(),
            &MessageCatalog::default(),
            &HtmlConfig::default(),
        );
        assert!(html.contains("<td>vendorco/61abf588e52be7a3</td>"));
    }

    #[test]
    fn test_empty_record_renders_blank_cells() {
        let html = render_model_row(
            &ModelRecord::default(),
            &MessageCatalog::default(),
            &HtmlConfig::default(),
        );
        assert!(html.contains(r#"href="/models//edit""#));
        assert!(html.contains("<td></td>"));
    }

    #[test]
    fn test_field_values_are_escaped() {
        let model = ModelRecord {
            model: "<script>alert(1)</script>".to_string(),
            ..sample_model()
        };
        let html = render_model_row(&model, &MessageCatalog::default(), &HtmlConfig::default());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
