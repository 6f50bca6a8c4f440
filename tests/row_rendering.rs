//! Integration tests for the model row renderer

use pretty_assertions::assert_eq;

use vault_console::view::render_model_row;
use vault_console::{HtmlConfig, MessageCatalog, ModelRecord, Revision};

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
fn test_full_row_markup() {
    let html = render_model_row(
        &sample_model(),
        &MessageCatalog::default(),
        &HtmlConfig::default(),
    );

    assert_eq!(
        html,
        r#"<tr>
  <td><a href="/models/42/edit" class="button--secondary" title="Edit Model"><i class="fa fa-pencil"></i></a></td>
  <td>vendorco</td>
  <td>edge-gateway</td>
  <td>2</td>
  <td>vendorco/61abf588e52be7a3</td>
</tr>"#
    );
}

#[test]
fn test_edit_link_targets_edit_path() {
    let html = render_model_row(
        &sample_model(),
        &MessageCatalog::default(),
        &HtmlConfig::default(),
    );
    assert!(html.contains(r#"href="/models/42/edit""#));
}

#[test]
fn test_signing_key_cell_is_authority_slash_key() {
    let html = render_model_row(
        &sample_model(),
        &MessageCatalog::default(),
        &HtmlConfig::default(),
    );
    assert!(html.contains("<td>vendorco/61abf588e52be7a3</td>"));
}

#[test]
fn test_tooltip_is_localized_edit_model_message() {
    let catalog = MessageCatalog::from_str(
        r#"
[metadata]
locale = "fr"

[messages]
edit-model = "Modifier le modèle"
"#,
    )
    .expect("Should parse");
    let html = render_model_row(&sample_model(), &catalog, &HtmlConfig::default());
    assert!(html.contains(r#"title="Modifier le modèle""#));
}

#[test]
fn test_compact_row_markup() {
    let config = HtmlConfig::default().with_pretty_print(false);
    let html = render_model_row(&sample_model(), &MessageCatalog::default(), &config);

    assert!(html.starts_with("<tr><td>"));
    assert!(html.ends_with("</td></tr>"));
    assert!(!html.contains('\n'));
}

#[test]
fn test_missing_fields_render_blank() {
    let model = ModelRecord {
        id: "7".to_string(),
        ..ModelRecord::default()
    };
    let html = render_model_row(&model, &MessageCatalog::default(), &HtmlConfig::default());

    assert!(html.contains(r#"href="/models/7/edit""#));
    assert_eq!(html.matches("<td></td>").count(), 3);
    assert!(html.contains("<td>/</td>"));
}

#[test]
fn test_hostile_field_values_are_escaped() {
    let model = ModelRecord {
        id: r#""><script>"#.to_string(),
        brand_id: "a&b".to_string(),
        ..sample_model()
    };
    let html = render_model_row(&model, &MessageCatalog::default(), &HtmlConfig::default());

    assert!(!html.contains("<script>"));
    assert!(html.contains("<td>a&amp;b</td>"));
    assert!(html.contains("href=\"/models/&quot;&gt;&lt;script&gt;/edit\""));
}
