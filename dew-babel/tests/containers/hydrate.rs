//! Editor hydration.

use crate::common::fixture;
use dew_babel::{hydrate_for_editor, normalize_module_content};
use serde_json::json;

#[test]
fn test_theory_boxes_open_as_documents() {
    let hydrated = hydrate_for_editor(&fixture("theory-module.json"));
    let boxes = hydrated["infoBoxes"].as_array().unwrap();
    assert_eq!(boxes.len(), 3);
    assert_eq!(hydrated["boxesPerPage"], json!(2));
    for info_box in boxes {
        assert_eq!(info_box["content"]["type"], json!("doc"));
    }
    assert_eq!(
        boxes[1]["content"],
        json!({ "type": "doc", "content": [{
            "type": "callout",
            "attrs": { "calloutType": "success", "title": "Tip" },
            "content": [{ "type": "paragraph", "content": [{ "type": "text", "text": "Pause before you act." }] }]
        }] })
    );
}

#[test]
fn test_questions_are_edited_as_fields() {
    let questions = fixture("question-module.json");
    assert_eq!(hydrate_for_editor(&questions), questions);
}

#[test]
fn test_sections_become_a_document() {
    let hydrated = hydrate_for_editor(&json!({ "sections": [
        { "type": "paragraph", "text": "Hello" }
    ] }));
    assert_eq!(
        hydrated,
        json!({ "type": "doc", "content": [
            { "type": "paragraph", "content": [{ "type": "text", "text": "Hello" }] }
        ] })
    );
}

#[test]
fn test_save_after_hydrate_restores_theory() {
    let stored = fixture("theory-module.json");
    assert_eq!(normalize_module_content(&hydrate_for_editor(&stored)), stored);
}
