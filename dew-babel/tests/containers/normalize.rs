//! Module-save normalization.

use crate::common::fixture;
use dew_babel::normalize_module_content;
use serde_json::json;

#[test]
fn test_editor_document_is_converted() {
    assert_eq!(
        normalize_module_content(&fixture("wise-mind.tiptap")),
        json!({ "sections": [
            { "type": "heading", "level": 2, "text": "Wise Mind" },
            { "type": "bulletList", "items": ["Observe"] }
        ] })
    );
}

#[test]
fn test_stored_modules_are_untouched() {
    let theory = fixture("theory-module.json");
    assert_eq!(normalize_module_content(&theory), theory);

    let questions = fixture("question-module.json");
    assert_eq!(normalize_module_content(&questions), questions);
}

#[test]
fn test_theory_editor_save() {
    let draft = json!({
        "infoBoxes": [
            { "id": "box-1", "content": fixture("wise-mind.tiptap") },
            { "id": "box-2", "content": { "type": "doc", "content": [] } }
        ],
        "boxesPerPage": 1
    });
    assert_eq!(
        normalize_module_content(&draft),
        json!({
            "infoBoxes": [
                { "id": "box-1", "content": { "sections": [
                    { "type": "heading", "level": 2, "text": "Wise Mind" },
                    { "type": "bulletList", "items": ["Observe"] }
                ] } },
                { "id": "box-2", "content": { "sections": [] } }
            ],
            "boxesPerPage": 1
        })
    );
}

#[test]
fn test_normalization_is_idempotent() {
    let once = normalize_module_content(&fixture("kitchensink.tiptap"));
    assert_eq!(normalize_module_content(&once), once);
}
