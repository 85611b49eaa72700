//! Theory pagination and the save payload.

use crate::common::fixture;
use dew_babel::ir::containers::{paginate, InfoBox, TheoryContent};
use dew_babel::transforms::theory_save_payload;
use dew_babel::ModuleContent;
use serde_json::json;

fn theory_fixture() -> TheoryContent {
    match ModuleContent::from_value(&fixture("theory-module.json")) {
        ModuleContent::Theory(theory) => theory,
        other => panic!("expected theory content, got {}", other.kind_name()),
    }
}

#[test]
fn test_fixture_pages() {
    let theory = theory_fixture();
    assert_eq!(theory.boxes_per_page, Some(2));

    let pages = theory.pages(1);
    assert_eq!(pages.len(), 2);
    assert_eq!(theory.page_count(1), 2);
    assert_eq!(pages[0].boxes, theory.info_boxes[..2].to_vec());
    assert_eq!(pages[1].boxes, theory.info_boxes[2..].to_vec());
}

#[test]
fn test_page_count_is_ceiling() {
    let boxes = vec![InfoBox::default(); 7];
    for (per_page, expected) in [(1, 7), (2, 4), (3, 3), (7, 1), (10, 1)] {
        assert_eq!(paginate(&boxes, per_page).len(), expected);
    }
}

#[test]
fn test_save_payload_from_editor_draft() {
    let draft = json!({
        "infoBoxes": [
            { "content": fixture("wise-mind.tiptap") },
            { "content": { "type": "doc", "content": [] } },
            {}
        ]
    });
    let payload = theory_save_payload(&draft, 2).unwrap();
    assert_eq!(
        payload,
        json!({
            "content": {
                "infoBoxes": [
                    { "content": { "sections": [
                        { "type": "heading", "level": 2, "text": "Wise Mind" },
                        { "type": "bulletList", "items": ["Observe"] }
                    ] } },
                    { "content": { "sections": [] } },
                    { "content": { "sections": [] } }
                ],
                "boxesPerPage": 2
            },
            "submodules": [
                { "pageNumber": 1, "boxes": [
                    { "content": { "sections": [
                        { "type": "heading", "level": 2, "text": "Wise Mind" },
                        { "type": "bulletList", "items": ["Observe"] }
                    ] } },
                    { "content": { "sections": [] } }
                ] },
                { "pageNumber": 2, "boxes": [
                    { "content": { "sections": [] } }
                ] }
            ]
        })
    );
}
