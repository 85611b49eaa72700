//! End-to-end conversion scenarios on editor documents.

use crate::common::fixture;
use dew_babel::{to_rich, to_structured};
use serde_json::{json, Value};

#[test]
fn test_wise_mind_drops_empty_paragraph() {
    let structured = to_structured(&fixture("wise-mind.tiptap"));
    assert_eq!(
        structured,
        json!({ "sections": [
            { "type": "heading", "level": 2, "text": "Wise Mind" },
            { "type": "bulletList", "items": ["Observe"] }
        ] })
    );
}

#[test]
fn test_kitchensink_document() {
    let structured = to_structured(&fixture("kitchensink.tiptap"));
    assert_eq!(
        structured,
        json!({ "sections": [
            { "type": "heading", "level": 1, "text": "Distress Tolerance" },
            {
                "type": "paragraph",
                "text": "Skills for getting through a crisis without making it worse."
            },
            { "type": "bulletList", "items": ["TIPP", "ACCEPTS"] },
            {
                "type": "image",
                "src": "/images/tipp.png",
                "alt": "TIPP chart",
                "width": 640,
                "height": 400
            },
            {
                "type": "callout",
                "calloutType": "warning",
                "title": "Before you start",
                "text": "Check with your therapist."
            },
            { "type": "paragraph", "text": "This too shall pass." },
            {
                "type": "activity",
                "activityType": "practice_exercise",
                "prompt": "Try paced breathing for one minute."
            }
        ] })
    );
}

#[test]
fn test_unknown_node_among_siblings() {
    let doc = json!({ "type": "doc", "content": [
        { "type": "paragraph", "content": [{ "type": "text", "text": "one" }] },
        { "type": "footnote", "content": [] },
        { "type": "paragraph", "content": [{ "type": "text", "text": "two" }] }
    ] });
    assert_eq!(
        to_structured(&doc),
        json!({ "sections": [
            { "type": "paragraph", "text": "one" },
            { "type": "paragraph", "text": "two" }
        ] })
    );
}

#[test]
fn test_malformed_nodes_are_tolerated() {
    let doc = json!({ "type": "doc", "content": [
        "not a node",
        42,
        { "content": [{ "type": "paragraph", "content": [{ "type": "text", "text": "untyped parent" }] }] },
        { "type": "heading", "attrs": { "level": "2" }, "content": [{ "type": "text", "text": "Numeric string" }] },
        { "type": "heading", "attrs": { "level": 0 }, "content": [{ "type": "text", "text": "Zero" }] },
        { "type": "image", "attrs": { "width": "wide", "height": 0 } }
    ] });
    assert_eq!(
        to_structured(&doc),
        json!({ "sections": [
            { "type": "paragraph", "text": "untyped parent" },
            { "type": "heading", "level": 2, "text": "Numeric string" },
            { "type": "heading", "level": 1, "text": "Zero" },
            { "type": "image", "src": "", "alt": "", "width": 800, "height": 400 }
        ] })
    );
}

#[test]
fn test_structured_to_rich_scenario() {
    let rich = to_rich(&json!({ "sections": [
        { "type": "heading", "level": 2, "text": "Wise Mind" },
        { "type": "callout", "title": "Note", "text": "Breathe" },
        { "type": "video", "src": "/clip.mp4" }
    ] }));
    assert_eq!(
        rich,
        json!({ "type": "doc", "content": [
            {
                "type": "heading",
                "attrs": { "level": 2 },
                "content": [{ "type": "text", "text": "Wise Mind" }]
            },
            {
                "type": "callout",
                "attrs": { "calloutType": "info", "title": "Note" },
                "content": [{ "type": "paragraph", "content": [{ "type": "text", "text": "Breathe" }] }]
            }
        ] })
    );
}

#[test]
fn test_round_trip_of_fixture() {
    let structured = to_structured(&fixture("kitchensink.tiptap"));
    let again = to_structured(&to_rich(&structured));
    assert_eq!(again, structured);
}

#[test]
fn test_empty_inputs_converge() {
    let empty_sections = json!({ "sections": [] });
    let empty_doc = json!({ "type": "doc", "content": [] });

    for input in [Value::Null, json!({}), json!([]), json!({ "type": "doc" })] {
        assert_eq!(to_structured(&input), empty_sections);
    }
    for input in [Value::Null, json!({}), json!({ "sections": null })] {
        assert_eq!(to_rich(&input), empty_doc);
    }
}
