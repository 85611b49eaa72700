//! Converts a structured document into a rich-text tree for the editor.
//!
//! Every section maps to exactly one top-level node:
//!
//! | Section      | Node                                                              |
//! |--------------|-------------------------------------------------------------------|
//! | `heading`    | `heading {level}` → text                                          |
//! | `paragraph`  | `paragraph` → text                                                |
//! | `bulletList` | `bulletList` → `listItem` → `paragraph` → text, per item          |
//! | `image`      | `image {src, alt, width, height}`                                 |
//! | `callout`    | `callout {calloutType, title}` → `paragraph` → text               |
//! | `activity`   | `activity {activityType, prompt}`                                 |
//!
//! Sections of unknown type never reach this point: they are dropped when the structured
//! document is read (see [`crate::ir::structured::Section::from_value`]).

use crate::ir::rich::{NodeKind, RichNode};
use crate::ir::structured::{Section, StructuredDocument};
use serde_json::{json, Map, Value};

/// Converts a structured document into a `doc` tree.
pub fn structured_to_rich(doc: &StructuredDocument) -> RichNode {
    RichNode::doc(doc.sections.iter().map(section_to_node).collect())
}

fn section_to_node(section: &Section) -> RichNode {
    match section {
        Section::Heading { level, text } => RichNode::new(NodeKind::Heading)
            .with_attrs(attrs(json!({ "level": level })))
            .with_content(vec![RichNode::text(text.as_str())]),
        Section::Paragraph { text } => paragraph(text),
        Section::BulletList { items } => RichNode::new(NodeKind::BulletList).with_content(
            items
                .iter()
                .map(|item| RichNode::new(NodeKind::ListItem).with_content(vec![paragraph(item)]))
                .collect(),
        ),
        Section::Image {
            src,
            alt,
            width,
            height,
        } => RichNode::new(NodeKind::Image).with_attrs(attrs(json!({
            "src": src,
            "alt": alt,
            "width": width,
            "height": height,
        }))),
        Section::Callout {
            callout_type,
            title,
            text,
        } => RichNode::new(NodeKind::Callout)
            .with_attrs(attrs(json!({
                "calloutType": callout_type.as_str(),
                "title": title,
            })))
            .with_content(vec![paragraph(text)]),
        Section::Activity {
            activity_type,
            prompt,
        } => RichNode::new(NodeKind::Activity).with_attrs(attrs(json!({
            "activityType": activity_type.as_str(),
            "prompt": prompt,
        }))),
    }
}

fn paragraph(text: &str) -> RichNode {
    RichNode::new(NodeKind::Paragraph).with_content(vec![RichNode::text(text)])
}

fn attrs(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
