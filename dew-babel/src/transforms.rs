//! JSON-level entry points used by the CMS
//!
//! The converters in [`crate::common`] work on typed trees. The functions here sit at the
//! JSON boundary where module content arrives from the editor or from storage:
//!
//! - [`to_structured`]: editor JSON → persisted JSON, with a pass-through guard for content
//!   that is already structured.
//! - [`to_rich`]: persisted JSON → editor JSON.
//! - [`normalize_module_content`]: what the module-save handler stores.
//! - [`hydrate_for_editor`]: what the editor is loaded with.
//! - [`theory_save_payload`]: a theory module's content plus its generated pages.
//!
//! None of them fail: missing or malformed input converges to an empty document.

use crate::common::{rich_to_structured, structured_to_rich};
use crate::ir::containers::{ModuleContent, TheoryContent};
use crate::ir::rich::{NodeKind, RichNode};
use crate::ir::structured::StructuredDocument;
use serde_json::{json, Map, Value};

/// Keys that mark content as already structured.
pub const STRUCTURED_KEYS: [&str; 3] = ["sections", "infoBoxes", "questions"];

/// Whether `value` already carries one of the structured container keys.
///
/// A key holding `null` does not count.
pub fn is_structured(value: &Value) -> bool {
    STRUCTURED_KEYS
        .iter()
        .any(|key| value.get(key).is_some_and(|v| !v.is_null()))
}

/// Whether `value` is an editor document: `type == "doc"` with a `content` list.
pub fn is_rich_document(value: &Value) -> bool {
    value.get("type").and_then(Value::as_str) == Some(NodeKind::Doc.as_str())
        && value.get("content").is_some_and(Value::is_array)
}

/// Converts editor JSON into a structured document.
///
/// - `null`, non-objects and objects without a `content` list give `{ "sections": [] }`.
/// - Already structured content (see [`is_structured`]) is returned unchanged.
/// - Otherwise the tree is converted with [`rich_to_structured`].
pub fn to_structured(input: &Value) -> Value {
    if is_structured(input) {
        return input.clone();
    }
    if !input.get("content").is_some_and(Value::is_array) {
        return StructuredDocument::default().to_value();
    }
    match RichNode::from_value(input) {
        Some(root) => rich_to_structured(&root).to_value(),
        None => StructuredDocument::default().to_value(),
    }
}

/// Converts a structured document into editor JSON.
///
/// `null` or content without a `sections` list gives `{ "type": "doc", "content": [] }`.
pub fn to_rich(input: &Value) -> Value {
    structured_to_rich(&StructuredDocument::from_value(input)).to_value()
}

/// Normalizes the `content` of a module-save request before it is persisted.
///
/// An editor document is converted with [`to_structured`]. A theory container has each info
/// box whose content is still an editor document converted in place. Anything else is
/// stored as sent.
pub fn normalize_module_content(content: &Value) -> Value {
    if is_rich_document(content) {
        let structured = to_structured(content);
        tracing::debug!(
            sections = section_count(&structured),
            "normalized editor document"
        );
        return structured;
    }

    if let Some(boxes) = content.get("infoBoxes").and_then(Value::as_array) {
        let mut converted = 0usize;
        let boxes: Vec<Value> = boxes
            .iter()
            .map(|info_box| match info_box.get("content") {
                Some(inner) if is_rich_document(inner) => {
                    converted += 1;
                    with_member(info_box, "content", to_structured(inner))
                }
                _ => info_box.clone(),
            })
            .collect();
        tracing::debug!(
            boxes = boxes.len(),
            converted,
            "normalized theory info boxes"
        );
        return with_member(content, "infoBoxes", Value::Array(boxes));
    }

    content.clone()
}

/// Prepares persisted content for an editor session.
///
/// Theory info boxes are converted one by one (a box without content opens as an empty
/// document); question modules are edited as plain fields and returned unchanged;
/// editor documents are returned unchanged; anything else goes through [`to_rich`].
pub fn hydrate_for_editor(content: &Value) -> Value {
    if let Some(boxes) = content.get("infoBoxes").and_then(Value::as_array) {
        let boxes: Vec<Value> = boxes
            .iter()
            .map(|info_box| {
                let rich = info_box
                    .get("content")
                    .map(to_rich)
                    .unwrap_or_else(|| to_rich(&Value::Null));
                with_member(info_box, "content", rich)
            })
            .collect();
        tracing::debug!(boxes = boxes.len(), "hydrated theory info boxes");
        return with_member(content, "infoBoxes", Value::Array(boxes));
    }

    if content.get("questions").is_some_and(Value::is_array) || is_rich_document(content) {
        return content.clone();
    }

    to_rich(content)
}

/// Builds the body a theory editor saves: the normalized content and its pages.
///
/// `boxes_per_page` applies when the content does not carry its own `boxesPerPage`.
/// Returns `None` when the content is not a theory container.
pub fn theory_save_payload(content: &Value, boxes_per_page: usize) -> Option<Value> {
    let normalized = normalize_module_content(content);
    let theory: TheoryContent = match ModuleContent::from_value(&normalized) {
        ModuleContent::Theory(theory) => theory,
        _ => return None,
    };
    let per_page = theory.effective_boxes_per_page(boxes_per_page);
    let theory = theory.with_boxes_per_page(per_page);
    let pages = theory.pages(per_page);
    tracing::debug!(
        boxes = theory.info_boxes.len(),
        pages = pages.len(),
        "paginated theory module"
    );

    Some(json!({
        "content": ModuleContent::Theory(theory).to_value(),
        "submodules": crate::ir::to_json(&pages),
    }))
}

fn with_member(object: &Value, key: &str, member: Value) -> Value {
    let mut map = object.as_object().cloned().unwrap_or_else(Map::new);
    map.insert(key.to_string(), member);
    Value::Object(map)
}

fn section_count(structured: &Value) -> usize {
    structured
        .get("sections")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}
