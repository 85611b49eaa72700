//! Plain text extraction from a rich-text subtree.

use crate::ir::rich::{NodeKind, RichNode};

/// Concatenates, in document order, the payload of every `text` leaf under `node`.
///
/// Leaves that are not text (an `image`, an empty paragraph) contribute nothing.
pub fn extract_text(node: &RichNode) -> String {
    let mut out = String::new();
    push_text(node, &mut out);
    out
}

fn push_text(node: &RichNode, out: &mut String) {
    match &node.kind {
        NodeKind::Text => out.push_str(node.text.as_deref().unwrap_or_default()),
        _ => {
            for child in node.children() {
                push_text(child, out);
            }
        }
    }
}
