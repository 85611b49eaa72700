//! Converts a rich-text tree into a structured document.
//!
//! # The High-Level Concept
//!
//! The editor tree is walked in pre-order. Each node the CMS models becomes exactly one
//! section, built from its attributes and the text under it. Nodes it does not model
//! produce nothing themselves, but a wrapper may still hold modeled nodes, so we descend
//! into them instead of dropping the subtree.
//!
//! # The Algorithm
//!
//! 1. **Dispatch:** every node is classified by [`visit`] into
//!    - `Emit`: a modeled node, turned into a section. Its subtree is consumed here
//!      (read through text extraction), so list item paragraphs never show up again as
//!      paragraph sections.
//!    - `Skip`: a modeled node with nothing worth persisting (blank paragraph, list
//!      without a non-blank item).
//!    - `Descend`: anything else; its children are visited in order.
//!
//! 2. **Fold:** the sections of every child are concatenated into a fresh list, so the
//!    output order is the order in which originating nodes are first visited.
//!
//! Defaults for missing attributes come from [`crate::ir::defaults`].

use super::text::extract_text;
use crate::ir::defaults;
use crate::ir::fields::Fields;
use crate::ir::rich::{NodeKind, RichNode};
use crate::ir::structured::{Section, StructuredDocument};

/// Converts a `doc` tree into a structured document.
///
/// Only the children of `root` are visited; the root's own type is not inspected.
pub fn rich_to_structured(root: &RichNode) -> StructuredDocument {
    StructuredDocument::new(collect_sections(root.children()))
}

enum Visit {
    Emit(Section),
    Skip,
    Descend,
}

fn collect_sections(nodes: &[RichNode]) -> Vec<Section> {
    nodes
        .iter()
        .flat_map(|node| match visit(node) {
            Visit::Emit(section) => vec![section],
            Visit::Skip => Vec::new(),
            Visit::Descend => collect_sections(node.children()),
        })
        .collect()
}

fn visit(node: &RichNode) -> Visit {
    let attrs = Fields::of(node.attrs());

    match &node.kind {
        NodeKind::Heading => Visit::Emit(Section::Heading {
            level: defaults::heading_level(&attrs),
            text: extract_text(node),
        }),
        NodeKind::Paragraph => {
            let text = extract_text(node);
            if is_blank(&text) {
                Visit::Skip
            } else {
                Visit::Emit(Section::Paragraph { text })
            }
        }
        NodeKind::BulletList => {
            let items: Vec<String> = node
                .children()
                .iter()
                .filter(|item| item.kind == NodeKind::ListItem)
                .map(extract_text)
                .filter(|text| !is_blank(text))
                .collect();
            if items.is_empty() {
                Visit::Skip
            } else {
                Visit::Emit(Section::BulletList { items })
            }
        }
        NodeKind::Image => Visit::Emit(Section::Image {
            src: attrs.string("src"),
            alt: attrs.string("alt"),
            width: defaults::image_width(&attrs),
            height: defaults::image_height(&attrs),
        }),
        NodeKind::Callout => Visit::Emit(Section::Callout {
            callout_type: defaults::callout_kind(&attrs),
            title: attrs.string("title"),
            text: extract_text(node),
        }),
        NodeKind::Activity => Visit::Emit(Section::Activity {
            activity_type: defaults::activity_kind(&attrs),
            prompt: attrs.string("prompt"),
        }),
        NodeKind::Doc | NodeKind::ListItem | NodeKind::Text | NodeKind::Other(_) => {
            Visit::Descend
        }
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
