//! Shared icon mapping for the outline format
//!
//! Icons are keyed by section `type`, with a few container entries for the module shapes.

/// Get the Unicode icon for a section or container type
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "document" => "⧉",
        "heading" => "§",
        "paragraph" => "¶",
        "bulletList" => "☰",
        "listItem" => "•",
        "image" => "▣",
        "callout" => "!",
        "activity" => "✎",
        "infoBox" => "□",
        "question" => "?",
        "option" => "◦",
        "answer" => "✓",
        _ => "○",
    }
}
