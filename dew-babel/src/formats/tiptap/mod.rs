//! TipTap format: the JSON the authoring editor loads and saves
//!
//! Parsing runs the module-save normalization, so an editor document (or a theory module
//! whose boxes still hold editor documents) comes out as structured content. Serializing
//! runs editor hydration, which is the inverse for everything the editor can show.
//!
//! Options:
//!
//! - `pretty` (default `true`): indent the output.

use super::structured::{json_pretty_option, parse_json, write_json};
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::containers::ModuleContent;
use crate::transforms::{hydrate_for_editor, normalize_module_content};
use std::collections::HashMap;

/// Format implementation for TipTap editor JSON
pub struct TiptapFormat;

impl Format for TiptapFormat {
    fn name(&self) -> &str {
        "tiptap"
    }

    fn description(&self) -> &str {
        "TipTap editor JSON (rich-text documents)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tiptap"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<ModuleContent, FormatError> {
        let normalized = normalize_module_content(&parse_json(source)?);
        Ok(ModuleContent::from_value(&normalized))
    }

    fn serialize(&self, content: &ModuleContent) -> Result<String, FormatError> {
        write_json(&hydrate_for_editor(&content.to_value()), true)
    }

    fn serialize_with_options(
        &self,
        content: &ModuleContent,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let pretty = json_pretty_option(self.name(), options)?;
        write_json(&hydrate_for_editor(&content.to_value()), pretty)
    }
}
