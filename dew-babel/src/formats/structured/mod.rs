//! Structured format: the module content JSON as persisted by the CMS
//!
//! Parsing classifies the JSON into a [`ModuleContent`] without converting anything; editor
//! documents belong to the `tiptap` format. Content that matches no container shape is
//! written back as the empty document `{ "sections": [] }`.
//!
//! Options:
//!
//! - `pretty` (default `true`): indent the output.

use crate::error::FormatError;
use crate::format::{parse_bool_option, Format};
use crate::ir::containers::ModuleContent;
use crate::ir::structured::StructuredDocument;
use serde_json::Value;
use std::collections::HashMap;

/// Format implementation for persisted structured content
pub struct StructuredFormat;

impl Format for StructuredFormat {
    fn name(&self) -> &str {
        "structured"
    }

    fn description(&self) -> &str {
        "Structured sections JSON (theory, question and standalone modules)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<ModuleContent, FormatError> {
        Ok(ModuleContent::from_value(&parse_json(source)?))
    }

    fn serialize(&self, content: &ModuleContent) -> Result<String, FormatError> {
        write_json(&structured_value(content), true)
    }

    fn serialize_with_options(
        &self,
        content: &ModuleContent,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let pretty = json_pretty_option(self.name(), options)?;
        write_json(&structured_value(content), pretty)
    }
}

/// The persisted JSON of `content`; empty content is an empty sections document.
pub fn structured_value(content: &ModuleContent) -> Value {
    match content {
        ModuleContent::Empty => StructuredDocument::default().to_value(),
        other => other.to_value(),
    }
}

pub(crate) fn parse_json(source: &str) -> Result<Value, FormatError> {
    Ok(serde_json::from_str(source)?)
}

pub(crate) fn write_json(value: &Value, pretty: bool) -> Result<String, FormatError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.map_err(|e| FormatError::SerializationError(e.to_string()))
}

/// Reads the options shared by the JSON formats: only `pretty` is accepted.
pub(crate) fn json_pretty_option(
    format: &str,
    options: &HashMap<String, String>,
) -> Result<bool, FormatError> {
    let mut pretty = true;
    for (key, value) in options {
        match key.as_str() {
            "pretty" => pretty = parse_bool_option(key, value)?,
            other => {
                return Err(FormatError::NotSupported(format!(
                    "Format '{format}' does not support option '{other}'"
                )))
            }
        }
    }
    Ok(pretty)
}
