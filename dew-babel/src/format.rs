//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing and serializing module content.

use crate::error::FormatError;
use crate::ir::containers::ModuleContent;
use std::collections::HashMap;

/// Trait for module content formats
///
/// Implementors provide conversion between a string representation and [`ModuleContent`].
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, content: &ModuleContent) -> Result<String, FormatError> {
///         Ok(content.kind_name().to_string())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "structured", "tiptap", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["json"], ["html", "htm"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → ModuleContent)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (ModuleContent → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into module content
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<ModuleContent, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize module content into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _content: &ModuleContent) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize module content, optionally using extra parameters.
    ///
    /// The default implementation delegates to [`Format::serialize`] and rejects any option.
    /// Formats that take options override it.
    fn serialize_with_options(
        &self,
        content: &ModuleContent,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(content)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Reads a boolean option value; a bare flag (empty value) counts as `true`.
pub(crate) fn parse_bool_option(key: &str, value: &str) -> Result<bool, FormatError> {
    match value.to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(FormatError::SerializationError(format!(
            "Invalid value '{other}' for option '{key}' (expected true or false)"
        ))),
    }
}
