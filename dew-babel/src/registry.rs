//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::containers::ModuleContent;
use std::collections::HashMap;

/// Registry of module content formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let content = registry.parse(source, "tiptap")?;
/// let html = registry.serialize(&content, "html")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.formats
            .values()
            .find(|format| format.file_extensions().contains(&extension))
            .map(|format| format.name().to_string())
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<ModuleContent, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support parsing"
            )));
        }
        let content = fmt.parse(source)?;
        tracing::debug!(format, kind = content.kind_name(), "parsed module content");
        Ok(content)
    }

    /// Serialize module content using the specified format
    pub fn serialize(&self, content: &ModuleContent, format: &str) -> Result<String, FormatError> {
        self.serialize_with_options(content, format, &HashMap::new())
    }

    /// Serialize module content using the specified format and options
    pub fn serialize_with_options(
        &self,
        content: &ModuleContent,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support serialization"
            )));
        }
        tracing::debug!(
            format,
            kind = content.kind_name(),
            options = options.len(),
            "serializing module content"
        );
        fmt.serialize_with_options(content, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::structured::StructuredFormat);
        registry.register(crate::formats::tiptap::TiptapFormat);
        registry.register(crate::formats::html::HtmlFormat::default());
        registry.register(crate::formats::treeviz::TreevizFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::structured::StructuredDocument;

    // Test format
    struct TestFormat;
    impl Format for TestFormat {
        fn name(&self) -> &str {
            "test"
        }
        fn description(&self) -> &str {
            "Test format"
        }
        fn supports_parsing(&self) -> bool {
            true
        }
        fn supports_serialization(&self) -> bool {
            true
        }
        fn parse(&self, _source: &str) -> Result<ModuleContent, FormatError> {
            Ok(ModuleContent::Sections(StructuredDocument::default()))
        }
        fn serialize(&self, _content: &ModuleContent) -> Result<String, FormatError> {
            Ok("test output".to_string())
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert_eq!(registry.formats.len(), 0);
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        assert!(registry.has("test"));
        assert!(!registry.has("nonexistent"));
        assert_eq!(registry.get("test").unwrap().name(), "test");
        assert_eq!(registry.list_formats(), vec!["test"]);
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = FormatRegistry::new();
        match registry.get("nonexistent") {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "nonexistent"),
            _ => panic!("Expected FormatNotFound error"),
        }
    }

    #[test]
    fn test_registry_parse_and_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let content = registry.parse("input", "test").unwrap();
        assert_eq!(content.kind_name(), "sections");
        assert_eq!(registry.serialize(&content, "test").unwrap(), "test output");
    }

    #[test]
    fn test_registry_serialize_not_found() {
        let registry = FormatRegistry::new();
        let result = registry.serialize(&ModuleContent::Empty, "nonexistent");
        assert_eq!(
            result,
            Err(FormatError::FormatNotFound("nonexistent".to_string()))
        );
    }

    #[test]
    fn test_registry_serialize_with_options_default_behavior() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let mut options = HashMap::new();
        options.insert("unused".to_string(), "true".to_string());

        let result = registry.serialize_with_options(&ModuleContent::Empty, "test", &options);
        assert!(result.is_err());
    }

    #[test]
    fn test_registry_rejects_unsupported_direction() {
        let registry = FormatRegistry::with_defaults();
        assert!(matches!(
            registry.parse("<p></p>", "html"),
            Err(FormatError::NotSupported(_))
        ));
        assert!(matches!(
            registry.parse("", "treeviz"),
            Err(FormatError::NotSupported(_))
        ));
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(
            registry.list_formats(),
            vec!["html", "structured", "tiptap", "treeviz"]
        );
    }

    #[test]
    fn test_registry_replace_format() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);
        registry.register(TestFormat);

        assert_eq!(registry.list_formats().len(), 1);
    }

    #[test]
    fn test_detect_format_from_filename() {
        let registry = FormatRegistry::with_defaults();

        assert_eq!(
            registry.detect_format_from_filename("module.json"),
            Some("structured".to_string())
        );
        assert_eq!(
            registry.detect_format_from_filename("/path/to/draft.tiptap"),
            Some("tiptap".to_string())
        );
        assert_eq!(
            registry.detect_format_from_filename("preview.htm"),
            Some("html".to_string())
        );
        assert_eq!(
            registry.detect_format_from_filename("outline.tree"),
            Some("treeviz".to_string())
        );
        assert_eq!(registry.detect_format_from_filename("doc.unknown"), None);
        assert_eq!(registry.detect_format_from_filename("doc"), None);
    }
}
