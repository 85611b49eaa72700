//! Shared configuration loader for the DewBloom content tools.
//!
//! `defaults/dew.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`DewConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use dew_babel::formats::html::HtmlOptions;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/dew.default.toml");

/// Name of the optional per-project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "dew.toml";

/// Top-level configuration consumed by DewBloom applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DewConfig {
    pub theory: TheoryConfig,
    pub render: RenderConfig,
    pub convert: ConvertConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TheoryConfig {
    pub boxes_per_page: usize,
}

impl TheoryConfig {
    /// Boxes per page with zero treated as the schema default.
    pub fn effective_boxes_per_page(&self) -> usize {
        dew_babel::ir::defaults::boxes_per_page(Some(self.boxes_per_page))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub show_correct_answers: bool,
    pub standalone: bool,
    pub title: String,
}

impl From<&HtmlConfig> for HtmlOptions {
    fn from(config: &HtmlConfig) -> Self {
        HtmlOptions {
            show_correct_answers: config.show_correct_answers,
            standalone: config.standalone,
            title: config.title.clone(),
        }
    }
}

impl HtmlConfig {
    /// Serialize-time parameters for the `html` format.
    pub fn to_params(&self) -> HashMap<String, String> {
        HashMap::from([
            (
                "show-answers".to_string(),
                self.show_correct_answers.to_string(),
            ),
            ("standalone".to_string(), self.standalone.to_string()),
            ("title".to_string(), self.title.clone()),
        ])
    }
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub json: JsonConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub pretty: bool,
}

impl JsonConfig {
    /// Serialize-time parameters for the JSON formats.
    pub fn to_params(&self) -> HashMap<String, String> {
        HashMap::from([("pretty".to_string(), self.pretty.to_string())])
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DewConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DewConfig, ConfigError> {
    Loader::new().build()
}
