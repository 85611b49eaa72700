//! HTML format implementation
//!
//! Serialize-only: this is the content renderer used by the admin preview and the learner
//! view, producing HTML instead of components.
//!
//! # Element Mapping Table
//!
//! | Content              | HTML                                                            |
//! |----------------------|-----------------------------------------------------------------|
//! | Standalone sections  | `<div class="dew-content">`                                     |
//! | Theory module        | `<div class="dew-theory">`, one `dew-info-box` per box ("Info Box #n") |
//! | Question module      | `<div class="dew-questions">`, one `dew-question` per question ("Question #n") |
//! | No content           | `<div class="dew-empty">No content available</div>`             |
//! | heading              | `<h1>`..`<h3>` with `class="dew-heading"` (level clamped to 1..=3) |
//! | paragraph            | `<p class="dew-paragraph">`                                     |
//! | bulletList           | `<ul class="dew-list">` with one `<li>` per item                |
//! | image                | `<img class="dew-image">`, or a placeholder when `src` is empty |
//! | callout              | `<div class="dew-callout dew-callout-{type}">`, optional title  |
//! | activity             | `<div class="dew-activity dew-activity-{type}">` titled by kind |
//!
//! All text and attribute values are escaped with `html-escape`.
//!
//! # Options
//!
//! | Key            | Value          | Default    |
//! |----------------|----------------|------------|
//! | `show-answers` | `true`/`false` | `true`     |
//! | `standalone`   | `true`/`false` | `false`    |
//! | `title`        | page title     | `DewBloom` |

mod serializer;

pub use serializer::render_html;

use crate::error::FormatError;
use crate::format::{parse_bool_option, Format};
use crate::ir::containers::ModuleContent;
use std::collections::HashMap;

/// Options for HTML rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Show "Correct Answer" lines under questions
    pub show_correct_answers: bool,
    /// Wrap the fragment in a complete page with embedded CSS
    pub standalone: bool,
    /// `<title>` of the standalone page
    pub title: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        HtmlOptions {
            show_correct_answers: true,
            standalone: false,
            title: "DewBloom".to_string(),
        }
    }
}

impl HtmlOptions {
    /// Apply `--extra-*` style parameters on top of these options
    pub fn with_params(mut self, params: &HashMap<String, String>) -> Result<Self, FormatError> {
        for (key, value) in params {
            match key.as_str() {
                "show-answers" => self.show_correct_answers = parse_bool_option(key, value)?,
                "standalone" => self.standalone = parse_bool_option(key, value)?,
                "title" => self.title = value.clone(),
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'html' does not support option '{other}'"
                    )))
                }
            }
        }
        Ok(self)
    }
}

/// Format implementation for HTML
#[derive(Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML rendering of module content"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, content: &ModuleContent) -> Result<String, FormatError> {
        Ok(render_html(content, &self.options))
    }

    fn serialize_with_options(
        &self,
        content: &ModuleContent,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let options = self.options.clone().with_params(options)?;
        Ok(render_html(content, &options))
    }
}
