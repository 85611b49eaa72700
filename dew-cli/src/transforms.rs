//! CLI-specific transforms
//!
//! The views `dew inspect` can print for a module content file. Every transform first runs
//! the module-save normalization, so the input may be an editor document, a theory module
//! with editor documents in its boxes, or already structured content.
//!
//! - `structured-json`: the content as it would be persisted
//! - `structured-treeviz`: outline of the persisted content (default)
//! - `rich-json`: the content as the editor would load it
//! - `pages-json`: the pages of a theory module
//!
//! ## Extra Parameters
//!
//! - `pretty`: "false" for compact JSON output
//! - `boxes-per-page`: page size for `pages-json` when the module stores none
//!
//! Example: `dew inspect module.json pages-json --extra-boxes-per-page 2`

use dew_babel::formats::structured::structured_value;
use dew_babel::formats::treeviz::to_treeviz_str;
use dew_babel::transforms::{hydrate_for_editor, normalize_module_content, theory_save_payload};
use dew_babel::ModuleContent;
use serde_json::Value;
use std::collections::HashMap;

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "structured-json",
    "structured-treeviz",
    "rich-json",
    "pages-json",
];

/// Transform used when `dew inspect` is given none
pub const DEFAULT_TRANSFORM: &str = "structured-treeviz";

/// Execute a named transform on a module content file with optional extra parameters
///
/// # Returns
///
/// The transformed output as a string, or an error message
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let input: Value =
        serde_json::from_str(source).map_err(|e| format!("Invalid module JSON: {e}"))?;
    let normalized = normalize_module_content(&input);
    let pretty = extra_params
        .get("pretty")
        .map(|v| v != "false")
        .unwrap_or(true);

    match transform_name {
        "structured-json" => {
            let content = ModuleContent::from_value(&normalized);
            to_json_string(&structured_value(&content), pretty)
        }
        "structured-treeviz" => Ok(to_treeviz_str(&ModuleContent::from_value(&normalized))),
        "rich-json" => to_json_string(&hydrate_for_editor(&normalized), pretty),
        "pages-json" => {
            let boxes_per_page = match extra_params.get("boxes-per-page") {
                Some(raw) => raw
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid value '{raw}' for boxes-per-page"))?,
                None => dew_babel::ir::defaults::BOXES_PER_PAGE,
            };
            let payload = theory_save_payload(&normalized, boxes_per_page)
                .ok_or_else(|| "pages-json requires a theory module (infoBoxes)".to_string())?;
            to_json_string(&payload["submodules"], pretty)
        }
        other => Err(format!(
            "Unknown transform '{other}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}

/// Serialize a JSON value for output, with a trailing newline
pub fn to_json_string(value: &Value, pretty: bool) -> Result<String, String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.map(|mut out| {
        out.push('\n');
        out
    })
    .map_err(|e| format!("JSON serialization failed: {e}"))
}
