//! Default values of the section schema
//!
//! Both converters and the structured reader fill optional values through the helpers
//! below, so every default of the schema is visible here and nowhere else.

use super::fields::Fields;
use super::structured::{ActivityKind, CalloutKind};

/// Heading level used when a heading carries none.
pub const HEADING_LEVEL: u8 = 1;

/// Image width in pixels used when an image carries none.
pub const IMAGE_WIDTH: u32 = 800;

/// Image height in pixels used when an image carries none.
pub const IMAGE_HEIGHT: u32 = 400;

/// Info boxes per page used when a theory module does not say.
pub const BOXES_PER_PAGE: usize = 1;

pub(crate) fn heading_level(fields: &Fields<'_>) -> u8 {
    fields
        .positive_int("level")
        .and_then(|level| u8::try_from(level).ok())
        .unwrap_or(HEADING_LEVEL)
}

pub(crate) fn image_width(fields: &Fields<'_>) -> u32 {
    dimension(fields, "width").unwrap_or(IMAGE_WIDTH)
}

pub(crate) fn image_height(fields: &Fields<'_>) -> u32 {
    dimension(fields, "height").unwrap_or(IMAGE_HEIGHT)
}

fn dimension(fields: &Fields<'_>, key: &str) -> Option<u32> {
    fields
        .positive_int(key)
        .and_then(|value| u32::try_from(value).ok())
}

pub(crate) fn callout_kind(fields: &Fields<'_>) -> CalloutKind {
    fields
        .str("calloutType")
        .and_then(CalloutKind::from_name)
        .unwrap_or_default()
}

pub(crate) fn activity_kind(fields: &Fields<'_>) -> ActivityKind {
    fields
        .str("activityType")
        .and_then(ActivityKind::from_name)
        .unwrap_or_default()
}

/// Boxes per page, treating zero or garbage as the default.
pub fn boxes_per_page(requested: Option<usize>) -> usize {
    requested.filter(|n| *n > 0).unwrap_or(BOXES_PER_PAGE)
}
