//! The converters between the rich-text tree and the structured document.

pub mod rich_to_structured;
pub mod structured_to_rich;
pub mod text;

pub use rich_to_structured::rich_to_structured;
pub use structured_to_rich::structured_to_rich;
pub use text::extract_text;
