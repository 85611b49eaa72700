//! Format implementations
//!
//! This module contains all format implementations that read or write module content.

pub mod html;
pub mod icons;
pub mod structured;
pub mod tiptap;
pub mod treeviz;

pub use html::{render_html, HtmlFormat, HtmlOptions};
pub use structured::StructuredFormat;
pub use tiptap::TiptapFormat;
pub use treeviz::TreevizFormat;
