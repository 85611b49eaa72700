//! Content interoperability for DewBloom course modules
//!
//!     The CMS editor authors content as TipTap JSON (the "rich" tree), while the learner app and
//!     the admin preview read a structured "sections" document. This crate converts between the
//!     two and renders the structured side for display.
//!
//!     This is a pure lib: it powers dew-cli but makes no assumption about a shell, so no code here
//!     prints, reads env vars or touches the filesystem.
//!
//! Architecture
//!
//!     Both representations have a typed model in ./ir:
//!     .
//!     ├── ir
//!     │   ├── rich.rs             # RichNode tree (TipTap JSON)
//!     │   ├── structured.rs       # Section and StructuredDocument
//!     │   ├── containers.rs       # Theory (info boxes, pages) and Question modules
//!     │   ├── defaults.rs         # Every default value of the section schema
//!     │   └── fields.rs           # Lenient readers over JSON objects
//!     ├── common                  # The converters (text extraction, rich → structured, structured → rich)
//!     ├── transforms.rs           # JSON boundary: to_structured, to_rich, save normalization, hydration
//!     ├── format.rs               # Format trait
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     └── formats                 # structured, tiptap, html, treeviz
//!
//!     Input reaches us as loosely typed JSON written by a browser. The typed models are built with
//!     lenient readers: missing or malformed attributes take their default, unknown node and
//!     section types are dropped. The converters themselves never fail and never log; error
//!     reporting and logging belong to the calling layers (transforms, registry, cli).
//!
//! Core Algorithms
//!
//!     Rich → structured is a pre-order fold over the node tree: recognised nodes emit one section
//!     and consume their subtree, anything else emits nothing and is descended into so that wrapped
//!     sections are not lost. Structured → rich maps every section to exactly one node.
//!     Both dispatches are exhaustive matches, so a new section kind has to be handled on both sides
//!     before the crate compiles.
//!
//! Formats
//!
//!     - structured: the persisted JSON (.json)
//!     - tiptap: the editor JSON (.tiptap); parsing normalizes, serializing hydrates
//!     - html: the content renderer (serialize only)
//!     - treeviz: outline used by `dew inspect` (serialize only)
//!
pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod registry;
pub mod transforms;

pub use common::{extract_text, rich_to_structured, structured_to_rich};
pub use error::FormatError;
pub use format::Format;
pub use ir::containers::ModuleContent;
pub use ir::rich::RichNode;
pub use ir::structured::{Section, StructuredDocument};
pub use registry::FormatRegistry;
pub use transforms::{hydrate_for_editor, normalize_module_content, to_rich, to_structured};
