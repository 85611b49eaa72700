//! Conversion tests
//!
//! Rich-text ↔ structured conversion at the JSON boundary.

mod properties;
mod scenarios;
