//! HTML format tests

mod render;
