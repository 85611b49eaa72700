//! Module container tests
//!
//! Save normalization, editor hydration and theory pagination.

mod hydrate;
mod normalize;
mod pagination;
