//! Typed models of the two document representations and their containers.

pub mod containers;
pub mod defaults;
pub(crate) mod fields;
pub mod rich;
pub mod structured;

use serde::Serialize;
use serde_json::Value;

/// Serializes a model into a JSON value.
///
/// The models only hold strings, integers, lists and string-keyed maps, which always
/// serialize; `Null` is never produced for them in practice.
pub(crate) fn to_json<T: Serialize>(model: &T) -> Value {
    serde_json::to_value(model).unwrap_or_default()
}
