// Entity Models
//
// Concrete entities recording what happened (Action) and what something is (State).
// Both carry a creation date and free-form JSON metadata.

pub mod action;
pub mod state;

pub use action::Action;
pub use state::State;

use serde_json::{Map, Value};

/// Insert `key` into a JSON object metadata, creating the object when absent.
///
/// Non-object metadata is replaced by an object holding only `key`.
pub(crate) fn insert_metadata(metadata: &mut Option<Value>, key: &str, value: Value) {
    if !matches!(metadata, Some(Value::Object(_))) {
        *metadata = Some(Value::Object(Map::new()));
    }
    if let Some(Value::Object(object)) = metadata {
        object.insert(key.to_string(), value);
    }
}

pub(crate) fn metadata_value<'a>(metadata: &'a Option<Value>, key: &str) -> Option<&'a Value> {
    metadata.as_ref().and_then(|m| m.get(key))
}
