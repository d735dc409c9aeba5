//! Client-shape serialization
//!
//! Stored documents carry their identifier under the store-native
//! `_id` key. Clients see it as `id`, always a string.

use serde_json::Value;

use crate::store::INTERNAL_ID;

/// Identifier key in client responses.
pub const CLIENT_ID: &str = "id";

/// Rewrite a stored document into client shape.
///
/// Moves `_id` to `id`, stringifying it if the store handed back
/// something else. Documents without `_id`, and non-object values,
/// pass through unchanged.
pub fn to_client_document(mut document: Value) -> Value {
    if let Some(object) = document.as_object_mut() {
        if let Some(id) = object.remove(INTERNAL_ID) {
            let id = match id {
                Value::String(s) => s,
                other => other.to_string(),
            };
            object.insert(CLIENT_ID.to_string(), Value::String(id));
        }
    }
    document
}
