//! Textual codec for persisted collections.
//!
//! The persisted medium is an uncontrolled external surface: values can be
//! edited by hand, shared with other writers, or cleared at any time.
//! `encode` is ordinary JSON serialization; `decode` is total and never
//! reports an error to the caller. Anything unreadable collapses to an
//! empty collection.

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::app_error::StoreError;

/// Serializes a collection to its persisted JSON-array form.
pub fn encode<T: Serialize>(records: &[T]) -> Result<String, StoreError> {
    serde_json::to_string(records).map_err(StoreError::from)
}

/// Parses previously encoded text. Missing, empty, or malformed input and
/// valid JSON that is not an array all yield an empty collection. Array
/// elements that fail to deserialize are dropped; the rest survive.
pub fn decode<T: DeserializeOwned>(text: &str) -> Vec<T> {
    let parsed: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) => return Vec::new(),
    };
    let Value::Array(items) = parsed else {
        return Vec::new();
    };
    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    if records.len() < total {
        warn!(
            "dropped {} unreadable entries while decoding a collection",
            total - records.len()
        );
    }
    records
}
