// Response normalization
//
// The backend wraps payloads inconsistently: collections arrive either bare
// or as `{ "data": [...] }`, single records either bare or as
// `{ "data": {...} }`. Callers only ever see the unwrapped, typed value.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ApiError;
use crate::models::ApiMessage;

/// Decode a collection payload. Anything that is not a collection decodes to
/// an empty list; entries that fail to decode are skipped.
pub fn collection<T: DeserializeOwned>(payload: Value) -> Vec<T> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => {
                log::warn!("Expected a collection payload, treating it as empty");
                return Vec::new();
            }
        },
        _ => {
            log::warn!("Expected a collection payload, treating it as empty");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping malformed entry at index {}: {}", index, e);
                None
            }
        })
        .collect()
}

/// Decode a single-record payload, unwrapping a `data` object when present
pub fn item<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    let inner = unwrap_key(payload, "data");
    serde_json::from_value(inner).map_err(|e| ApiError::Decode(format!("Unexpected response: {}", e)))
}

/// Decode a `{ success, message }` reply; `success: false` becomes an error
pub fn acknowledgement(payload: Value) -> Result<ApiMessage, ApiError> {
    if payload.is_null() {
        return Ok(ApiMessage::default());
    }

    // Endpoints that echo the record back have no `success` flag
    let ack: ApiMessage = serde_json::from_value(payload).unwrap_or_default();
    if !ack.success {
        return Err(ApiError::Rejected(
            ack.message
                .unwrap_or_else(|| "The request was rejected".to_string()),
        ));
    }
    Ok(ack)
}

/// Replace `payload` by `payload[key]` when that is an object
pub(crate) fn unwrap_key(payload: Value, key: &str) -> Value {
    match payload {
        Value::Object(mut map) => match map.remove(key) {
            Some(inner @ Value::Object(_)) => inner,
            Some(other) => {
                map.insert(key.to_string(), other);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    }
}
