//! JSON encoding policy for persisted payloads.

use crate::error::Result;
use serde::{de::DeserializeOwned, Serialize};

/// Built once at startup and shared by the store so every saved payload is
/// encoded the same way: single-line JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadCodec;

impl PayloadCodec {
    pub fn new() -> Self {
        Self
    }

    pub fn encode<T: Serialize>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string(value)?)
    }

    pub fn decode<T: DeserializeOwned>(&self, json: &str) -> Result<T> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_encode_is_single_line() {
        let out = PayloadCodec::new().encode(&json!({ "a": [1, 2] })).unwrap();
        assert_eq!(out, r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_decode_garbage_is_serialization_error() {
        let err = PayloadCodec::new().decode::<Value>("not json").unwrap_err();
        assert!(matches!(err, crate::error::DbError::Serialization(_)));
    }
}
