//! Strict JSON codec between raw bytes and typed records.
//!
//! Missing required fields and type mismatches fail; unknown fields are ignored.

use crate::error::HttpError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Decode a response body into `T`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, HttpError> {
    serde_json::from_slice(bytes).map_err(HttpError::Decode)
}

/// Encode an outbound body as pretty-printed JSON.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, HttpError> {
    serde_json::to_vec_pretty(value).map_err(HttpError::Serialization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pair {
        a: u32,
        b: String,
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let pair: Pair = decode(br#"{"a":1,"b":"x","extra":[1,2]}"#).unwrap();
        assert_eq!(
            pair,
            Pair {
                a: 1,
                b: "x".to_string()
            }
        );
    }

    #[test]
    fn test_decode_missing_field_is_decode_error() {
        let err = decode::<Pair>(br#"{"a":1}"#).unwrap_err();
        assert!(matches!(err, HttpError::Decode(_)));
        assert!(err.to_string().contains("missing field `b`"));
    }

    #[test]
    fn test_decode_type_mismatch_is_decode_error() {
        let err = decode::<Pair>(br#"{"a":"1","b":"x"}"#).unwrap_err();
        assert!(matches!(err, HttpError::Decode(_)));
    }

    #[test]
    fn test_encode_map() {
        let mut body = BTreeMap::new();
        body.insert("name", "foo");
        let bytes = encode(&body).unwrap();
        let back: BTreeMap<String, String> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back.get("name").unwrap(), "foo");
    }

    #[test]
    fn test_encode_failure_is_serialization_error() {
        let mut body = BTreeMap::new();
        body.insert(vec![1u8], "sequence keys are not valid JSON object keys");
        let err = encode(&body).unwrap_err();
        assert!(matches!(err, HttpError::Serialization(_)));
    }
}
