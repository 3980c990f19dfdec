//
//  github2
//  api/common/decoding.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Response filtering and decoding.
//!
//! The v2 API usually wraps its payload in a single top-level key, e.g.
//! `{"repository": {...}}` or `{"users": [...]}`. A [`Filter`] names that key
//! (or none, when the body is the payload) along with the resource being
//! decoded, so that errors can say what went wrong and where.
//!
//! Resource schemas are the serde derives on the resource structs: every
//! declared field is an `Option`, so a field the server omits reads as
//! `None` instead of failing the decode.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{ApiError, Result};

/// Describes where the payload lives in a response and what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    /// Human-readable resource name used in errors (e.g. `repository`)
    pub resource: &'static str,
    /// Top-level key wrapping the payload, if any
    pub key: Option<&'static str>,
    /// Whether a body without `key` is taken as the payload itself
    pub lenient: bool,
}

impl Filter {
    /// The whole body is the payload.
    pub const fn root(resource: &'static str) -> Self {
        Self {
            resource,
            key: None,
            lenient: false,
        }
    }

    /// The payload is the value under `key`.
    pub const fn key(resource: &'static str, key: &'static str) -> Self {
        Self {
            resource,
            key: Some(key),
            lenient: false,
        }
    }

    /// The payload is the value under `key` when the body is an object
    /// holding it, and the whole body otherwise.
    pub const fn optional_key(resource: &'static str, key: &'static str) -> Self {
        Self {
            resource,
            key: Some(key),
            lenient: true,
        }
    }

    /// Extracts the payload from a parsed body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingFilterKey`] when a key is required and the
    /// body is not an object containing it.
    pub fn extract(&self, body: Value) -> Result<Value> {
        let Some(key) = self.key else {
            return Ok(body);
        };

        match body {
            Value::Object(mut map) if map.contains_key(key) => {
                map.remove(key).ok_or_else(|| self.missing(key))
            }
            body if self.lenient => Ok(body),
            _ => Err(self.missing(key)),
        }
    }

    fn missing(&self, key: &str) -> ApiError {
        ApiError::MissingFilterKey {
            resource: self.resource.to_string(),
            key: key.to_string(),
        }
    }
}

/// Decodes a parsed response body into `T` after applying `filter`.
///
/// # Errors
///
/// - [`ApiError::MissingFilterKey`] if the wrapping key is absent
/// - [`ApiError::Decoding`] if the payload does not match `T`, including
///   date fields in the wrong format
pub fn decode<T: DeserializeOwned>(body: Value, filter: &Filter) -> Result<T> {
    let payload = filter.extract(body)?;
    serde_json::from_value(payload).map_err(|e| ApiError::Decoding {
        resource: filter.resource.to_string(),
        message: e.to_string(),
    })
}

/// Converts a confirmation object into form pairs, values passed through unchanged.
///
/// Strings are sent as-is; other scalars use their JSON text. `null` entries
/// are dropped. Anything other than an object yields no pairs.
pub fn echo_form(body: &Value) -> Vec<(String, String)> {
    let Value::Object(map) = body else {
        return Vec::new();
    };

    map.iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Sample {
        name: Option<String>,
        size: Option<u64>,
    }

    #[test]
    fn test_root_filter_passes_body_through() {
        let sample: Sample = decode(json!({"name": "a", "size": 3}), &Filter::root("sample")).unwrap();
        assert_eq!(sample.name.as_deref(), Some("a"));
        assert_eq!(sample.size, Some(3));
    }

    #[test]
    fn test_key_filter_unwraps_payload() {
        let body = json!({"sample": {"name": "b"}});
        let sample: Sample = decode(body, &Filter::key("sample", "sample")).unwrap();
        assert_eq!(sample.name.as_deref(), Some("b"));
        assert_eq!(sample.size, None);
    }

    #[test]
    fn test_missing_key_names_resource_and_key() {
        let err = decode::<Sample>(json!({"other": {}}), &Filter::key("repository", "repository"))
            .unwrap_err();
        match err {
            ApiError::MissingFilterKey { resource, key } => {
                assert_eq!(resource, "repository");
                assert_eq!(key, "repository");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_object_body_with_key_is_missing_key() {
        let err = decode::<Vec<Sample>>(json!([1, 2]), &Filter::key("users", "users")).unwrap_err();
        assert!(matches!(err, ApiError::MissingFilterKey { .. }));
    }

    #[test]
    fn test_optional_key_accepts_wrapped_and_bare_bodies() {
        let filter = Filter::optional_key("users", "users");
        let wrapped: Vec<String> = decode(json!({"users": ["mojombo", "pjhyett"]}), &filter).unwrap();
        let bare: Vec<String> = decode(json!(["mojombo", "pjhyett"]), &filter).unwrap();
        assert_eq!(wrapped, vec!["mojombo", "pjhyett"]);
        assert_eq!(wrapped, bare);
    }

    #[test]
    fn test_type_mismatch_is_decoding_error() {
        let err = decode::<Sample>(json!({"size": "big"}), &Filter::root("sample")).unwrap_err();
        assert!(matches!(err, ApiError::Decoding { ref resource, .. } if resource == "sample"));
    }

    #[test]
    fn test_echo_form_passes_token_unchanged() {
        let pairs = echo_form(&json!({"delete_token": "a1b2c3", "attempt": 1, "gone": null}));
        assert!(pairs.contains(&("delete_token".to_string(), "a1b2c3".to_string())));
        assert!(pairs.contains(&("attempt".to_string(), "1".to_string())));
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_echo_form_ignores_non_objects() {
        assert!(echo_form(&json!("token")).is_empty());
    }
}
