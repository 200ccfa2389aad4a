//! Payload schemas backed by typed serde models
//!
//! Issuers validate two payloads: the caller-supplied context query and
//! the context they fetch themselves. Both arrive either as a JSON text
//! or as an already-parsed map, and both are validated by parsing them
//! into a typed serde model. The canonical JSON re-serialization of that
//! model is what gets persisted.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::marker::PhantomData;
use thiserror::Error;

/// A raw payload awaiting validation: JSON text or a key-value mapping
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    Text(String),
    Map(Map<String, Value>),
}

impl From<&str> for RawPayload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for RawPayload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Map<String, Value>> for RawPayload {
    fn from(map: Map<String, Value>) -> Self {
        Self::Map(map)
    }
}

impl From<Value> for RawPayload {
    /// Objects become map payloads; any other value is carried as its
    /// JSON text so validation still sees it.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Map(map),
            other => Self::Text(other.to_string()),
        }
    }
}

/// A payload failed schema validation
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SchemaViolation {
    message: String,
}

impl SchemaViolation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for SchemaViolation {
    fn from(error: serde_json::Error) -> Self {
        Self::new(error.to_string())
    }
}

/// Validates a raw payload, producing its canonical JSON value
///
/// Validation is deterministic and side-effect-free: the same payload
/// always produces the same result.
pub trait PayloadSchema: Send + Sync {
    fn validate(&self, raw: &RawPayload) -> std::result::Result<Value, SchemaViolation>;
}

/// The standard schema: a typed serde model
///
/// Parsing into the model type is the validation; serializing it back
/// yields the canonical payload.
pub struct TypedSchema<T> {
    _model: PhantomData<fn() -> T>,
}

impl<T> TypedSchema<T> {
    pub const fn new() -> Self {
        Self {
            _model: PhantomData,
        }
    }
}

impl<T> Default for TypedSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PayloadSchema for TypedSchema<T>
where
    T: DeserializeOwned + Serialize,
{
    fn validate(&self, raw: &RawPayload) -> std::result::Result<Value, SchemaViolation> {
        let model: T = match raw {
            RawPayload::Text(text) => serde_json::from_str(text)?,
            RawPayload::Map(map) => serde_json::from_value(Value::Object(map.clone()))?,
        };
        Ok(serde_json::to_value(model)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct Student {
        name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct QueryModel {
        student: Student,
        course: String,
    }

    static SCHEMA: TypedSchema<QueryModel> = TypedSchema::new();

    #[test]
    fn test_validate_text_payload() {
        let raw = RawPayload::from(r#"{"student": {"name": "Ana"}, "course": "Rust"}"#);
        let value = SCHEMA.validate(&raw).unwrap();
        assert_eq!(value, json!({"student": {"name": "Ana"}, "course": "Rust"}));
    }

    #[test]
    fn test_validate_map_payload() {
        let map = json!({"student": {"name": "Ana"}, "course": "Rust"});
        let Value::Object(map) = map else { unreachable!() };
        assert!(SCHEMA.validate(&RawPayload::from(map)).is_ok());
    }

    #[test]
    fn test_missing_field_is_a_violation() {
        let raw = RawPayload::from(r#"{"student": {"name": "Ana"}}"#);
        let violation = SCHEMA.validate(&raw).unwrap_err();
        assert!(violation.message().contains("course"));
    }

    #[test]
    fn test_validation_round_trips() {
        let raw = RawPayload::from(r#"{"student": {"name": "Ana"}, "course": "Rust"}"#);
        let first = SCHEMA.validate(&raw).unwrap();
        let second = SCHEMA
            .validate(&RawPayload::from(first.to_string()))
            .unwrap();
        assert_eq!(first, second);
    }
}
