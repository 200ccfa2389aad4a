//! The document issuer trait
//!
//! To define a new document type, implement [`DocumentIssuer`] and
//! register a factory for it on an [`crate::ApplicationPackage`]. The
//! dual-schema design lets an issuer accept loosely-typed query input
//! while guaranteeing the context it produces is strictly typed before
//! anything is persisted.

use crate::error::{BoxError, IssuerError};
use crate::schema::{PayloadSchema, RawPayload};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// A shared, loaded issuer instance
pub type SharedIssuer = Arc<dyn DocumentIssuer>;

/// Constructs an issuer instance; failures propagate unmodified
pub type IssuerFactory = Arc<dyn Fn() -> std::result::Result<SharedIssuer, BoxError> + Send + Sync>;

/// A pluggable document issuer
///
/// An issuer declares a human-readable label, a schema for the query
/// parameters it accepts, a schema for the context it fetches, and the
/// fetch operation itself.
#[async_trait]
pub trait DocumentIssuer: Send + Sync {
    /// The descriptive label for this issuer
    fn label(&self) -> &str;

    /// Schema for caller-supplied query parameters, if declared
    fn query_schema(&self) -> Option<&dyn PayloadSchema> {
        None
    }

    /// Schema for the fetched context, if declared
    fn context_schema(&self) -> Option<&dyn PayloadSchema> {
        None
    }

    /// Fetch the document context for an already-validated query
    ///
    /// Returns a raw context value ready for context-schema validation.
    async fn fetch_context(&self, query: &Value) -> std::result::Result<Value, IssuerError>;

    /// Validate caller-supplied query parameters against the declared
    /// query schema
    ///
    /// An issuer without a query schema is a configuration error, not a
    /// license to skip validation.
    fn validate_query(&self, raw: &RawPayload) -> std::result::Result<Value, IssuerError> {
        let schema = self
            .query_schema()
            .ok_or(IssuerError::MissingQuerySchema)?;
        schema.validate(raw).map_err(IssuerError::QueryValidation)
    }

    /// Validate a fetched context against the declared context schema
    fn validate_context(&self, raw: &RawPayload) -> std::result::Result<Value, IssuerError> {
        let schema = self
            .context_schema()
            .ok_or(IssuerError::MissingContextSchema)?;
        schema.validate(raw).map_err(IssuerError::ContextValidation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TypedSchema;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct Query {
        subject: String,
    }

    struct Bare;

    #[async_trait]
    impl DocumentIssuer for Bare {
        fn label(&self) -> &str {
            "Bare"
        }

        async fn fetch_context(&self, _query: &Value) -> Result<Value, IssuerError> {
            Ok(json!({}))
        }
    }

    struct WithQuerySchema {
        schema: TypedSchema<Query>,
    }

    #[async_trait]
    impl DocumentIssuer for WithQuerySchema {
        fn label(&self) -> &str {
            "WithQuerySchema"
        }

        fn query_schema(&self) -> Option<&dyn PayloadSchema> {
            Some(&self.schema)
        }

        async fn fetch_context(&self, query: &Value) -> Result<Value, IssuerError> {
            Ok(query.clone())
        }
    }

    #[test]
    fn test_missing_schemas_fail_fast() {
        let raw = RawPayload::from("{}");
        assert!(matches!(
            Bare.validate_query(&raw),
            Err(IssuerError::MissingQuerySchema)
        ));
        assert!(matches!(
            Bare.validate_context(&raw),
            Err(IssuerError::MissingContextSchema)
        ));
    }

    #[test]
    fn test_query_violation_is_a_query_error() {
        let issuer = WithQuerySchema {
            schema: TypedSchema::new(),
        };
        let error = issuer
            .validate_query(&RawPayload::from(r#"{"other": 1}"#))
            .unwrap_err();
        assert!(matches!(error, IssuerError::QueryValidation(_)));

        let value = issuer
            .validate_query(&RawPayload::from(r#"{"subject": "math"}"#))
            .unwrap();
        assert_eq!(value, json!({"subject": "math"}));
    }
}
