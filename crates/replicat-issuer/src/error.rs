//! Issuer error types

use crate::schema::SchemaViolation;
use thiserror::Error;

/// Boxed error type used to carry issuer construction and fetch failures
/// through the framework unmodified.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Issuer errors
#[derive(Debug, Error)]
pub enum IssuerError {
    #[error("Unknown application: {0}")]
    UnknownApplication(String),

    #[error("Issuer not found: {app_name}/{identifier}")]
    NotFound { app_name: String, identifier: String },

    #[error("Issuer failed to load: {app_name}/{identifier}")]
    LoadFailure {
        app_name: String,
        identifier: String,
        #[source]
        source: BoxError,
    },

    #[error("Context query is not valid: {0}")]
    QueryValidation(#[source] SchemaViolation),

    #[error("Fetched context is not valid: {0}")]
    ContextValidation(#[source] SchemaViolation),

    #[error("Context query model is missing")]
    MissingQuerySchema,

    #[error("Context model is missing")]
    MissingContextSchema,

    #[error("Context fetch failed: {0}")]
    Fetch(#[source] BoxError),
}

/// Result type for issuer operations
pub type Result<T> = std::result::Result<T, IssuerError>;
