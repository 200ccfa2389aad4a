//! Registry error types

use replicat_issuer::IssuerError;
use replicat_types::{ChoiceId, DocumentId, IssuerKey};
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Duplicate label: {0}")]
    DuplicateLabel(String),

    #[error("Duplicate issuer: {0}")]
    DuplicateIssuer(IssuerKey),

    #[error("Choice not found: {0}")]
    ChoiceNotFound(ChoiceId),

    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Result type for storage operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Cache backend errors
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache backend error: {0}")]
    Backend(String),
}

/// Registry errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Issuer(#[from] IssuerError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("Snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Issuer choice is not usable for this operation: {0}")]
    ChoiceNotUsable(IssuerKey),

    #[error("Document has no context to render: {0}")]
    MissingContext(DocumentId),

    #[error("Document render failed: {0}")]
    Render(#[source] replicat_issuer::BoxError),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
