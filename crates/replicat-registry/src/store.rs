//! Storage trait definitions
//!
//! Implementations must enforce two unique constraints on choices: the
//! `(app_name, issuer_identifier)` key and the label. Choices are never
//! deleted through this interface; orphaned ones are disabled instead,
//! which keeps historical documents referentially intact.

use crate::error::StoreResult;
use async_trait::async_trait;
use replicat_types::{ChoiceId, Document, DocumentId, IssuerChoice, IssuerKey};
use std::collections::BTreeSet;

/// Storage for issuer choice records
#[async_trait]
pub trait ChoiceStore: Send + Sync {
    /// Get a choice by ID
    async fn get(&self, id: &ChoiceId) -> StoreResult<Option<IssuerChoice>>;

    /// Get a choice by its natural key
    async fn find_by_key(&self, key: &IssuerKey) -> StoreResult<Option<IssuerChoice>>;

    /// Get a choice by its label
    async fn find_by_label(&self, label: &str) -> StoreResult<Option<IssuerChoice>>;

    /// List all choices
    async fn list(&self) -> StoreResult<Vec<IssuerChoice>>;

    /// Create a choice, enforcing both unique constraints
    async fn insert(&self, choice: IssuerChoice) -> StoreResult<()>;

    /// Update the mutable fields (`read_only`, `enabled`) of an existing
    /// choice
    async fn update(&self, choice: &IssuerChoice) -> StoreResult<()>;

    /// Disable every choice whose issuer identifier is not in `keep`;
    /// returns how many were newly disabled
    async fn disable_except(&self, keep: &BTreeSet<String>) -> StoreResult<u64>;
}

/// Storage for documents
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Get a document by ID
    async fn get(&self, id: &DocumentId) -> StoreResult<Option<Document>>;

    /// List all documents
    async fn list(&self) -> StoreResult<Vec<Document>>;

    /// Create a document
    async fn insert(&self, document: Document) -> StoreResult<()>;

    /// Update an existing document
    async fn update(&self, document: &Document) -> StoreResult<()>;

    /// Clear the issuer reference on every document that points at the
    /// given choice; returns how many were touched
    async fn clear_issuer(&self, choice: &ChoiceId) -> StoreResult<u64>;
}
