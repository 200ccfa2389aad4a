//! In-memory implementations of the storage and cache-backend traits
//!
//! These are suitable for development and testing. Production
//! deployments should use persistent backends (PostgreSQL, a shared
//! cache service, etc.) that implement the same traits.

use crate::cache::CacheBackend;
use crate::error::{CacheError, StoreError, StoreResult};
use crate::store::{ChoiceStore, DocumentStore};
use async_trait::async_trait;
use dashmap::DashMap;
use replicat_types::{ChoiceId, Document, DocumentId, IssuerChoice, IssuerKey};
use std::collections::BTreeSet;

/// In-memory choice store
#[derive(Debug, Default)]
pub struct InMemoryChoiceStore {
    choices: DashMap<ChoiceId, IssuerChoice>,
}

impl InMemoryChoiceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChoiceStore for InMemoryChoiceStore {
    async fn get(&self, id: &ChoiceId) -> StoreResult<Option<IssuerChoice>> {
        Ok(self.choices.get(id).map(|c| c.clone()))
    }

    async fn find_by_key(&self, key: &IssuerKey) -> StoreResult<Option<IssuerChoice>> {
        // value(): RefMulti::key() is the map key, not the choice's
        // natural key.
        Ok(self
            .choices
            .iter()
            .find(|c| c.value().key() == *key)
            .map(|c| c.clone()))
    }

    async fn find_by_label(&self, label: &str) -> StoreResult<Option<IssuerChoice>> {
        Ok(self
            .choices
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.clone()))
    }

    async fn list(&self) -> StoreResult<Vec<IssuerChoice>> {
        Ok(self.choices.iter().map(|c| c.clone()).collect())
    }

    async fn insert(&self, choice: IssuerChoice) -> StoreResult<()> {
        let key = choice.key();
        if self.choices.iter().any(|c| c.value().key() == key) {
            return Err(StoreError::DuplicateIssuer(key));
        }
        if self.choices.iter().any(|c| c.label == choice.label) {
            return Err(StoreError::DuplicateLabel(choice.label));
        }
        self.choices.insert(choice.id.clone(), choice);
        Ok(())
    }

    async fn update(&self, choice: &IssuerChoice) -> StoreResult<()> {
        let mut existing = self
            .choices
            .get_mut(&choice.id)
            .ok_or_else(|| StoreError::ChoiceNotFound(choice.id.clone()))?;
        // Only the mutable fields; key and label stay as created.
        existing.read_only = choice.read_only;
        existing.enabled = choice.enabled;
        Ok(())
    }

    async fn disable_except(&self, keep: &BTreeSet<String>) -> StoreResult<u64> {
        let mut disabled = 0;
        for mut choice in self.choices.iter_mut() {
            if choice.enabled && !keep.contains(&choice.issuer_identifier) {
                choice.disable();
                disabled += 1;
            }
        }
        Ok(disabled)
    }
}

/// In-memory document store
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: DashMap<DocumentId, Document>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, id: &DocumentId) -> StoreResult<Option<Document>> {
        Ok(self.documents.get(id).map(|d| d.clone()))
    }

    async fn list(&self) -> StoreResult<Vec<Document>> {
        Ok(self.documents.iter().map(|d| d.clone()).collect())
    }

    async fn insert(&self, document: Document) -> StoreResult<()> {
        self.documents.insert(document.id.clone(), document);
        Ok(())
    }

    async fn update(&self, document: &Document) -> StoreResult<()> {
        let mut existing = self
            .documents
            .get_mut(&document.id)
            .ok_or_else(|| StoreError::DocumentNotFound(document.id.clone()))?;
        *existing = document.clone();
        Ok(())
    }

    async fn clear_issuer(&self, choice: &ChoiceId) -> StoreResult<u64> {
        let mut cleared = 0;
        for mut document in self.documents.iter_mut() {
            if document.issuer.as_ref() == Some(choice) {
                document.issuer = None;
                document.touch();
                cleared += 1;
            }
        }
        Ok(cleared)
    }
}

/// In-memory cache backend
#[derive(Debug, Default)]
pub struct InMemoryCacheBackend {
    entries: DashMap<String, String>,
}

impl InMemoryCacheBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheBackend for InMemoryCacheBackend {
    async fn get(&self, key: &str) -> std::result::Result<Option<String>, CacheError> {
        Ok(self.entries.get(key).map(|v| v.clone()))
    }

    async fn set(&self, key: &str, value: String) -> std::result::Result<(), CacheError> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> std::result::Result<(), CacheError> {
        self.entries.remove(key);
        Ok(())
    }
}
