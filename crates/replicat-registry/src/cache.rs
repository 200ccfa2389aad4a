//! The choice read cache
//!
//! A second cache, independent of the issuer catalog cache and with the
//! opposite staleness tolerance: choices are admin-mutable, so this one
//! is explicitly invalidated on every write path. Entries are keyed by
//! filter mode, so a snapshot written for one filter can never be served
//! for a request with another.

use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::store::ChoiceStore;
use async_trait::async_trait;
use replicat_types::IssuerChoice;
use std::sync::Arc;

/// A shared key-value cache service with per-key get/set atomicity
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &str) -> std::result::Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: String) -> std::result::Result<(), CacheError>;

    async fn remove(&self, key: &str) -> std::result::Result<(), CacheError>;
}

const FILTER_MODES: [bool; 2] = [false, true];

/// Read cache over the persisted issuer choices
///
/// Snapshots are JSON arrays of enabled choices, sorted by label;
/// read-only choices are excluded unless the filter mode allows them.
pub struct ChoiceCache {
    store: Arc<dyn ChoiceStore>,
    backend: Arc<dyn CacheBackend>,
    key_prefix: String,
}

impl ChoiceCache {
    pub fn new(
        store: Arc<dyn ChoiceStore>,
        backend: Arc<dyn CacheBackend>,
        config: &CacheConfig,
    ) -> Self {
        Self {
            store,
            backend,
            key_prefix: config.key_prefix.clone(),
        }
    }

    fn key(&self, allow_read_only: bool) -> String {
        let mode = if allow_read_only {
            "enabled-any"
        } else {
            "enabled-writable"
        };
        format!("{}:{mode}", self.key_prefix)
    }

    /// Remove both filter-mode entries
    pub async fn clear(&self) -> Result<()> {
        for allow_read_only in FILTER_MODES {
            self.backend.remove(&self.key(allow_read_only)).await?;
        }
        Ok(())
    }

    /// Recompute the snapshot from the store, write it, and return it
    pub async fn refresh(&self, allow_read_only: bool) -> Result<String> {
        let mut choices: Vec<IssuerChoice> = self
            .store
            .list()
            .await?
            .into_iter()
            .filter(|choice| choice.enabled && (allow_read_only || !choice.read_only))
            .collect();
        choices.sort_by(|a, b| a.label.cmp(&b.label));

        let snapshot = serde_json::to_string(&choices)?;
        let key = self.key(allow_read_only);
        self.backend.set(&key, snapshot.clone()).await?;
        tracing::debug!(key = %key, choices = choices.len(), "Choice cache refreshed");
        Ok(snapshot)
    }

    /// The cached snapshot, recomputing on a miss or a forced refresh
    pub async fn get(&self, allow_read_only: bool, force_refresh: bool) -> Result<String> {
        if !force_refresh {
            if let Some(snapshot) = self.backend.get(&self.key(allow_read_only)).await? {
                return Ok(snapshot);
            }
        }
        self.refresh(allow_read_only).await
    }

    /// Like [`get`](Self::get), deserialized for in-process consumers
    pub async fn get_choices(
        &self,
        allow_read_only: bool,
        force_refresh: bool,
    ) -> Result<Vec<IssuerChoice>> {
        let snapshot = self.get(allow_read_only, force_refresh).await?;
        Ok(serde_json::from_str(&snapshot)?)
    }
}
