//! Configuration for the registry

use serde::{Deserialize, Serialize};

/// Registry configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Choice cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Reconciler configuration
    #[serde(default)]
    pub reconcile: ReconcileConfig,
}

/// Choice cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Namespace prefix for choice cache keys in a shared backend
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            key_prefix: default_key_prefix(),
        }
    }
}

/// Reconciler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// Invalidate the choice read cache after a successful reconcile
    #[serde(default = "default_true")]
    pub refresh_choice_cache: bool,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            refresh_choice_cache: true,
        }
    }
}

fn default_key_prefix() -> String {
    "cached_document_issuers".to_owned()
}

fn default_true() -> bool {
    true
}
