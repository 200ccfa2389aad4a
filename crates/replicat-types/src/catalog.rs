//! The in-memory catalog of currently discovered issuers
//!
//! The catalog maps an issuer identifier to the application that owns it
//! and the label its implementation declares. It is an ordered map so
//! snapshots and logs are stable across runs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Catalog value: which application owns an issuer, and its label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Application that contributes the issuer
    pub app_name: String,

    /// Label declared by the issuer implementation
    pub label: String,
}

impl CatalogEntry {
    pub fn new(app_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            label: label.into(),
        }
    }
}

/// Mapping from issuer identifier to its catalog entry
pub type Catalog = BTreeMap<String, CatalogEntry>;
