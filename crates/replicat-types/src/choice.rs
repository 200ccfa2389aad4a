//! Issuer descriptors and the persisted issuer choice record
//!
//! An `IssuerDescriptor` is what discovery produces from code; it is
//! recomputed on every process start and never persisted. An
//! `IssuerChoice` is the durable administrative record for one issuer,
//! created and kept in sync by the registry reconciler.

use crate::ChoiceId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An issuer found in code during discovery (ephemeral)
///
/// Uniquely keyed by `(identifier, app_name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerDescriptor {
    /// Issuer module identifier within its application
    pub identifier: String,

    /// Application that contributes this issuer
    pub app_name: String,

    /// Human-readable label declared by the issuer
    pub label: String,
}

/// The natural key of an issuer choice: `(app_name, issuer_identifier)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssuerKey {
    pub app_name: String,
    pub issuer_identifier: String,
}

impl IssuerKey {
    pub fn new(app_name: impl Into<String>, issuer_identifier: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            issuer_identifier: issuer_identifier.into(),
        }
    }
}

impl fmt::Display for IssuerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.app_name, self.issuer_identifier)
    }
}

/// Persisted administrative state for one registered issuer
///
/// `app_name`, `issuer_identifier` and `label` are fixed at creation.
/// `read_only` is the administrator's knob; `enabled` is system-managed
/// and reflects whether the issuer was present in code at the last
/// reconciliation. Choices are never deleted automatically, only
/// disabled, so historical documents keep a valid issuer reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerChoice {
    /// Stable unique identifier, assigned at first creation
    pub id: ChoiceId,

    /// Application that contains this issuer
    pub app_name: String,

    /// Issuer module identifier within the application
    pub issuer_identifier: String,

    /// Descriptive label, unique across all choices
    pub label: String,

    /// Allows rendering existing documents but forbids creating new ones
    pub read_only: bool,

    /// True iff the issuer was present at the last reconciliation
    pub enabled: bool,
}

impl IssuerChoice {
    /// Create a new enabled, writable choice
    pub fn new(
        app_name: impl Into<String>,
        issuer_identifier: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: ChoiceId::generate(),
            app_name: app_name.into(),
            issuer_identifier: issuer_identifier.into(),
            label: label.into(),
            read_only: false,
            enabled: true,
        }
    }

    /// Natural key of this choice
    pub fn key(&self) -> IssuerKey {
        IssuerKey::new(self.app_name.clone(), self.issuer_identifier.clone())
    }

    /// Whether new documents may be created with this issuer
    pub fn writable(&self) -> bool {
        self.enabled && !self.read_only
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }
}

impl fmt::Display for IssuerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
