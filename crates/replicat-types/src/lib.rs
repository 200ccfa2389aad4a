//! Replicat Documents - Core types for the document issuer framework
//!
//! Documents are PDF-style reports produced by pluggable data-fetching
//! modules called issuers. This crate holds the data model shared by the
//! rest of the workspace:
//!
//! - **IssuerDescriptor**: what discovery found in code (ephemeral)
//! - **IssuerChoice**: the persisted administrative record for one issuer
//! - **Catalog**: the per-process map of currently discovered issuers
//! - **Document**: one rendered (or renderable) document instance
//!
//! ## Architectural Boundaries
//!
//! - This crate owns: plain data, IDs, and the invariants expressible on
//!   a single value (`writable()`, metadata flattening).
//! - `replicat-issuer` owns: the issuer trait, schemas, discovery, loading.
//! - `replicat-registry` owns: persistence, reconciliation, caching.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod catalog;
pub mod choice;
pub mod document;
pub mod ids;

// Re-export main types
pub use catalog::{Catalog, CatalogEntry};
pub use choice::{IssuerChoice, IssuerDescriptor, IssuerKey};
pub use document::{flatten_json, Document};
pub use ids::{ChoiceId, DocumentId};
