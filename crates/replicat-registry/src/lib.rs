//! Replicat Documents - Registry, persistence and caching
//!
//! This crate keeps the persisted issuer choice catalog in sync with the
//! code-level issuer catalog and serves it to document-creation paths:
//!
//! - **ChoiceStore / DocumentStore**: storage traits with in-memory
//!   implementations; production deployments plug in persistent backends
//!   that implement the same traits
//! - **Reconciler**: upserts a choice per discovered issuer, re-enables
//!   choices whose issuer reappeared, disables orphaned ones
//! - **ChoiceCache**: explicitly-invalidated read cache over the choice
//!   store, keyed by filter mode
//! - **DocumentService**: validate query, fetch context, validate
//!   context, persist, render through a collaborator
//!
//! The issuer catalog itself is owned by `replicat-issuer`; this crate
//! consumes it through the memoized [`replicat_issuer::CatalogCache`].

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod cache;
pub mod config;
pub mod documents;
pub mod error;
pub mod memory;
pub mod reconcile;
pub mod store;

// Re-exports
pub use cache::{CacheBackend, ChoiceCache};
pub use config::{CacheConfig, ReconcileConfig, RegistryConfig};
pub use documents::{DocumentRenderer, DocumentService};
pub use error::{CacheError, RegistryError, Result, StoreError, StoreResult};
pub use memory::{InMemoryCacheBackend, InMemoryChoiceStore, InMemoryDocumentStore};
pub use reconcile::{ReconcileReport, Reconciler};
pub use store::{ChoiceStore, DocumentStore};
