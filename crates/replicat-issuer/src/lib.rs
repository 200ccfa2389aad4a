//! Replicat Documents - Issuer plugin surface
//!
//! An issuer is a pluggable unit that knows how to validate a context
//! query, fetch a context, and validate that context, for one document
//! type. Applications contribute issuers through explicit factory
//! registration on an [`ApplicationPackage`]; the framework discovers
//! them, loads them on demand, and memoizes a per-process catalog of
//! everything it found.
//!
//! ## Key Concepts
//!
//! - **DocumentIssuer**: the plugin trait (label, schemas, context fetch)
//! - **PayloadSchema / TypedSchema**: serde-model-backed validation of
//!   text or map payloads
//! - **ApplicationPackage / AppRegistry**: where issuers are registered,
//!   in a defined registration order
//! - **CatalogCache**: computes the issuer catalog at most once per
//!   process; a restart is the refresh mechanism

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod app;
pub mod catalog;
pub mod discovery;
pub mod error;
pub mod issuer;
pub mod loader;
pub mod schema;

// Re-exports
pub use app::{AppRegistry, ApplicationPackage, INTERNAL_MARKER};
pub use catalog::{build_catalog, describe, CatalogCache};
pub use discovery::discover;
pub use error::{BoxError, IssuerError, Result};
pub use issuer::{DocumentIssuer, IssuerFactory, SharedIssuer};
pub use loader::load;
pub use schema::{PayloadSchema, RawPayload, SchemaViolation, TypedSchema};
