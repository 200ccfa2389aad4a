//! Catalog construction and the process-lifetime catalog cache
//!
//! The catalog maps every discovered issuer identifier to its owning
//! application and declared label. Applications are walked in reverse
//! registration order: applications registered earlier have priority and
//! overwrite entries contributed by later ones when identifiers collide.
//!
//! The cache is deliberately never invalidated automatically. Picking up
//! newly installed issuers requires a new process; [`CatalogCache::invalidate`]
//! exists for the owning startup sequence and for tests.

use crate::app::{AppRegistry, ApplicationPackage};
use crate::discovery::discover;
use crate::error::Result;
use crate::loader::load;
use replicat_types::{Catalog, CatalogEntry, IssuerDescriptor};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Describe one application's visible issuers, loading each to read its
/// declared label
///
/// A load failure aborts description of the whole application so a
/// broken issuer surfaces as a configuration error instead of silently
/// vanishing from the catalog.
pub fn describe(registry: &AppRegistry, app: &ApplicationPackage) -> Result<Vec<IssuerDescriptor>> {
    let mut descriptors = Vec::new();
    for identifier in discover(app) {
        let issuer = load(registry, app.name(), &identifier)?;
        descriptors.push(IssuerDescriptor {
            identifier,
            app_name: app.name().to_owned(),
            label: issuer.label().to_owned(),
        });
    }
    Ok(descriptors)
}

/// Build the full issuer catalog across every registered application
pub fn build_catalog(registry: &AppRegistry) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    // Reverse registration order: earlier registrations win collisions.
    for app in registry.iter().rev() {
        for descriptor in describe(registry, app)? {
            catalog.insert(
                descriptor.identifier,
                CatalogEntry::new(descriptor.app_name, descriptor.label),
            );
        }
    }
    Ok(catalog)
}

/// Memoizes the issuer catalog for the lifetime of the process
///
/// The first-populate path is serialized behind a lock, so concurrent
/// first calls build the catalog exactly once. A failed build is not
/// memoized; the next call retries.
#[derive(Default)]
pub struct CatalogCache {
    slot: Mutex<Option<Arc<Catalog>>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The memoized catalog, building it on first use
    pub async fn get(&self, registry: &AppRegistry) -> Result<Arc<Catalog>> {
        let mut slot = self.slot.lock().await;
        if let Some(catalog) = slot.as_ref() {
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(build_catalog(registry)?);
        tracing::info!(issuers = catalog.len(), "Issuer catalog built");
        *slot = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Drop the memoized catalog
    ///
    /// Owned by the application's startup sequence; nothing in the
    /// framework calls this.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }
}
