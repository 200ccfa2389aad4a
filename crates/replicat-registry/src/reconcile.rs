//! Registry reconciliation
//!
//! Reconciliation aligns the persisted choice records with the current
//! issuer catalog. It is meant to run once, from the application's
//! post-setup lifecycle trigger; it is idempotent, so re-running it with
//! an unchanged catalog is a no-op.
//!
//! The disable pass runs only after every upsert succeeded. A failed
//! upsert (for example a label collision between two applications)
//! aborts reconciliation before any `enabled` flag is touched, so a
//! partially-applied catalog never leaves flags inconsistent.

use crate::cache::ChoiceCache;
use crate::config::ReconcileConfig;
use crate::error::Result;
use crate::store::ChoiceStore;
use replicat_issuer::{AppRegistry, CatalogCache};
use replicat_types::{IssuerChoice, IssuerKey};
use std::collections::BTreeSet;
use std::sync::Arc;

/// What one reconciliation run changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Choices created for newly discovered issuers
    pub created: u64,

    /// Previously disabled choices whose issuer reappeared
    pub re_enabled: u64,

    /// Choices disabled because their issuer is gone from code
    pub disabled: u64,
}

/// Keeps persisted choices in sync with the issuer catalog
pub struct Reconciler {
    apps: Arc<AppRegistry>,
    catalog: Arc<CatalogCache>,
    store: Arc<dyn ChoiceStore>,
    choice_cache: Arc<ChoiceCache>,
    config: ReconcileConfig,
}

impl Reconciler {
    pub fn new(
        apps: Arc<AppRegistry>,
        catalog: Arc<CatalogCache>,
        store: Arc<dyn ChoiceStore>,
        choice_cache: Arc<ChoiceCache>,
        config: ReconcileConfig,
    ) -> Self {
        Self {
            apps,
            catalog,
            store,
            choice_cache,
            config,
        }
    }

    /// Run one reconciliation
    pub async fn reconcile(&self) -> Result<ReconcileReport> {
        // The memoized catalog: both passes below see the same keys.
        let catalog = self.catalog.get(&self.apps).await?;
        let mut report = ReconcileReport::default();

        // Upsert pass.
        for (identifier, entry) in catalog.iter() {
            let key = IssuerKey::new(entry.app_name.clone(), identifier.clone());
            match self.store.find_by_key(&key).await? {
                Some(mut choice) => {
                    if choice.label != entry.label {
                        tracing::warn!(
                            key = %key,
                            stored = %choice.label,
                            declared = %entry.label,
                            "Issuer label changed in code; stored label is kept"
                        );
                    }
                    if !choice.enabled {
                        choice.enable();
                        self.store.update(&choice).await?;
                        report.re_enabled += 1;
                        tracing::info!(key = %key, "Issuer choice re-enabled");
                    }
                }
                None => {
                    let choice =
                        IssuerChoice::new(entry.app_name.clone(), identifier.clone(), entry.label.clone());
                    if let Err(error) = self.store.insert(choice).await {
                        tracing::error!(key = %key, error = %error, "Issuer choice upsert failed");
                        return Err(error.into());
                    }
                    report.created += 1;
                    tracing::info!(key = %key, label = %entry.label, "Issuer choice created");
                }
            }
        }

        // Disable pass, only reachable when every upsert succeeded.
        let keep: BTreeSet<String> = catalog.keys().cloned().collect();
        report.disabled = self.store.disable_except(&keep).await?;
        if report.disabled > 0 {
            tracing::info!(disabled = report.disabled, "Orphaned issuer choices disabled");
        }

        if self.config.refresh_choice_cache {
            self.choice_cache.clear().await?;
        }

        tracing::info!(
            created = report.created,
            re_enabled = report.re_enabled,
            disabled = report.disabled,
            "Issuer registry reconciled"
        );
        Ok(report)
    }
}
