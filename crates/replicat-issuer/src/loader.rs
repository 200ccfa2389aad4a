//! Issuer loading
//!
//! Loading instantiates the issuer registered under an `(application,
//! identifier)` pair. "Not registered" and "failed to construct" are
//! distinct error kinds: a broken issuer must stay loud so operators can
//! diagnose it, never be downgraded to "absent".

use crate::app::AppRegistry;
use crate::error::{IssuerError, Result};
use crate::issuer::SharedIssuer;

/// Instantiate the issuer registered under `app_name` / `identifier`
pub fn load(registry: &AppRegistry, app_name: &str, identifier: &str) -> Result<SharedIssuer> {
    let app = registry
        .get(app_name)
        .ok_or_else(|| IssuerError::UnknownApplication(app_name.to_owned()))?;

    let factory = app
        .factory(identifier)
        .ok_or_else(|| IssuerError::NotFound {
            app_name: app_name.to_owned(),
            identifier: identifier.to_owned(),
        })?;

    factory().map_err(|source| IssuerError::LoadFailure {
        app_name: app_name.to_owned(),
        identifier: identifier.to_owned(),
        source,
    })
}
