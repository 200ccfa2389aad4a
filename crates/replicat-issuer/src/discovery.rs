//! Issuer discovery
//!
//! Discovery answers "which issuer identifiers does this application
//! contribute?" without loading any issuer code. Identifiers prefixed
//! with the internal-use marker are skipped, as are none at all for an
//! application that registered nothing (an empty set is not an error).

use crate::app::{ApplicationPackage, INTERNAL_MARKER};
use std::collections::BTreeSet;

/// The visible issuer identifiers of one application
pub fn discover(app: &ApplicationPackage) -> BTreeSet<String> {
    app.identifiers()
        .filter(|identifier| !identifier.starts_with(INTERNAL_MARKER))
        .map(str::to_owned)
        .collect()
}
