//! Application packages and the application registry
//!
//! Each installed application may contribute document issuers. In the
//! original convention an application shipped issuer modules in a fixed
//! subdirectory; here contribution is explicit factory registration,
//! which keeps discovery cheap and load failures attributable.

use crate::issuer::{IssuerFactory, SharedIssuer};
use crate::BoxError;
use std::sync::Arc;

/// Identifiers starting with this marker are internal to their
/// application and invisible to discovery.
pub const INTERNAL_MARKER: char = '_';

/// One application's issuer contributions, in registration order
pub struct ApplicationPackage {
    name: String,
    issuers: Vec<(String, IssuerFactory)>,
}

impl ApplicationPackage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            issuers: Vec::new(),
        }
    }

    /// Stable application name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register an issuer factory under an identifier
    ///
    /// Re-registering an identifier replaces the earlier factory.
    pub fn register<F>(mut self, identifier: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> std::result::Result<SharedIssuer, BoxError> + Send + Sync + 'static,
    {
        let identifier = identifier.into();
        let factory: IssuerFactory = Arc::new(factory);
        if let Some(slot) = self.issuers.iter_mut().find(|(id, _)| *id == identifier) {
            slot.1 = factory;
        } else {
            self.issuers.push((identifier, factory));
        }
        self
    }

    /// All registered identifiers, internal ones included
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.issuers.iter().map(|(id, _)| id.as_str())
    }

    /// Factory for one identifier, if registered
    pub fn factory(&self, identifier: &str) -> Option<&IssuerFactory> {
        self.issuers
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, factory)| factory)
    }
}

/// The installed applications, enumerable in registration order
#[derive(Default)]
pub struct AppRegistry {
    apps: Vec<ApplicationPackage>,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an application package
    ///
    /// Registering a package under an existing name replaces it in
    /// place, keeping its original position in the order.
    pub fn register(&mut self, app: ApplicationPackage) {
        if let Some(slot) = self.apps.iter_mut().find(|a| a.name == app.name) {
            *slot = app;
        } else {
            self.apps.push(app);
        }
    }

    /// Lookup by application name
    pub fn get(&self, name: &str) -> Option<&ApplicationPackage> {
        self.apps.iter().find(|app| app.name == name)
    }

    /// Applications in registration order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ApplicationPackage> {
        self.apps.iter()
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issuer::DocumentIssuer;
    use crate::IssuerError;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct Stub(&'static str);

    #[async_trait]
    impl DocumentIssuer for Stub {
        fn label(&self) -> &str {
            self.0
        }

        async fn fetch_context(&self, _query: &Value) -> Result<Value, IssuerError> {
            Ok(json!({}))
        }
    }

    fn stub(label: &'static str) -> impl Fn() -> Result<SharedIssuer, BoxError> {
        move || Ok(Arc::new(Stub(label)) as SharedIssuer)
    }

    #[test]
    fn test_reregistering_an_identifier_replaces_the_factory() {
        let app = ApplicationPackage::new("test_app")
            .register("report", stub("First"))
            .register("report", stub("Second"));

        assert_eq!(app.identifiers().count(), 1);
        let issuer = app.factory("report").unwrap()().unwrap();
        assert_eq!(issuer.label(), "Second");
    }

    #[test]
    fn test_registry_keeps_registration_order() {
        let mut registry = AppRegistry::new();
        registry.register(ApplicationPackage::new("core"));
        registry.register(ApplicationPackage::new("extras"));

        let names: Vec<_> = registry.iter().map(|app| app.name().to_owned()).collect();
        assert_eq!(names, ["core", "extras"]);
    }

    #[test]
    fn test_reregistering_an_app_keeps_its_position() {
        let mut registry = AppRegistry::new();
        registry.register(ApplicationPackage::new("core"));
        registry.register(ApplicationPackage::new("extras"));
        registry.register(ApplicationPackage::new("core").register("report", stub("Report")));

        let names: Vec<_> = registry.iter().map(|app| app.name().to_owned()).collect();
        assert_eq!(names, ["core", "extras"]);
        assert!(registry.get("core").unwrap().factory("report").is_some());
    }
}
