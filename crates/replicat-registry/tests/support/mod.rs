//! Shared fixtures: a report issuer with typed query and context models,
//! wired into in-memory stores and caches.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use replicat_issuer::{
    AppRegistry, ApplicationPackage, BoxError, CatalogCache, DocumentIssuer, IssuerError,
    PayloadSchema, SharedIssuer, TypedSchema,
};
use replicat_registry::{
    CacheConfig, ChoiceCache, DocumentRenderer, DocumentService, InMemoryCacheBackend,
    InMemoryChoiceStore, InMemoryDocumentStore, ReconcileConfig, Reconciler,
};
use replicat_types::Document;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub representative: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub organization: Organization,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContextQueryModel {
    pub student: Student,
    pub course: Course,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContextModel {
    pub identifier: Uuid,
    pub student: Student,
    pub course: Course,
    pub creation_date: DateTime<Utc>,
    pub delivery_stamp: DateTime<Utc>,
}

/// The report issuer from the test application
pub struct ReportIssuer {
    query_schema: TypedSchema<ContextQueryModel>,
    context_schema: TypedSchema<ContextModel>,
}

impl ReportIssuer {
    pub fn new() -> Self {
        Self {
            query_schema: TypedSchema::new(),
            context_schema: TypedSchema::new(),
        }
    }

    pub fn factory() -> std::result::Result<SharedIssuer, BoxError> {
        Ok(Arc::new(Self::new()))
    }
}

#[async_trait]
impl DocumentIssuer for ReportIssuer {
    fn label(&self) -> &str {
        "Report"
    }

    fn query_schema(&self) -> Option<&dyn PayloadSchema> {
        Some(&self.query_schema)
    }

    fn context_schema(&self) -> Option<&dyn PayloadSchema> {
        Some(&self.context_schema)
    }

    async fn fetch_context(&self, query: &Value) -> Result<Value, IssuerError> {
        let now = Utc::now();
        let mut context = json!({
            "identifier": Uuid::new_v4(),
            "creation_date": now,
            "delivery_stamp": now,
        });
        if let (Value::Object(context), Value::Object(query)) = (&mut context, query) {
            for (key, value) in query {
                context.insert(key.clone(), value.clone());
            }
        }
        Ok(context)
    }
}

/// An issuer whose fetched context never satisfies its own schema
pub struct DefectiveIssuer {
    query_schema: TypedSchema<ContextQueryModel>,
    context_schema: TypedSchema<ContextModel>,
}

impl DefectiveIssuer {
    pub fn factory() -> std::result::Result<SharedIssuer, BoxError> {
        Ok(Arc::new(Self {
            query_schema: TypedSchema::new(),
            context_schema: TypedSchema::new(),
        }))
    }
}

#[async_trait]
impl DocumentIssuer for DefectiveIssuer {
    fn label(&self) -> &str {
        "Defective"
    }

    fn query_schema(&self) -> Option<&dyn PayloadSchema> {
        Some(&self.query_schema)
    }

    fn context_schema(&self) -> Option<&dyn PayloadSchema> {
        Some(&self.context_schema)
    }

    async fn fetch_context(&self, _query: &Value) -> Result<Value, IssuerError> {
        Ok(json!({"unexpected": true}))
    }
}

/// An issuer whose backing data source is unreachable
pub struct OfflineIssuer {
    query_schema: TypedSchema<ContextQueryModel>,
    context_schema: TypedSchema<ContextModel>,
}

impl OfflineIssuer {
    pub fn factory() -> std::result::Result<SharedIssuer, BoxError> {
        Ok(Arc::new(Self {
            query_schema: TypedSchema::new(),
            context_schema: TypedSchema::new(),
        }))
    }
}

#[async_trait]
impl DocumentIssuer for OfflineIssuer {
    fn label(&self) -> &str {
        "Offline"
    }

    fn query_schema(&self) -> Option<&dyn PayloadSchema> {
        Some(&self.query_schema)
    }

    fn context_schema(&self) -> Option<&dyn PayloadSchema> {
        Some(&self.context_schema)
    }

    async fn fetch_context(&self, _query: &Value) -> Result<Value, IssuerError> {
        Err(IssuerError::Fetch("records service unreachable".into()))
    }
}

/// Renderer that only counts invocations
#[derive(Default)]
pub struct CountingRenderer {
    pub renders: AtomicUsize,
}

#[async_trait]
impl DocumentRenderer for CountingRenderer {
    async fn render(
        &self,
        _document: &Document,
        _context: &Value,
    ) -> std::result::Result<(), BoxError> {
        self.renders.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Everything a scenario needs, wired over in-memory backends
pub struct Harness {
    pub apps: Arc<AppRegistry>,
    pub catalog: Arc<CatalogCache>,
    pub choices: Arc<InMemoryChoiceStore>,
    pub documents: Arc<InMemoryDocumentStore>,
    pub choice_cache: Arc<ChoiceCache>,
    pub reconciler: Reconciler,
    pub renderer: Arc<CountingRenderer>,
    pub service: DocumentService,
}

impl Harness {
    pub fn new(apps: AppRegistry) -> Self {
        let apps = Arc::new(apps);
        let catalog = Arc::new(CatalogCache::new());
        let choices = Arc::new(InMemoryChoiceStore::new());
        let documents = Arc::new(InMemoryDocumentStore::new());
        let choice_cache = Arc::new(ChoiceCache::new(
            choices.clone(),
            Arc::new(InMemoryCacheBackend::new()),
            &CacheConfig::default(),
        ));
        let reconciler = Reconciler::new(
            apps.clone(),
            catalog.clone(),
            choices.clone(),
            choice_cache.clone(),
            ReconcileConfig::default(),
        );
        let renderer = Arc::new(CountingRenderer::default());
        let service = DocumentService::new(
            apps.clone(),
            choice_cache.clone(),
            documents.clone(),
            renderer.clone(),
        );

        Self {
            apps,
            catalog,
            choices,
            documents,
            choice_cache,
            reconciler,
            renderer,
            service,
        }
    }

    /// The standard test application: one report issuer
    pub fn with_test_app() -> Self {
        let mut apps = AppRegistry::new();
        apps.register(ApplicationPackage::new("test_app").register("report", ReportIssuer::factory));
        Self::new(apps)
    }
}

/// A well-formed context query for the report issuer
pub fn report_query() -> Value {
    json!({
        "student": {"name": "Ana"},
        "course": {
            "name": "Practical Rust",
            "organization": {"name": "Howard", "representative": "Sam"},
        },
    })
}
