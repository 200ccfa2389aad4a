//! The document service
//!
//! Wires the document pipeline: validate the caller's query, fetch the
//! context through the issuer, validate that context, persist. Template
//! resolution and PDF generation stay behind the [`DocumentRenderer`]
//! collaborator.
//!
//! Creation requires an enabled, writable choice. Rendering an already
//! created document only requires that the document still has a context;
//! a disabled or read-only issuer does not block it.

use crate::cache::ChoiceCache;
use crate::error::{RegistryError, Result};
use crate::store::DocumentStore;
use async_trait::async_trait;
use chrono::Utc;
use replicat_issuer::{load, AppRegistry, BoxError, RawPayload};
use replicat_types::{Document, DocumentId, IssuerKey};
use serde_json::Value;
use std::sync::Arc;

/// Renders a document from its validated context
///
/// Implementations own templating and the PDF engine; the service only
/// records when a render succeeded.
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    async fn render(
        &self,
        document: &Document,
        context: &Value,
    ) -> std::result::Result<(), BoxError>;
}

/// Creates and renders documents through registered issuers
pub struct DocumentService {
    apps: Arc<AppRegistry>,
    choices: Arc<ChoiceCache>,
    documents: Arc<dyn DocumentStore>,
    renderer: Arc<dyn DocumentRenderer>,
}

impl DocumentService {
    pub fn new(
        apps: Arc<AppRegistry>,
        choices: Arc<ChoiceCache>,
        documents: Arc<dyn DocumentStore>,
        renderer: Arc<dyn DocumentRenderer>,
    ) -> Self {
        Self {
            apps,
            choices,
            documents,
            renderer,
        }
    }

    /// Create a document with the issuer behind `key`
    ///
    /// The choice must be enabled and writable. The query is validated
    /// against the issuer's query schema, the fetched context against
    /// its context schema; only then is anything persisted.
    pub async fn create(&self, key: &IssuerKey, query: RawPayload) -> Result<Document> {
        let choice = self
            .choices
            .get_choices(false, false)
            .await?
            .into_iter()
            .find(|choice| choice.key() == *key)
            .ok_or_else(|| RegistryError::ChoiceNotUsable(key.clone()))?;

        let issuer = load(&self.apps, &choice.app_name, &choice.issuer_identifier)?;
        let query = issuer.validate_query(&query)?;

        let fetched = issuer.fetch_context(&query).await?;
        let context = issuer.validate_context(&RawPayload::from(fetched))?;

        let mut document = Document::new(choice.id, query);
        document.context = Some(context);
        self.documents.insert(document.clone()).await?;

        tracing::info!(document = %document.id, issuer = %key, "Document created");
        Ok(document)
    }

    /// Render an existing document and record the render time
    pub async fn render(&self, id: &DocumentId) -> Result<Document> {
        let mut document = self
            .documents
            .get(id)
            .await?
            .ok_or_else(|| crate::error::StoreError::DocumentNotFound(id.clone()))?;

        let context = document
            .context
            .clone()
            .ok_or_else(|| RegistryError::MissingContext(id.clone()))?;

        self.renderer
            .render(&document, &context)
            .await
            .map_err(RegistryError::Render)?;

        document.mark_rendered(Utc::now());
        self.documents.update(&document).await?;
        Ok(document)
    }

    /// Forget a document's rendered file so the next render regenerates it
    pub async fn expire(&self, id: &DocumentId) -> Result<Document> {
        let mut document = self
            .documents
            .get(id)
            .await?
            .ok_or_else(|| crate::error::StoreError::DocumentNotFound(id.clone()))?;

        document.expire_render();
        self.documents.update(&document).await?;
        Ok(document)
    }
}
