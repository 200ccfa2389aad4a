//! The document entity
//!
//! A document references the issuer choice it was created with, the
//! validated query it was created from, and the validated context used
//! to render it. The issuer reference is optional: if a choice is ever
//! deleted by hand, documents keep their data and lose only the link.

use crate::{ChoiceId, DocumentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One rendered (or renderable) document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier
    pub id: DocumentId,

    /// The issuer choice this document was created with
    pub issuer: Option<ChoiceId>,

    /// Validated query parameters the context was fetched from
    pub context_query: Value,

    /// Validated context used to render the document's template
    pub context: Option<Value>,

    /// Metadata for the rendered document, in JSON form
    pub metadata: Value,

    /// When the document was last rendered to PDF, if ever
    pub rendered_to_pdf_at: Option<DateTime<Utc>>,

    /// Created timestamp
    pub created_at: DateTime<Utc>,

    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Create a new document from a validated context query
    pub fn new(issuer: ChoiceId, context_query: Value) -> Self {
        let now = Utc::now();
        Self {
            id: DocumentId::generate(),
            issuer: Some(issuer),
            context_query,
            context: None,
            metadata: Value::Object(Map::new()),
            rendered_to_pdf_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a mutation
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Record a successful render
    pub fn mark_rendered(&mut self, at: DateTime<Utc>) {
        self.rendered_to_pdf_at = Some(at);
        self.touch();
    }

    /// Forget any rendered file, forcing the next render to regenerate it
    pub fn expire_render(&mut self) {
        if self.rendered_to_pdf_at.is_some() {
            self.rendered_to_pdf_at = None;
            self.touch();
        }
    }

    /// Metadata flattened to a single level of `_`-joined keys
    pub fn flat_metadata(&self) -> Map<String, Value> {
        flatten_json(&self.metadata, "_")
    }
}

/// Flatten nested JSON into a single-level map with delimiter-joined keys
///
/// Array elements are keyed by their index. Scalars at the top level get
/// an empty key.
pub fn flatten_json(input: &Value, delimiter: &str) -> Map<String, Value> {
    let mut output = Map::new();
    flatten_into(input, String::new(), delimiter, &mut output);
    output
}

fn flatten_into(element: &Value, name: String, delimiter: &str, output: &mut Map<String, Value>) {
    match element {
        Value::Object(map) => {
            for (key, value) in map {
                flatten_into(value, format!("{name}{key}{delimiter}"), delimiter, output);
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                flatten_into(value, format!("{name}{index}{delimiter}"), delimiter, output);
            }
        }
        scalar => {
            let key = name
                .strip_suffix(delimiter)
                .map(str::to_owned)
                .unwrap_or(name);
            output.insert(key, scalar.clone());
        }
    }
}
