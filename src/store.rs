//! Read-only access to documents and supporting pages.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::model::{Document, RecordId, SupportingPage};

/// Point lookups against the content datastore.
///
/// Missing records are reported as `None`; lookups never fail.
pub trait ContentStore {
    /// Finds a document visible under the default scope.
    fn find_document(&self, id: RecordId) -> Option<Document>;

    /// Finds a document, including hidden ones.
    fn find_document_including_hidden(&self, id: RecordId) -> Option<Document>;

    /// Finds a supporting page.
    fn find_supporting_page(&self, id: RecordId) -> Option<SupportingPage>;

    /// Follows a supporting page back to its owning document.
    fn supporting_page_document(&self, page: &SupportingPage) -> Option<Document> {
        self.find_document(page.document_id)
    }
}

impl<S: ContentStore + ?Sized> ContentStore for &S {
    fn find_document(&self, id: RecordId) -> Option<Document> {
        (**self).find_document(id)
    }

    fn find_document_including_hidden(&self, id: RecordId) -> Option<Document> {
        (**self).find_document_including_hidden(id)
    }

    fn find_supporting_page(&self, id: RecordId) -> Option<SupportingPage> {
        (**self).find_supporting_page(id)
    }

    fn supporting_page_document(&self, page: &SupportingPage) -> Option<Document> {
        (**self).supporting_page_document(page)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Fixture {
    documents: Vec<Document>,
    supporting_pages: Vec<SupportingPage>,
}

/// In-memory store, built in code or loaded from a JSON fixture.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: HashMap<RecordId, Document>,
    supporting_pages: HashMap<RecordId, SupportingPage>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a document.
    pub fn insert_document(&mut self, document: Document) -> &mut Self {
        self.documents.insert(document.id, document);
        self
    }

    /// Adds or replaces a supporting page.
    pub fn insert_supporting_page(&mut self, page: SupportingPage) -> &mut Self {
        self.supporting_pages.insert(page.id, page);
        self
    }

    /// Parses a JSON fixture with `documents` and `supporting_pages` arrays.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON is malformed or a record field has the
    /// wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        let fixture: Fixture = serde_json::from_str(json).context("Failed to parse store fixture")?;

        let mut store = Self::new();
        for document in fixture.documents {
            store.insert_document(document);
        }
        for page in fixture.supporting_pages {
            store.insert_supporting_page(page);
        }

        tracing::debug!(
            documents = store.documents.len(),
            supporting_pages = store.supporting_pages.len(),
            "loaded store fixture"
        );

        Ok(store)
    }

    /// Reads a JSON fixture file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read store fixture: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid store fixture: {}", path.display()))
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty() && self.supporting_pages.is_empty()
    }
}

impl ContentStore for MemoryStore {
    fn find_document(&self, id: RecordId) -> Option<Document> {
        self.documents.get(&id).filter(|d| !d.hidden).cloned()
    }

    fn find_document_including_hidden(&self, id: RecordId) -> Option<Document> {
        self.documents.get(&id).cloned()
    }

    fn find_supporting_page(&self, id: RecordId) -> Option<SupportingPage> {
        self.supporting_pages.get(&id).cloned()
    }
}
