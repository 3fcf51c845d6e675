//! Shared test fixtures for integration tests.
//!
//! Provides a content store covering every link resolution outcome and the
//! request contexts used across test files.

#![allow(dead_code)]

use govspeak_render::{
    Document, DocumentKind, EditionState, LinkContext, MemoryStore, SupportingPage,
};

pub const ADMIN_HOST: &str = "admin.example.gov";
pub const PUBLIC_HOST: &str = "www.example.gov";

/// Builds the fixture store.
///
/// * 42: published publication
/// * 43: draft news article, never published
/// * 44: hidden speech whose only edition was deleted
/// * 45: published policy with a newer draft, owning supporting page 99
pub fn fixture_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store
        .insert_document(
            Document::new(42, DocumentKind::Publication, "annual-report")
                .with_edition(420, EditionState::Published),
        )
        .insert_document(
            Document::new(43, DocumentKind::NewsArticle, "minister-visit")
                .with_edition(430, EditionState::Draft),
        )
        .insert_document(
            Document::new(44, DocumentKind::Speech, "withdrawn-speech")
                .with_edition(440, EditionState::Deleted)
                .hidden(),
        )
        .insert_document(
            Document::new(45, DocumentKind::Policy, "school-funding")
                .with_edition(450, EditionState::Published)
                .with_edition(451, EditionState::Draft),
        )
        .insert_supporting_page(SupportingPage::new(99, 45, "eligibility"));
    store
}

/// JSON form of the fixture store, as read by the binary.
pub const FIXTURE_JSON: &str = r#"{
  "documents": [
    {"id": 42, "kind": "publication", "slug": "annual-report",
     "editions": [{"id": 420, "state": "published"}]},
    {"id": 43, "kind": "news_article", "slug": "minister-visit",
     "editions": [{"id": 430, "state": "draft"}]}
  ],
  "supporting_pages": []
}"#;

/// Admin request without a public host mapping.
pub fn admin_context() -> LinkContext {
    LinkContext::new(ADMIN_HOST)
}

/// Admin request whose content is published on the public host.
pub fn public_host_context() -> LinkContext {
    LinkContext::new(ADMIN_HOST)
        .with_router_prefix("/government")
        .with_public_host(ADMIN_HOST, PUBLIC_HOST)
}
