//! Classification and resolution of internal admin links.

use tracing::debug;
use url::Url;

use super::urls;
use crate::context::LinkContext;
use crate::model::{Document, RecordId, SupportingPage};
use crate::store::ContentStore;

const SUPPORTING_PAGES_SEGMENT: &str = "supporting-pages";

/// Record an internal link points at.
///
/// Supporting pages are always paired with their owning document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub document: Document,
    pub supporting_page: Option<SupportingPage>,
}

impl LinkTarget {
    /// Canonical href for this target under the given request context.
    pub fn href(&self, context: &LinkContext) -> String {
        urls::rewritten_href(context, &self.document, self.supporting_page.as_ref())
    }
}

/// Resolves links pointing back at the admin interface to stored records.
///
/// Links to other hosts, public pages and non-HTTP schemes are left alone.
pub struct LinkResolver<'a, S> {
    context: &'a LinkContext,
    store: S,
}

impl<'a, S: ContentStore> LinkResolver<'a, S> {
    /// Creates resolver for the given request context and store.
    ///
    /// # Arguments
    ///
    /// * `context`: Host and router prefix of the current request
    /// * `store`: Datastore used for document and supporting page lookups
    pub fn new(context: &'a LinkContext, store: S) -> Self {
        Self { context, store }
    }

    pub fn context(&self) -> &LinkContext {
        self.context
    }

    /// Returns whether `href` points at this host's admin interface.
    ///
    /// The link host and its leading path segments must match the request
    /// host followed by the router prefix segments and `admin`. Missing,
    /// relative, non-HTTP and unparsable hrefs are never internal.
    pub fn is_internal(&self, href: Option<&str>) -> bool {
        let Some(href) = href else {
            return false;
        };
        let Ok(url) = Url::parse(href) else {
            return false;
        };
        if !matches!(url.scheme(), "http" | "https") {
            return false;
        }
        let Some(host) = url.host_str() else {
            return false;
        };
        if !host.eq_ignore_ascii_case(self.context.host()) {
            return false;
        }

        let root = self.context.admin_root_segments();
        let leading: Vec<&str> = url.path().split('/').skip(1).take(root.len()).collect();

        leading == root
    }

    /// Looks up the record an internal href points at.
    ///
    /// The final path segment is the record identifier. Paths with a
    /// `supporting-pages` segment resolve a supporting page and its owning
    /// document; everything else resolves a document, hidden ones included.
    ///
    /// # Returns
    ///
    /// The resolved target, or `None` when nothing matches
    pub fn resolve(&self, href: &str) -> Option<LinkTarget> {
        let url = Url::parse(href).ok()?;
        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.collect())
            .unwrap_or_default();
        let (last, parents) = segments.split_last()?;

        let Ok(id) = last.parse::<RecordId>() else {
            debug!(href, segment = *last, "link identifier is not a record id");
            return None;
        };

        let target = if parents.contains(&SUPPORTING_PAGES_SEGMENT) {
            self.store.find_supporting_page(id).and_then(|page| {
                self.store
                    .supporting_page_document(&page)
                    .map(|document| LinkTarget {
                        document,
                        supporting_page: Some(page),
                    })
            })
        } else {
            self.store
                .find_document_including_hidden(id)
                .map(|document| LinkTarget {
                    document,
                    supporting_page: None,
                })
        };

        if target.is_none() {
            debug!(href, %id, "internal link target not found");
        }

        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentKind, EditionState};
    use crate::store::MemoryStore;

    fn store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store
            .insert_document(
                Document::new(42, DocumentKind::Policy, "tax-credits")
                    .with_edition(420, EditionState::Published),
            )
            .insert_document(
                Document::new(43, DocumentKind::Speech, "removed")
                    .with_edition(430, EditionState::Deleted)
                    .hidden(),
            )
            .insert_supporting_page(SupportingPage::new(99, 42, "eligibility"))
            .insert_supporting_page(SupportingPage::new(98, 43, "orphaned"));
        store
    }

    #[test]
    fn test_internal_link_without_prefix() {
        // Arrange
        let context = LinkContext::new("admin.example.gov");
        let resolver = LinkResolver::new(&context, MemoryStore::new());

        // Act & Assert
        assert!(resolver.is_internal(Some("https://admin.example.gov/admin/documents/42")));
        assert!(resolver.is_internal(Some("http://admin.example.gov/admin/documents/42")));
        assert!(resolver.is_internal(Some("https://ADMIN.example.gov/admin")));
    }

    #[test]
    fn test_internal_link_with_router_prefix() {
        // Arrange
        let context = LinkContext::new("admin.example.gov").with_router_prefix("/government");
        let resolver = LinkResolver::new(&context, MemoryStore::new());

        // Act & Assert
        assert!(resolver.is_internal(Some(
            "https://admin.example.gov/government/admin/documents/42"
        )));
        assert!(
            !resolver.is_internal(Some("https://admin.example.gov/admin/documents/42")),
            "Missing router prefix should not match"
        );
        assert!(
            !resolver.is_internal(Some("https://admin.example.gov/government/documents/42")),
            "Public route should not match"
        );
    }

    #[test]
    fn test_external_links_are_not_internal() {
        // Arrange
        let context = LinkContext::new("admin.example.gov");
        let resolver = LinkResolver::new(&context, MemoryStore::new());

        // Act & Assert
        assert!(!resolver.is_internal(Some("https://www.example.gov/admin/documents/42")));
        assert!(!resolver.is_internal(Some("https://admin.example.gov/policies/tax")));
        assert!(!resolver.is_internal(Some("https://admin.example.gov")));
    }

    #[test]
    fn test_non_http_and_malformed_links_are_not_internal() {
        // Arrange
        let context = LinkContext::new("admin.example.gov");
        let resolver = LinkResolver::new(&context, MemoryStore::new());

        // Act & Assert
        assert!(!resolver.is_internal(None));
        assert!(!resolver.is_internal(Some("")));
        assert!(!resolver.is_internal(Some("/admin/documents/42")));
        assert!(!resolver.is_internal(Some("#admin")));
        assert!(!resolver.is_internal(Some("mailto:admin@admin.example.gov")));
        assert!(!resolver.is_internal(Some("ftp://admin.example.gov/admin/documents/42")));
        assert!(!resolver.is_internal(Some("https://exa mple.gov/admin")));
        assert!(!resolver.is_internal(Some("http://[::1/admin")));
    }

    #[test]
    fn test_resolve_document() {
        // Arrange
        let context = LinkContext::new("admin.example.gov");
        let resolver = LinkResolver::new(&context, store());

        // Act
        let target = resolver
            .resolve("https://admin.example.gov/admin/documents/42")
            .expect("Should resolve document");

        // Assert
        assert_eq!(target.document.slug, "tax-credits");
        assert!(target.supporting_page.is_none());
        assert_eq!(target.href(&context), "/policies/tax-credits");
    }

    #[test]
    fn test_resolve_hidden_document() {
        // Arrange
        let context = LinkContext::new("admin.example.gov");
        let resolver = LinkResolver::new(&context, store());

        // Act
        let target = resolver.resolve("https://admin.example.gov/admin/speeches/43");

        // Assert
        let target = target.expect("Hidden documents should resolve");
        assert!(target.document.latest_edition().is_none());
    }

    #[test]
    fn test_resolve_supporting_page() {
        // Arrange
        let context = LinkContext::new("admin.example.gov");
        let resolver = LinkResolver::new(&context, store());

        // Act
        let target = resolver
            .resolve("https://admin.example.gov/admin/documents/42/supporting-pages/99")
            .expect("Should resolve supporting page");

        // Assert
        assert_eq!(target.document.id, RecordId::new(42));
        assert_eq!(
            target.supporting_page.map(|p| p.slug),
            Some("eligibility".to_string())
        );
    }

    #[test]
    fn test_resolve_supporting_page_id_is_not_a_document_id() {
        // Arrange
        let context = LinkContext::new("admin.example.gov");
        let resolver = LinkResolver::new(&context, store());

        // Act
        let target = resolver.resolve("https://admin.example.gov/admin/supporting-pages/42");

        // Assert
        assert!(
            target.is_none(),
            "Identifier should be looked up as a supporting page"
        );
    }

    #[test]
    fn test_resolve_supporting_page_with_hidden_owner() {
        // Arrange
        let context = LinkContext::new("admin.example.gov");
        let resolver = LinkResolver::new(&context, store());

        // Act
        let target = resolver.resolve("https://admin.example.gov/admin/supporting-pages/98");

        // Assert
        assert!(target.is_none());
    }

    #[test]
    fn test_resolve_slugged_identifier_is_not_found() {
        // Arrange
        let context = LinkContext::new("admin.example.gov");
        let resolver = LinkResolver::new(&context, store());

        // Act
        let target = resolver.resolve("https://admin.example.gov/admin/documents/42-tax-credits");

        // Assert
        assert!(
            target.is_none(),
            "Only whole decimal identifiers should resolve, not a leading number"
        );
    }

    #[test]
    fn test_resolve_missing_records() {
        // Arrange
        let context = LinkContext::new("admin.example.gov");
        let resolver = LinkResolver::new(&context, store());

        // Act & Assert
        assert!(resolver.resolve("https://admin.example.gov/admin/documents/7").is_none());
        assert!(
            resolver
                .resolve("https://admin.example.gov/admin/supporting-pages/7")
                .is_none()
        );
        assert!(
            resolver
                .resolve("https://admin.example.gov/admin/documents/new")
                .is_none()
        );
        assert!(resolver.resolve("https://admin.example.gov/admin/documents/42/").is_none());
        assert!(resolver.resolve("not a url").is_none());
    }
}
