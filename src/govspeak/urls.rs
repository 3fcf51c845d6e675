//! URL construction for rewritten links.

use crate::context::LinkContext;
use crate::model::{Document, DocumentKind, Edition, SupportingPage};

/// Returns the canonical public path of a document or supporting page.
///
/// Supporting pages always live below the policy route of their document.
pub fn public_path(
    context: &LinkContext,
    document: &Document,
    supporting_page: Option<&SupportingPage>,
) -> String {
    match supporting_page {
        Some(page) => format!(
            "{}/{}/{}/supporting-pages/{}",
            context.router_prefix(),
            DocumentKind::Policy.route_segment(),
            document.slug,
            page.slug
        ),
        None => format!(
            "{}/{}/{}",
            context.router_prefix(),
            document.kind.route_segment(),
            document.slug
        ),
    }
}

/// Returns the href an internal link should be rewritten to.
///
/// Absolute on the public host when one is configured for the request host,
/// otherwise a path on the current host.
pub fn rewritten_href(
    context: &LinkContext,
    document: &Document,
    supporting_page: Option<&SupportingPage>,
) -> String {
    let path = public_path(context, document, supporting_page);
    match context.public_host_for(context.host()) {
        Some(host) => format!("https://{}{}", host, path),
        None => path,
    }
}

/// Returns the admin page of an edition.
pub fn admin_edition_path(context: &LinkContext, edition: &Edition) -> String {
    format!("{}/admin/editions/{}", context.router_prefix(), edition.id)
}
