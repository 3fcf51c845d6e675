//! Govspeak rendering with state-aware internal link rewriting.

use anyhow::{Context, Result, anyhow};
use kuchikiki::traits::TendrilSink;
use kuchikiki::{ElementData, NodeDataRef, NodeRef};
use tracing::{debug, info};

use super::converter::{Converter, Header};
use super::links::LinkResolver;
use super::urls;
use crate::components::state_link::{LinkBody, state_link};
use crate::context::LinkContext;
use crate::store::ContentStore;

/// Renders Govspeak to HTML and resolves links to admin pages.
///
/// Links pointing at the admin interface of the current host are looked up
/// in the content store. The public rendering rewrites them to the public
/// page of the target, or strips them when there is nothing to link to. The
/// admin rendering additionally annotates every such link with the editorial
/// state of its target.
pub struct GovspeakRenderer<'a, S> {
    converter: Converter<'a>,
    resolver: LinkResolver<'a, S>,
}

impl<'a, S: ContentStore> GovspeakRenderer<'a, S> {
    /// Creates renderer for a request.
    ///
    /// # Arguments
    ///
    /// * `context`: Host, router prefix and public host mapping of the request
    /// * `store`: Datastore used to resolve link targets
    pub fn new(context: &'a LinkContext, store: S) -> Self {
        Self {
            converter: Converter::new(),
            resolver: LinkResolver::new(context, store),
        }
    }

    /// Renders markup for the public site.
    ///
    /// Internal links to linkable documents are rewritten to their public
    /// URL. Any other internal link is replaced by its text.
    ///
    /// # Errors
    ///
    /// Returns error if the rewritten tree cannot be serialized
    pub fn to_html(&self, text: &str) -> Result<String> {
        let root = self.parse(text)?;
        let mut rewritten = 0;
        let mut stripped = 0;

        for (anchor, href) in self.internal_anchors(&root)? {
            match self
                .resolver
                .resolve(&href)
                .filter(|target| target.document.is_linkable())
            {
                Some(target) => {
                    let public_href = target.href(self.resolver.context());
                    debug!(%href, %public_href, "rewrote internal link");
                    anchor.attributes.borrow_mut().insert("href", public_href);
                    rewritten += 1;
                }
                None => {
                    debug!(%href, "stripped unresolved internal link");
                    let node = anchor.as_node();
                    node.insert_before(NodeRef::new_text(node.text_contents()));
                    node.detach();
                    stripped += 1;
                }
            }
        }

        info!(rewritten, stripped, "rendered govspeak");
        serialize(&root)
    }

    /// Renders markup for admin previews.
    ///
    /// Every internal link is wrapped in a `<state>_link` span followed by a
    /// superscript explanation of the target's editorial state. Links whose
    /// target is missing or has no remaining edition are marked `deleted`.
    ///
    /// # Errors
    ///
    /// Returns error if the annotated tree cannot be rebuilt or serialized
    pub fn to_admin_html(&self, text: &str) -> Result<String> {
        let root = self.parse(text)?;
        let context = self.resolver.context();
        let mut annotated = 0;

        for (anchor, href) in self.internal_anchors(&root)? {
            let target = self.resolver.resolve(&href);
            let node = anchor.as_node();

            let body = match target.as_ref().filter(|t| t.document.is_linkable()) {
                Some(target) => {
                    anchor
                        .attributes
                        .borrow_mut()
                        .insert("href", target.href(context));
                    LinkBody::Anchor(node.to_string())
                }
                None => LinkBody::Text(node.text_contents()),
            };

            // No edition left to explain reads as deleted, whatever the cause
            let explanation = target
                .as_ref()
                .and_then(|t| t.document.latest_edition())
                .map(|e| (e.state, urls::admin_edition_path(context, e)));
            debug!(
                %href,
                state = explanation.as_ref().map_or("deleted", |(s, _)| s.as_str()),
                "annotated internal link"
            );

            let markup = state_link(
                &body,
                explanation
                    .as_ref()
                    .map(|(state, path)| (*state, path.as_str())),
            );
            replace_with_fragment(node, &markup.into_string())?;
            annotated += 1;
        }

        info!(annotated, "rendered govspeak for admin");
        serialize(&root)
    }

    /// Returns the headings of the given level.
    pub fn headers(&self, text: &str, level: u8) -> Vec<Header> {
        self.converter.headers(text, level)
    }

    /// Converts markup and parses it into a tree.
    ///
    /// # Returns
    ///
    /// The `body` element holding the converted content
    fn parse(&self, text: &str) -> Result<NodeRef> {
        let html = self.converter.convert(text);
        let document = kuchikiki::parse_html().one(html);
        let body = document
            .select_first("body")
            .map_err(|()| anyhow!("Parsed markup has no body element"))?;
        Ok(body.as_node().clone())
    }

    /// Collects anchors pointing at the admin interface, with their hrefs.
    ///
    /// Anchors are collected before any rewriting so the tree can be mutated
    /// while walking the result.
    fn internal_anchors(&self, root: &NodeRef) -> Result<Vec<(NodeDataRef<ElementData>, String)>> {
        let anchors = root
            .select("a")
            .map_err(|()| anyhow!("Invalid anchor selector"))?;

        Ok(anchors
            .filter_map(|anchor| {
                let href = anchor.attributes.borrow().get("href").map(str::to_owned);
                if !self.resolver.is_internal(href.as_deref()) {
                    return None;
                }
                href.map(|href| (anchor, href))
            })
            .collect())
    }
}

/// Replaces `node` with the nodes parsed from an HTML fragment.
fn replace_with_fragment(node: &NodeRef, html: &str) -> Result<()> {
    let document = kuchikiki::parse_html().one(html);
    let body = document
        .select_first("body")
        .map_err(|()| anyhow!("Parsed fragment has no body element"))?;

    let children: Vec<NodeRef> = body.as_node().children().collect();
    for child in children {
        node.insert_before(child);
    }
    node.detach();

    Ok(())
}

/// Serializes the children of `root` to an HTML string.
///
/// Content that raw HTML closed out of the `govspeak` container is kept.
fn serialize(root: &NodeRef) -> Result<String> {
    let mut out = Vec::new();
    for child in root.children() {
        child
            .serialize(&mut out)
            .context("Failed to serialize rendered HTML")?;
    }
    String::from_utf8(out).context("Rendered HTML is not valid UTF8")
}
