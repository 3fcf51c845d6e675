//! Editorial state annotation for internal links

use maud::{Markup, PreEscaped, html};

use crate::model::EditionState;

/// Visible part of an annotated link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkBody {
    /// Serialized anchor element, already rewritten.
    Anchor(String),
    /// Plain text left after dropping the link.
    Text(String),
}

/// Renders a link wrapped with its editorial state
///
/// Produces `<span class="STATE_link">BODY <sup class="explanation">(…)</sup></span>`.
/// Without an edition the state is `deleted`, the body is struck through and
/// the explanation is plain text. Otherwise the explanation links to the
/// edition's admin page, labelled with its state.
///
/// # Arguments
///
/// * `body`: Anchor markup or plain text to display
/// * `edition`: Latest edition state and its admin path, if any
///
/// # Returns
///
/// Annotation markup replacing the original anchor
pub fn state_link(body: &LinkBody, edition: Option<(EditionState, &str)>) -> Markup {
    let content = html! {
        @match body {
            LinkBody::Anchor(anchor) => (PreEscaped(anchor)),
            LinkBody::Text(text) => (text),
        }
    };

    match edition {
        Some((state, admin_path)) => html! {
            span class=(format!("{}_link", state.as_str())) {
                (content) " "
                sup class="explanation" {
                    "(" a href=(admin_path) { (state.as_str()) } ")"
                }
            }
        },
        None => html! {
            span class="deleted_link" {
                del { (content) } " "
                sup class="explanation" { "(deleted)" }
            }
        },
    }
}
