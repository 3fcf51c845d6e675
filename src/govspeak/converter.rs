//! Govspeak to baseline HTML conversion.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options};

/// Class of the container wrapping converted content.
pub const CONTAINER_CLASS: &str = "govspeak";

/// Heading read from Govspeak source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub level: u8,
    pub text: String,
    pub id: String,
}

/// Converts Govspeak markup to HTML.
///
/// Govspeak is a Markdown dialect; conversion uses comrak with the GFM
/// extensions editors rely on (tables, strikethrough, autolinks, footnotes,
/// description lists) and passes raw HTML through.
pub struct Converter<'a> {
    options: Options<'a>,
}

impl<'a> Converter<'a> {
    /// Creates converter with Govspeak options.
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.footnotes = true;
        options.extension.description_lists = true;

        options.parse.smart = true;

        // Editors are trusted to embed HTML
        options.render.unsafe_ = true;

        Self { options }
    }

    /// Converts markup to HTML wrapped in the `govspeak` container.
    pub fn convert(&self, text: &str) -> String {
        let html = comrak::markdown_to_html(text, &self.options);
        format!("<div class=\"{}\">{}</div>", CONTAINER_CLASS, html)
    }

    /// Returns the headings at `level`, in document order.
    ///
    /// Heading ids are derived from the heading text so they match anchors
    /// generated for the rendered page.
    pub fn headers(&self, text: &str, level: u8) -> Vec<Header> {
        let arena = Arena::new();
        let root = comrak::parse_document(&arena, text, &self.options);

        root.descendants()
            .filter_map(|node| {
                let heading_level = match node.data.borrow().value {
                    NodeValue::Heading(ref heading) => heading.level,
                    _ => return None,
                };
                if heading_level != level {
                    return None;
                }

                let text = plain_text(node);
                Some(Header {
                    level: heading_level,
                    id: slugify(&text),
                    text,
                })
            })
            .collect()
    }
}

impl<'a> Default for Converter<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Concatenates the literal text below a node.
fn plain_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for descendant in node.descendants() {
        match descendant.data.borrow().value {
            NodeValue::Text(ref literal) => text.push_str(literal),
            NodeValue::Code(ref code) => text.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }
    text.trim().to_string()
}

/// Lowercase alphanumeric words joined by hyphens.
fn slugify(text: &str) -> String {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
