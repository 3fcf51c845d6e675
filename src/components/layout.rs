//! Preview page layout component

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Minimal styles for state annotations in admin previews.
const PREVIEW_CSS: &str = "\
.deleted_link del { color: #b10e1e; }
.draft_link, .submitted_link, .rejected_link, .scheduled_link { background: #fff7bf; }
sup.explanation { font-size: 0.7em; }
";

/// Wraps rendered Govspeak in a standalone HTML page
///
/// Used when previewing a render outside the admin application. The page
/// declares UTF-8, carries the annotation styles inline and places the
/// rendered fragment unescaped in the body.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `rendered`: HTML produced by the renderer
///
/// # Returns
///
/// Complete HTML document
pub fn preview_page(title: &str, rendered: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Govspeak preview" }
                style { (PreEscaped(PREVIEW_CSS)) }
            }
            body {
                main class="preview" {
                    (PreEscaped(rendered))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_page_embeds_fragment() {
        // Arrange
        let fragment = "<div class=\"govspeak\"><p>Hello</p></div>";

        // Act
        let html = preview_page("Guide & notes", fragment).into_string();

        // Assert
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Guide &amp; notes - Govspeak preview</title>"));
        assert!(html.contains(fragment), "Fragment should not be escaped");
    }
}
