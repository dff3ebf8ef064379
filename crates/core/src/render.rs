//! Element-to-text rendering.
//!
//! Only six tags produce output: `h1`–`h3`, `p`, `ul` and `ol`. They are
//! found at any depth inside a content block and rendered in document order.
//! Everything else is invisible, including inline formatting.

use crate::Result;
use crate::parse::Element;

/// Tags that contribute fragments.
pub const CONTENT_TAGS: &str = "h1, h2, h3, p, ul, ol";

/// Marker placed in front of every list item.
pub const BULLET: &str = "• ";

/// Replaces every newline with a space, then trims surrounding whitespace.
///
/// ```rust
/// use pagetext_core::render::normalize_text;
///
/// assert_eq!(normalize_text("  Hello\nworld \n"), "Hello world");
/// ```
pub fn normalize_text(text: &str) -> String {
    text.replace('\n', " ").trim().to_string()
}

/// Renders one heading, paragraph or list element into `out`.
///
/// Elements of any other kind leave `out` untouched.
pub fn render_element(element: &Element<'_>, out: &mut String) {
    match element.tag_name().as_str() {
        "h1" | "h2" | "h3" => {
            let title = normalize_text(&element.text());
            out.push_str(&title);
            out.push('\n');
            out.push_str(&"-".repeat(title.chars().count()));
            out.push_str("\n\n");
        }
        "p" => {
            let text = normalize_text(&element.text());
            if !text.is_empty() {
                out.push_str(&text);
                out.push_str("\n\n");
            }
        }
        "ul" | "ol" => {
            for item in element.children().filter(|c| c.tag_name() == "li") {
                out.push_str(BULLET);
                out.push_str(&normalize_text(&item.text()));
                out.push('\n');
            }
            out.push('\n');
        }
        _ => {}
    }
}

/// Renders every content element inside `block`, appending to `out`.
pub fn render_block(block: &Element<'_>, out: &mut String) -> Result<()> {
    for element in block.select(CONTENT_TAGS)? {
        render_element(&element, out);
    }
    Ok(())
}
