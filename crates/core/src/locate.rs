//! Content container discovery.
//!
//! Pages in the target corpus wrap their article body in one of a few
//! equivalent containers depending on which template rendered them. Each
//! selector is an independent pass over the document; results are kept in
//! selector order and then document order.

use crate::parse::{Document, Element, parse_selector};
use crate::{PagetextError, Result};

/// Container selectors, in priority order.
pub const DEFAULT_CONTAINER_SELECTORS: [&str; 4] = [
    "article.gem-c-govspeak",
    "div.govuk-govspeak",
    "div.govspeak",
    ".gem-c-govspeak",
];

/// Collects every element matched by any of `selectors`.
///
/// An element matched by an earlier selector can be matched again by a later
/// one and then appears twice. Pass `dedupe = true` to keep only the first
/// occurrence of each node.
///
/// # Errors
///
/// - [`PagetextError::HtmlParseError`] if a selector is not valid CSS.
/// - [`PagetextError::NoContent`] if nothing matched.
pub fn locate_blocks<'a, S: AsRef<str>>(doc: &'a Document, selectors: &[S], dedupe: bool) -> Result<Vec<Element<'a>>> {
    let mut blocks: Vec<Element<'a>> = Vec::new();

    for selector in selectors {
        for element in doc.select(selector.as_ref())? {
            if dedupe && blocks.iter().any(|seen| seen.same_node(&element)) {
                continue;
            }
            blocks.push(element);
        }
    }

    if blocks.is_empty() {
        return Err(PagetextError::NoContent);
    }

    tracing::debug!(blocks = blocks.len(), "located content blocks");
    Ok(blocks)
}

/// Checks that every selector is valid CSS before any page is fetched.
pub fn validate_selectors<S: AsRef<str>>(selectors: &[S]) -> Result<()> {
    if selectors.is_empty() {
        return Err(PagetextError::ConfigError("at least one container selector is required".to_string()));
    }
    for selector in selectors {
        parse_selector(selector.as_ref())?;
    }
    Ok(())
}
