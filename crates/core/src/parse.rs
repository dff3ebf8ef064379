//! HTML parsing and DOM queries.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! fetched pages and navigating them with CSS selectors.
//!
//! # Example
//!
//! ```rust
//! use pagetext_core::parse::Document;
//!
//! let html = r#"<div class="govspeak"><h2>Title</h2><p>Body</p></div>"#;
//! let doc = Document::parse(html).unwrap();
//! let blocks = doc.select("div.govspeak").unwrap();
//! assert_eq!(blocks.len(), 1);
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::{PagetextError, Result};

/// Represents a parsed HTML document.
///
/// The tree is never mutated after parsing; [`Element`]s borrow from it.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// html5ever recovers from malformed markup, so this never fails on
    /// content; the `Result` keeps the signature aligned with [`Document::from_bytes`].
    pub fn parse(html: &str) -> Result<Self> {
        Ok(Self { html: Html::parse_document(html) })
    }

    /// Parses a raw response body.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn from_bytes(body: &[u8]) -> Result<Self> {
        Self::parse(&String::from_utf8_lossy(body))
    }

    /// Selects elements using a CSS selector, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`PagetextError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).map(Element::new).collect())
    }

    /// Gets the title of the document.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }
}

/// A wrapper around scraper's ElementRef.
///
/// Element is a reference into a [`Document`], not a copy of the subtree.
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all descendant text nodes.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the lowercase tag name of this element.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Whether `other` points at the same node of the same tree.
    pub fn same_node(&self, other: &Element<'_>) -> bool {
        self.element.id() == other.element.id()
    }

    /// Direct element children, in document order.
    pub fn children(self) -> impl Iterator<Item = Element<'a>> {
        self.element.children().filter_map(ElementRef::wrap).map(Element::new)
    }

    /// Selects descendant elements (not the element itself) using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`PagetextError::HtmlParseError`] if the selector is invalid.
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'a>>> {
        let sel = parse_selector(selector)?;
        Ok(self.element.select(&sel).map(Element::new).collect())
    }
}

pub(crate) fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| PagetextError::HtmlParseError(format!("Invalid selector: {}", e)))
}
