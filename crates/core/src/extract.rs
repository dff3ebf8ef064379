use crate::locate::{DEFAULT_CONTAINER_SELECTORS, locate_blocks};
use crate::parse::Document;
use crate::render::render_block;
use crate::Result;

/// Configuration for content extraction
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Container selectors, tried in order
    pub selectors: Vec<String>,
    /// Drop containers already matched by an earlier selector
    pub dedupe_blocks: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            selectors: DEFAULT_CONTAINER_SELECTORS.iter().map(|s| s.to_string()).collect(),
            dedupe_blocks: false,
        }
    }
}

/// The text of one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// Rendered text, fragments in block order then document order
    pub text: String,
    /// Number of content blocks that were rendered
    pub block_count: usize,
}

/// Renders every located block of `doc` into one string.
///
/// There is no separator between blocks; the trailing blank line of the last
/// fragment of a block is the only spacing.
pub fn extract_page_text(doc: &Document, config: &ExtractConfig) -> Result<PageText> {
    let blocks = locate_blocks(doc, &config.selectors, config.dedupe_blocks)?;

    let mut text = String::new();
    for block in &blocks {
        render_block(block, &mut text)?;
    }

    Ok(PageText { text, block_count: blocks.len() })
}

/// Parses a raw body and extracts its page text.
pub fn extract_from_bytes(body: &[u8], config: &ExtractConfig) -> Result<PageText> {
    let doc = Document::from_bytes(body)?;
    extract_page_text(&doc, config)
}
