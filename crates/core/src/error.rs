//! Error types for pagetext operations.
//!
//! This module defines the main error type [`PagetextError`] which represents
//! every failure a page can hit on its way from URL to text file: transport
//! and status failures while fetching, parse failures, pages with no
//! recognised content container, and file writes.
//!
//! # Example
//!
//! ```rust
//! use pagetext_core::{PagetextError, Result};
//!
//! fn first_block(blocks: &[String]) -> Result<&String> {
//!     blocks.first().ok_or(PagetextError::NoContent)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the scraping pipeline.
///
/// Every variant except a failed write of the combined document is local to
/// one URL: the run coordinator reports it and moves on to the next page.
///
/// # Example
///
/// ```rust
/// use pagetext_core::PagetextError;
///
/// let err = PagetextError::UnexpectedStatus { status: 404, url: "https://example.com/a".into() };
/// assert!(err.to_string().contains("404"));
/// ```
#[derive(Error, Debug)]
pub enum PagetextError {
    /// Transport errors from reqwest.
    ///
    /// Covers DNS failures, refused connections, TLS problems and bodies
    /// that could not be read to the end.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Only reachable when a timeout was configured explicitly; the transport
    /// default applies otherwise.
    #[error("request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The server answered with something other than `200 OK`.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// Invalid URL provided.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors.
    ///
    /// Returned for bodies that cannot be decoded as HTML text and for
    /// container selectors that are not valid CSS.
    #[error("html parse error: {0}")]
    HtmlParseError(String),

    /// None of the container selectors matched anything in the page.
    #[error("could not find content container")]
    NoContent,

    /// File write errors, for both per-page files and the combined document.
    #[error("failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid run configuration, such as a malformed URL list file.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl PagetextError {
    /// Builds a [`PagetextError::WriteError`] for `path`.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PagetextError::WriteError { path: path.into(), source }
    }

    /// Whether the error belongs to the transport class (connection, body read, timeout).
    pub fn is_transport(&self) -> bool {
        matches!(self, PagetextError::Transport(_) | PagetextError::Timeout { .. })
    }
}

/// Result type alias for PagetextError.
pub type Result<T> = std::result::Result<T, PagetextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_display() {
        let err = PagetextError::UnexpectedStatus { status: 404, url: "https://example.com/x".to_string() };
        let msg = err.to_string();
        assert!(msg.contains("unexpected status 404"));
        assert!(msg.contains("https://example.com/x"));
    }

    #[test]
    fn test_write_error_display() {
        let err = PagetextError::write(
            "pages/intro.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("pages/intro.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_timeout_is_transport() {
        assert!(PagetextError::Timeout { timeout: 30 }.is_transport());
        assert!(!PagetextError::NoContent.is_transport());
    }

    #[test]
    fn test_no_content_message() {
        assert_eq!(PagetextError::NoContent.to_string(), "could not find content container");
    }
}
