//! Page identifiers derived from URLs.

use std::path::{Path, PathBuf};

/// Extension of per-page output files.
pub const PAGE_EXTENSION: &str = "txt";

/// Filesystem- and header-safe name for one page.
///
/// The identifier is the URL with a known prefix removed. A URL that does not
/// start with the prefix keeps its full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageId {
    suffix: String,
}

impl PageId {
    /// Strips `prefix` from `url`.
    pub fn from_url(url: &str, prefix: &str) -> Self {
        let suffix = url.strip_prefix(prefix).unwrap_or(url);
        Self { suffix: suffix.to_string() }
    }

    /// The identifier with path separators replaced by underscores.
    pub fn file_stem(&self) -> String {
        self.suffix.replace('/', "_")
    }

    /// The identifier with path separators replaced by spaces.
    pub fn section_title(&self) -> String {
        self.suffix.replace('/', " ")
    }

    /// `<dir>/<file_stem>.txt`
    pub fn file_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.{}", self.file_stem(), PAGE_EXTENSION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const PREFIX: &str = "https://www.gov.uk/guidance/the-highway-code/";

    #[rstest]
    #[case("https://www.gov.uk/guidance/the-highway-code/introduction", "introduction", "introduction")]
    #[case(
        "https://www.gov.uk/guidance/the-highway-code/annex/signals/arm",
        "annex_signals_arm",
        "annex signals arm"
    )]
    #[case(
        "https://www.gov.uk/guidance/the-highway-code/motorways-253-to-274",
        "motorways-253-to-274",
        "motorways-253-to-274"
    )]
    fn test_identifier_derivation(#[case] url: &str, #[case] stem: &str, #[case] title: &str) {
        let id = PageId::from_url(url, PREFIX);
        assert_eq!(id.file_stem(), stem);
        assert_eq!(id.section_title(), title);
    }

    #[test]
    fn test_url_without_prefix_keeps_whole_url() {
        let id = PageId::from_url("https://example.com/a/b", PREFIX);
        assert_eq!(id.file_stem(), "https:__example.com_a_b");
        assert_eq!(id.section_title(), "https:  example.com a b");
    }

    #[test]
    fn test_file_path() {
        let id = PageId::from_url("https://www.gov.uk/guidance/the-highway-code/rules/cyclists", PREFIX);
        assert_eq!(id.file_path(Path::new("pages")), PathBuf::from("pages/rules_cyclists.txt"));
    }
}
