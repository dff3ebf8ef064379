//! Run configuration.
//!
//! [`RunConfig`] bundles everything a scraping run needs: the URL list, the
//! prefix stripped from URLs to name pages, output locations, the combined
//! document banner, and the fetch and extraction settings.
//!
//! # Example
//!
//! ```rust
//! use pagetext_core::RunConfig;
//!
//! let config = RunConfig::builder()
//!     .urls(vec!["https://example.com/docs/intro".to_string()])
//!     .prefix("https://example.com/docs/")
//!     .output_dir("out/pages")
//!     .combined_path("out/full.txt")
//!     .build();
//! assert_eq!(config.urls.len(), 1);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::extract::ExtractConfig;
use crate::fetch::FetchConfig;
use crate::{PagetextError, Result};

/// Prefix removed from every URL to build page identifiers.
pub const DEFAULT_PREFIX: &str = "https://www.gov.uk/guidance/the-highway-code/";

/// Directory receiving one text file per page.
pub const DEFAULT_OUTPUT_DIR: &str = "pages";

/// Path of the combined document.
pub const DEFAULT_COMBINED_PATH: &str = "highway_code_full.txt";

/// Header written at the top of the combined document.
pub const DEFAULT_BANNER: &str = "THE HIGHWAY CODE — FULL TEXT\n=============================\n\n";

/// Builds a two-line banner: `title`, then `=` repeated to the title's width.
///
/// ```rust
/// assert_eq!(pagetext_core::config::make_banner("DOCS"), "DOCS\n====\n\n");
/// ```
pub fn make_banner(title: &str) -> String {
    format!("{}\n{}\n\n", title, "=".repeat(title.chars().count()))
}

/// Pages scraped when no URL list is supplied.
pub const DEFAULT_URLS: [&str; 15] = [
    "https://www.gov.uk/guidance/the-highway-code/introduction",
    "https://www.gov.uk/guidance/the-highway-code/rules-for-pedestrians-1-to-35",
    "https://www.gov.uk/guidance/the-highway-code/rules-for-users-of-powered-wheelchairs-and-mobility-scooters-36-to-46",
    "https://www.gov.uk/guidance/the-highway-code/rules-about-animals-47-to-58",
    "https://www.gov.uk/guidance/the-highway-code/rules-for-cyclists-59-to-82",
    "https://www.gov.uk/guidance/the-highway-code/rules-for-motorcyclists-83-to-88",
    "https://www.gov.uk/guidance/the-highway-code/rules-for-drivers-and-motorcyclists-89-to-102",
    "https://www.gov.uk/guidance/the-highway-code/general-rules-techniques-and-advice-for-all-drivers-and-riders-103-to-158",
    "https://www.gov.uk/guidance/the-highway-code/using-the-road-159-to-203",
    "https://www.gov.uk/guidance/the-highway-code/road-users-requiring-extra-care-204-to-225",
    "https://www.gov.uk/guidance/the-highway-code/driving-in-adverse-weather-conditions-226-to-237",
    "https://www.gov.uk/guidance/the-highway-code/waiting-and-parking-238-to-252",
    "https://www.gov.uk/guidance/the-highway-code/motorways-253-to-274",
    "https://www.gov.uk/guidance/the-highway-code/breakdowns-and-incidents-275-to-287",
    "https://www.gov.uk/guidance/the-highway-code/road-works-level-crossings-and-tramways-288-to-307",
];

/// Configuration for one scraping run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Pages to scrape, in output order.
    pub urls: Vec<String>,

    /// Prefix stripped from each URL to name its output (default: [`DEFAULT_PREFIX`]).
    pub prefix: String,

    /// Directory for per-page files, created if missing (default: `pages`).
    pub output_dir: PathBuf,

    /// Combined document path (default: `highway_code_full.txt`).
    pub combined_path: PathBuf,

    /// Literal header of the combined document.
    pub banner: String,

    pub fetch: FetchConfig,

    pub extract: ExtractConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            urls: DEFAULT_URLS.iter().map(|u| u.to_string()).collect(),
            prefix: DEFAULT_PREFIX.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            combined_path: PathBuf::from(DEFAULT_COMBINED_PATH),
            banner: DEFAULT_BANNER.to_string(),
            fetch: FetchConfig::default(),
            extract: ExtractConfig::default(),
        }
    }
}

impl RunConfig {
    /// Creates a new builder for RunConfig.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::new()
    }
}

/// Builder for RunConfig.
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: RunConfig::default() }
    }

    /// Replaces the URL list.
    pub fn urls(mut self, urls: Vec<String>) -> Self {
        self.config.urls = urls;
        self
    }

    /// Sets the identifier prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    /// Sets the per-page output directory.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Sets the combined document path.
    pub fn combined_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.combined_path = path.into();
        self
    }

    /// Sets the combined document banner.
    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.config.banner = banner.into();
        self
    }

    /// Sets the HTTP configuration.
    pub fn fetch(mut self, fetch: FetchConfig) -> Self {
        self.config.fetch = fetch;
        self
    }

    /// Replaces the container selectors.
    pub fn selectors(mut self, selectors: Vec<String>) -> Self {
        self.config.extract.selectors = selectors;
        self
    }

    /// Sets whether repeated containers are dropped.
    pub fn dedupe_blocks(mut self, value: bool) -> Self {
        self.config.extract.dedupe_blocks = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> RunConfig {
        self.config
    }
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads a URL list file.
///
/// One URL per line. Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns [`PagetextError::ConfigError`] when the file cannot be read or an
/// entry is not an absolute http(s) URL.
pub fn load_url_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .map_err(|e| PagetextError::ConfigError(format!("cannot read URL list {}: {}", path.display(), e)))?;
    parse_url_list(&content)
}

/// Parses the contents of a URL list file. See [`load_url_list`].
pub fn parse_url_list(content: &str) -> Result<Vec<String>> {
    let mut urls = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match Url::parse(line) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => urls.push(line.to_string()),
            Ok(url) => {
                return Err(PagetextError::ConfigError(format!(
                    "line {}: unsupported scheme '{}'",
                    index + 1,
                    url.scheme()
                )));
            }
            Err(e) => {
                return Err(PagetextError::ConfigError(format!("line {}: {}: {}", index + 1, line, e)));
            }
        }
    }

    Ok(urls)
}
