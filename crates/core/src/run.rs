//! Run coordination.
//!
//! [`Pipeline`] walks the URL list in order. Each page goes through
//! fetching, parsing, extracting and writing; a failure at any stage is
//! reported to the [`RunObserver`] and the run moves on to the next URL.
//! Only pages whose file was written make it into the [`CombinedDocument`],
//! which is written once at the end. Failing that final write is the only
//! fatal error of a run.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::RunConfig;
use crate::extract::{ExtractConfig, PageText, extract_page_text};
use crate::fetch::{HttpFetcher, PageSource};
use crate::identifier::PageId;
use crate::parse::Document;
use crate::{PagetextError, Result};

/// Per-page processing stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Parsing,
    Extracting,
    Writing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Fetching => "fetching",
            Stage::Parsing => "parsing",
            Stage::Extracting => "extracting",
            Stage::Writing => "writing",
        };
        f.write_str(name)
    }
}

/// Final state of one page.
#[derive(Debug)]
pub enum PageStatus {
    Saved { path: PathBuf, bytes: usize },
    Failed { stage: Stage, error: PagetextError },
}

#[derive(Debug)]
pub struct PageOutcome {
    pub url: String,
    pub id: PageId,
    pub status: PageStatus,
}

impl PageOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self.status, PageStatus::Saved { .. })
    }
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct RunReport {
    /// One entry per URL, in input order
    pub outcomes: Vec<PageOutcome>,
    pub output_dir: PathBuf,
    pub combined_path: PathBuf,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_saved()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }
}

/// Receives progress events from a run.
///
/// All methods default to doing nothing.
pub trait RunObserver {
    /// Called before page `index` (1-based) of `total` is fetched.
    fn started(&mut self, _index: usize, _total: usize, _url: &str) {}

    /// Called after a per-page file was written.
    fn saved(&mut self, _path: &Path) {}

    /// Called when a page is skipped.
    fn failed(&mut self, _url: &str, _stage: Stage, _error: &PagetextError) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

/// Append-only text of all saved pages, preceded by a banner.
#[derive(Debug, Clone)]
pub struct CombinedDocument {
    buffer: String,
}

impl CombinedDocument {
    pub fn new(banner: &str) -> Self {
        Self { buffer: banner.to_string() }
    }

    /// Appends `\n===== <title> =====\n\n` followed by `text`.
    pub fn push_section(&mut self, title: &str, text: &str) {
        self.buffer.push_str("\n===== ");
        self.buffer.push_str(title);
        self.buffer.push_str(" =====\n\n");
        self.buffer.push_str(text);
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.buffer).map_err(|e| PagetextError::write(path, e))
    }
}

/// Sequential scraping pipeline over a [`PageSource`].
pub struct Pipeline<S: PageSource> {
    source: S,
    config: RunConfig,
}

impl Pipeline<HttpFetcher> {
    /// Builds a pipeline fetching over HTTP with `config.fetch`.
    pub fn from_config(config: RunConfig) -> Result<Self> {
        let source = HttpFetcher::new(config.fetch.clone())?;
        Ok(Self { source, config })
    }
}

impl<S: PageSource> Pipeline<S> {
    pub fn with_source(source: S, config: RunConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Processes every URL and writes the combined document.
    ///
    /// # Errors
    ///
    /// Only a failed write of the combined document is returned; per-page
    /// failures are recorded in the [`RunReport`].
    pub async fn run(&self, observer: &mut dyn RunObserver) -> Result<RunReport> {
        let config = &self.config;
        let total = config.urls.len();

        if let Err(e) = fs::create_dir_all(&config.output_dir) {
            tracing::warn!(dir = %config.output_dir.display(), error = %e, "could not create output directory");
        }

        let mut combined = CombinedDocument::new(&config.banner);
        let mut outcomes = Vec::with_capacity(total);

        for (index, url) in config.urls.iter().enumerate() {
            observer.started(index + 1, total, url);
            let id = PageId::from_url(url, &config.prefix);

            let status = match self.process_page(url, &id, &mut combined).await {
                Ok((path, bytes)) => {
                    observer.saved(&path);
                    PageStatus::Saved { path, bytes }
                }
                Err((stage, error)) => {
                    tracing::warn!(url = %url, %stage, error = %error, "skipping page");
                    observer.failed(url, stage, &error);
                    PageStatus::Failed { stage, error }
                }
            };

            outcomes.push(PageOutcome { url: url.clone(), id, status });
        }

        combined.write_to(&config.combined_path)?;

        let report = RunReport {
            outcomes,
            output_dir: config.output_dir.clone(),
            combined_path: config.combined_path.clone(),
        };
        tracing::info!(
            total = report.total(),
            succeeded = report.succeeded(),
            combined = %report.combined_path.display(),
            "run complete"
        );

        Ok(report)
    }

    async fn process_page(
        &self,
        url: &str,
        id: &PageId,
        combined: &mut CombinedDocument,
    ) -> std::result::Result<(PathBuf, usize), (Stage, PagetextError)> {
        tracing::debug!(url, stage = %Stage::Fetching, "page stage");
        let body = self.source.fetch(url).await.map_err(|e| (Stage::Fetching, e))?;

        let page = render_page(&body, &self.config.extract)?;
        drop(body);

        let path = id.file_path(&self.config.output_dir);
        tracing::debug!(url, stage = %Stage::Writing, path = %path.display(), blocks = page.block_count, "page stage");
        fs::write(&path, &page.text).map_err(|e| (Stage::Writing, PagetextError::write(&path, e)))?;

        combined.push_section(&id.section_title(), &page.text);
        Ok((path, page.text.len()))
    }
}

fn render_page(body: &[u8], config: &ExtractConfig) -> std::result::Result<PageText, (Stage, PagetextError)> {
    let doc = Document::from_bytes(body).map_err(|e| (Stage::Parsing, e))?;
    tracing::debug!(title = doc.title().as_deref().unwrap_or_default(), "parsed page");
    extract_page_text(&doc, config).map_err(|e| (Stage::Extracting, e))
}
