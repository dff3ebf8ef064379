pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod identifier;
pub mod locate;
pub mod parse;
pub mod render;
pub mod run;

pub use config::{
    DEFAULT_BANNER, DEFAULT_COMBINED_PATH, DEFAULT_OUTPUT_DIR, DEFAULT_PREFIX, DEFAULT_URLS, RunConfig,
    RunConfigBuilder, load_url_list, make_banner, parse_url_list,
};
pub use error::{PagetextError, Result};
pub use extract::{ExtractConfig, PageText, extract_from_bytes, extract_page_text};
pub use fetch::{FetchConfig, HttpFetcher, PageSource, fetch_url};
pub use identifier::PageId;
pub use locate::{DEFAULT_CONTAINER_SELECTORS, locate_blocks, validate_selectors};
pub use parse::{Document, Element};
pub use render::{normalize_text, render_block, render_element};
pub use run::{CombinedDocument, NoopObserver, PageOutcome, PageStatus, Pipeline, RunObserver, RunReport, Stage};
