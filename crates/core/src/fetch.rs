//! Page fetching over HTTP.
//!
//! This module provides [`fetch_url`], a single-shot GET that only accepts a
//! `200 OK` answer, and the [`PageSource`] seam the run coordinator pulls
//! pages through. [`HttpFetcher`] is the network-backed source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::{PagetextError, Result};

/// HTTP client configuration for fetching pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds. `None` leaves the transport default in place.
    pub timeout: Option<u64>,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: None, user_agent: concat!("pagetext/", env!("CARGO_PKG_VERSION")).to_string() }
    }
}

/// Something that can hand back the raw body of a page.
///
/// The coordinator only ever talks to this trait, which keeps the pipeline
/// testable without a network.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the raw body of `url`.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// [`PageSource`] backed by a shared reqwest [`Client`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

impl HttpFetcher {
    /// Builds the underlying client from `config`.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        fetch_with_client(&self.client, url, &self.config).await
    }
}

/// Fetches the body of `url` with a one-off client.
///
/// Issues exactly one GET. Redirects are followed by the transport; any final
/// status other than `200` is rejected with [`PagetextError::UnexpectedStatus`].
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<Vec<u8>> {
    HttpFetcher::new(config.clone())?.fetch(url).await
}

async fn fetch_with_client(client: &Client, url: &str, config: &FetchConfig) -> Result<Vec<u8>> {
    let parsed_url = Url::parse(url).map_err(|e| PagetextError::InvalidUrl(format!("{url}: {e}")))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(PagetextError::InvalidUrl(format!(
            "{url}: URL must use http:// or https://"
        )));
    }

    let classify = |e: reqwest::Error| match config.timeout {
        Some(timeout) if e.is_timeout() => PagetextError::Timeout { timeout },
        _ => PagetextError::Transport(e),
    };

    // The response (and its connection) is dropped on every return path below.
    let response = client.get(parsed_url).send().await.map_err(classify)?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(PagetextError::UnexpectedStatus { status: status.as_u16(), url: url.to_string() });
    }

    let body = response.bytes().await.map_err(classify)?;
    tracing::debug!(url, bytes = body.len(), "fetched page");

    Ok(body.to_vec())
}
