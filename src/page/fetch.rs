// src/page/fetch.rs
// =============================================================================
// This module downloads pages over HTTP.
//
// The crawl engine only knows about the PageFetcher trait, so tests can swap
// in a fake that serves pages from memory. HttpFetcher is the real thing,
// built on one shared reqwest::Client (connection pooling, timeout, UA).
//
// What counts as a failure:
// - transport problems (DNS, refused connection, timeout, invalid URL)
// - a Content-Type that is clearly not a text document (images, PDFs, ...)
//
// A 404 or 500 is NOT a failure here: the status is returned along with the
// body and the page is processed like any other.
//
// Rust concepts:
// - async-trait: Async methods on a trait we can use as Box<dyn PageFetcher>
// - Send + Sync: The fetcher may be used from the tokio runtime's threads
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;

use crate::error::{CrawlError, PageError};

/// The raw result of one successful retrieval.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

/// One network retrieval per call. Failures are confined to that URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, PageError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds the shared client. Redirects follow reqwest's default policy.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(CrawlError::Client)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, PageError> {
        let fetch_error = |source| PageError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(fetch_error)?;
        let status = response.status().as_u16();

        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !is_text_content(content_type) {
                return Err(PageError::NonText {
                    url: url.to_string(),
                    content_type: content_type.to_string(),
                });
            }
        }

        let body = response.text().await.map_err(fetch_error)?;
        debug!(url, status, bytes = body.len(), "fetched page");

        Ok(FetchedPage { status, body })
    }
}

// text/html, text/plain, application/xhtml+xml, application/xml ...
fn is_text_content(content_type: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    content_type.starts_with("text/")
        || content_type.contains("html")
        || content_type.contains("xml")
}
