// src/error.rs
// =============================================================================
// Error types for the crawler.
//
// There are two families of errors and they are handled very differently:
//
// - PageError: something went wrong with ONE page (network failure, the body
//   is not text, the markup could not be parsed). The crawl logs it and moves
//   on to the next URL in the queue.
// - CrawlError: something went wrong with the whole session (the output file
//   cannot be opened or written, the HTTP client cannot be built). The crawl
//   stops immediately and the error reaches main().
//
// Rust concepts:
// - thiserror: Derives std::error::Error and Display from attributes
// - #[source]: Keeps the underlying cause so error chains print fully
// =============================================================================

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A failure isolated to a single URL. Never aborts the crawl.
#[derive(Error, Debug)]
pub enum PageError {
    /// The transport failed (DNS, refused connection, timeout, bad URL, ...)
    #[error("{source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with something that is not a text document
    #[error("unsupported content type '{content_type}'")]
    NonText { url: String, content_type: String },

    /// The body could not be turned into a page. HtmlParser never
    /// returns this; other PageParser implementations may.
    #[cfg_attr(not(test), allow(dead_code))]
    #[error("could not parse page: {message}")]
    Parse { url: String, message: String },
}

impl PageError {
    /// The URL this failure belongs to.
    pub fn url(&self) -> &str {
        match self {
            PageError::Fetch { url, .. }
            | PageError::NonText { url, .. }
            | PageError::Parse { url, .. } => url,
        }
    }
}

/// A failure that ends the whole crawl session.
#[derive(Error, Debug)]
pub enum CrawlError {
    /// The output file could not be created
    #[error("error opening output file {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the already opened output failed
    #[error("error writing to output: {0}")]
    Write(#[from] io::Error),

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The configuration was rejected before the crawl started
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_error_reports_its_url() {
        let err = PageError::NonText {
            url: "https://example.com/logo.png".to_string(),
            content_type: "image/png".to_string(),
        };
        assert_eq!(err.url(), "https://example.com/logo.png");
        assert_eq!(err.to_string(), "unsupported content type 'image/png'");
    }

    #[test]
    fn test_output_error_names_the_path() {
        let err = CrawlError::Output {
            path: PathBuf::from("/nope/out.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        let message = err.to_string();
        assert!(message.contains("/nope/out.txt"));
        assert!(message.contains("no such directory"));
    }
}
