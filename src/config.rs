// src/config.rs
// =============================================================================
// Validated crawl configuration.
//
// The CLI hands us raw strings and numbers. CrawlConfig is the typed version
// the rest of the program works with: the budget is a Duration, the start URL
// has been checked to be a real absolute URL, and the fixed output width
// lives here too.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::cli::Cli;
use crate::error::CrawlError;

/// Column width used when writing matching pages to the output file.
pub const WRAP_WIDTH: usize = 80;

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub start_url: String,
    pub max_depth: usize,
    pub search_term: String,
    pub output_path: PathBuf,
    pub budget: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
    pub wrap_width: usize,
}

impl CrawlConfig {
    /// Builds the configuration from parsed arguments, rejecting a start URL
    /// that is not absolute before anything touches the disk or network.
    pub fn from_cli(cli: &Cli) -> Result<Self, CrawlError> {
        Url::parse(&cli.url).map_err(|e| {
            CrawlError::InvalidConfig(format!("invalid start URL '{}': {}", cli.url, e))
        })?;

        let budget = Duration::try_from_secs_f64(cli.run_time).map_err(|e| {
            CrawlError::InvalidConfig(format!("invalid run time {}: {}", cli.run_time, e))
        })?;

        Ok(Self {
            start_url: cli.url.clone(),
            max_depth: cli.depth,
            search_term: cli.search_term.clone(),
            output_path: cli.output_file.clone(),
            budget,
            request_timeout: Duration::from_secs(cli.request_timeout),
            user_agent: cli.user_agent.clone(),
            wrap_width: WRAP_WIDTH,
        })
    }
}
