// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap (bad usage exits with code 2)
// 2. Set up logging and validate the configuration
// 3. Open the output file and run the crawl
// 4. Exit with proper code (0 = finished or timed out, 1 = fatal error)
// =============================================================================

mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - validated crawl settings
mod crawl;    // src/crawl/ - the breadth-first crawl loop
mod error;    // src/error.rs - per-page and fatal error types
mod logging;  // src/logging.rs - tracing setup
mod output;   // src/output/ - output file header and line wrapping
mod page;     // src/page/ - fetching, parsing and link resolution

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cli::Cli;
use config::CrawlConfig;
use crawl::{ConsoleObserver, CrawlSummary, Crawler, SystemClock};
use page::{HtmlParser, HttpFetcher};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("An error occurred while running the crawler: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = CrawlConfig::from_cli(&cli)?;
    info!(
        url = %config.start_url,
        depth = config.max_depth,
        term = %config.search_term,
        budget = ?config.budget,
        "starting crawl"
    );

    let fetcher = HttpFetcher::new(config.request_timeout, &config.user_agent)?;

    // Opened once for the whole session; closed when `sink` is dropped,
    // whichever way run() returns
    let mut sink = output::create_output(&config.output_path)?;

    let mut crawler = Crawler::new(
        Box::new(fetcher),
        Box::new(HtmlParser::new()),
        Box::new(SystemClock),
        Box::new(ConsoleObserver),
    );

    let summary = crawler
        .run(&config, &mut sink)
        .await
        .with_context(|| format!("crawl writing to {} failed", config.output_path.display()))?;

    print_summary(&summary, cli.json)
}

// With --json the summary goes to stdout; otherwise it is only logged
fn print_summary(summary: &CrawlSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        info!(
            fetched = summary.pages_fetched,
            skipped = summary.pages_skipped,
            matches = summary.matches,
            failures = summary.failures.len(),
            timed_out = summary.timed_out,
            "crawl finished in {:.2?}",
            summary.elapsed()
        );
    }
    Ok(())
}
