// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The crawler takes five positional values, always in this order:
//
//   term-crawler URL DEPTH SEARCH_TERM OUTPUT_FILE RUN_TIME
//
// A few optional flags tune the HTTP client and the console output. Wrong
// argument counts or unparseable numbers are rejected by clap before any
// crawling happens (clap prints usage and exits with code 2).
//
// Rust concepts:
// - Derive macros: #[derive(Parser)] generates the parsing code
// - value_parser: A custom function that validates one argument
// =============================================================================

use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "term-crawler",
    version,
    about = "Crawl a site breadth-first and save every page that mentions a search term",
    long_about = "term-crawler follows links from a starting URL up to a maximum depth, \
                  and writes the text of every page containing the search term \
                  (case-insensitive) to an output file, wrapped at 80 columns. \
                  The crawl stops early once the time budget is used up."
)]
pub struct Cli {
    /// The URL to start crawling from (depth 0)
    pub url: String,

    /// Maximum number of link hops from the starting URL
    pub depth: usize,

    /// Text to look for in each page (case-insensitive)
    pub search_term: String,

    /// File the matching pages are written to (overwritten if present)
    pub output_file: PathBuf,

    /// Time budget for the whole crawl, in seconds
    #[arg(value_parser = parse_budget)]
    pub run_time: f64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10, env = "TERM_CRAWLER_REQUEST_TIMEOUT")]
    pub request_timeout: u64,

    /// User-Agent header sent with every request
    #[arg(
        long,
        default_value = concat!("term-crawler/", env!("CARGO_PKG_VERSION")),
        env = "TERM_CRAWLER_USER_AGENT"
    )]
    pub user_agent: String,

    /// Print a JSON crawl summary to stdout when finished
    #[arg(long)]
    pub json: bool,

    /// Increase diagnostic logging on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

// The budget must be a real, non-negative number of seconds.
// Duration::from_secs_f64 panics on anything else, so we reject it here.
fn parse_budget(raw: &str) -> Result<f64, String> {
    let secs: f64 = raw
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", raw))?;

    if !secs.is_finite() || secs < 0.0 {
        return Err(format!("'{}' must be a non-negative number of seconds", raw));
    }

    Ok(secs)
}
