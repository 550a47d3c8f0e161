// src/page/mod.rs
// =============================================================================
// Working with individual pages.
//
// Submodules:
// - fetch: downloads a page (PageFetcher trait + reqwest implementation)
// - parse: extracts title, visible text and links (PageParser + scraper)
// - resolve: turns a possibly-relative href into an absolute URL
//
// The crawl engine depends only on the traits, so it can run against canned
// pages in tests with no network at all.
// =============================================================================

mod fetch;
mod parse;
mod resolve;

pub use fetch::{FetchedPage, HttpFetcher, PageFetcher};
pub use parse::{HtmlParser, PageParser, ParsedPage};
pub use resolve::{normalize, resolve};
