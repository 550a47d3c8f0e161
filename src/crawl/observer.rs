// src/crawl/observer.rs
// =============================================================================
// Console reporting for the crawl.
//
// These are the lines a user watches while the crawl runs. They are part of
// the program's output (stdout), not diagnostics, so they are printed with
// println! rather than through the logger.
// =============================================================================

use crate::error::PageError;

pub trait CrawlObserver: Send {
    /// A page matched the search term
    fn found_article(&mut self, title: &str);

    /// A page could not be fetched or parsed; the crawl continues
    fn page_failed(&mut self, url: &str, error: &PageError);

    /// The time budget ran out and the crawl stopped
    fn timed_out(&mut self);
}

pub struct ConsoleObserver;

impl CrawlObserver for ConsoleObserver {
    fn found_article(&mut self, title: &str) {
        println!("Found article: {}", title);
    }

    fn page_failed(&mut self, url: &str, error: &PageError) {
        println!("Error processing URL {}: {}", url, error);
    }

    fn timed_out(&mut self) {
        println!("Scrape has timed out");
    }
}
