// src/crawl/engine.rs
// =============================================================================
// The breadth-first crawl loop.
//
// How it works:
// 1. Write the header to the output, then queue (start_url, depth 0)
// 2. Pop the front of the queue
// 3. Skip it if the URL was already processed or it is deeper than allowed
// 4. Mark it visited, fetch it and parse it
// 5. Queue every link on the page at depth + 1 (filtering happens at step 3)
// 6. If the page text contains the search term, report the title and write
//    the text to the output, wrapped at 80 columns
// 7. Stop if the time budget is used up, otherwise go back to step 2
//
// A page that fails to fetch or parse is reported and skipped; it stays in
// the visited set and is never retried. Only output errors end the crawl.
//
// The queue and visited set live in a CrawlSession owned by a single run, so
// nothing here is global and every collaborator (fetcher, parser, clock,
// console) can be replaced in tests.
// =============================================================================

use std::collections::{HashSet, VecDeque};
use std::io::Write;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, trace};

use super::deadline::{Clock, Deadline};
use super::observer::CrawlObserver;
use crate::config::CrawlConfig;
use crate::error::{CrawlError, PageError};
use crate::output::{write_header, write_wrapped};
use crate::page::{normalize, resolve, PageFetcher, PageParser, ParsedPage};

/// Title reported for matching pages that have none.
pub const NO_TITLE: &str = "No title found";

// One pending unit of work. Consumed exactly once when popped.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FrontierEntry {
    url: String,
    depth: usize,
}

// Mutable state of one crawl, from the first pop to termination.
struct CrawlSession {
    max_depth: usize,
    // Lowercased once so each page only needs its own text lowercased
    needle: String,
    deadline: Deadline,
    visited: HashSet<String>,
    frontier: VecDeque<FrontierEntry>,
    skipped: usize,
}

impl CrawlSession {
    fn new(config: &CrawlConfig, deadline: Deadline) -> Self {
        // Queued in resolved form; the header keeps the URL as typed
        let mut frontier = VecDeque::new();
        frontier.push_back(FrontierEntry {
            url: normalize(&config.start_url),
            depth: 0,
        });

        Self {
            max_depth: config.max_depth,
            needle: config.search_term.to_lowercase(),
            deadline,
            visited: HashSet::new(),
            frontier,
            skipped: 0,
        }
    }

    // Pops entries until one is worth processing and marks it visited.
    // Duplicates and over-depth entries are dropped here, not when queued.
    fn next_entry(&mut self) -> Option<FrontierEntry> {
        while let Some(entry) = self.frontier.pop_front() {
            if entry.depth > self.max_depth || self.visited.contains(&entry.url) {
                trace!(url = %entry.url, depth = entry.depth, "skipping entry");
                self.skipped += 1;
                continue;
            }

            self.visited.insert(entry.url.clone());
            return Some(entry);
        }
        None
    }

    // Links are resolved against the page they were found on.
    fn enqueue_links(&mut self, parent: &FrontierEntry, hrefs: &[String]) {
        for href in hrefs {
            self.frontier.push_back(FrontierEntry {
                url: resolve(&parent.url, href),
                depth: parent.depth + 1,
            });
        }
    }

    fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }
}

/// A page that could not be processed.
#[derive(Debug, Clone, Serialize)]
pub struct PageFailure {
    pub url: String,
    pub message: String,
}

/// What happened during one crawl.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CrawlSummary {
    pub pages_fetched: usize,
    pub pages_skipped: usize,
    pub matches: usize,
    pub failures: Vec<PageFailure>,
    pub timed_out: bool,
    pub elapsed_secs: f64,
}

pub struct Crawler {
    fetcher: Box<dyn PageFetcher>,
    parser: Box<dyn PageParser>,
    clock: Box<dyn Clock>,
    observer: Box<dyn CrawlObserver>,
}

impl Crawler {
    pub fn new(
        fetcher: Box<dyn PageFetcher>,
        parser: Box<dyn PageParser>,
        clock: Box<dyn Clock>,
        observer: Box<dyn CrawlObserver>,
    ) -> Self {
        Self {
            fetcher,
            parser,
            clock,
            observer,
        }
    }

    /// Runs one crawl session, writing the header and every matching page
    /// to `sink`. Returns normally on exhaustion and on timeout; only a
    /// failure to write to `sink` is an error.
    pub async fn run<W: Write + ?Sized>(
        &mut self,
        config: &CrawlConfig,
        sink: &mut W,
    ) -> Result<CrawlSummary, CrawlError> {
        write_header(sink, &config.search_term, &config.start_url, config.max_depth)?;

        let deadline = Deadline::new(self.clock.now(), config.budget);
        let mut session = CrawlSession::new(config, deadline);
        let mut summary = CrawlSummary::default();

        while let Some(entry) = session.next_entry() {
            debug!(url = %entry.url, depth = entry.depth, "processing page");

            let page = match self.load(&entry.url).await {
                Ok(page) => page,
                Err(err) => {
                    debug!(url = %entry.url, error = %err, "page failed");
                    self.observer.page_failed(err.url(), &err);
                    summary.failures.push(PageFailure {
                        url: entry.url.clone(),
                        message: err.to_string(),
                    });
                    continue;
                }
            };
            summary.pages_fetched += 1;

            session.enqueue_links(&entry, &page.hrefs);

            if session.matches(&page.text) {
                let title = page.title.as_deref().unwrap_or(NO_TITLE);
                self.observer.found_article(title);
                write_wrapped(&page.text, config.wrap_width, sink)?;
                summary.matches += 1;
            }

            let now = self.clock.now();
            if session.deadline.expired(now) {
                info!(url = %entry.url, "time budget used up");
                self.observer.timed_out();
                summary.timed_out = true;
                break;
            }
            trace!(remaining = ?session.deadline.remaining(now), "budget left");
        }

        sink.flush()?;

        summary.pages_skipped = session.skipped;
        summary.elapsed_secs = session.deadline.elapsed(self.clock.now()).as_secs_f64();
        Ok(summary)
    }

    // Fetch and parse one URL. Any failure stays confined to this page.
    async fn load(&self, url: &str) -> Result<ParsedPage, PageError> {
        let fetched = self.fetcher.fetch(url).await?;
        trace!(url, status = fetched.status, "parsing page");
        self.parser.parse(url, &fetched.body)
    }
}

impl CrawlSummary {
    pub fn elapsed(&self) -> Duration {
        Duration::from_secs_f64(self.elapsed_secs)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why are duplicates filtered when popping instead of when queueing?
//    - A URL can be linked from many pages before it is ever processed
//    - Checking at pop time means the visited set only ever holds URLs that
//      were actually processed, and the first copy in line wins
//
// 2. What is Box<dyn PageFetcher>?
//    - A pointer to "some type that implements PageFetcher"
//    - The crawler doesn't care whether it talks to the network or to a
//      HashMap in a test, as long as the trait is implemented
//
// 3. Why does run() take `W: Write + ?Sized`?
//    - Any writer works: a BufWriter<File> in main, a Vec<u8> in tests
//    - ?Sized also allows passing a &mut dyn Write
//
// 4. Why is the deadline checked only after a page?
//    - An HTTP request is never cut short; the budget only decides whether
//      the NEXT page is started
// -----------------------------------------------------------------------------
