// src/crawl/mod.rs
// =============================================================================
// This module handles the crawl itself.
//
// Features:
// - Breadth-first traversal from a starting URL
// - Depth limit and duplicate filtering when entries leave the queue
// - Case-insensitive search of each page's visible text
// - A wall-clock budget checked between pages
//
// Submodules:
// - engine: the crawl loop and its per-session state
// - deadline: the time budget and the clock it reads
// - observer: the "Found article" / error / timeout console lines
// =============================================================================

mod deadline;
mod engine;
mod observer;

pub use deadline::SystemClock;
pub use engine::{CrawlSummary, Crawler};
pub use observer::ConsoleObserver;
