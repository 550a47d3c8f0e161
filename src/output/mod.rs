// src/output/mod.rs
// =============================================================================
// Everything that touches the output file.
//
// The file always starts with a three-line header:
//
//   Search Term: <term>
//   URL: <start url>
//   Search Depth: <max depth>
//
// followed by one wrapped text block per matching page, with no separator
// between blocks.
// =============================================================================

mod wrap;

pub use wrap::write_wrapped;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::CrawlError;

/// Creates (or truncates) the output file.
pub fn create_output(path: &Path) -> Result<BufWriter<File>, CrawlError> {
    let file = File::create(path).map_err(|source| CrawlError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Writes the header block that opens every output file.
pub fn write_header<W: Write + ?Sized>(
    sink: &mut W,
    search_term: &str,
    start_url: &str,
    max_depth: usize,
) -> io::Result<()> {
    writeln!(sink, "Search Term: {}", search_term)?;
    writeln!(sink, "URL: {}", start_url)?;
    writeln!(sink, "Search Depth: {}", max_depth)?;
    Ok(())
}
