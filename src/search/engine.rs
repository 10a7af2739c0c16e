//! Core search entry points.
//!
//! These functions provide the "search as a function" API used by the
//! CLI: a pure scan over an in-memory index plus a wrapper that loads
//! the store, runs the scan, and writes the results file.

use anyhow::Result;
use tracing::debug;

use crate::index::store;
use crate::models::{
    FileIndex, MatchResult, Query, SearchConfig, SearchReport, SEARCH_REPORT_VERSION,
};
use crate::search::sink;

/// Execute a search based on the provided configuration.
///
/// The index store loads leniently (a missing or corrupt store scans
/// as empty), the scan runs to completion, and the match list is
/// written to the configured results file before the report is
/// returned. The report carries the index provenance so callers can
/// tell an empty index apart from a fruitless search.
pub fn run_search(config: SearchConfig) -> Result<SearchReport> {
    let loaded = store::load(&config.index_file);

    let query = Query {
        term: config.term.clone(),
        mode: config.mode,
    };

    let result = scan_index(&loaded.index, &query);

    debug!(
        records = result.records_scanned,
        matches = result.matches_found,
        "Scan finished"
    );

    sink::write_results(&config.results_file, &result.paths)?;

    Ok(SearchReport {
        version: SEARCH_REPORT_VERSION.to_string(),
        term: config.term,
        mode: config.mode,
        index_source: loaded.source,
        results_file: config.results_file,
        result,
    })
}

/// Scan every record in the index against the query.
///
/// The scan is a pure function of its inputs. It visits every
/// (directory, filename) record without early exit, counts them, and
/// collects a normalized full path for each record whose filename
/// satisfies the predicate. Matching compares the lower-cased
/// filename against the lower-cased term; the directory portion never
/// participates.
pub fn scan_index(index: &FileIndex, query: &Query) -> MatchResult {
    let term_lower = query.term.to_lowercase();

    let mut paths = Vec::new();
    let mut records_scanned: u64 = 0;

    for entry in &index.entries {
        for filename in &entry.filenames {
            records_scanned += 1;

            if query.mode.matches(&filename.to_lowercase(), &term_lower) {
                paths.push(full_path(&entry.directory, filename));
            }
        }
    }

    let matches_found = paths.len() as u64;

    MatchResult {
        paths,
        records_scanned,
        matches_found,
    }
}

/// Join a directory and filename into a display path with forward
/// slashes.
///
/// Backslashes in the stored directory are rewritten so indexes
/// built on Windows read the same everywhere; the filename itself is
/// appended verbatim after a single separator.
fn full_path(directory: &str, filename: &str) -> String {
    let mut path = directory.replace('\\', "/");
    path.push('/');
    path.push_str(filename);
    path
}
