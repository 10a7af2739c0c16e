//! Shared data models for index configs, queries, and search results.
//!
//! These types form the stable JSON API surface used by the CLI's
//! `--format=json` output and are the logical model persisted by the
//! index store.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Schema version for `SearchReport` JSON payloads.
///
/// This version follows semver semantics (MAJOR.MINOR.PATCH):
/// - MAJOR: Breaking changes to required fields or field semantics.
/// - MINOR: Backward-compatible additions (new optional fields).
/// - PATCH: Documentation or internal changes only.
///
/// Clients consuming `--format=json` output should check this version
/// to ensure compatibility and handle newer minor versions
/// conservatively.
pub const SEARCH_REPORT_VERSION: &str = "1.0.0";

/// Default file name for the serialized index, relative to the
/// working directory.
pub const DEFAULT_INDEX_FILE: &str = "file_index.json";

/// Default file name for the per-search results listing, relative to
/// the working directory.
pub const DEFAULT_RESULTS_FILE: &str = "results.txt";

/// Match predicate applied to each indexed filename.
///
/// Exactly one mode is active per query; all three compare
/// case-insensitively against the filename only, never the directory
/// portion of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    Contains,
    StartsWith,
    EndsWith,
}

impl MatchMode {
    /// Evaluate this predicate against an already lower-cased
    /// filename and term.
    ///
    /// An empty term matches every filename under all three modes;
    /// this is the ordinary substring/prefix/suffix behavior of the
    /// empty string, not a special case.
    pub fn matches(self, filename_lower: &str, term_lower: &str) -> bool {
        match self {
            MatchMode::Contains => filename_lower.contains(term_lower),
            MatchMode::StartsWith => filename_lower.starts_with(term_lower),
            MatchMode::EndsWith => filename_lower.ends_with(term_lower),
        }
    }
}

/// A single search query: the raw term plus the selected match mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Raw search term as supplied by the user; lower-casing happens
    /// at scan time.
    pub term: String,
    /// Active match predicate.
    pub mode: MatchMode,
}

/// One directory's filename listing within the index.
///
/// An entry is only created for directories that directly contain at
/// least one file, so `filenames` is never empty in a well-formed
/// index. Filenames are plain base names without any path component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Directory path exactly as produced by the walk; separator
    /// normalization happens when result paths are emitted, not here.
    pub directory: String,
    /// Base names of the files directly inside `directory`, in
    /// enumeration order.
    pub filenames: Vec<String>,
}

/// In-memory filename index: the ordered sequence of directory
/// entries produced by a full walk.
///
/// A rebuild replaces the whole value; entries are never mutated in
/// place after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileIndex {
    pub entries: Vec<IndexEntry>,
}

impl FileIndex {
    /// Total number of (directory, filename) records across all
    /// entries. A full scan visits exactly this many records.
    pub fn record_count(&self) -> u64 {
        self.entries.iter().map(|e| e.filenames.len() as u64).sum()
    }

    /// True when the index holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where the in-memory index handed to a search came from.
///
/// `Missing` and `Corrupt` both degrade to an empty index so that a
/// search never fails outright; the distinction stays visible for
/// logs and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexSource {
    /// Loaded from a well-formed store file.
    Stored,
    /// No store file existed yet.
    Missing,
    /// A store file existed but could not be read or parsed.
    Corrupt,
}

/// Outcome of scanning an index with a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Normalized full paths of the matching files, in scan order
    /// (entry order, then within-entry filename order).
    pub paths: Vec<String>,
    /// Number of (directory, filename) records considered. This is
    /// always the scanned index's full record count; scans never
    /// stop early.
    pub records_scanned: u64,
    /// Number of records that satisfied the predicate. Always equals
    /// `paths.len()`.
    pub matches_found: u64,
}

/// Top-level result for a search invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    /// Schema version for this report payload.
    pub version: String,
    /// The original search term.
    pub term: String,
    /// Match mode the scan ran under.
    pub mode: MatchMode,
    /// Provenance of the index the scan ran against.
    pub index_source: IndexSource,
    /// Location the match list was written to.
    pub results_file: PathBuf,
    /// The scan outcome itself.
    pub result: MatchResult,
}

/// Configuration for building (or rebuilding) an index.
///
/// This struct is built from CLI inputs and is consumed by the core
/// indexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Filesystem root to walk. A missing or unreadable root yields
    /// an empty index rather than an error.
    pub root: PathBuf,
    /// Inclusion globs applied to candidate filenames; empty means
    /// every file is captured.
    #[serde(default)]
    pub globs: Vec<String>,
    /// Exclusion globs applied to candidate filenames.
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    /// Location of the on-disk index store.
    pub index_file: PathBuf,
}

/// Configuration for a search operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Raw search term provided by the user.
    pub term: String,
    /// Active match predicate.
    pub mode: MatchMode,
    /// Location of the on-disk index store to load.
    pub index_file: PathBuf,
    /// Location the match list is written to, truncated per search.
    pub results_file: PathBuf,
}

/// Summary information about an index store, produced both by a
/// rebuild and by read-only inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexSummary {
    /// Location of the index on disk.
    pub index_file: PathBuf,
    /// Number of directory entries in the index.
    pub directories_indexed: u64,
    /// Number of filenames in the index.
    pub files_indexed: u64,
    /// Root the index was built from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_path: Option<String>,
    /// Logical schema version for the store file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    /// Version of the namegrep tool that wrote the store file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_version: Option<String>,
    /// RFC 3339 timestamp for when the index was generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}
