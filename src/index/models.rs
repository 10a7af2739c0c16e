//! Persisted index model used by the on-disk store.
//!
//! These types describe the JSON document written to the index file:
//! a metadata header plus the directory entries themselves.

use serde::{Deserialize, Serialize};

use crate::models::{FileIndex, IndexEntry, IndexSource};

/// Schema version for the index store file.
///
/// Loads reject documents with a different version as corrupt; bump
/// this on any breaking change to the on-disk layout.
pub const INDEX_SCHEMA_VERSION: &str = "1";

/// Metadata header for an index store file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexMeta {
    /// Schema version for the index on disk.
    pub schema_version: String,
    /// Version of the namegrep tool that wrote the index.
    pub tool_version: String,
    /// Root the index was built from, stored as given on the command
    /// line rather than canonicalized, so summaries echo the caller's
    /// own spelling.
    #[serde(default)]
    pub root_path: String,
    /// Unix timestamp (seconds since epoch) when the index was
    /// generated. Rebuilds replace the file wholesale, so a single
    /// timestamp covers both creation and update.
    pub generated_at: u64,
}

/// On-disk representation of the whole index store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexDocument {
    pub meta: IndexMeta,
    pub entries: Vec<IndexEntry>,
}

/// Result of loading an index store, pairing the usable index with
/// where it came from.
///
/// Loading never fails: a missing or unreadable store yields an empty
/// index tagged with the matching `IndexSource` variant.
#[derive(Debug, Clone)]
pub struct LoadedIndex {
    pub index: FileIndex,
    pub source: IndexSource,
}

impl LoadedIndex {
    /// An empty index attributed to the given source.
    pub fn empty(source: IndexSource) -> Self {
        LoadedIndex {
            index: FileIndex::default(),
            source,
        }
    }
}
