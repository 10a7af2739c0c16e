//! On-disk index store.
//!
//! The store is a single JSON document holding a metadata header and
//! the directory entries. Saves replace the file wholesale through a
//! temporary sibling plus rename so a crash mid-write never leaves a
//! torn store behind. Loads never fail: a missing or unreadable store
//! degrades to an empty index tagged with its provenance.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::index::{IndexDocument, IndexMeta, LoadedIndex, INDEX_SCHEMA_VERSION};
use crate::models::{FileIndex, IndexSource, IndexSummary};

/// Persist the index to `index_file`, replacing any previous store.
///
/// Saving is strict where loading is lenient: any IO or serialization
/// failure surfaces as an error, so a stale store is never silently
/// mistaken for a fresh one.
pub fn save(index_file: &Path, index: &FileIndex, meta: IndexMeta) -> Result<()> {
    if let Some(parent) = index_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create index directory {}", parent.display())
            })?;
        }
    }

    let document = IndexDocument {
        meta,
        entries: index.entries.clone(),
    };

    let tmp_path = index_file.with_extension("json.tmp");
    let file = File::create(&tmp_path)
        .with_context(|| format!("failed to create index file {}", tmp_path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &document)
        .with_context(|| format!("failed to write index data to {}", tmp_path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to flush index data to {}", tmp_path.display()))?;
    fs::rename(&tmp_path, index_file).with_context(|| {
        format!("failed to move index into place at {}", index_file.display())
    })?;

    Ok(())
}

/// Load the index from `index_file`.
///
/// This never returns an error. A store that is absent yields
/// `IndexSource::Missing`; one that exists but cannot be opened,
/// parsed, or carries an unknown schema version yields
/// `IndexSource::Corrupt`. Both cases hand back an empty index so
/// searches proceed against zero records.
pub fn load(index_file: &Path) -> LoadedIndex {
    let file = match File::open(index_file) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = ?index_file, "Index store not found, starting from an empty index");
            return LoadedIndex::empty(IndexSource::Missing);
        }
        Err(err) => {
            warn!(path = ?index_file, error = %err, "Failed to open index store, falling back to an empty index");
            return LoadedIndex::empty(IndexSource::Corrupt);
        }
    };

    let document: IndexDocument = match serde_json::from_reader(BufReader::new(file)) {
        Ok(document) => document,
        Err(err) => {
            warn!(path = ?index_file, error = %err, "Failed to parse index store, falling back to an empty index");
            return LoadedIndex::empty(IndexSource::Corrupt);
        }
    };

    if document.meta.schema_version != INDEX_SCHEMA_VERSION {
        warn!(
            path = ?index_file,
            found = %document.meta.schema_version,
            expected = %INDEX_SCHEMA_VERSION,
            "Unsupported index schema version, falling back to an empty index"
        );
        return LoadedIndex::empty(IndexSource::Corrupt);
    }

    LoadedIndex {
        index: FileIndex {
            entries: document.entries,
        },
        source: IndexSource::Stored,
    }
}

/// Read the store strictly and summarize it without touching the
/// entries' contents.
///
/// Unlike `load`, inspection is a diagnostic operation and reports
/// problems instead of papering over them.
pub fn inspect(index_file: &Path) -> Result<IndexSummary> {
    if !index_file.exists() {
        anyhow::bail!("no index found at {}", index_file.display());
    }

    let file = File::open(index_file)
        .with_context(|| format!("failed to open index file {}", index_file.display()))?;
    let document: IndexDocument = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse index file {}", index_file.display()))?;

    if document.meta.schema_version != INDEX_SCHEMA_VERSION {
        anyhow::bail!(
            "unsupported index schema version {}; expected {}",
            document.meta.schema_version,
            INDEX_SCHEMA_VERSION
        );
    }

    let index = FileIndex {
        entries: document.entries,
    };

    let root_path = if document.meta.root_path.is_empty() {
        None
    } else {
        Some(document.meta.root_path)
    };

    Ok(IndexSummary {
        index_file: index_file.to_path_buf(),
        directories_indexed: index.entries.len() as u64,
        files_indexed: index.record_count(),
        root_path,
        schema_version: Some(document.meta.schema_version),
        tool_version: Some(document.meta.tool_version),
        generated_at: crate::index::format_timestamp_rfc3339(document.meta.generated_at),
    })
}
