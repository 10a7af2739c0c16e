//! Filename indexing.
//!
//! This module walks a directory tree and captures, per directory,
//! the base names of the files directly inside it. Only directories
//! holding at least one captured file get an entry. Traversal
//! soft-fails: unreadable entries are skipped so one bad directory
//! never aborts a rebuild.

pub mod models;
pub mod store;

pub use models::{IndexDocument, IndexMeta, LoadedIndex, INDEX_SCHEMA_VERSION};

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use globset::{Glob, GlobSet};
use ignore::WalkBuilder;
use tracing::debug;

use crate::models::{FileIndex, IndexConfig, IndexEntry, IndexSummary};

/// Rebuild the index for the given configuration and persist it.
///
/// This function is the core entry point used by the CLI and tests.
/// The previous store contents, if any, are replaced wholesale.
pub fn run_index(config: IndexConfig) -> Result<IndexSummary> {
    let index = build_file_index(&config)?;

    let meta = IndexMeta {
        schema_version: INDEX_SCHEMA_VERSION.to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        root_path: config.root.to_string_lossy().to_string(),
        generated_at: current_epoch_seconds(),
    };

    let summary = IndexSummary {
        index_file: config.index_file.clone(),
        directories_indexed: index.entries.len() as u64,
        files_indexed: index.record_count(),
        root_path: Some(meta.root_path.clone()),
        schema_version: Some(meta.schema_version.clone()),
        tool_version: Some(meta.tool_version.clone()),
        generated_at: format_timestamp_rfc3339(meta.generated_at),
    };

    store::save(&config.index_file, &index, meta)?;

    Ok(summary)
}

/// Walk `config.root` and group captured files by their directory.
///
/// Entries follow first-visit order: a directory appears when the
/// first captured file inside it is seen, so an entry's `filenames`
/// is never empty. A root that is missing or not a directory yields
/// an empty index rather than an error.
pub fn build_file_index(config: &IndexConfig) -> Result<FileIndex> {
    let include_globs = build_globset(&config.globs)?;
    let exclude_globs = build_globset(&config.exclude_globs)?;

    if !config.root.is_dir() {
        debug!(root = ?config.root, "Index root is not a directory, producing an empty index");
        return Ok(FileIndex::default());
    }

    let mut order: Vec<String> = Vec::new();
    let mut by_directory: HashMap<String, Vec<String>> = HashMap::new();

    // Standard filters would drop hidden and ignored files; the index
    // captures everything reachable under the root.
    let walker = WalkBuilder::new(&config.root)
        .standard_filters(false)
        .build();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                debug!(error = %err, "Skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            continue;
        }

        let path = entry.path();

        if let Some(set) = &include_globs {
            if !set.is_match(path) {
                continue;
            }
        }
        if let Some(set) = &exclude_globs {
            if set.is_match(path) {
                continue;
            }
        }

        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => {
                debug!(path = ?path, "Skipping file with a non-UTF-8 name");
                continue;
            }
        };

        let directory = match path.parent() {
            Some(parent) => parent.to_string_lossy().to_string(),
            None => continue,
        };

        match by_directory.get_mut(&directory) {
            Some(filenames) => filenames.push(filename),
            None => {
                order.push(directory.clone());
                by_directory.insert(directory, vec![filename]);
            }
        }
    }

    let entries = order
        .into_iter()
        .map(|directory| {
            let filenames = by_directory.remove(&directory).unwrap_or_default();
            IndexEntry {
                directory,
                filenames,
            }
        })
        .collect();

    Ok(FileIndex { entries })
}

pub(crate) fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = globset::GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat)?);
    }
    Ok(Some(builder.build()?))
}

fn current_epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn format_timestamp_rfc3339(secs: u64) -> Option<String> {
    use time::{format_description::well_known::Rfc3339, OffsetDateTime};

    let dt = OffsetDateTime::from_unix_timestamp(secs as i64).ok()?;
    Some(dt.format(&Rfc3339).unwrap_or_else(|_| dt.to_string()))
}
