//! Results-file sink.
//!
//! Every search rewrites a plain-text listing of the matching paths,
//! one per line. The file is truncated first so it only ever reflects
//! the latest search, including an empty file when nothing matched.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Write the match list to `results_file`, one path per line.
///
/// The file is created if absent and truncated otherwise.
pub fn write_results(results_file: &Path, paths: &[String]) -> Result<()> {
    let file = File::create(results_file)
        .with_context(|| format!("failed to create results file {}", results_file.display()))?;
    let mut writer = BufWriter::new(file);

    for path in paths {
        writeln!(writer, "{path}")?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write results to {}", results_file.display()))?;

    Ok(())
}
