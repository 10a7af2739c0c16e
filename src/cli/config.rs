use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::args::{MatchModeArg, OutputFormat};
use crate::cli::{IndexArgs, InfoArgs, SearchArgs};

/// Top-level representation of `.namegrep/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub index: Option<IndexSection>,

    #[serde(default)]
    pub search: Option<SearchSection>,

    #[serde(default)]
    pub info: Option<InfoSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IndexSection {
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub globs: Vec<String>,
    #[serde(default, alias = "exclude")]
    pub exclude_globs: Vec<String>,
    #[serde(default)]
    pub index_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchSection {
    #[serde(default)]
    pub mode: Option<MatchModeArg>,
    #[serde(default)]
    pub index_file: Option<PathBuf>,
    #[serde(default)]
    pub results_file: Option<PathBuf>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Default, Deserialize)]
pub struct InfoSection {
    #[serde(default)]
    pub index_file: Option<PathBuf>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// Discover and load a project-local `.namegrep/config.toml` (or
/// `.namegrep/namegrep.toml`) starting from the current working
/// directory and walking up parent directories.
pub fn load_cli_config() -> Result<Option<CliConfig>> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config_path = find_project_config(&cwd);

    let Some(path) = config_path else {
        return Ok(None);
    };

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: CliConfig = toml::from_str(&contents)
        .with_context(|| format!("failed to parse TOML config at {}", path.display()))?;

    Ok(Some(config))
}

fn find_project_config(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);

    while let Some(current) = dir {
        let namegrep_dir = current.join(".namegrep");
        let config_toml = namegrep_dir.join("config.toml");
        if config_toml.is_file() {
            return Some(config_toml);
        }

        let namegrep_toml = namegrep_dir.join("namegrep.toml");
        if namegrep_toml.is_file() {
            return Some(namegrep_toml);
        }

        dir = current.parent();
    }

    None
}

pub fn apply_index_config_defaults(config: &CliConfig, args: &mut IndexArgs) {
    if let Some(index) = &config.index {
        if args.path.is_none() {
            if let Some(path) = &index.path {
                args.path = Some(path.clone());
            }
        }

        if args.globs.is_empty() && !index.globs.is_empty() {
            args.globs = index.globs.clone();
        }

        if args.exclude_globs.is_empty() && !index.exclude_globs.is_empty() {
            args.exclude_globs = index.exclude_globs.clone();
        }

        if args.index_file.is_none() {
            if let Some(index_file) = &index.index_file {
                args.index_file = Some(index_file.clone());
            }
        }
    }
}

pub fn apply_search_config_defaults(config: &CliConfig, args: &mut SearchArgs) {
    if let Some(search) = &config.search {
        if matches!(args.mode, MatchModeArg::Contains) {
            if let Some(mode) = search.mode {
                args.mode = mode;
            }
        }

        if args.index_file.is_none() {
            if let Some(index_file) = &search.index_file {
                args.index_file = Some(index_file.clone());
            }
        }

        if args.results_file.is_none() {
            if let Some(results_file) = &search.results_file {
                args.results_file = Some(results_file.clone());
            }
        }

        if matches!(args.format, OutputFormat::Text) {
            if let Some(format) = search.format {
                args.format = format;
            }
        }
    }

    // With no per-search store location, fall back to the index
    // section so one `index_file` setting covers both commands.
    if args.index_file.is_none() {
        if let Some(index) = &config.index {
            if let Some(index_file) = &index.index_file {
                args.index_file = Some(index_file.clone());
            }
        }
    }
}

pub fn apply_info_config_defaults(config: &CliConfig, args: &mut InfoArgs) {
    if let Some(info) = &config.info {
        if args.index_file.is_none() {
            if let Some(index_file) = &info.index_file {
                args.index_file = Some(index_file.clone());
            }
        }

        if matches!(args.format, OutputFormat::Text) {
            if let Some(format) = info.format {
                args.format = format;
            }
        }
    }

    if args.index_file.is_none() {
        if let Some(index) = &config.index {
            if let Some(index_file) = &index.index_file {
                args.index_file = Some(index_file.clone());
            }
        }
    }
}
