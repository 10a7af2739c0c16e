use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use crate::models::{
    IndexConfig, MatchMode, SearchConfig, DEFAULT_INDEX_FILE, DEFAULT_RESULTS_FILE,
};

/// Top-level CLI entrypoint for `namegrep`.
#[derive(Parser, Debug)]
#[command(
    name = "namegrep",
    about = "Filename index and search CLI",
    author = "namegrep developers",
    subcommand_required = false,
    arg_required_else_help = false
)]
pub struct Cli {
    /// Print the JSON schema version used for `--format=json` output
    /// and exit.
    #[arg(long = "schema-version")]
    pub schema_version: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build or rebuild the filename index.
    Index(IndexArgs),
    /// Search indexed filenames and write matches to a results file.
    Search(SearchArgs),
    /// Inspect an existing index without modifying it.
    Info(InfoArgs),
}

/// Arguments specific to the `index` subcommand.
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Root directory to walk (defaults to the current directory if
    /// omitted).
    #[arg(short = 'p', long = "path")]
    pub path: Option<PathBuf>,

    /// Inclusion globs applied to candidate files.
    #[arg(long = "glob")]
    pub globs: Vec<String>,

    /// Exclusion globs applied to candidate files.
    #[arg(long = "exclude")]
    pub exclude_globs: Vec<String>,

    /// Location of the on-disk index store. Also read from the
    /// `NAMEGREP_INDEX_FILE` environment variable when the flag is
    /// omitted.
    #[arg(long = "index-file", env = "NAMEGREP_INDEX_FILE")]
    pub index_file: Option<PathBuf>,
}

/// Arguments specific to the `search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search term matched against indexed filenames. An empty term
    /// matches every record.
    pub term: String,

    /// Match mode (contains, startswith, or endswith).
    #[arg(long = "mode", value_enum, default_value_t = MatchModeArg::Contains)]
    pub mode: MatchModeArg,

    /// Location of the on-disk index store. Also read from the
    /// `NAMEGREP_INDEX_FILE` environment variable when the flag is
    /// omitted.
    #[arg(long = "index-file", env = "NAMEGREP_INDEX_FILE")]
    pub index_file: Option<PathBuf>,

    /// Location the match list is written to. The file is rewritten
    /// on every search.
    #[arg(long = "results-file")]
    pub results_file: Option<PathBuf>,

    /// Output format (text or json).
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments specific to the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Location of the on-disk index store. Also read from the
    /// `NAMEGREP_INDEX_FILE` environment variable when the flag is
    /// omitted.
    #[arg(long = "index-file", env = "NAMEGREP_INDEX_FILE")]
    pub index_file: Option<PathBuf>,

    /// Output format (text or json).
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// CLI representation of the match mode.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lower")]
pub enum MatchModeArg {
    Contains,
    StartsWith,
    EndsWith,
}

impl MatchModeArg {
    pub fn to_model(self) -> MatchMode {
        match self {
            MatchModeArg::Contains => MatchMode::Contains,
            MatchModeArg::StartsWith => MatchMode::StartsWith,
            MatchModeArg::EndsWith => MatchMode::EndsWith,
        }
    }
}

/// CLI representation of output format.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Build a core `IndexConfig` from CLI `IndexArgs`.
pub fn index_config_from_args(args: &IndexArgs) -> Result<IndexConfig> {
    let root = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let index_file = args
        .index_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_FILE));

    Ok(IndexConfig {
        root,
        globs: args.globs.clone(),
        exclude_globs: args.exclude_globs.clone(),
        index_file,
    })
}

/// Build a core `SearchConfig` from CLI `SearchArgs`.
pub fn search_config_from_args(args: &SearchArgs) -> Result<SearchConfig> {
    Ok(SearchConfig {
        term: args.term.clone(),
        mode: args.mode.to_model(),
        index_file: args
            .index_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_FILE)),
        results_file: args
            .results_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_FILE)),
    })
}

/// Resolve the index store location for the `info` subcommand.
pub fn info_index_file_from_args(args: &InfoArgs) -> PathBuf {
    args.index_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_FILE))
}
