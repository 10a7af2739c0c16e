use anyhow::Result;
use clap::{CommandFactory, Parser};

use crate::index;
use crate::index::store;
use crate::models::SEARCH_REPORT_VERSION;
use crate::search::engine;

mod args;
mod config;
mod format;

pub use args::{Cli, Commands, IndexArgs, InfoArgs, MatchModeArg, OutputFormat, SearchArgs};

use config::{
    apply_index_config_defaults, apply_info_config_defaults, apply_search_config_defaults,
    load_cli_config,
};

/// Entry point for the CLI binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.schema_version {
        println!(
            "Search report JSON schema version: {}",
            SEARCH_REPORT_VERSION
        );
        return Ok(());
    }

    let cli_config = load_cli_config()?;

    match cli.command {
        Some(Commands::Index(mut index_args)) => {
            if let Some(ref config) = cli_config {
                apply_index_config_defaults(config, &mut index_args);
            }

            let config = args::index_config_from_args(&index_args)?;
            let summary = index::run_index(config)?;

            println!(
                "Indexed {} files across {} directories into {}",
                summary.files_indexed,
                summary.directories_indexed,
                summary.index_file.display()
            );

            Ok(())
        }
        Some(Commands::Search(mut search_args)) => {
            if let Some(ref config) = cli_config {
                apply_search_config_defaults(config, &mut search_args);
            }

            let config = args::search_config_from_args(&search_args)?;
            let report = engine::run_search(config)?;

            match search_args.format {
                OutputFormat::Text => format::print_search_text(&report),
                OutputFormat::Json => {
                    serde_json::to_writer(std::io::stdout(), &report)?;
                    println!();
                    Ok(())
                }
            }
        }
        Some(Commands::Info(mut info_args)) => {
            if let Some(ref config) = cli_config {
                apply_info_config_defaults(config, &mut info_args);
            }

            let index_file = args::info_index_file_from_args(&info_args);
            let summary = store::inspect(&index_file)?;

            match info_args.format {
                OutputFormat::Text => format::print_index_summary_text(&summary),
                OutputFormat::Json => {
                    serde_json::to_writer(std::io::stdout(), &summary)?;
                    println!();
                    Ok(())
                }
            }
        }
        None => {
            let mut cmd = Cli::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}
