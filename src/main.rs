use std::process::ExitCode;

mod cli;
mod index;
mod models;
mod search;

fn main() -> ExitCode {
    init_logging();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize structured logging on stderr.
///
/// Logging is silent unless `RUST_LOG` enables it, keeping stdout
/// clean for `--format=json` consumers.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .compact()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
