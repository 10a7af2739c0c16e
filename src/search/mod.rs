//! Core search module.
//!
//! This module hosts the `run_search` implementation along with the
//! pure index scan and the results-file sink used by the CLI.

pub mod engine;
pub mod sink;
