//! Binary crate for the `yr` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Prompting for coordinates that were not passed as arguments
//! - Human-friendly output formatting

use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Target};

mod cli;
mod report;

#[tokio::main]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();

    Builder::new()
        .filter_level(cmd.log_level())
        .target(Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
