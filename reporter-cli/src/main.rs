//! Binary crate for the `weather-reporter` command-line tool.
//!
//! This crate focuses on:
//! - Parsing the CLI argument
//! - Wiring the two upstream clients together
//! - Printing the report (or the error string) under the fixed header

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    cli::Cli::parse().run().await
}

/// Diagnostics go to stderr so stdout carries only the report contract.
/// `RUST_LOG` overrides the default `warn` filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
