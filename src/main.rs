use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod console;
mod cue;
mod error;
mod library;
mod metadata;
mod runtime;
mod template;

fn main() -> ExitCode {
    let args = cli::Args::parse();

    // Logs go to stderr; stdout carries the progress echo.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cuegen=warn")),
        )
        .init();

    runtime::run(&args.template)
}
