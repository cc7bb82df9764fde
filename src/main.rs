//! ccheck CLI - differential tests and bitcode builds for a mini-C AST
//! interpreter.

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Per-test result lines carry the signal during test runs, so logs
    // default quieter there than for builds.
    let default_level = if cli.silent {
        "ccheck=error"
    } else if cli.verbose {
        "ccheck=debug"
    } else {
        match cli.command {
            Commands::Test { .. } => "ccheck=warn",
            Commands::Build { .. } => "ccheck=info",
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(default_level.parse().unwrap()),
        )
        .with_target(false)
        .init();

    let exit_code = commands::run_command(&cli);
    std::process::exit(exit_code);
}
