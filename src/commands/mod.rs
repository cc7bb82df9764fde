//! Command implementations.
//!
//! Each submodule handles a specific CLI command.

mod build;

use crate::cli::{Cli, Commands};

/// Dispatch CLI command to the appropriate handler.
pub fn run_command(cli: &Cli) -> i32 {
    match &cli.command {
        Commands::Test { .. } => handle_test(cli),
        Commands::Build { .. } => handle_build(cli),
    }
}

fn handle_test(cli: &Cli) -> i32 {
    let Commands::Test {
        input,
        output,
        interp,
        cc,
        filter,
    } = &cli.command
    else {
        unreachable!("test command variant mismatch");
    };

    test::cmd_test(input, output, interp, cc, filter.as_deref())
}

fn handle_build(cli: &Cli) -> i32 {
    let Commands::Build {
        input,
        output,
        clang,
        llvm_dis,
    } = &cli.command
    else {
        unreachable!("build command variant mismatch");
    };

    build::cmd_build(input, output, clang, llvm_dis)
}
