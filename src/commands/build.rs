//! Batch bitcode build command.

use std::path::Path;

use tracing::info;

use ccheck::bitcode::{self, BuildConfig};
use ccheck::terminal;

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS};

/// Handle the `build` command.
///
/// Per-file tool failures are reported during the run and summarized;
/// they do not affect the exit code. Only a broken configuration does.
pub fn cmd_build(input: &Path, output: &Path, clang: &Path, llvm_dis: &Path) -> i32 {
    if !input.is_dir() {
        terminal::error(&format!("input directory not found: {}", input.display()));
        return EXIT_FAILURE;
    }
    if !output.is_dir() {
        terminal::error(&format!("output directory not found: {}", output.display()));
        return EXIT_FAILURE;
    }

    info!(
        input = %input.display(),
        output = %output.display(),
        "building bitcode"
    );

    let config = BuildConfig::default()
        .with_in_dir(input)
        .with_out_dir(output)
        .with_clang(clang)
        .with_llvm_dis(llvm_dis);

    match bitcode::build_all(&config) {
        Ok(summary) => {
            if summary.all_built() {
                terminal::success(&format!("built {} files", summary.built));
            } else {
                terminal::warning(&format!(
                    "built {} files, {} failed",
                    summary.built, summary.failed
                ));
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            terminal::error(&e.to_string());
            EXIT_FAILURE
        }
    }
}
