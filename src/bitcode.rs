//! Batch LLVM bitcode builder.
//!
//! Lowers every file in a directory to bitcode plus a readable
//! disassembly through an external clang/llvm-dis pair. One bad input
//! never stops the batch; its error is reported and the rest proceed.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::{exec, terminal, Result};

/// Fixed compile flags: no optimization, full debug info, bitcode out.
/// The analysis passes that consume the artifacts assume exactly this
/// shape.
const CLANG_FLAGS: &[&str] = &["-c", "-g3", "-O0", "-emit-llvm"];

/// Batch builder configuration.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory whose entries are all attempted, whatever their names.
    pub in_dir: PathBuf,
    /// Directory receiving `.bc` and `.ll` artifacts; assumed to exist.
    pub out_dir: PathBuf,
    /// Compiler producing bitcode.
    pub clang: PathBuf,
    /// Disassembler producing readable IR.
    pub llvm_dis: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            in_dir: PathBuf::from("assign3-test0_29"),
            out_dir: PathBuf::from("build"),
            clang: PathBuf::from("/usr/local/llvm-10.0.1/bin/clang"),
            llvm_dis: PathBuf::from("/usr/local/llvm-10.0.1/bin/llvm-dis"),
        }
    }
}

impl BuildConfig {
    #[must_use]
    pub fn with_in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.in_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_clang(mut self, clang: impl Into<PathBuf>) -> Self {
        self.clang = clang.into();
        self
    }

    #[must_use]
    pub fn with_llvm_dis(mut self, llvm_dis: impl Into<PathBuf>) -> Self {
        self.llvm_dis = llvm_dis.into();
        self
    }
}

/// Outcome of building one file.
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub name: String,
    /// First tool error for this file, if any.
    pub error: Option<String>,
}

/// Aggregate results of a batch build.
#[derive(Debug, Clone, Default)]
pub struct BuildSummary {
    pub built: usize,
    pub failed: usize,
    pub failures: Vec<BuildResult>,
}

impl BuildSummary {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.built + self.failed
    }

    #[must_use]
    pub const fn all_built(&self) -> bool {
        self.failed == 0
    }

    pub fn add(&mut self, result: BuildResult) {
        if result.error.is_none() {
            self.built += 1;
        } else {
            self.failed += 1;
            self.failures.push(result);
        }
    }
}

/// Artifact base name for an input file: a literal `.c` suffix strip,
/// so `cac.c` keeps its inner characters and suffixless names pass
/// through whole.
#[must_use]
pub fn output_stem(file_name: &str) -> &str {
    file_name.strip_suffix(".c").unwrap_or(file_name)
}

/// Build one input into `<stem>.bc` and `<stem>.ll` inside the output
/// directory. A failed compile skips the doomed disassembly step.
#[must_use]
pub fn build_file(input: &Path, config: &BuildConfig) -> BuildResult {
    let name = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();
    let stem = output_stem(&name);
    let bc_path = config.out_dir.join(format!("{stem}.bc"));
    let ll_path = config.out_dir.join(format!("{stem}.ll"));

    let mut compile = Command::new(&config.clang);
    compile.args(CLANG_FLAGS).arg(input).arg("-o").arg(&bc_path);
    if let Err(e) = exec::run_checked(&mut compile) {
        return BuildResult {
            name,
            error: Some(e.to_string()),
        };
    }

    let mut disassemble = Command::new(&config.llvm_dis);
    disassemble.arg(&bc_path).arg("-o").arg(&ll_path);
    if let Err(e) = exec::run_checked(&mut disassemble) {
        return BuildResult {
            name,
            error: Some(e.to_string()),
        };
    }

    debug!(bc = %bc_path.display(), ll = %ll_path.display(), "artifacts written");
    BuildResult { name, error: None }
}

/// Build every entry of the input directory, in sorted order, behind a
/// progress bar. Per-file failures are reported as they happen and
/// collected in the summary; only a directory read error aborts.
pub fn build_all(config: &BuildConfig) -> Result<BuildSummary> {
    let mut inputs = Vec::new();
    for entry in fs::read_dir(&config.in_dir)? {
        inputs.push(entry?.path());
    }
    inputs.sort();

    let bar = progress_bar(inputs.len() as u64);
    let mut summary = BuildSummary::default();

    for input in &inputs {
        let result = build_file(input, config);
        if let Some(error) = &result.error {
            bar.suspend(|| terminal::warning(&format!("{}: {error}", result.name)));
        }
        summary.add(result);
        bar.inc(1);
    }

    bar.finish_and_clear();
    Ok(summary)
}

fn progress_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:30.cyan/dim}] {pos}/{len}")
            .unwrap()
            .progress_chars("━╸━"),
    );
    bar.set_message("building");
    bar
}
