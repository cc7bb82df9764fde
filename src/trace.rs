//! Trace capture.
//!
//! The observable behavior of a test is whatever it writes to stderr
//! through the `PRINT` primitive. Both executions inherit the parent's
//! stdin so tests built around `GET` can still be driven interactively.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::exec;
use crate::Result;

/// Compile `variant` with the native C compiler, run the binary, and
/// return its stderr as the reference trace.
///
/// Only the compile step's exit status is checked. The compiled test
/// picks its own exit code and that code is not part of the oracle;
/// the trace alone is.
pub fn reference_trace(variant: &Path, cc: &str) -> Result<String> {
    let binary = binary_path(variant);

    let mut compile = Command::new(cc);
    compile.arg(variant).arg("-o").arg(&binary);
    exec::run_checked(&mut compile)?;

    let mut run = Command::new(&binary);
    run.stdin(Stdio::inherit());
    let captured = exec::run_captured(&mut run)?;
    Ok(captured.stderr)
}

/// Run the interpreter on the original source and return its stderr as
/// the candidate trace.
///
/// The interpreter consumes source text through `argv[1]`, so the whole
/// file is passed as one argument. A non-zero exit means the interpreter
/// itself gave up and is an error, not a trace mismatch.
pub fn candidate_trace(source: &Path, interpreter: &Path) -> Result<String> {
    let text = fs::read_to_string(source)?;

    let mut run = Command::new(interpreter);
    run.arg(text).stdin(Stdio::inherit());
    let captured = exec::run_checked(&mut run)?;
    Ok(captured.stderr)
}

/// Path of the compiled binary for a variant: the variant path with
/// `.out` appended, so artifacts stay next to their sources.
#[must_use]
pub fn binary_path(variant: &Path) -> PathBuf {
    let mut name = variant.as_os_str().to_os_string();
    name.push(".out");
    PathBuf::from(name)
}
