//! Subprocess plumbing shared by the test runner and the bitcode builder.
//!
//! Every tool is invoked with an explicit argument array; no shell is
//! involved anywhere, so arguments holding whole source files or paths
//! with spaces need no quoting.

use std::ffi::OsStr;
use std::process::{Command, ExitStatus, Output};

use crate::{Error, Result};

/// Captured output of a finished subprocess.
#[derive(Debug)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for CapturedOutput {
    fn from(output: Output) -> Self {
        Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Run the command to completion, capturing stdout and stderr.
///
/// Only launch failures (missing binary, permissions) are errors here;
/// callers decide what a non-zero exit status means.
pub fn run_captured(cmd: &mut Command) -> Result<CapturedOutput> {
    let command = render_command(cmd);
    let output = cmd.output().map_err(|source| Error::Launch { command, source })?;
    Ok(output.into())
}

/// Run the command and require a zero exit status.
pub fn run_checked(cmd: &mut Command) -> Result<CapturedOutput> {
    let captured = run_captured(cmd)?;
    if captured.status.success() {
        Ok(captured)
    } else {
        Err(Error::CommandFailed {
            command: render_command(cmd),
            status: captured.status,
            stderr: captured.stderr,
        })
    }
}

/// Render a command line for diagnostics.
///
/// The interpreter receives entire source files as a single argument,
/// so long arguments are elided rather than echoed in full.
#[must_use]
pub fn render_command(cmd: &Command) -> String {
    let mut rendered = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        rendered.push(' ');
        rendered.push_str(&render_arg(arg));
    }
    rendered
}

fn render_arg(arg: &OsStr) -> String {
    const MAX_CHARS: usize = 64;
    let text = arg.to_string_lossy();
    let mut rendered: String = text.chars().take(MAX_CHARS).collect();
    if rendered.len() < text.len() {
        rendered.push_str("...");
    }
    if rendered.contains(char::is_whitespace) {
        format!("\"{}\"", rendered.replace('\n', "\\n"))
    } else {
        rendered
    }
}
