use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Harness errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{} exists but is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        source: std::io::Error,
    },

    /// A tool whose exit status is part of the contract returned non-zero.
    /// `stderr` carries whatever diagnostics the tool produced.
    #[error("`{command}` exited with {status}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
