//! Differential testing and batch bitcode builds for a mini-C AST
//! interpreter.
//!
//! The interpreter under test consumes a source file's text through
//! `argv[1]` and reports observable behavior on stderr via a `PRINT`
//! primitive. The test runner compiles a stubbed variant of each test
//! natively to produce a reference trace and compares the interpreter's
//! trace against it byte-for-byte. The builder lowers a directory of
//! sources to LLVM bitcode and disassembly for the analysis passes that
//! consume them.
//!
//! ```no_run
//! use ccheck::harness::{self, TestConfig};
//!
//! # fn main() -> ccheck::Result<()> {
//! let config = TestConfig::default()
//!     .with_test_dir("tests")
//!     .with_interpreter("build/ast-interpreter");
//! let summary = harness::run_all(&config)?;
//! assert!(summary.all_passed());
//! # Ok(())
//! # }
//! ```

pub mod bitcode;
pub mod exec;
pub mod harness;
pub mod terminal;
pub mod trace;
pub mod variant;

mod error;

pub use bitcode::{BuildConfig, BuildResult, BuildSummary};
pub use error::{Error, Result};
pub use harness::{TestConfig, TestResult, TestStatus, TestSummary};
