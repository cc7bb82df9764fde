//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "ccheck")]
#[command(about = "Differential test harness and bitcode builder for a mini-C AST interpreter")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (sets RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output (only show errors)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub silent: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run differential tests: interpreter vs natively compiled reference
    Test {
        /// Directory of .c test sources
        #[arg(short, long, default_value = "tests")]
        input: PathBuf,

        /// Variant directory name, resolved inside the input directory
        #[arg(short, long, default_value = "tests-std-c")]
        output: String,

        /// Path to the AST interpreter executable
        #[arg(long, default_value = "build/ast-interpreter")]
        interp: PathBuf,

        /// C compiler for reference builds
        #[arg(long, default_value = "gcc")]
        cc: String,

        /// Only run tests whose file name contains PATTERN
        #[arg(long, value_name = "PATTERN")]
        filter: Option<String>,
    },

    /// Compile every file in a directory to LLVM bitcode and disassembly
    Build {
        /// Input directory of test sources
        #[arg(short, long, default_value = "assign3-test0_29")]
        input: PathBuf,

        /// Output directory for .bc/.ll artifacts (must exist)
        #[arg(short, long, default_value = "build")]
        output: PathBuf,

        /// Compiler used to emit bitcode
        #[arg(long, default_value = "/usr/local/llvm-10.0.1/bin/clang")]
        clang: PathBuf,

        /// Disassembler used to produce readable IR
        #[arg(long, default_value = "/usr/local/llvm-10.0.1/bin/llvm-dis")]
        llvm_dis: PathBuf,
    },
}

#[cfg(test)]
mod test_cli {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_the_project_layout() {
        let cli = Cli::parse_from(["ccheck", "test"]);
        let Commands::Test {
            input,
            output,
            interp,
            cc,
            filter,
        } = cli.command
        else {
            panic!("expected test command");
        };
        assert_eq!(input, PathBuf::from("tests"));
        assert_eq!(output, "tests-std-c");
        assert_eq!(interp, PathBuf::from("build/ast-interpreter"));
        assert_eq!(cc, "gcc");
        assert!(filter.is_none());
    }

    #[test]
    fn build_defaults_match_the_course_toolchain() {
        let cli = Cli::parse_from(["ccheck", "build"]);
        let Commands::Build {
            input,
            output,
            clang,
            llvm_dis,
        } = cli.command
        else {
            panic!("expected build command");
        };
        assert_eq!(input, PathBuf::from("assign3-test0_29"));
        assert_eq!(output, PathBuf::from("build"));
        assert_eq!(clang, PathBuf::from("/usr/local/llvm-10.0.1/bin/clang"));
        assert_eq!(llvm_dis, PathBuf::from("/usr/local/llvm-10.0.1/bin/llvm-dis"));
    }

    #[test]
    fn verbose_and_silent_conflict() {
        let result = Cli::try_parse_from(["ccheck", "-v", "-s", "test"]);
        assert!(result.is_err());
    }
}
