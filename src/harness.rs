//! Differential test runner.
//!
//! Each test source is executed two ways: natively, by compiling a
//! stubbed variant and capturing its stderr (the reference trace), and
//! through the external AST interpreter (the candidate trace). A test
//! passes when the two traces are byte-identical; nothing else, exit
//! codes included, takes part in the verdict.

use std::fs;
use std::path::{Path, PathBuf};

use console::style;
use tracing::debug;

use crate::{trace, variant, Error, Result};

/// Verdict of one differential test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Pass,
    Fail,
}

/// Result of one differential test.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Test file name, e.g. `test21.c`.
    pub name: String,
    pub status: TestStatus,
    /// Reference trace from the native build, kept for diagnosis.
    pub reference: String,
    /// Candidate trace from the interpreter.
    pub candidate: String,
}

impl TestResult {
    /// Compare two traces byte-for-byte and record the verdict.
    #[must_use]
    pub fn from_traces(name: impl Into<String>, reference: String, candidate: String) -> Self {
        let status = if reference == candidate {
            TestStatus::Pass
        } else {
            TestStatus::Fail
        };
        Self {
            name: name.into(),
            status,
            reference,
            candidate,
        }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == TestStatus::Pass
    }
}

/// Aggregate results of a test run.
#[derive(Debug, Clone, Default)]
pub struct TestSummary {
    pub passed: usize,
    pub failed: usize,
    /// Failing results, in run order.
    pub failures: Vec<TestResult>,
}

impl TestSummary {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.passed + self.failed
    }

    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn add(&mut self, result: TestResult) {
        match result.status {
            TestStatus::Pass => self.passed += 1,
            TestStatus::Fail => {
                self.failed += 1;
                self.failures.push(result);
            }
        }
    }
}

/// Test runner configuration.
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Directory scanned for `.c` test sources.
    pub test_dir: PathBuf,
    /// Name of the variant directory, resolved inside `test_dir`.
    pub variant_subdir: String,
    /// External AST interpreter executable.
    pub interpreter: PathBuf,
    /// Native C compiler for reference builds.
    pub cc: String,
    /// Only run tests whose file name contains this pattern.
    pub filter: Option<String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            test_dir: PathBuf::from("tests"),
            variant_subdir: "tests-std-c".to_string(),
            interpreter: PathBuf::from("build/ast-interpreter"),
            cc: "gcc".to_string(),
            filter: None,
        }
    }
}

impl TestConfig {
    #[must_use]
    pub fn with_test_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.test_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_variant_subdir(mut self, subdir: impl Into<String>) -> Self {
        self.variant_subdir = subdir.into();
        self
    }

    #[must_use]
    pub fn with_interpreter(mut self, interpreter: impl Into<PathBuf>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    #[must_use]
    pub fn with_cc(mut self, cc: impl Into<String>) -> Self {
        self.cc = cc.into();
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Directory receiving generated variants and compiled binaries.
    #[must_use]
    pub fn variant_dir(&self) -> PathBuf {
        self.test_dir.join(&self.variant_subdir)
    }
}

/// Discover test sources: regular files directly under `test_dir` with
/// a `.c` suffix, sorted by path. Subdirectories are not descended
/// into, which keeps generated variants out of the next run.
pub fn discover_tests(test_dir: &Path, filter: Option<&str>) -> Result<Vec<PathBuf>> {
    let mut tests = Vec::new();

    for entry in fs::read_dir(test_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".c") {
            continue;
        }
        if let Some(pattern) = filter {
            if !name.contains(pattern) {
                continue;
            }
        }
        tests.push(path);
    }

    tests.sort();
    Ok(tests)
}

/// Create the variant directory if needed.
///
/// A path that exists but is not a directory is a configuration error,
/// not something to overwrite.
pub fn prepare_variant_dir(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Run one differential test.
///
/// `Err` means the run cannot usefully continue: variant IO failed, the
/// native compile failed, or the interpreter itself gave up. A trace
/// mismatch is an `Ok` result carrying [`TestStatus::Fail`].
pub fn run_case(source: &Path, config: &TestConfig) -> Result<TestResult> {
    let name = source
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    let variant_path = config.variant_dir().join(&name);
    variant::write_variant(source, &variant_path)?;
    debug!(variant = %variant_path.display(), "variant written");

    let reference = trace::reference_trace(&variant_path, &config.cc)?;
    let candidate = trace::candidate_trace(source, &config.interpreter)?;

    Ok(TestResult::from_traces(name, reference, candidate))
}

/// Run every discovered test, printing one line per test as it goes.
///
/// Stops at the first fatal error; trace mismatches are recorded and
/// the run continues.
pub fn run_all(config: &TestConfig) -> Result<TestSummary> {
    prepare_variant_dir(&config.variant_dir())?;

    let tests = discover_tests(&config.test_dir, config.filter.as_deref())?;
    let total = tests.len();
    let mut summary = TestSummary::default();

    for (index, source) in tests.iter().enumerate() {
        let result = run_case(source, config)?;
        print_result(&result, index + 1, total);
        summary.add(result);
    }

    Ok(summary)
}

/// Print a per-test line; failures echo both traces, quoted so
/// whitespace differences stay visible.
pub fn print_result(result: &TestResult, index: usize, total: usize) {
    match result.status {
        TestStatus::Pass => {
            println!(
                "[{index}/{total}] {} {}",
                style("PASS").green().bold(),
                result.name
            );
        }
        TestStatus::Fail => {
            println!(
                "[{index}/{total}] {} {}",
                style("FAIL").red().bold(),
                result.name
            );
            println!("  reference: {}", style(format!("{:?}", result.reference)).red());
            println!("  candidate: {}", style(format!("{:?}", result.candidate)).red());
        }
    }
}

/// Print the aggregate verdict for the whole run.
pub fn print_summary(summary: &TestSummary) {
    println!();
    if summary.all_passed() {
        println!(
            "{}",
            style(format!("All {} tests passed", summary.total())).green().bold()
        );
    } else {
        println!(
            "{}",
            style(format!("{} of {} tests failed", summary.failed, summary.total()))
                .red()
                .bold()
        );
        for failure in &summary.failures {
            println!("  {}", failure.name);
        }
    }
}

#[cfg(test)]
mod test_harness {
    use super::*;

    #[test]
    fn equal_traces_pass() {
        let result = TestResult::from_traces("t.c", "34".to_string(), "34".to_string());
        assert!(result.passed());
    }

    #[test]
    fn trace_comparison_is_byte_exact() {
        let result = TestResult::from_traces("t.c", "34".to_string(), "34 ".to_string());
        assert_eq!(result.status, TestStatus::Fail);

        let empty = TestResult::from_traces("t.c", String::new(), String::new());
        assert!(empty.passed());
    }

    #[test]
    fn summary_counts_and_keeps_failures() {
        let mut summary = TestSummary::default();
        summary.add(TestResult::from_traces("a.c", "1".into(), "1".into()));
        summary.add(TestResult::from_traces("b.c", "2".into(), "3".into()));
        summary.add(TestResult::from_traces("c.c", "4".into(), "4".into()));

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert!(!summary.all_passed());
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].name, "b.c");
    }

    #[test]
    fn empty_summary_passes() {
        let summary = TestSummary::default();
        assert!(summary.all_passed());
        assert_eq!(summary.total(), 0);
    }

    #[test]
    fn discovery_filters_suffix_and_pattern() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("test1.c"), "").unwrap();
        fs::write(dir.path().join("test2.c"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("test3.c"), "").unwrap();

        let all = discover_tests(dir.path(), None).unwrap();
        let names: Vec<_> = all
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["test1.c", "test2.c"]);

        let filtered = discover_tests(dir.path(), Some("test2")).unwrap();
        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].ends_with("test2.c"));
    }

    #[test]
    fn discovery_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zz.c", "aa.c", "mm.c"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let tests = discover_tests(dir.path(), None).unwrap();
        let names: Vec<_> = tests
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["aa.c", "mm.c", "zz.c"]);
    }

    #[test]
    fn variant_dir_conflict_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let clash = dir.path().join("tests-std-c");
        fs::write(&clash, "not a directory").unwrap();

        let err = prepare_variant_dir(&clash).unwrap_err();
        assert!(matches!(err, Error::NotADirectory(_)));
    }

    #[test]
    fn variant_dir_is_created_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("tests-std-c");

        prepare_variant_dir(&target).unwrap();
        assert!(target.is_dir());

        // Idempotent on a second call.
        prepare_variant_dir(&target).unwrap();
    }

    #[test]
    fn variant_dir_joins_subdir_under_test_dir() {
        let config = TestConfig::default()
            .with_test_dir("/work/tests")
            .with_variant_subdir("gen");
        assert_eq!(config.variant_dir(), PathBuf::from("/work/tests/gen"));
    }
}
