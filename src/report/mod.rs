//! Reporting boundary
//!
//! The harness produces per-case results and nothing else. This module is where they get aggregated and shown.
//!
//! ## Reporter Trait
//!
//! Sessions drive a [`Reporter`] through the lifecycle of a run. Two implementations ship with the crate:
//!
//! - [`ConsoleReporter`] - pytest-style text, optionally colored
//! - [`JsonReporter`] - one JSON object per line
//!
//! Custom formats (TAP, JUnit, ...) implement the trait.

mod console;
mod json;

use std::fmt::Debug;
use std::io;
use std::time::Duration;

use serde::Serialize;

use crate::harness::{AssertionResult, CaseOutcome};

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Type-erased view of one case result, as handed to reporters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseRecord {
    pub suite: String,
    pub name: String,
    pub passed: bool,
    /// `Debug` rendering of the actual value
    pub actual: String,
    /// `Debug` rendering of the expected value
    pub expected: String,
    /// Failure message, empty when the case passed
    pub message: String,
}

impl CaseRecord {
    /// Build a record from an assertion result.
    pub fn new<T: Debug>(suite: &str, name: &str, result: &AssertionResult<T>) -> Self {
        Self {
            suite: suite.to_string(),
            name: name.to_string(),
            passed: result.is_passed(),
            actual: format!("{:?}", result.actual()),
            expected: format!("{:?}", result.expected()),
            message: result.message().to_string(),
        }
    }

    /// Build a record from a runner outcome.
    pub fn from_outcome<I, O: Debug>(suite: &str, outcome: &CaseOutcome<I, O>) -> Self {
        Self::new(suite, outcome.case.name(), &outcome.result)
    }

    /// `suite::name`, the identifier used in console output.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.suite, self.name)
    }
}

/// Aggregate counts for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration: Duration,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one case result.
    pub fn record(&mut self, record: &CaseRecord) {
        self.total += 1;
        if record.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    /// True when every recorded case passed (vacuously true for an empty run).
    pub fn success(&self) -> bool {
        self.failed == 0
    }
}

/// Receives the events of a run.
///
/// Implement this trait to customize output format. Methods return `io::Result` because every reporter in practice
/// writes somewhere that can fail.
pub trait Reporter {
    /// Called once before any suite runs
    fn on_run_start(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Called when a suite begins, with the number of cases selected from it
    fn on_suite_start(&mut self, suite: &str, case_count: usize) -> io::Result<()>;

    /// Called for every case, in input order
    fn on_case_complete(&mut self, record: &CaseRecord) -> io::Result<()>;

    /// Called after the last case of a suite
    fn on_suite_complete(&mut self, _suite: &str) -> io::Result<()> {
        Ok(())
    }

    /// Called when all suites have completed
    fn on_run_complete(&mut self, summary: &RunSummary) -> io::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::check;

    #[test]
    fn test_record_from_failed_result() {
        let result = check("Hello, World".to_string(), "Hola, Elodie".to_string(), "in Spanish");
        let record = CaseRecord::new("hello", "in Spanish", &result);
        assert!(!record.passed);
        assert_eq!(record.actual, r#""Hello, World""#);
        assert_eq!(record.expected, r#""Hola, Elodie""#);
        assert_eq!(record.qualified_name(), "hello::in Spanish");
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = RunSummary::new();
        summary.record(&CaseRecord::new("adder", "a", &check(4, 4, "a")));
        summary.record(&CaseRecord::new("adder", "b", &check(4, 8, "b")));
        assert_eq!(summary.total, 2);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert!(!summary.success());
    }

    #[test]
    fn test_empty_summary_is_success() {
        assert!(RunSummary::new().success());
    }
}
