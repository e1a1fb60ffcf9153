//! Harness error types
//!
//! A value mismatch is not an error inside the harness: it is a failed [`AssertionResult`]. The types here cover the
//! two places where an `Err` is the right shape:
//!
//! - [`ValueMismatch`] - a failed assertion converted on demand, so it can travel through `?` in ordinary tests.
//! - [`HarnessError`] - malformed suites and reporting failures in the surrounding tooling.
//!
//! [`AssertionResult`]: super::assertion::AssertionResult

use miette::Diagnostic;
use thiserror::Error;

/// A failed comparison, rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(casebook::value_mismatch))]
pub struct ValueMismatch {
    /// Label of the check that failed
    pub context: String,
    /// `Debug` rendering of the actual value
    pub actual: String,
    /// `Debug` rendering of the expected value
    pub expected: String,
    /// Full failure message (`<context>: got <actual> want <expected>`)
    pub message: String,
}

/// Errors raised while building suites or reporting runs.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    #[error("duplicate case name `{name}` in suite `{suite}`")]
    #[diagnostic(
        code(casebook::duplicate_case_name),
        help("case names attribute results; give every case in a suite a distinct name")
    )]
    DuplicateCaseName { suite: String, name: String },

    #[error("case #{index} in suite `{suite}` has an empty name")]
    #[diagnostic(code(casebook::empty_case_name), help("name every case after the behavior it checks"))]
    EmptyCaseName { suite: String, index: usize },

    #[error("unknown suite `{0}`")]
    #[diagnostic(code(casebook::unknown_suite), help("run `casebook list` to see the available suites"))]
    UnknownSuite(String),

    #[error("failed to write report: {0}")]
    #[diagnostic(code(casebook::report))]
    Report(#[from] std::io::Error),
}

/// Result alias for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;
