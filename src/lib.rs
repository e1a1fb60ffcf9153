#![forbid(unsafe_code)]
//! casebook: a table-driven test harness for pure functions
//!
//! A suite is an ordered table of named cases, each holding the inputs for a subject function and the value it should
//! return. The runner evaluates every case, the assertion core compares actual with expected, and a reporter
//! aggregates the results.
//!
//! ## Layers
//!
//! - `harness` - assertion core, cases and suites, the runner, example-output checks
//! - `report` - the reporting boundary (console and JSON reporters, run summaries)
//! - `catalog` - built-in suites for the greeter and adder subjects, plus their mutants
//! - `session` - runs catalog suites through a runner and a reporter
//! - `cli` - command-line entry point
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod catalog;
pub mod cli;
pub mod harness;
pub mod report;
pub mod session;
pub mod version;

pub use harness::{AssertionResult, CaseOutcome, CaseRunner, RunConfig, Suite, TestCase, check};
pub use report::{CaseRecord, Reporter, RunSummary};
pub use session::Session;
