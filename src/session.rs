//! Test session
//!
//! A session runs a list of built-in suites through one [`CaseRunner`] and feeds the results to a [`Reporter`] in
//! case order. It owns the aggregate [`RunSummary`]; the runner and the assertion core never see more than one suite.

use std::time::Instant;

use crate::catalog::{self, SuiteKind};
use crate::harness::{CaseRunner, HarnessResult};
use crate::report::{Reporter, RunSummary};

/// Runs selected suites and reports them.
#[derive(Debug, Clone, Default)]
pub struct Session {
    runner: CaseRunner,
    filter: Option<String>,
    mutants: bool,
}

impl Session {
    pub fn new(runner: CaseRunner) -> Self {
        Self {
            runner,
            filter: None,
            mutants: false,
        }
    }

    /// Only run cases whose name contains `keyword`
    pub fn with_filter(mut self, keyword: impl Into<String>) -> Self {
        self.filter = Some(keyword.into());
        self
    }

    /// Swap every subject for its mutant
    pub fn with_mutants(mut self, mutants: bool) -> Self {
        self.mutants = mutants;
        self
    }

    /// Run `suites` in order, reporting every case.
    pub fn run(&self, suites: &[SuiteKind], reporter: &mut dyn Reporter) -> HarnessResult<RunSummary> {
        let start = Instant::now();
        let mut summary = RunSummary::new();

        tracing::info!(
            suites = suites.len(),
            parallel = self.runner.config().parallel,
            mutants = self.mutants,
            "starting session"
        );
        reporter.on_run_start()?;

        for &kind in suites {
            let records = catalog::run_suite(kind, &self.runner, self.filter.as_deref(), self.mutants)?;
            reporter.on_suite_start(kind.as_str(), records.len())?;
            for record in &records {
                summary.record(record);
                reporter.on_case_complete(record)?;
            }
            reporter.on_suite_complete(kind.as_str())?;
        }

        summary.duration = start.elapsed();
        reporter.on_run_complete(&summary)?;

        tracing::info!(
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            "session finished"
        );
        Ok(summary)
    }
}
