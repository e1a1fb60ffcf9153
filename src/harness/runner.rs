//! Case runner
//!
//! Drives one subject across an ordered table of cases and pairs every case with its [`AssertionResult`]. Every case
//! is evaluated, failures included; there is no early exit, retry, or timeout.
//!
//! ## Parallel mode
//!
//! With [`RunConfig::parallel`] set, cases are evaluated on a rayon pool: the current one, or a dedicated pool of
//! [`RunConfig::threads`] workers when a count is given. Results are collected by position, so the returned outcomes
//! are in input order no matter which case finishes first. If a dedicated pool cannot be created the runner logs a
//! warning and evaluates sequentially.

use std::fmt::Debug;

use rayon::prelude::*;

use super::assertion::{AssertionResult, check};
use super::case::{Suite, TestCase};
use super::subject::Subject;

/// Configuration for the case runner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Evaluate cases on a rayon pool
    pub parallel: bool,
    /// Worker count for parallel runs (`None` lets rayon decide)
    pub threads: Option<usize>,
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel evaluation
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the worker count used in parallel mode
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}

/// A case together with the result of running it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome<I, O> {
    pub case: TestCase<I, O>,
    pub result: AssertionResult<O>,
}

impl<I, O> CaseOutcome<I, O> {
    pub fn is_passed(&self) -> bool {
        self.result.is_passed()
    }
}

/// Runs subjects over case tables.
#[derive(Debug, Clone, Default)]
pub struct CaseRunner {
    config: RunConfig,
}

impl CaseRunner {
    /// Create a sequential runner.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run every case of `suite` through `subject`.
    pub fn run_all<S, I, O>(&self, subject: &S, suite: Suite<I, O>) -> Vec<CaseOutcome<I, O>>
    where
        S: Subject<I, O> + Sync,
        I: Send,
        O: PartialEq + Debug + Clone + Send,
    {
        let (name, cases) = suite.into_parts();
        let span = tracing::debug_span!("suite", suite = %name, cases = cases.len());
        let _enter = span.enter();

        let outcomes = self.run_cases(subject, cases);

        let failed = outcomes.iter().filter(|o| !o.is_passed()).count();
        tracing::debug!(total = outcomes.len(), failed, "suite finished");
        outcomes
    }

    /// Run an arbitrary ordered sequence of cases through `subject`.
    pub fn run_cases<S, I, O>(
        &self,
        subject: &S,
        cases: impl IntoIterator<Item = TestCase<I, O>>,
    ) -> Vec<CaseOutcome<I, O>>
    where
        S: Subject<I, O> + Sync,
        I: Send,
        O: PartialEq + Debug + Clone + Send,
    {
        let cases: Vec<_> = cases.into_iter().collect();
        if self.config.parallel && cases.len() > 1 {
            self.run_parallel(subject, cases)
        } else {
            run_sequential(subject, cases)
        }
    }

    fn run_parallel<S, I, O>(&self, subject: &S, cases: Vec<TestCase<I, O>>) -> Vec<CaseOutcome<I, O>>
    where
        S: Subject<I, O> + Sync,
        I: Send,
        O: PartialEq + Debug + Clone + Send,
    {
        let Some(threads) = self.config.threads else {
            return cases.into_par_iter().map(|case| run_case(subject, case)).collect();
        };

        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(|| cases.into_par_iter().map(|case| run_case(subject, case)).collect()),
            Err(e) => {
                tracing::warn!("failed to create thread pool ({e}), running sequentially");
                run_sequential(subject, cases)
            }
        }
    }
}

fn run_sequential<S, I, O>(subject: &S, cases: Vec<TestCase<I, O>>) -> Vec<CaseOutcome<I, O>>
where
    S: Subject<I, O>,
    O: PartialEq + Debug + Clone,
{
    cases.into_iter().map(|case| run_case(subject, case)).collect()
}

fn run_case<S, I, O>(subject: &S, case: TestCase<I, O>) -> CaseOutcome<I, O>
where
    S: Subject<I, O>,
    O: PartialEq + Debug + Clone,
{
    let actual = subject.call(case.inputs());
    let result = check(actual, case.expected().clone(), case.name());
    tracing::trace!(case = case.name(), passed = result.is_passed(), "case evaluated");
    CaseOutcome { case, result }
}
