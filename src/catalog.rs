//! Built-in suites
//!
//! The tables for the two tutorial subjects (the greeter and the adder) plus the documented-output example for the
//! adder. Each subject also has a mutant: a deliberately wrong implementation that the tables must catch.

use std::fmt;
use std::str::FromStr;

use casebook_subjects::{add, hello};

use crate::harness::{CaseRunner, Example, HarnessError, HarnessResult, Suite, check_example};
use crate::report::CaseRecord;

/// Inputs of the greeter: `(name, language)`.
pub type GreetingInputs = (&'static str, &'static str);

/// Inputs of the adder: `(a, b)`.
pub type AdderInputs = (i64, i64);

/// Names of the built-in suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuiteKind {
    Hello,
    Adder,
    Examples,
}

impl SuiteKind {
    pub const ALL: [SuiteKind; 3] = [SuiteKind::Hello, SuiteKind::Adder, SuiteKind::Examples];

    pub fn as_str(self) -> &'static str {
        match self {
            SuiteKind::Hello => "hello",
            SuiteKind::Adder => "adder",
            SuiteKind::Examples => "adder_examples",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SuiteKind::Hello => "greeting by name and language",
            SuiteKind::Adder => "integer addition",
            SuiteKind::Examples => "documented output of the adder example",
        }
    }
}

impl fmt::Display for SuiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuiteKind {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SuiteKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| HarnessError::UnknownSuite(s.to_string()))
    }
}

/// Greeting table: one row per scenario, including the empty-name default.
pub fn hello_suite() -> HarnessResult<Suite<GreetingInputs, String>> {
    Suite::builder(SuiteKind::Hello.as_str())
        .case("saying hello to people", ("Max", "English"), "Hello, Max")
        .case("say hello to empty string", ("", "English"), "Hello, World")
        .case("in Spanish", ("Elodie", "Spanish"), "Hola, Elodie")
        .case("in French", ("James", "French"), "Bonjour, James")
        .build()
}

pub fn adder_suite() -> HarnessResult<Suite<AdderInputs, i64>> {
    Suite::builder(SuiteKind::Adder.as_str())
        .case("2 + 2", (2, 2), 4)
        .case("5 + 3", (5, 3), 8)
        .case("5 + 5", (5, 5), 10)
        .build()
}

/// Documented-output examples for the adder.
pub fn adder_examples() -> Vec<Example> {
    vec![Example::new("example add", "8\n10", example_add)]
}

fn example_add(out: &mut dyn fmt::Write) -> fmt::Result {
    writeln!(out, "{}", add(5, 3))?;
    writeln!(out, "{}", add(5, 5))
}

/// Greeter mutant: ignores its inputs.
pub fn constant_greeting(_name: &str, _language: &str) -> String {
    "Hello, World".to_string()
}

/// Adder mutant: the hard-coded answer that satisfies only `2 + 2`.
pub fn sham_add(_a: i64, _b: i64) -> i64 {
    4
}

fn example_sham_add(out: &mut dyn fmt::Write) -> fmt::Result {
    writeln!(out, "{}", sham_add(5, 3))?;
    writeln!(out, "{}", sham_add(5, 5))
}

/// Run one built-in suite and return its records in case order.
///
/// `filter` keeps cases whose name contains the keyword; `mutants` swaps each subject for its mutant.
pub fn run_suite(
    kind: SuiteKind,
    runner: &CaseRunner,
    filter: Option<&str>,
    mutants: bool,
) -> HarnessResult<Vec<CaseRecord>> {
    let suite_name = kind.as_str();
    let records: Vec<CaseRecord> = match kind {
        SuiteKind::Hello => {
            let suite = select(hello_suite()?, filter);
            let outcomes = if mutants {
                runner.run_all(&constant_greeting, suite)
            } else {
                runner.run_all(&hello, suite)
            };
            outcomes.iter().map(|o| CaseRecord::from_outcome(suite_name, o)).collect()
        }
        SuiteKind::Adder => {
            let suite = select(adder_suite()?, filter);
            let outcomes = if mutants {
                runner.run_all(&sham_add, suite)
            } else {
                runner.run_all(&add, suite)
            };
            outcomes.iter().map(|o| CaseRecord::from_outcome(suite_name, o)).collect()
        }
        SuiteKind::Examples => adder_examples()
            .into_iter()
            .filter(|example| filter.is_none_or(|keyword| example.name().contains(keyword)))
            .map(|example| {
                let example = if mutants {
                    Example::new(example.name(), example.expected_output(), example_sham_add)
                } else {
                    example
                };
                CaseRecord::new(suite_name, example.name(), &check_example(&example))
            })
            .collect(),
    };
    Ok(records)
}

fn select<I, O>(suite: Suite<I, O>, filter: Option<&str>) -> Suite<I, O> {
    match filter {
        Some(keyword) => suite.filtered(keyword),
        None => suite,
    }
}
