//! Test cases and suites
//!
//! A [`TestCase`] is one named row of a table: the inputs handed to the subject and the value it should return. A
//! [`Suite`] is an ordered table of cases whose names are checked for uniqueness when the suite is built, since names
//! are how results get attributed.

use std::collections::HashSet;

use super::errors::{HarnessError, HarnessResult};

/// One named input/expected-output pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase<I, O> {
    name: String,
    inputs: I,
    expected: O,
}

impl<I, O> TestCase<I, O> {
    pub fn new(name: impl Into<String>, inputs: I, expected: O) -> Self {
        Self {
            name: name.into(),
            inputs,
            expected,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inputs(&self) -> &I {
        &self.inputs
    }

    pub fn expected(&self) -> &O {
        &self.expected
    }
}

/// An ordered table of cases for a single subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suite<I, O> {
    name: String,
    cases: Vec<TestCase<I, O>>,
}

impl<I, O> Suite<I, O> {
    /// Build a suite, rejecting empty or repeated case names.
    pub fn new(name: impl Into<String>, cases: Vec<TestCase<I, O>>) -> HarnessResult<Self> {
        let name = name.into();
        validate_case_names(&name, &cases)?;
        Ok(Self { name, cases })
    }

    /// Start a suite table row by row.
    pub fn builder(name: impl Into<String>) -> SuiteBuilder<I, O> {
        SuiteBuilder {
            name: name.into(),
            cases: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cases(&self) -> &[TestCase<I, O>] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Keep only cases whose name contains `keyword`.
    ///
    /// Selection happens before a run; a runner never skips the cases it is given.
    pub fn filtered(self, keyword: &str) -> Self {
        let cases = self.cases.into_iter().filter(|case| case.name.contains(keyword)).collect();
        Self { name: self.name, cases }
    }

    /// Split into the suite name and its cases.
    pub fn into_parts(self) -> (String, Vec<TestCase<I, O>>) {
        (self.name, self.cases)
    }
}

impl<I, O> IntoIterator for Suite<I, O> {
    type Item = TestCase<I, O>;
    type IntoIter = std::vec::IntoIter<TestCase<I, O>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.into_iter()
    }
}

/// Row-by-row builder for [`Suite`].
#[derive(Debug)]
pub struct SuiteBuilder<I, O> {
    name: String,
    cases: Vec<TestCase<I, O>>,
}

impl<I, O> SuiteBuilder<I, O> {
    /// Append a case.
    pub fn case(mut self, name: impl Into<String>, inputs: I, expected: impl Into<O>) -> Self {
        self.cases.push(TestCase::new(name, inputs, expected.into()));
        self
    }

    pub fn build(self) -> HarnessResult<Suite<I, O>> {
        Suite::new(self.name, self.cases)
    }
}

fn validate_case_names<I, O>(suite: &str, cases: &[TestCase<I, O>]) -> HarnessResult<()> {
    let mut seen = HashSet::with_capacity(cases.len());
    for (index, case) in cases.iter().enumerate() {
        if case.name.is_empty() {
            return Err(HarnessError::EmptyCaseName {
                suite: suite.to_string(),
                index,
            });
        }
        if !seen.insert(case.name.as_str()) {
            return Err(HarnessError::DuplicateCaseName {
                suite: suite.to_string(),
                name: case.name.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adder_suite() -> Suite<(i64, i64), i64> {
        Suite::builder("adder")
            .case("two plus two", (2, 2), 4)
            .case("five plus three", (5, 3), 8)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_preserves_order() {
        let suite = adder_suite();
        let names: Vec<_> = suite.cases().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["two plus two", "five plus three"]);
        assert_eq!(suite.len(), 2);
    }

    #[test]
    fn test_case_accessors() {
        let case = TestCase::new("in French", ("James", "French"), "Bonjour, James".to_string());
        assert_eq!(case.name(), "in French");
        assert_eq!(case.inputs(), &("James", "French"));
        assert_eq!(case.expected(), "Bonjour, James");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = Suite::<(i64, i64), i64>::builder("adder")
            .case("sum", (1, 1), 2)
            .case("sum", (2, 2), 4)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            HarnessError::DuplicateCaseName { ref suite, ref name } if suite == "adder" && name == "sum"
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Suite::<(i64, i64), i64>::new("adder", vec![TestCase::new("", (1, 1), 2)]).unwrap_err();
        assert!(matches!(err, HarnessError::EmptyCaseName { index: 0, .. }));
    }

    #[test]
    fn test_empty_suite_is_allowed() {
        let suite = Suite::<(i64, i64), i64>::new("empty", Vec::new()).unwrap();
        assert!(suite.is_empty());
    }

    #[test]
    fn test_filtered_keeps_matching_cases() {
        let suite = adder_suite().filtered("five");
        assert_eq!(suite.len(), 1);
        assert_eq!(suite.cases()[0].name(), "five plus three");
        assert_eq!(suite.name(), "adder");
    }

    #[test]
    fn test_builder_converts_expected() {
        let suite: Suite<(&str, &str), String> =
            Suite::builder("hello").case("english", ("Max", "English"), "Hello, Max").build().unwrap();
        assert_eq!(suite.cases()[0].expected(), "Hello, Max");
    }
}
