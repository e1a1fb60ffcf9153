//! Assertion core
//!
//! [`check`] compares an actual value with an expected one using exact `PartialEq` equality and records the outcome
//! as an [`AssertionResult`]. Nothing here panics or aborts: deciding whether a failure stops anything is the
//! caller's business.

use std::fmt::Debug;

use super::errors::ValueMismatch;

/// Outcome of comparing one actual value against one expected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionResult<T> {
    passed: bool,
    actual: T,
    expected: T,
    context: String,
    message: String,
}

impl<T> AssertionResult<T> {
    pub fn is_passed(&self) -> bool {
        self.passed
    }

    pub fn is_failed(&self) -> bool {
        !self.passed
    }

    pub fn actual(&self) -> &T {
        &self.actual
    }

    pub fn expected(&self) -> &T {
        &self.expected
    }

    /// Label the check was made under.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Failure message, or an empty string when the check passed.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<T: Debug> AssertionResult<T> {
    /// Convert into a `Result`, turning a failed check into a [`ValueMismatch`].
    ///
    /// ```
    /// use casebook::harness::check;
    ///
    /// fn sums() -> Result<(), casebook::harness::ValueMismatch> {
    ///     check(2 + 2, 4, "two plus two").into_result()?;
    ///     Ok(())
    /// }
    /// assert!(sums().is_ok());
    /// ```
    pub fn into_result(self) -> Result<(), ValueMismatch> {
        if self.passed {
            return Ok(());
        }
        Err(ValueMismatch {
            context: self.context,
            actual: format!("{:?}", self.actual),
            expected: format!("{:?}", self.expected),
            message: self.message,
        })
    }
}

/// Compare `actual` with `expected`.
///
/// Equality is exact: strings are compared case- and whitespace-sensitively, integers without tolerance. On mismatch
/// the message reads `<context>: got <actual> want <expected>` with both values in `Debug` form, so strings appear
/// quoted.
pub fn check<T: PartialEq + Debug>(actual: T, expected: T, context: &str) -> AssertionResult<T> {
    let passed = actual == expected;
    let message = if passed {
        String::new()
    } else {
        mismatch_message(context, &actual, &expected)
    };

    AssertionResult {
        passed,
        actual,
        expected,
        context: context.to_string(),
        message,
    }
}

/// Record a failure regardless of whether the values compare equal.
///
/// Used when something other than the values decides the outcome, such as a subject that stopped before producing
/// all of its output.
pub(crate) fn fail<T: Debug>(actual: T, expected: T, context: &str) -> AssertionResult<T> {
    AssertionResult {
        passed: false,
        message: mismatch_message(context, &actual, &expected),
        actual,
        expected,
        context: context.to_string(),
    }
}

fn mismatch_message<T: Debug>(context: &str, actual: &T, expected: &T) -> String {
    if context.is_empty() {
        format!("got {:?} want {:?}", actual, expected)
    } else {
        format!("{}: got {:?} want {:?}", context, actual, expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_strings_pass() {
        let result = check("Hello, Max".to_string(), "Hello, Max".to_string(), "english");
        assert!(result.is_passed());
        assert_eq!(result.message(), "");
    }

    #[test]
    fn test_string_comparison_is_case_sensitive() {
        let result = check("hello, max", "Hello, Max", "case");
        assert!(result.is_failed());
    }

    #[test]
    fn test_string_comparison_is_whitespace_sensitive() {
        let result = check("Hello, Max ", "Hello, Max", "trailing space");
        assert!(result.is_failed());
        assert_eq!(result.message(), r#"trailing space: got "Hello, Max " want "Hello, Max""#);
    }

    #[test]
    fn test_integer_mismatch_message() {
        let result = check(5, 4, "adder");
        assert!(result.is_failed());
        assert_eq!(result.message(), "adder: got 5 want 4");
        assert_eq!(*result.actual(), 5);
        assert_eq!(*result.expected(), 4);
    }

    #[test]
    fn test_empty_context_message() {
        let result = check(1, 2, "");
        assert_eq!(result.message(), "got 1 want 2");
    }

    #[test]
    fn test_into_result_ok_when_passed() {
        assert!(check(4, 4, "adder").into_result().is_ok());
    }

    #[test]
    fn test_into_result_carries_mismatch() {
        let err = check("Hello, World", "Hola, Elodie", "in Spanish").into_result().unwrap_err();
        assert_eq!(err.context, "in Spanish");
        assert_eq!(err.actual, r#""Hello, World""#);
        assert_eq!(err.expected, r#""Hola, Elodie""#);
        assert_eq!(err.to_string(), r#"in Spanish: got "Hello, World" want "Hola, Elodie""#);
    }
}
