//! Example-output checks
//!
//! An [`Example`] is a snippet that writes text, paired with the text it is documented to produce. Checking one
//! captures the written text and hands it to the assertion core as the actual value.
//!
//! Both sides are trimmed of surrounding whitespace before comparing, so an expected block written as `"8\n10"`
//! matches output ending in a newline. Everything between the first and last visible character is compared exactly.

use std::fmt;

use super::assertion::{AssertionResult, check, fail};

/// Body of an example: writes its output into the sink.
pub type ExampleBody = fn(&mut dyn fmt::Write) -> fmt::Result;

/// A snippet with documented output.
#[derive(Clone)]
pub struct Example {
    name: String,
    expected_output: String,
    body: ExampleBody,
}

impl Example {
    pub fn new(name: impl Into<String>, expected_output: impl Into<String>, body: ExampleBody) -> Self {
        Self {
            name: name.into(),
            expected_output: expected_output.into(),
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expected_output(&self) -> &str {
        &self.expected_output
    }

    /// Run the body and return whatever it wrote, plus whether it finished cleanly.
    pub fn capture(&self) -> (String, fmt::Result) {
        let mut captured = String::new();
        let status = (self.body)(&mut captured);
        (captured, status)
    }
}

impl fmt::Debug for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Example")
            .field("name", &self.name)
            .field("expected_output", &self.expected_output)
            .finish_non_exhaustive()
    }
}

/// Capture an example's output and compare it with the documented text.
///
/// A body that returns `fmt::Error` fails the check even if its partial output happens to match.
pub fn check_example(example: &Example) -> AssertionResult<String> {
    let (captured, status) = example.capture();
    let actual = captured.trim().to_string();
    let expected = example.expected_output.trim().to_string();

    if status.is_err() {
        tracing::debug!(example = example.name(), "example body returned fmt::Error");
        return fail(actual, expected, &format!("{} (output interrupted)", example.name));
    }

    check(actual, expected, example.name())
}
