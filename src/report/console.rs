//! Console reporter (pytest-style)

use std::io::{self, Write};

use super::{CaseRecord, RunSummary, Reporter};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const BOLD_RED: &str = "\x1b[1;31m";
const BOLD_GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

/// Human-readable reporter.
///
/// Non-verbose mode prints one line per suite with a `.` or `F` per case; verbose mode prints one line per case.
/// Failure details are collected and printed together at the end of the run.
pub struct ConsoleReporter<W: Write> {
    out: W,
    verbose: bool,
    color: bool,
    failures: Vec<CaseRecord>,
}

impl ConsoleReporter<io::Stdout> {
    /// Colored reporter writing to stdout.
    pub fn stdout(verbose: bool) -> Self {
        Self::new(io::stdout(), verbose)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, verbose: bool) -> Self {
        Self {
            out,
            verbose,
            color: true,
            failures: Vec::new(),
        }
    }

    /// Enable or disable ANSI colors
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn on_run_start(&mut self) -> io::Result<()> {
        let banner = self.paint(BOLD, "=================== test session starts ===================");
        writeln!(self.out, "{banner}")
    }

    fn on_suite_start(&mut self, suite: &str, case_count: usize) -> io::Result<()> {
        if self.verbose {
            writeln!(self.out, "collected {case_count} case(s) from {suite}")
        } else {
            write!(self.out, "{suite} ")
        }
    }

    fn on_case_complete(&mut self, record: &CaseRecord) -> io::Result<()> {
        let status = match (record.passed, self.verbose) {
            (true, true) => self.paint(GREEN, "PASSED"),
            (true, false) => self.paint(GREEN, "."),
            (false, true) => self.paint(RED, "FAILED"),
            (false, false) => self.paint(RED, "F"),
        };

        if !record.passed {
            self.failures.push(record.clone());
        }

        if self.verbose {
            writeln!(self.out, "{} {}", record.qualified_name(), status)
        } else {
            write!(self.out, "{status}")
        }
    }

    fn on_suite_complete(&mut self, _suite: &str) -> io::Result<()> {
        if !self.verbose {
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn on_run_complete(&mut self, summary: &RunSummary) -> io::Result<()> {
        if !self.failures.is_empty() {
            writeln!(self.out)?;
            let header = self.paint(BOLD_RED, "=================== FAILURES ===================");
            writeln!(self.out, "{header}")?;
            for failure in std::mem::take(&mut self.failures) {
                let title = self.paint(BOLD, &format!("___________ {} ___________", failure.qualified_name()));
                writeln!(self.out)?;
                writeln!(self.out, "{title}")?;
                writeln!(self.out)?;
                writeln!(self.out, "    {}", failure.message)?;
            }
        }

        let mut parts = Vec::new();
        if summary.passed > 0 {
            parts.push(format!("{} passed", summary.passed));
        }
        if summary.failed > 0 {
            parts.push(format!("{} failed", summary.failed));
        }
        if parts.is_empty() {
            parts.push("no cases ran".to_string());
        }

        let line = format!(
            "=================== {} in {:.2}s ===================",
            parts.join(", "),
            summary.duration.as_secs_f64()
        );
        let color = if summary.success() { BOLD_GREEN } else { BOLD_RED };
        writeln!(self.out)?;
        let line = self.paint(color, &line);
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }
}
