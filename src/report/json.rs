//! JSON-lines reporter
//!
//! Every case becomes one JSON object on its own line; the run ends with a summary object. The format is meant for
//! other tools, so nothing is colored and nothing is buffered until the end.

use std::io::{self, Write};

use serde::Serialize;

use super::{CaseRecord, Reporter, RunSummary};

#[derive(Serialize)]
struct SummaryLine {
    total: usize,
    passed: usize,
    failed: usize,
    duration_ms: u128,
    success: bool,
}

impl From<&RunSummary> for SummaryLine {
    fn from(summary: &RunSummary) -> Self {
        Self {
            total: summary.total,
            passed: summary.passed,
            failed: summary.failed,
            duration_ms: summary.duration.as_millis(),
            success: summary.success(),
        }
    }
}

/// Newline-delimited JSON reporter.
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn on_suite_start(&mut self, _suite: &str, _case_count: usize) -> io::Result<()> {
        Ok(())
    }

    fn on_case_complete(&mut self, record: &CaseRecord) -> io::Result<()> {
        self.write_line(record)
    }

    fn on_run_complete(&mut self, summary: &RunSummary) -> io::Result<()> {
        self.write_line(&SummaryLine::from(summary))?;
        self.out.flush()
    }
}
