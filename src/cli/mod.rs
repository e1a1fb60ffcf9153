//! CLI module for casebook
//!
//! ## Commands
//!
//! - `run` - Run the built-in suites (the default when no subcommand is given)
//! - `list` - List the built-in suites
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::io;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::catalog::SuiteKind;
use crate::harness::{CaseRunner, HarnessError, RunConfig};
use crate::report::{ConsoleReporter, JsonReporter, Reporter};
use crate::session::Session;
use crate::version::CASEBOOK_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<HarnessError> for CliError {
    fn from(err: HarnessError) -> Self {
        // Debug formatting of a miette report renders the full diagnostic (code, help)
        CliError::failure(format!("{:?}", miette::Report::new(err)))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Log filter used when `RUST_LOG` is unset. Session events are `info`, so they are hidden by default.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Table-driven test harness for pure functions
#[derive(Parser, Debug)]
#[command(name = "casebook")]
#[command(version = CASEBOOK_VERSION)]
#[command(about = "Table-driven test harness for pure functions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run built-in suites
    Run(RunArgs),

    /// List built-in suites
    List,
}

/// Output format for `run`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// pytest-style text
    #[default]
    Console,
    /// One JSON object per line
    Json,
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Suite to run (repeatable; default: all)
    #[arg(short, long = "suite", value_name = "NAME")]
    pub suites: Vec<String>,
    /// Only run cases whose name contains EXPR
    #[arg(short = 'k', value_name = "EXPR")]
    pub filter: Option<String>,
    /// Print one line per case
    #[arg(short, long)]
    pub verbose: bool,
    /// Evaluate cases in parallel
    #[arg(long)]
    pub parallel: bool,
    /// Worker threads for --parallel
    #[arg(long, value_name = "N", requires = "parallel")]
    pub threads: Option<usize>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,
    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,
    /// Swap every subject for a deliberately wrong implementation
    #[arg(long)]
    pub mutants: bool,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Run(args)) => run_suites(&args),
        Some(Command::List) => list_suites(),
        None => run_suites(&RunArgs::default()),
    }
}

fn list_suites() -> CliResult<ExitCode> {
    for kind in SuiteKind::ALL {
        println!("{:<16} {}", kind.as_str(), kind.description());
    }
    Ok(ExitCode::SUCCESS)
}

fn run_suites(args: &RunArgs) -> CliResult<ExitCode> {
    let suites = selected_suites(&args.suites)?;

    let mut config = RunConfig::new().with_parallel(args.parallel);
    if let Some(threads) = args.threads {
        config = config.with_threads(threads);
    }

    let mut session = Session::new(CaseRunner::with_config(config)).with_mutants(args.mutants);
    if let Some(filter) = &args.filter {
        session = session.with_filter(filter.as_str());
    }

    let mut reporter: Box<dyn Reporter> = match args.format {
        OutputFormat::Console => Box::new(ConsoleReporter::stdout(args.verbose).with_color(!args.no_color)),
        OutputFormat::Json => Box::new(JsonReporter::new(io::stdout())),
    };

    let summary = session.run(&suites, reporter.as_mut())?;

    if summary.success() {
        Ok(ExitCode::SUCCESS)
    } else {
        // Failures were already reported; exit non-zero without another message
        Err(CliError::new("", ExitCode::FAILURE))
    }
}

/// Resolve `--suite` names, defaulting to every built-in suite.
fn selected_suites(names: &[String]) -> CliResult<Vec<SuiteKind>> {
    if names.is_empty() {
        return Ok(SuiteKind::ALL.to_vec());
    }

    let mut suites = Vec::with_capacity(names.len());
    for name in names {
        let kind: SuiteKind = name.parse()?;
        if !suites.contains(&kind) {
            suites.push(kind);
        }
    }
    Ok(suites)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_command() {
        let cli = Cli::try_parse_from(["casebook"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::try_parse_from(["casebook", "run", "-v", "-k", "French", "--suite", "hello"]).unwrap();
        if let Some(Command::Run(args)) = cli.command {
            assert!(args.verbose);
            assert_eq!(args.filter.as_deref(), Some("French"));
            assert_eq!(args.suites, vec!["hello".to_string()]);
            assert_eq!(args.format, OutputFormat::Console);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_parse_parallel_json() {
        let cli =
            Cli::try_parse_from(["casebook", "run", "--parallel", "--threads", "4", "--format", "json"]).unwrap();
        if let Some(Command::Run(args)) = cli.command {
            assert!(args.parallel);
            assert_eq!(args.threads, Some(4));
            assert_eq!(args.format, OutputFormat::Json);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_threads_requires_parallel() {
        assert!(Cli::try_parse_from(["casebook", "run", "--threads", "4"]).is_err());
    }

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::try_parse_from(["casebook", "list"]).unwrap();
        assert!(matches!(cli.command, Some(Command::List)));
    }

    #[test]
    fn test_default_log_filter_is_warn() {
        assert_eq!(DEFAULT_LOG_FILTER, "warn");
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn test_selected_suites_default_to_all() {
        assert_eq!(selected_suites(&[]).unwrap(), SuiteKind::ALL.to_vec());
    }

    #[test]
    fn test_selected_suites_dedupes() {
        let names = vec!["adder".to_string(), "adder".to_string(), "hello".to_string()];
        assert_eq!(selected_suites(&names).unwrap(), vec![SuiteKind::Adder, SuiteKind::Hello]);
    }

    #[test]
    fn test_selected_suites_unknown_name() {
        let err = selected_suites(&["greetings".to_string()]).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("unknown suite `greetings`"));
    }
}
