//! Table-driven test harness
//!
//! The harness validates pure functions against tables of expected outputs.
//!
//! ## Modules
//!
//! - `assertion` - exact-equality comparison producing an [`AssertionResult`]
//! - `case` - named cases and suites ([`TestCase`], [`Suite`])
//! - `subject` - the [`Subject`] contract for fixed-arity pure functions
//! - `runner` - [`CaseRunner`], sequential or parallel, always in input order
//! - `example` - documented-output checks ([`Example`])
//! - `errors` - [`HarnessError`] and [`ValueMismatch`]
//!
//! ## Usage
//!
//! ```
//! use casebook::harness::{CaseRunner, Suite};
//!
//! fn add(a: i64, b: i64) -> i64 {
//!     a + b
//! }
//!
//! let suite: Suite<(i64, i64), i64> = Suite::builder("adder")
//!     .case("two plus two", (2, 2), 4)
//!     .case("five plus three", (5, 3), 8)
//!     .build()
//!     .unwrap();
//!
//! let outcomes = CaseRunner::new().run_all(&add, suite);
//! assert!(outcomes.iter().all(|o| o.is_passed()));
//! ```
//!
//! The harness never prints, exits, or aggregates. Those are the reporting boundary's job (see `crate::report`).

pub mod assertion;
pub mod case;
pub mod errors;
pub mod example;
pub mod runner;
pub mod subject;

pub use assertion::{AssertionResult, check};
pub use case::{Suite, SuiteBuilder, TestCase};
pub use errors::{HarnessError, HarnessResult, ValueMismatch};
pub use example::{Example, ExampleBody, check_example};
pub use runner::{CaseOutcome, CaseRunner, RunConfig};
pub use subject::Subject;
