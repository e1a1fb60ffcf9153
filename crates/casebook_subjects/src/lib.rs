//! Subject functions exercised by the casebook suites.
//!
//! These are the pure functions the built-in suites validate: a greeter parameterized by language and an integer
//! adder. They own their own configuration data (the greeting table) so the harness never has to know about it.

#![deny(clippy::unwrap_used)]

pub mod greeting;
pub mod integers;

pub use greeting::{GreetingTable, hello};
pub use integers::add;
