//! casebook version information.
//!
//! Exposed as a single constant so the CLI and reporters agree on the same value.
//! The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The casebook version string (for example, `0.1.0`).
pub const CASEBOOK_VERSION: &str = env!("CARGO_PKG_VERSION");
