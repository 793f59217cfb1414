//! Tooling
//!
//! Command-line entry points layered over the library.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
