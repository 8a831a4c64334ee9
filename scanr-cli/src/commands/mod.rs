//! Command modules for the scanr CLI.
//!
//! Each subcommand is implemented in its own file: an `XArgs` struct and a
//! `run_x` function returning the [`Outcome`] of the scan.

pub mod common;

pub mod check;
pub mod stats;
pub mod tokens;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use common::{Outcome, OutputFormat};
pub use stats::{run_stats, StatsArgs};
pub use tokens::{run_tokens, TokensArgs};
