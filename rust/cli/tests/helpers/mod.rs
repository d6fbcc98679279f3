//! Shared helpers for the CLI integration tests.
//!
//! - `cli_runner`: `CliRunner` spawns the `mindshift` binary inside a scratch
//!   directory with a clean `MINDSHIFT_*` environment and captures stdout,
//!   stderr and the exit code.
//! - `records`: builders for JSONL game record fixtures.

pub mod cli_runner;
pub mod records;
