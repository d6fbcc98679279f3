//! # MindShift CLI Library
//!
//! Command-line front-end for the MindShift card game: interactive play
//! against the bot, bot-vs-bot simulation, and statistics over recorded games.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["mindshift", "play", "--difficulty", "easy"];
//! let code = mindshift_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play a game against the bot on the terminal
//! - `sim`: Play bot-vs-bot games and print a JSON summary
//! - `stats`: Aggregate statistics and achievements from game records
//! - `deal`: Show the opening deal for a seed
//! - `rng`: Show the first generator outputs for a seed
//! - `cfg`: Display the resolved configuration and its sources

use clap::Parser;
use std::io::Write;
#[macro_use]
mod macros;
pub mod achievements;
pub mod cli;
pub mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, MindshiftCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_rng_command,
    handle_sim_command, handle_stats_command, resolve_seed,
};
use mindshift_ai::Personality;

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["play", "sim", "stats", "deal", "rng", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments, merges them over the configuration from
/// `MINDSHIFT_CONFIG` and the `MINDSHIFT_*` variables, and dispatches to the
/// subcommand handler. Flags always win over configuration.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when input closes
/// mid-game
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["mindshift", "deal", "--seed", "42"];
/// let code = mindshift_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match MindshiftCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Play {
            difficulty,
            seed,
            records,
            delay_ms,
        } => {
            let cfg = match config::load() {
                Ok(c) => c,
                Err(e) => return config_error(e, err),
            };
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(
                difficulty.unwrap_or(cfg.difficulty),
                resolve_seed(seed.or(cfg.seed)),
                records.or(cfg.records),
                delay_ms.unwrap_or(cfg.bot_delay_ms),
                out,
                err,
                &mut stdin_lock,
            )
        }
        Commands::Sim {
            games,
            difficulty,
            seed,
            player,
            output,
        } => {
            let cfg = match config::load() {
                Ok(c) => c,
                Err(e) => return config_error(e, err),
            };
            handle_sim_command(
                games,
                difficulty.unwrap_or(cfg.difficulty),
                resolve_seed(seed.or(cfg.seed)),
                player.unwrap_or(Personality::Tactical),
                output,
                out,
                err,
            )
        }
        Commands::Deal { seed } => match seed_or_config(seed) {
            Ok(seed) => handle_deal_command(seed, out),
            Err(e) => return config_error(e, err),
        },
        Commands::Rng { seed } => match seed_or_config(seed) {
            Ok(seed) => handle_rng_command(seed, out),
            Err(e) => return config_error(e, err),
        },
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            write_or_exit!(err, "Interrupted: {}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if write!(out, "{}", e).is_err() {
            return exit_code::ERROR;
        }
        return exit_code::SUCCESS;
    }

    write_or_exit!(err, "{}", e);
    write_or_exit!(err, "MindShift CLI");
    write_or_exit!(err, "Usage: mindshift <command> [options]\n");
    write_or_exit!(err, "Commands:");
    for c in COMMANDS {
        write_or_exit!(err, "  {}", c);
    }
    write_or_exit!(err, "\nFor full help, run: mindshift --help");
    exit_code::ERROR
}

/// An explicit seed skips configuration entirely.
fn seed_or_config(seed: Option<String>) -> Result<String, config::ConfigError> {
    match seed {
        Some(s) => Ok(resolve_seed(Some(s))),
        None => Ok(resolve_seed(config::load()?.seed)),
    }
}

fn config_error(e: config::ConfigError, err: &mut dyn Write) -> i32 {
    let _ = ui::write_error(err, &format!("Configuration error: {}", e));
    exit_code::ERROR
}
