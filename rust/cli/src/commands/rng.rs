//! Generator inspection command.
//!
//! `rng` prints the state a seed string hashes to and the first outputs of
//! the Lehmer generator that shuffles the deck and drives the bots, so a
//! seed's behaviour can be checked by hand.

use crate::error::CliError;
use mindshift_engine::rng::LehmerRng;
use std::io::Write;

/// Number of outputs shown.
const SAMPLE_LEN: usize = 5;

/// Handle the rng command.
///
/// # Example
///
/// ```ignore
/// # use mindshift_cli::commands::handle_rng_command;
/// let mut out = Vec::new();
/// handle_rng_command("test1".to_string(), &mut out).expect("RNG command failed");
/// ```
pub fn handle_rng_command(seed: String, out: &mut dyn Write) -> Result<(), CliError> {
    let mut rng = LehmerRng::from_seed_str(&seed);
    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Initial state: {}", rng.state())?;
    let vals: Vec<f64> = (0..SAMPLE_LEN).map(|_| rng.next_f64()).collect();
    writeln!(out, "RNG sample: {:?}", vals)?;
    Ok(())
}
