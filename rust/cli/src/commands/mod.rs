//! Command handler modules for the MindShift CLI.
//!
//! Each command lives in its own file with the same shape:
//!
//! - Public handler: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, so tests can capture them
//! - Configuration already resolved by the caller; handlers never read the
//!   environment

pub mod cfg;
pub mod deal;
pub mod play;
pub mod rng;
pub mod sim;
pub mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use rng::handle_rng_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;

/// The given seed, or a fresh random one so the game can be replayed later.
pub fn resolve_seed(seed: Option<String>) -> String {
    seed.filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| format!("{:016x}", rand::random::<u64>()))
}
