//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use mindshift_ai::Personality;
use mindshift_engine::state::Difficulty;

/// MindShift: a card game where every card sets the next task.
#[derive(Parser, Debug)]
#[command(name = "mindshift", version, about = "MindShift card game CLI")]
pub struct MindshiftCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a game against the bot on the terminal
    Play {
        /// easy, medium or hard
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Seed string; the same seed deals the same game
        #[arg(long)]
        seed: Option<String>,
        /// Append the finished game to this JSONL file
        #[arg(long)]
        records: Option<String>,
        /// Pause before each bot move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Play bot-vs-bot games and summarise the results
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        games: u32,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Base seed; game i uses "{seed}-{i}"
        #[arg(long)]
        seed: Option<String>,
        /// Personality playing the human seat
        #[arg(long)]
        player: Option<Personality>,
        /// Write one record per game to this JSONL file
        #[arg(long)]
        output: Option<String>,
    },
    /// Aggregate statistics and achievements from game records
    Stats {
        /// File or directory of .jsonl / .jsonl.zst records
        #[arg(long)]
        input: String,
    },
    /// Show the opening deal for a seed
    Deal {
        #[arg(long)]
        seed: Option<String>,
    },
    /// Show the first generator outputs for a seed
    Rng {
        #[arg(long)]
        seed: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
