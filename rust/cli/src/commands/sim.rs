//! Simulation command: bot-vs-bot games with a results summary.
//!
//! A personality takes the player's seat and plays the difficulty's bot.
//! Game `i` is dealt from `"{seed}-{i}"`, so any single game can be
//! reproduced with `play --seed`.
//!
//! # Examples
//!
//! ```no_run
//! use mindshift_ai::Personality;
//! use mindshift_cli::commands::sim::handle_sim_command;
//! use mindshift_engine::state::Difficulty;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//! handle_sim_command(100, Difficulty::Hard, "batch".into(), Personality::Tactical, Some("data/sim.jsonl".into()), &mut out, &mut err).unwrap();
//! ```

use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;
use mindshift_ai::{CardSelector, Personality, create_bot};
use mindshift_engine::engine::Game;
use mindshift_engine::logger::{GameLogger, GameRecord};
use mindshift_engine::state::{Difficulty, Side};
use std::io::Write;
use std::path::Path;

/// Upper bound on transitions per game; a game that runs longer is a bug.
const MAX_STEPS: usize = 2_000;

#[derive(Debug, Default)]
struct Tally {
    player_wins: u32,
    bot_wins: u32,
    blocked: u32,
    turns: u64,
}

impl Tally {
    fn add(&mut self, game: &Game) {
        match game.winner() {
            Some(Side::Player) => self.player_wins += 1,
            Some(Side::Bot) => self.bot_wins += 1,
            None => self.blocked += 1,
        }
        self.turns += u64::from(game.state().turns);
    }
}

/// Handle the sim command.
///
/// # Arguments
///
/// * `games` - Number of games to play (at least one)
/// * `difficulty` - Difficulty of every game; picks the opposing bot
/// * `seed` - Base seed string
/// * `player` - Personality seated in the player's chair
/// * `output` - Optional JSONL file receiving one record per game
/// * `out` - Output stream for the JSON summary
/// * `err` - Output stream for error messages
pub fn handle_sim_command(
    games: u32,
    difficulty: Difficulty,
    seed: String,
    player: Personality,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let mut logger = match output.as_deref() {
        Some(p) => {
            if let Err(e) = ensure_parent_dir(Path::new(p)) {
                ui::write_error(err, &e)?;
                return Err(CliError::Config(e));
            }
            Some(GameLogger::create(p)?)
        }
        None => None,
    };

    let seat = create_bot(player);
    let bot_personality = Personality::for_difficulty(difficulty);
    let bot = create_bot(bot_personality);

    let mut tally = Tally::default();
    for i in 0..games {
        let game_seed = format!("{}-{}", seed, i);
        let game = play_out(difficulty, &game_seed, seat.as_ref(), bot.as_ref())?;
        tally.add(&game);
        if let Some(logger) = logger.as_mut() {
            let record = GameRecord::from_game(logger.next_id(), &game);
            logger.write(&record)?;
        }
    }

    let summary = serde_json::json!({
        "games": games,
        "difficulty": difficulty.as_str(),
        "seed": seed,
        "player": player.as_str(),
        "bot": bot_personality.as_str(),
        "player_wins": tally.player_wins,
        "bot_wins": tally.bot_wins,
        "blocked": tally.blocked,
        "avg_turns": tally.turns as f64 / f64::from(games),
    });
    let json_output = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize summary: {}", e)))?;
    writeln!(out, "{}", json_output)?;
    Ok(())
}

fn play_out(
    difficulty: Difficulty,
    seed: &str,
    seat: &dyn CardSelector,
    bot: &dyn CardSelector,
) -> Result<Game, CliError> {
    let mut game = Game::new(difficulty, seed);
    for _ in 0..MAX_STEPS {
        if game.is_over() {
            return Ok(game);
        }
        match game.state().phase.to_act() {
            Some(Side::Player) => game.player_autoplay(seat)?,
            _ => game.bot_turn(bot)?,
        };
    }
    Err(CliError::Engine(format!(
        "game {} did not finish within {} steps",
        seed, MAX_STEPS
    )))
}
