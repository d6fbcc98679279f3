//! # Play Command
//!
//! Interactive MindShift game against the bot on stdin/stdout.
//!
//! - Card numbers play from the hand; `d`, `p`, `u`, `r` and `q` draw, pass,
//!   undo, restart and quit
//! - Rejected moves are reported and the prompt repeats
//! - The bot's pacing delay is applied here, never inside the engine
//! - Finished games can be appended to a JSONL record file

use crate::achievements;
use crate::config::MAX_BOT_DELAY_MS;
use crate::error::CliError;
use crate::formatters::{format_center, format_event, format_hand};
use crate::io_utils::{read_stdin_line, read_text_auto};
use crate::ui;
use crate::validation::{ParseResult, parse_player_command};
use mindshift_ai::{Personality, create_bot};
use mindshift_engine::engine::Game;
use mindshift_engine::events::GameEvent;
use mindshift_engine::logger::{GameLogger, GameRecord};
use mindshift_engine::state::{Difficulty, Side};
use std::io::{BufRead, Write};
use std::time::Duration;

/// Handle the play command: an interactive game against the bot.
///
/// # Arguments
///
/// * `difficulty` - Picks the bot personality and whether undo is offered
/// * `seed` - Seed string; the same seed deals the same game
/// * `records` - JSONL file finished games are appended to
/// * `delay_ms` - Pause before each bot move
/// * `out` - Output stream for game display
/// * `err` - Error stream for rejected moves and warnings
/// * `stdin` - Input stream for player commands
///
/// # Returns
///
/// * `Ok(())` when the player quits
/// * `Err(CliError::Interrupted)` if input ends before the player quits
///
/// # Examples
///
/// ```ignore
/// use mindshift_cli::commands::handle_play_command;
/// use mindshift_engine::state::Difficulty;
/// use std::io::{stdin, stdout, stderr};
///
/// let mut input = stdin().lock();
/// handle_play_command(Difficulty::Easy, "seed".into(), None, 900, &mut stdout(), &mut stderr(), &mut input).unwrap();
/// ```
pub fn handle_play_command(
    difficulty: Difficulty,
    seed: String,
    records: Option<String>,
    delay_ms: u64,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if delay_ms > MAX_BOT_DELAY_MS {
        let msg = format!("delay-ms must be <= {}", MAX_BOT_DELAY_MS);
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }

    let earlier = records.as_deref().map(read_records).unwrap_or_default();
    let mut logger = match records.as_deref() {
        Some(path) => match GameLogger::create(path) {
            Ok(l) => Some(l),
            Err(e) => {
                ui::write_error(err, &format!("Failed to open records file {}: {}", path, e))?;
                return Err(CliError::Io(e));
            }
        },
        None => None,
    };

    let personality = Personality::for_difficulty(difficulty);
    let bot = create_bot(personality);
    let delay = Duration::from_millis(delay_ms);

    writeln!(
        out,
        "MindShift: difficulty={} bot={} seed={}",
        difficulty, personality, seed
    )?;
    if difficulty.allows_undo() {
        writeln!(out, "Easy mode: you may undo one bot move per game.")?;
    }

    let mut game = Game::new(difficulty, &seed);
    let mut session = Session {
        earlier,
        ..Session::default()
    };

    loop {
        if game.is_over() {
            finish_game(&game, logger.as_mut(), &mut session, out, err)?;
            write!(out, "Type r to play the same deal again or q to quit: ")?;
            out.flush()?;
            match read_stdin_line(stdin).map(|l| parse_player_command(&l, 0)) {
                Some(ParseResult::Restart) => {
                    game.restart(None);
                    session.recorded = false;
                    writeln!(out, "New game, seed={}", game.seed())?;
                }
                Some(ParseResult::Quit) | None => break,
                Some(_) => ui::write_error(err, "Type r or q")?,
            }
            continue;
        }

        if game.state().phase.to_act() == Some(Side::Bot) {
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
            let events = game.bot_turn(bot.as_ref())?;
            show_events(&events, out)?;
            continue;
        }

        show_table(&game, out)?;
        write!(out, "Card number, d=draw, p=pass, u=undo, r=restart, q=quit: ")?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            return Err(CliError::Interrupted("input closed mid-game".to_string()));
        };
        let result = match parse_player_command(&line, game.state().player_hand.len()) {
            ParseResult::Play(idx) => game.player_play(idx),
            ParseResult::Draw => game.player_draw(),
            ParseResult::Pass => game.player_pass(),
            ParseResult::Undo => game.request_undo(),
            ParseResult::Restart => {
                game.restart(None);
                session.recorded = false;
                writeln!(out, "Restarted, seed={}", game.seed())?;
                continue;
            }
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };
        match result {
            Ok(events) => show_events(&events, out)?,
            Err(e) => ui::write_error(err, &e.to_string())?,
        }
    }

    writeln!(out, "Games finished: {}", session.finished)?;
    Ok(())
}

/// Bookkeeping across restarts within one session.
#[derive(Debug, Default)]
struct Session {
    finished: u32,
    /// Records already in the records file plus games finished this session
    earlier: Vec<GameRecord>,
    /// The current finished game has been reported and recorded
    recorded: bool,
}

fn show_table(game: &Game, out: &mut dyn Write) -> Result<(), CliError> {
    let s = game.state();
    ui::separator(out)?;
    writeln!(
        out,
        "Center: {}   Task: {}",
        format_center(s.center.as_ref()),
        s.rule.label()
    )?;
    writeln!(
        out,
        "Deck: {}   Bot cards: {}",
        s.deck_remaining(),
        s.bot_hand.len()
    )?;
    if game.undo_available() {
        writeln!(out, "Undo available (u)")?;
    }
    writeln!(out, "Your hand:")?;
    writeln!(out, "{}", format_hand(&s.player_hand, &game.playable(Side::Player)))?;
    Ok(())
}

fn show_events(events: &[GameEvent], out: &mut dyn Write) -> Result<(), CliError> {
    for e in events {
        writeln!(out, "{}", format_event(e))?;
    }
    Ok(())
}

/// Report a finished game once: record it and announce achievements it
/// unlocks for the first time.
fn finish_game(
    game: &Game,
    mut logger: Option<&mut GameLogger>,
    session: &mut Session,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if session.recorded {
        return Ok(());
    }
    session.recorded = true;
    session.finished += 1;

    let s = game.state();
    writeln!(
        out,
        "Turns: {}   Your draws: {}   Bot draws: {}",
        s.turns, s.player_draws, s.bot_draws
    )?;

    let game_id = logger.as_deref_mut().map(GameLogger::next_id).unwrap_or_default();
    let record = GameRecord::from_game(game_id, game);
    if let Some(logger) = logger
        && let Err(e) = logger.write(&record)
    {
        ui::display_warning(err, &format!("Failed to write game record: {}", e))?;
    }
    for a in achievements::newly_unlocked(&session.earlier, &record) {
        writeln!(out, "Achievement: {} - {}", a.title(), a.description())?;
    }
    session.earlier.push(record);
    Ok(())
}

/// Records already stored at `path`; a missing file or bad lines yield nothing.
fn read_records(path: &str) -> Vec<GameRecord> {
    read_text_auto(path)
        .map(|text| {
            text.lines()
                .filter_map(|l| serde_json::from_str(l).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Commands a simple human would type for the game `seed` deals, ending
/// when the game does: first legal card, else draw, else pass.
#[cfg(test)]
pub(crate) fn scripted_game(difficulty: Difficulty, seed: &str) -> (Vec<String>, Game) {
    let bot = create_bot(Personality::for_difficulty(difficulty));
    let mut game = Game::new(difficulty, seed);
    let mut script = Vec::new();
    while !game.is_over() {
        if game.state().phase.to_act() == Some(Side::Bot) {
            game.bot_turn(bot.as_ref()).unwrap();
            continue;
        }
        if let Some(&i) = game.playable(Side::Player).first() {
            script.push((i + 1).to_string());
            game.player_play(i).unwrap();
        } else if !game.state().deck.is_empty() {
            script.push("d".to_string());
            game.player_draw().unwrap();
        } else {
            script.push("p".to_string());
            game.player_pass().unwrap();
        }
    }
    (script, game)
}
