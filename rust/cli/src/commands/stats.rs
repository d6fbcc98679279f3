//! Statistics aggregation over game records.
//!
//! Reads JSONL record files (plain or `.jsonl.zst`) and reports totals,
//! wins per side, games per difficulty, unlocked achievements and the most
//! recent games with the UTC time each was recorded.

use crate::achievements;
use crate::error::{BatchValidationError, CliError};
use crate::io_utils::{collect_record_files, read_text_auto};
use crate::ui;
use chrono::{DateTime, Utc};
use mindshift_engine::logger::GameRecord;
use mindshift_engine::state::{Difficulty, Side};
use std::io::Write;
use std::path::Path;

/// Number of games listed under `recent`, newest first.
pub const RECENT_GAMES: usize = 20;

/// Aggregates statistics from JSONL game record files.
///
/// # Arguments
///
/// * `input` - Path to a record file or a directory searched recursively
/// * `out` - Output stream for the JSON report
/// * `err` - Output stream for error messages and warnings
///
/// # Returns
///
/// `Ok(())` when a report was produced. A single file with no valid record
/// is an error that maps to exit code `2`.
///
/// # Validation
///
/// - Unparseable lines count as corrupted and are skipped
/// - An unterminated unparseable final line counts as incomplete
/// - Unreadable files inside a directory are reported and skipped
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(&input);
    let mut batch = Batch::default();

    if path.is_dir() {
        for file in collect_record_files(path) {
            let name = file.to_string_lossy().into_owned();
            match read_text_auto(&name) {
                Ok(content) => batch.consume(&content),
                Err(e) => batch.unreadable.push(BatchValidationError {
                    item_context: name,
                    message: e,
                }),
            }
        }
    } else {
        match read_text_auto(&input) {
            Ok(content) => batch.consume(&content),
            Err(e) => {
                let msg = format!("Failed to read {}: {}", input, e);
                ui::write_error(err, &msg)?;
                return Err(CliError::Config(msg));
            }
        }
    }

    for failure in &batch.unreadable {
        ui::display_warning(err, &failure.to_string())?;
    }
    if batch.corrupted > 0 {
        ui::write_error(
            err,
            &format!("Skipped {} corrupted record(s)", batch.corrupted),
        )?;
    }
    if batch.incomplete > 0 {
        ui::write_error(
            err,
            &format!("Discarded {} incomplete final line(s)", batch.incomplete),
        )?;
    }
    if !path.is_dir() && batch.records.is_empty() && (batch.corrupted > 0 || batch.incomplete > 0)
    {
        ui::write_error(err, "Invalid record")?;
        return Err(CliError::InvalidInput("Invalid record".to_string()));
    }

    let summary = summarize(&batch.records);
    let json_output = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json_output)?;
    Ok(())
}

#[derive(Default)]
struct Batch {
    records: Vec<GameRecord>,
    corrupted: u64,
    incomplete: u64,
    unreadable: Vec<BatchValidationError<String>>,
}

impl Batch {
    fn consume(&mut self, content: &str) {
        let has_trailing_nl = content.ends_with('\n');
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        for (i, line) in lines.iter().enumerate() {
            match serde_json::from_str::<GameRecord>(line) {
                Ok(rec) => self.records.push(rec),
                Err(_) if i == lines.len() - 1 && !has_trailing_nl => self.incomplete += 1,
                Err(_) => self.corrupted += 1,
            }
        }
    }
}

fn summarize(records: &[GameRecord]) -> serde_json::Value {
    let recent: Vec<serde_json::Value> = records
        .iter()
        .rev()
        .take(RECENT_GAMES)
        .map(|r| {
            serde_json::json!({
                "game_id": r.game_id,
                "seed": r.seed,
                "difficulty": r.difficulty.as_str(),
                "winner": r.winner.map(|s| s.as_str()),
                "turns": r.turns,
                "ts": r.ts,
                "played_at": r.ts.as_deref().and_then(played_at),
            })
        })
        .collect();

    let achievements: Vec<serde_json::Value> = achievements::unlocked(records)
        .into_iter()
        .map(|a| {
            serde_json::json!({
                "id": a.id(),
                "title": a.title(),
                "description": a.description(),
            })
        })
        .collect();

    serde_json::json!({
        "total": records.len(),
        "player_wins": count(records, |r| r.winner == Some(Side::Player)),
        "bot_wins": count(records, |r| r.winner == Some(Side::Bot)),
        "blocked": count(records, |r| r.winner.is_none()),
        "by_difficulty": {
            "easy": count(records, |r| r.difficulty == Difficulty::Easy),
            "medium": count(records, |r| r.difficulty == Difficulty::Medium),
            "hard": count(records, |r| r.difficulty == Difficulty::Hard),
        },
        "achievements": achievements,
        "recent": recent,
    })
}

/// `ts` rendered as `YYYY-MM-DD HH:MM` UTC; `None` when it is not RFC3339.
fn played_at(ts: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(ts)
        .ok()
        .map(|t| t.with_timezone(&Utc).format("%Y-%m-%d %H:%M").to_string())
}

fn count(records: &[GameRecord], pred: impl Fn(&GameRecord) -> bool) -> usize {
    records.iter().filter(|r| pred(r)).count()
}
