use serde::{Deserialize, Serialize};

use crate::engine::Game;
use crate::events::GameEvent;
use crate::state::{Difficulty, Side};

/// Summary of one finished (or abandoned) game, serialized as one JSONL line.
/// This is the data a statistics or achievements store consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Seed string the game was dealt from
    pub seed: String,
    pub difficulty: Difficulty,
    /// `None` for blocked or unfinished games
    pub winner: Option<Side>,
    pub turns: u32,
    pub player_draws: u32,
    pub bot_draws: u32,
    /// Timestamp when the game was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Every event published during the game
    #[serde(default)]
    pub events: Vec<GameEvent>,
}

impl GameRecord {
    pub fn from_game(game_id: String, game: &Game) -> Self {
        let s = game.state();
        Self {
            game_id,
            seed: game.seed().to_string(),
            difficulty: game.difficulty(),
            winner: game.winner(),
            turns: s.turns,
            player_draws: s.player_draws,
            bot_draws: s.bot_draws,
            ts: None,
            events: game.events().to_vec(),
        }
    }

    /// Cards the player put down, in play order.
    pub fn player_plays(&self) -> impl Iterator<Item = &crate::cards::Card> {
        self.events.iter().filter_map(|e| match e {
            GameEvent::CardPlayed {
                by: Side::Player,
                card,
            } => Some(card),
            _ => None,
        })
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Highest sequence number among the `yyyymmdd` ids in JSONL `text`.
/// Unparseable lines and ids from other days are ignored.
fn last_seq(text: &str, yyyymmdd: &str) -> u32 {
    text.lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .filter_map(|v| {
            v.get("game_id")?
                .as_str()?
                .strip_prefix(yyyymmdd)?
                .strip_prefix('-')?
                .parse::<u32>()
                .ok()
        })
        .max()
        .unwrap_or(0)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, read_to_string, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`GameRecord`]s to a JSONL file, one LF-terminated line each.
pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    /// Open `path` for appending, creating parent directories as needed.
    ///
    /// Ids continue after the highest same-day id already in the file, so
    /// separate sessions sharing a file never repeat an id.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let date = Utc::now().format("%Y%m%d").to_string();
        let seq = match read_to_string(path) {
            Ok(text) => last_seq(&text, &date),
            Err(_) => 0,
        };
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date,
            seq,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_seq_picks_highest_same_day_id() {
        let text = concat!(
            "{\"game_id\":\"20260105-000002\"}\n",
            "{\"game_id\":\"20260105-000007\"}\n",
            "{\"game_id\":\"20260104-000042\"}\n",
            "not json\n",
            "{\"game_id\":\"20260105-000003\"}\n",
        );
        assert_eq!(last_seq(text, "20260105"), 7);
        assert_eq!(last_seq(text, "20260106"), 0);
        assert_eq!(last_seq("", "20260105"), 0);
    }
}
