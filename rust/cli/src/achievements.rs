//! Achievements derived from game records.

use mindshift_engine::cards::RuleType;
use mindshift_engine::logger::GameRecord;
use mindshift_engine::state::Side;
use serde::Serialize;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    FirstWin,
    ColourLover,
}

impl Achievement {
    pub const ALL: [Achievement; 2] = [Achievement::FirstWin, Achievement::ColourLover];

    pub fn id(&self) -> &'static str {
        match self {
            Achievement::FirstWin => "first_win",
            Achievement::ColourLover => "colour_lover",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Achievement::FirstWin => "First Win",
            Achievement::ColourLover => "Colour Lover",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Achievement::FirstWin => "Win your first game.",
            Achievement::ColourLover => "Play a Match colour card.",
        }
    }

    /// Whether a single game earns this achievement.
    pub fn earned_by(&self, record: &GameRecord) -> bool {
        match self {
            Achievement::FirstWin => record.winner == Some(Side::Player),
            Achievement::ColourLover => record
                .player_plays()
                .any(|c| c.rule == RuleType::MatchColor),
        }
    }
}

/// Achievements earned by at least one of `records`, in display order.
pub fn unlocked<'a, I>(records: I) -> Vec<Achievement>
where
    I: IntoIterator<Item = &'a GameRecord>,
    I::IntoIter: Clone,
{
    let records = records.into_iter();
    Achievement::ALL
        .into_iter()
        .filter(|a| records.clone().any(|r| a.earned_by(r)))
        .collect()
}

/// Achievements `record` earns that none of `earlier` had earned.
pub fn newly_unlocked(earlier: &[GameRecord], record: &GameRecord) -> Vec<Achievement> {
    let before = unlocked(earlier);
    Achievement::ALL
        .into_iter()
        .filter(|a| !before.contains(a) && a.earned_by(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindshift_engine::cards::{Card, Color};
    use mindshift_engine::events::GameEvent;
    use mindshift_engine::state::Difficulty;

    fn record(winner: Option<Side>, events: Vec<GameEvent>) -> GameRecord {
        GameRecord {
            game_id: "20260101-000001".into(),
            seed: "s".into(),
            difficulty: Difficulty::Easy,
            winner,
            turns: 3,
            player_draws: 0,
            bot_draws: 0,
            ts: None,
            events,
        }
    }

    #[test]
    fn first_win_needs_a_player_win() {
        assert!(Achievement::FirstWin.earned_by(&record(Some(Side::Player), vec![])));
        assert!(!Achievement::FirstWin.earned_by(&record(Some(Side::Bot), vec![])));
        assert!(!Achievement::FirstWin.earned_by(&record(None, vec![])));
    }

    #[test]
    fn colour_lover_needs_a_player_match_colour_play() {
        let blue6 = Card::new(Color::Blue, 6);
        let by_player = record(
            None,
            vec![GameEvent::CardPlayed {
                by: Side::Player,
                card: blue6,
            }],
        );
        let by_bot = record(
            None,
            vec![GameEvent::CardPlayed {
                by: Side::Bot,
                card: blue6,
            }],
        );
        assert!(Achievement::ColourLover.earned_by(&by_player));
        assert!(!Achievement::ColourLover.earned_by(&by_bot));
    }

    #[test]
    fn unlocked_scans_all_records() {
        let records = [
            record(Some(Side::Bot), vec![]),
            record(Some(Side::Player), vec![]),
        ];
        assert_eq!(unlocked(&records), vec![Achievement::FirstWin]);
        assert!(unlocked(&records[..1]).is_empty());
    }

    #[test]
    fn second_win_unlocks_nothing_new() {
        let first = record(Some(Side::Player), vec![]);
        let second = record(Some(Side::Player), vec![]);
        assert_eq!(newly_unlocked(&[], &first), vec![Achievement::FirstWin]);
        assert!(newly_unlocked(&[first], &second).is_empty());
    }

    #[test]
    fn newly_unlocked_keeps_only_missing_ones() {
        let earlier = [record(Some(Side::Player), vec![])];
        let both = record(
            Some(Side::Player),
            vec![GameEvent::CardPlayed {
                by: Side::Player,
                card: Card::new(Color::Red, 1),
            }],
        );
        assert_eq!(newly_unlocked(&earlier, &both), vec![Achievement::ColourLover]);
    }

    #[test]
    fn ids_are_snake_case() {
        for a in Achievement::ALL {
            let json = serde_json::to_string(&a).unwrap();
            assert_eq!(json, format!("\"{}\"", a.id()));
        }
    }
}
