use mindshift_engine::events::GameEvent;
use mindshift_engine::logger::GameRecord;
use mindshift_engine::state::{Difficulty, Side};

pub fn record(seq: u32, difficulty: Difficulty, winner: Option<Side>) -> GameRecord {
    GameRecord {
        game_id: format!("20260301-{:06}", seq),
        seed: format!("fixture-{}", seq),
        difficulty,
        winner,
        turns: 12,
        player_draws: 2,
        bot_draws: 1,
        ts: Some("2026-03-01T10:00:00Z".to_string()),
        events: vec![GameEvent::GameOver { winner }],
    }
}

pub fn to_jsonl(records: &[GameRecord]) -> String {
    records
        .iter()
        .map(|r| serde_json::to_string(r).expect("serialize record") + "\n")
        .collect()
}
