//! Deterministic scorer, the second stage of the [`Bot`](crate::Bot)
//! pipeline.
//!
//! Uses no randomness, so it cannot fail while candidates remain. Scores:
//!
//! - `+3` higher, `+2` match_number, `+1` match_color
//! - `+0.2` per point of value
//! - `-4` for a `match_number` card whose value the opponent does not hold,
//!   once the deck is nearly spent
//! - on hard only, `-1` for `any` and `-0.1` per same-coloured card in hand

use mindshift_engine::cards::{Card, RuleType};
use mindshift_engine::engine::FAIRNESS_DECK_THRESHOLD;
use mindshift_engine::errors::SelectionError;
use mindshift_engine::select::SelectionContext;
use mindshift_engine::state::Difficulty;

/// Penalty for a numeric lock the opponent cannot answer late in the game.
pub const TRAP_PENALTY: f64 = 4.0;

pub fn score(card: &Card, ctx: &SelectionContext<'_>) -> f64 {
    let mut score = match card.rule {
        RuleType::Higher => 3.0,
        RuleType::MatchNumber => 2.0,
        RuleType::MatchColor => 1.0,
        RuleType::Any => 0.0,
    };
    score += 0.2 * f64::from(card.value);

    if card.rule == RuleType::MatchNumber
        && ctx.deck_remaining <= FAIRNESS_DECK_THRESHOLD
        && !ctx.opponent_hand.iter().any(|c| c.value == card.value)
    {
        score -= TRAP_PENALTY;
    }

    if ctx.difficulty == Difficulty::Hard {
        if card.rule == RuleType::Any {
            score -= 1.0;
        }
        let same_color = ctx.hand.iter().filter(|c| c.color == card.color).count();
        score -= 0.1 * same_color as f64;
    }
    score
}

/// Highest scoring candidate; the first one seen wins ties.
pub fn select(ctx: &SelectionContext<'_>) -> Result<Card, SelectionError> {
    let mut best: Option<(Card, f64)> = None;
    for card in ctx.candidates {
        let s = score(card, ctx);
        if best.is_none_or(|(_, b)| s > b) {
            best = Some((*card, s));
        }
    }
    best.map(|(card, _)| card).ok_or(SelectionError::NoCandidates)
}
