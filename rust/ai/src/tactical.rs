//! Tactical personality: score every candidate, play the best.
//!
//! Restrictive tasks score highest (`higher` over `match_number` over
//! `match_color`), `any` is mildly penalised, high values are preferred and
//! colours the bot holds many of are kept back. Ties go to the candidate
//! seen first.

use mindshift_engine::cards::{Card, RuleType};
use mindshift_engine::errors::SelectionError;
use mindshift_engine::select::SelectionContext;

/// Score of `card` played from `hand`.
pub fn score(card: &Card, hand: &[Card]) -> f64 {
    let task = match card.rule {
        RuleType::Higher => 3.0,
        RuleType::MatchNumber => 2.0,
        RuleType::MatchColor => 1.0,
        RuleType::Any => -1.0,
    };
    let same_color = hand.iter().filter(|c| c.color == card.color).count();
    task + 0.25 * f64::from(card.value) - 0.1 * same_color as f64
}

pub fn select(ctx: &SelectionContext<'_>) -> Result<Card, SelectionError> {
    let mut best: Option<(Card, f64)> = None;
    for card in ctx.candidates {
        let s = score(card, ctx.hand);
        if best.is_none_or(|(_, b)| s > b) {
            best = Some((*card, s));
        }
    }
    best.map(|(card, _)| card).ok_or(SelectionError::NoCandidates)
}
