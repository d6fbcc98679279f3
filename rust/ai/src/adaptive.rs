//! Adaptive personality: counters the colour the human keeps playing.
//!
//! The favourite colour is read from the human's recent move window. When
//! some candidates avoid it, the bot picks among those most of the time;
//! otherwise it picks any candidate.

use mindshift_engine::cards::Card;
use mindshift_engine::errors::SelectionError;
use mindshift_engine::rng::LehmerRng;
use mindshift_engine::select::SelectionContext;

/// Chance of countering when a counter is available.
pub const COUNTER_CHANCE: f64 = 0.7;

pub fn select(ctx: &SelectionContext<'_>, rng: &mut LehmerRng) -> Result<Card, SelectionError> {
    if ctx.candidates.is_empty() {
        return Err(SelectionError::NoCandidates);
    }
    if let Some(favorite) = ctx.history.favorite_color() {
        let counters: Vec<Card> = ctx
            .candidates
            .iter()
            .copied()
            .filter(|c| c.color != favorite)
            .collect();
        if !counters.is_empty() && rng.next_f64() < COUNTER_CHANCE {
            return Ok(counters[rng.below(counters.len())]);
        }
    }
    Ok(ctx.candidates[rng.below(ctx.candidates.len())])
}
