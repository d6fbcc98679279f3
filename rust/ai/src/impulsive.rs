//! Impulsive personality: the first legal card, except now and then a
//! random one.

use mindshift_engine::cards::Card;
use mindshift_engine::errors::SelectionError;
use mindshift_engine::rng::LehmerRng;
use mindshift_engine::select::SelectionContext;

/// Chance of ignoring the first candidate.
pub const RANDOM_PICK_CHANCE: f64 = 0.3;

pub fn select(ctx: &SelectionContext<'_>, rng: &mut LehmerRng) -> Result<Card, SelectionError> {
    let first = *ctx.candidates.first().ok_or(SelectionError::NoCandidates)?;
    if rng.next_f64() < RANDOM_PICK_CHANCE {
        return Ok(ctx.candidates[rng.below(ctx.candidates.len())]);
    }
    Ok(first)
}
