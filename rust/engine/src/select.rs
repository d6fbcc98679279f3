use crate::cards::{Card, RuleType};
use crate::errors::SelectionError;
use crate::history::PlayerHistory;
use crate::rng::LehmerRng;
use crate::state::Difficulty;

/// What a selector may look at when picking a card.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    /// Legal cards after the engine's own filtering, in hand order. Never empty
    /// when the engine asks for a card.
    pub candidates: &'a [Card],
    /// The selecting side's whole hand
    pub hand: &'a [Card],
    /// The other side's hand, used by fairness-aware scoring
    pub opponent_hand: &'a [Card],
    pub rule: RuleType,
    pub center: Option<&'a Card>,
    pub deck_remaining: usize,
    /// Recent human moves
    pub history: &'a PlayerHistory,
    pub difficulty: Difficulty,
}

impl SelectionContext<'_> {
    pub fn is_candidate(&self, card: &Card) -> bool {
        self.candidates.contains(card)
    }
}

/// A card picking policy. Implementations must draw all randomness from
/// the provided generator so games stay replayable from their seed.
pub trait CardSelector {
    /// Pick one of `ctx.candidates`.
    fn select_card(
        &self,
        ctx: &SelectionContext<'_>,
        rng: &mut LehmerRng,
    ) -> Result<Card, SelectionError>;

    fn name(&self) -> &str;
}
