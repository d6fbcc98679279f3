use thiserror::Error;

use crate::state::Side;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Card {index} does not satisfy the current task")]
    IllegalMove { index: usize },
    #[error("No card at position {index} (hand holds {len})")]
    InvalidCardIndex { index: usize, len: usize },
    #[error("Deck is empty")]
    DeckEmpty,
    #[error("Passing is only allowed when the deck is empty and no card can be played")]
    PassNotAllowed,
    #[error("It's not the {actual}'s turn (expected {expected})")]
    InvalidTurnContext { expected: Side, actual: Side },
    #[error("Undo is not available")]
    UndoUnavailable,
    #[error("Game is already over")]
    GameOver,
}

/// Failure of one stage of the bot selection pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no candidates to choose from")]
    NoCandidates,
    #[error("selected card {0} is not a candidate")]
    OutsideCandidates(crate::cards::Card),
}
