use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::state::Side;

/// Discrete outcome of a transition, published for renderers and recorders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    CardPlayed { by: Side, card: Card },
    CardDrawn { by: Side },
    /// A play attempt that failed the current task
    IllegalMove { index: usize },
    /// A draw found the deck exhausted
    DeckEmpty { by: Side },
    /// `by` ended its turn without playing
    TurnPassed { by: Side },
    UndoApplied,
    GameOver { winner: Option<Side> },
}
