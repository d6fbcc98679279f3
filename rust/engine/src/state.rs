use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cards::{Card, RuleType, DECK_SIZE};
use crate::deck::Deck;

/// One of the two seats at the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Bot,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Bot => "bot",
        }
    }

    pub fn other(&self) -> Side {
        match self {
            Side::Player => Side::Bot,
            Side::Bot => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty tier chosen when a game starts. It selects the bot
/// personality and whether the single undo is offered.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn allows_undo(&self) -> bool {
        matches!(self, Difficulty::Easy)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{}' (expected easy, medium or hard)",
                other
            )),
        }
    }
}

/// Whose move it is, or how the game ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    PlayerTurn,
    BotTurn,
    /// Terminal. `winner` is `None` when a blocked game ends level.
    GameOver { winner: Option<Side> },
}

impl Phase {
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::GameOver { .. })
    }

    /// Side expected to act, if the game is still running.
    pub fn to_act(&self) -> Option<Side> {
        match self {
            Phase::PlayerTurn => Some(Side::Player),
            Phase::BotTurn => Some(Side::Bot),
            Phase::GameOver { .. } => None,
        }
    }
}

/// Everything that changes during a game. A value of this type is also the
/// snapshot published to observers and the payload of the undo slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub deck: Deck,
    pub player_hand: Vec<Card>,
    pub bot_hand: Vec<Card>,
    pub center: Option<Card>,
    /// Center cards that have been covered by a later play
    pub discard: Vec<Card>,
    pub rule: RuleType,
    pub phase: Phase,
    /// Rule type of the bot's most recent play
    pub last_bot_rule: Option<RuleType>,
    pub turns: u32,
    pub player_draws: u32,
    pub bot_draws: u32,
    /// Consecutive passes made while the deck was empty
    pub passes: u8,
}

impl GameState {
    /// A state with the given hands and center, rule taken from the center,
    /// the player to move and all counters at zero. Used to stage positions.
    pub fn from_position(
        deck: Vec<Card>,
        player_hand: Vec<Card>,
        bot_hand: Vec<Card>,
        center: Option<Card>,
    ) -> Self {
        Self {
            deck: Deck::from_cards(deck),
            player_hand,
            bot_hand,
            rule: center.map(|c| c.rule).unwrap_or(RuleType::Any),
            center,
            discard: Vec::new(),
            phase: Phase::PlayerTurn,
            last_bot_rule: None,
            turns: 0,
            player_draws: 0,
            bot_draws: 0,
            passes: 0,
        }
    }

    pub fn hand(&self, side: Side) -> &[Card] {
        match side {
            Side::Player => &self.player_hand,
            Side::Bot => &self.bot_hand,
        }
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Cards accounted for across deck, hands, center and discard pile.
    /// Equals [`DECK_SIZE`] in every reachable state.
    pub fn card_count(&self) -> usize {
        self.deck.remaining()
            + self.player_hand.len()
            + self.bot_hand.len()
            + usize::from(self.center.is_some())
            + self.discard.len()
    }

    pub fn is_conserved(&self) -> bool {
        self.card_count() == DECK_SIZE
    }

    /// Put `card` in the center and adopt its task.
    pub(crate) fn place_center(&mut self, card: Card) {
        if let Some(old) = self.center.replace(card) {
            self.discard.push(old);
        }
        self.rule = card.rule;
        self.passes = 0;
    }
}
