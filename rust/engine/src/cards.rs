use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest face value printed on a card.
pub const MAX_VALUE: u8 = 9;

/// Number of cards in a freshly built deck (4 colors x 10 values).
pub const DECK_SIZE: usize = 40;

/// One of the four card colors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The task a card sets for the next player once it lands in the center.
///
/// A card's rule type is fixed by its value when the deck is built:
/// 0 and 5 open the table, 1 and 6 demand the same color, 2 and 7 demand
/// the same number and everything else demands a strictly higher number.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    /// Anything goes
    Any,
    /// Next card must share the center card's color
    MatchColor,
    /// Next card must share the center card's value
    MatchNumber,
    /// Next card must have a greater value than the center card
    Higher,
}

impl RuleType {
    pub fn for_value(value: u8) -> RuleType {
        match value {
            0 | 5 => RuleType::Any,
            1 | 6 => RuleType::MatchColor,
            2 | 7 => RuleType::MatchNumber,
            _ => RuleType::Higher,
        }
    }

    /// Snake-case identifier used in records and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::Any => "any",
            RuleType::MatchColor => "match_color",
            RuleType::MatchNumber => "match_number",
            RuleType::Higher => "higher",
        }
    }

    /// Human readable label shown to players.
    pub fn label(&self) -> &'static str {
        match self {
            RuleType::Any => "Any",
            RuleType::MatchColor => "Match colour",
            RuleType::MatchNumber => "Match number",
            RuleType::Higher => "Higher",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(RuleType::Any),
            "match_color" | "match_colour" => Ok(RuleType::MatchColor),
            "match_number" => Ok(RuleType::MatchNumber),
            "higher" => Ok(RuleType::Higher),
            other => Err(format!("unknown rule type '{}'", other)),
        }
    }
}

/// A single card. Cards carry no identity beyond their fields, and a
/// (color, value) pair appears at most once in a deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    /// Face value in `0..=9`
    pub value: u8,
    /// Task this card sets when played
    #[serde(rename = "rule_type")]
    pub rule: RuleType,
}

impl Card {
    /// Build a card with its rule derived from the value.
    pub fn new(color: Color, value: u8) -> Self {
        Self {
            color,
            value,
            rule: RuleType::for_value(value),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.color, self.value, self.rule.label())
    }
}

pub fn all_colors() -> [Color; 4] {
    [Color::Red, Color::Blue, Color::Green, Color::Yellow]
}

/// All 40 cards in color-major, value-minor order.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &c in &all_colors() {
        for value in 0..=MAX_VALUE {
            v.push(Card::new(c, value));
        }
    }
    v
}
