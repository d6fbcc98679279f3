use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};
use crate::rng::LehmerRng;

/// Draw pile. The top of the pile is the end of the vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Full 40-card deck in construction order; call [`Deck::shuffle`] before dealing.
    pub fn new() -> Self {
        Self { cards: full_deck() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// In-place Fisher–Yates, walking from the last index down.
    pub fn shuffle(&mut self, rng: &mut LehmerRng) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.below(i + 1);
            self.cards.swap(i, j);
        }
    }

    /// Remove the top card, or `None` once the pile is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_takes_from_the_end() {
        let mut deck = Deck::new();
        let top = *deck.cards().last().unwrap();
        assert_eq!(deck.draw(), Some(top));
        assert_eq!(deck.remaining(), 39);
    }

    #[test]
    fn empty_deck_signals_none() {
        let mut deck = Deck::from_cards(Vec::new());
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn shuffle_keeps_every_card() {
        let mut deck = Deck::new();
        let mut rng = LehmerRng::from_seed_str("keep");
        deck.shuffle(&mut rng);
        let mut sorted: Vec<(u8, u8)> = deck
            .cards()
            .iter()
            .map(|c| (c.color as u8, c.value))
            .collect();
        sorted.sort();
        let mut expected: Vec<(u8, u8)> = full_deck().iter().map(|c| (c.color as u8, c.value)).collect();
        expected.sort();
        assert_eq!(sorted, expected);
    }
}
