use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color, RuleType};

/// Number of human moves remembered.
pub const HISTORY_LIMIT: usize = 3;

/// One remembered human move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveSummary {
    pub color: Color,
    pub rule: RuleType,
}

/// Sliding window over the human's most recent plays, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHistory {
    moves: VecDeque<MoveSummary>,
}

impl PlayerHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, card: &Card) {
        self.moves.push_back(MoveSummary {
            color: card.color,
            rule: card.rule,
        });
        while self.moves.len() > HISTORY_LIMIT {
            self.moves.pop_front();
        }
    }

    pub fn moves(&self) -> impl Iterator<Item = &MoveSummary> {
        self.moves.iter()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Most frequent color in the window. Ties go to the color that appears
    /// earliest in the window.
    pub fn favorite_color(&self) -> Option<Color> {
        let mut counts: Vec<(Color, usize)> = Vec::with_capacity(HISTORY_LIMIT);
        for m in &self.moves {
            match counts.iter_mut().find(|(c, _)| *c == m.color) {
                Some((_, n)) => *n += 1,
                None => counts.push((m.color, 1)),
            }
        }
        let mut best: Option<(Color, usize)> = None;
        for (color, n) in counts {
            if best.is_none_or(|(_, top)| n > top) {
                best = Some((color, n));
            }
        }
        best.map(|(c, _)| c)
    }
}
