//! Deal command handler.
//!
//! Shows the opening position a seed produces: both hands, the center card
//! and the size of the draw pile. Handy for checking that a seed replays.

use crate::error::CliError;
use crate::formatters::{format_card, format_center};
use mindshift_engine::cards::Card;
use mindshift_engine::engine::Game;
use mindshift_engine::state::Difficulty;
use std::io::Write;

/// Handle the deal command.
pub fn handle_deal_command(seed: String, out: &mut dyn Write) -> Result<(), CliError> {
    // Difficulty does not influence the deal.
    let game = Game::new(Difficulty::default(), &seed);
    let s = game.state();
    let list = |cards: &[Card]| {
        cards
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(", ")
    };

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Player: {}", list(&s.player_hand))?;
    writeln!(out, "Bot: {}", list(&s.bot_hand))?;
    writeln!(out, "Center: {}", format_center(s.center.as_ref()))?;
    writeln!(out, "Task: {}", s.rule.label())?;
    writeln!(out, "Deck: {} cards", s.deck_remaining())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_shows_both_hands() {
        let mut out = Vec::new();
        handle_deal_command("42".to_string(), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Player: "));
        assert!(output.contains("Bot: "));
        assert!(output.contains("Task: Any"));
        assert!(output.contains("Deck: 29 cards"));
        let player = output.lines().find(|l| l.starts_with("Player:")).unwrap();
        assert_eq!(player.matches(", ").count(), 4);
    }

    #[test]
    fn test_deal_is_deterministic() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_deal_command("same".to_string(), &mut a).unwrap();
        handle_deal_command("same".to_string(), &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deal_differs_across_seeds() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_deal_command("one".to_string(), &mut a).unwrap();
        handle_deal_command("two".to_string(), &mut b).unwrap();
        assert_ne!(a, b);
    }
}
