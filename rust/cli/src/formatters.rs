//! Card, hand and event formatters for terminal display.
//!
//! Colours are shown as coloured squares where the terminal is expected to
//! render them, with single-letter ASCII fallback otherwise.
//!
//! ## Example
//!
//! ```rust
//! use mindshift_engine::cards::{Card, Color};
//! use mindshift_cli::formatters::format_card;
//!
//! let card = Card::new(Color::Blue, 7);
//! let shown = format_card(&card);
//! assert!(shown == "🟦7 (Match number)" || shown == "B7 (Match number)");
//! ```

use mindshift_engine::cards::{Card, Color, RuleType};
use mindshift_engine::events::GameEvent;
use mindshift_engine::state::Side;

/// Check if the terminal is expected to render Unicode colour squares.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Assumes support elsewhere.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_color(color: Color) -> &'static str {
    if supports_unicode() {
        match color {
            Color::Red => "🟥",
            Color::Blue => "🟦",
            Color::Green => "🟩",
            Color::Yellow => "🟨",
        }
    } else {
        match color {
            Color::Red => "R",
            Color::Blue => "B",
            Color::Green => "G",
            Color::Yellow => "Y",
        }
    }
}

pub fn format_rule(rule: RuleType) -> &'static str {
    rule.label()
}

pub fn format_card(card: &Card) -> String {
    format!(
        "{}{} ({})",
        format_color(card.color),
        card.value,
        format_rule(card.rule)
    )
}

/// `(none)` before anything has been played.
pub fn format_center(center: Option<&Card>) -> String {
    center.map_or_else(|| "(none)".to_string(), format_card)
}

/// One numbered line per card; legal cards are marked with `*`.
pub fn format_hand(hand: &[Card], playable: &[usize]) -> String {
    hand.iter()
        .enumerate()
        .map(|(i, c)| {
            let mark = if playable.contains(&i) { "*" } else { " " };
            format!("{:>3}) {} {}", i + 1, mark, format_card(c))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_winner(winner: Option<Side>) -> &'static str {
    match winner {
        Some(Side::Player) => "You win!",
        Some(Side::Bot) => "Bot wins.",
        None => "Blocked game, no winner.",
    }
}

/// Narration for an event, from the human's point of view.
pub fn format_event(event: &GameEvent) -> String {
    match event {
        GameEvent::CardPlayed {
            by: Side::Player,
            card,
        } => format!("You played {}", format_card(card)),
        GameEvent::CardPlayed { by: Side::Bot, card } => {
            format!("Bot played {}", format_card(card))
        }
        GameEvent::CardDrawn { by: Side::Player } => "You drew a card".to_string(),
        GameEvent::CardDrawn { by: Side::Bot } => "Bot drew a card".to_string(),
        GameEvent::IllegalMove { index } => {
            format!("Card {} does not fit the current task", index + 1)
        }
        GameEvent::DeckEmpty { .. } => "The deck is empty".to_string(),
        GameEvent::TurnPassed { by: Side::Player } => "You passed".to_string(),
        GameEvent::TurnPassed { by: Side::Bot } => "Bot passed".to_string(),
        GameEvent::UndoApplied => "Undo: the bot's last move was taken back".to_string(),
        GameEvent::GameOver { winner } => format!("Game over. {}", format_winner(*winner)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_card_either_mode() {
        let s = format_card(&Card::new(Color::Red, 4));
        assert!(s == "🟥4 (Higher)" || s == "R4 (Higher)", "{}", s);
    }

    #[test]
    fn test_rule_labels() {
        assert_eq!(format_rule(RuleType::Any), "Any");
        assert_eq!(format_rule(RuleType::MatchColor), "Match colour");
        assert_eq!(format_rule(RuleType::MatchNumber), "Match number");
        assert_eq!(format_rule(RuleType::Higher), "Higher");
    }

    #[test]
    fn test_format_center_none() {
        assert_eq!(format_center(None), "(none)");
    }

    #[test]
    fn test_format_hand_marks_playable() {
        let hand = [Card::new(Color::Red, 1), Card::new(Color::Blue, 9)];
        let text = format_hand(&hand, &[1]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  1)   "));
        assert!(lines[1].starts_with("  2) * "));
    }

    #[test]
    fn test_format_event_points_of_view() {
        let card = Card::new(Color::Green, 0);
        assert!(
            format_event(&GameEvent::CardPlayed {
                by: Side::Bot,
                card
            })
            .starts_with("Bot played")
        );
        assert_eq!(
            format_event(&GameEvent::IllegalMove { index: 2 }),
            "Card 3 does not fit the current task"
        );
        assert_eq!(
            format_event(&GameEvent::GameOver { winner: None }),
            "Game over. Blocked game, no winner."
        );
    }
}
