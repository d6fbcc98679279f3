use crate::cards::{Card, RuleType};

/// Whether `card` satisfies the task set by `center`.
///
/// This is the only legality check in the crate: the human move validator,
/// the bot candidate filter and every bot personality go through it.
///
/// # Examples
///
/// ```
/// use mindshift_engine::cards::{Card, Color, RuleType};
/// use mindshift_engine::rules::is_playable;
///
/// let center = Card::new(Color::Blue, 6);
/// assert!(is_playable(&Card::new(Color::Red, 8), RuleType::Higher, Some(&center)));
/// assert!(!is_playable(&Card::new(Color::Red, 3), RuleType::Higher, Some(&center)));
/// assert!(is_playable(&Card::new(Color::Red, 3), RuleType::Any, Some(&center)));
/// assert!(is_playable(&Card::new(Color::Red, 3), RuleType::MatchColor, None));
/// ```
pub fn is_playable(card: &Card, rule: RuleType, center: Option<&Card>) -> bool {
    let Some(center) = center else {
        return true;
    };
    match rule {
        RuleType::Any => true,
        RuleType::MatchColor => card.color == center.color,
        RuleType::MatchNumber => card.value == center.value,
        RuleType::Higher => card.value > center.value,
    }
}

/// Indices of the cards in `hand` that pass [`is_playable`], in hand order.
pub fn playable_indices(hand: &[Card], rule: RuleType, center: Option<&Card>) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|(_, c)| is_playable(c, rule, center))
        .map(|(i, _)| i)
        .collect()
}
