//! Input parsing and validation for interactive commands.
//!
//! Turns a line typed at the `play` prompt into a [`ParseResult`]. Card
//! numbers are 1-based on screen and 0-based in the result.

/// Result of parsing one line typed during a game.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// Play the card at this hand position (0-based)
    Play(usize),
    Draw,
    Pass,
    Undo,
    Restart,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a prompt line given the current hand size.
///
/// Accepts (case-insensitive):
/// - `1`..`n` or `play N` → play that card
/// - `d` / `draw`, `p` / `pass`, `u` / `undo`, `r` / `restart`
/// - `q` / `quit`
///
/// # Example
///
/// ```rust
/// # use mindshift_cli::validation::{parse_player_command, ParseResult};
/// assert_eq!(parse_player_command("2", 5), ParseResult::Play(1));
/// assert_eq!(parse_player_command("Draw", 5), ParseResult::Draw);
/// assert_eq!(parse_player_command("q", 5), ParseResult::Quit);
///
/// match parse_player_command("9", 5) {
///     ParseResult::Invalid(msg) => assert!(msg.contains("between 1 and 5")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_command(input: &str, hand_len: usize) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    match parts.as_slice() {
        [] => ParseResult::Invalid("Empty input".to_string()),
        ["d" | "draw"] => ParseResult::Draw,
        ["p" | "pass"] => ParseResult::Pass,
        ["u" | "undo"] => ParseResult::Undo,
        ["r" | "restart"] => ParseResult::Restart,
        ["q" | "quit"] => ParseResult::Quit,
        [n] | ["play", n] => parse_card_number(n, hand_len),
        _ => ParseResult::Invalid(format!(
            "Unrecognized command: {}. Use a card number, d, p, u, r or q",
            input
        )),
    }
}

fn parse_card_number(token: &str, hand_len: usize) -> ParseResult {
    let Ok(n) = token.parse::<usize>() else {
        return ParseResult::Invalid(format!(
            "Unrecognized command: {}. Use a card number, d, p, u, r or q",
            token
        ));
    };
    if hand_len == 0 {
        return ParseResult::Invalid("You have no cards to play".to_string());
    }
    if n == 0 || n > hand_len {
        return ParseResult::Invalid(format!(
            "Card number must be between 1 and {}",
            hand_len
        ));
    }
    ParseResult::Play(n - 1)
}
