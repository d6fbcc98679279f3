//! # mindshift-ai: Bot Opponents for MindShift
//!
//! Card selection policies for the MindShift bot. Every policy implements the
//! engine's [`CardSelector`] interface and draws all of its randomness from
//! the game's seeded generator, so a game replays exactly from its seed.
//!
//! ## Core Components
//!
//! - [`Personality`] - The closed set of named bot policies
//! - [`Bot`] - A personality wrapped in the fallback pipeline
//! - [`baseline`] - Deterministic scorer used when a personality fails
//! - [`create_bot`] - Factory for boxed selectors
//!
//! ## Quick Start
//!
//! ```rust
//! use mindshift_ai::{create_bot, Personality};
//! use mindshift_engine::engine::Game;
//! use mindshift_engine::state::{Difficulty, Phase, Side};
//!
//! let bot = create_bot(Personality::for_difficulty(Difficulty::Hard));
//! let mut game = Game::new(Difficulty::Hard, "quick-start");
//!
//! let idx = game.playable(Side::Player)[0];
//! game.player_play(idx).expect("first play is always legal");
//! game.bot_turn(bot.as_ref()).expect("bot acts on its own turn");
//! assert!(matches!(game.state().phase, Phase::PlayerTurn | Phase::GameOver { .. }));
//! ```
//!
//! ## Personalities
//!
//! - `"tactical"` - Scores every candidate and plays the best (hard)
//! - `"impulsive"` - Usually the first legal card, sometimes a random one (easy)
//! - `"adaptive"` - Steers away from the colour the human has been playing (medium)

use std::fmt;
use std::str::FromStr;

use mindshift_engine::cards::Card;
use mindshift_engine::errors::SelectionError;
use mindshift_engine::rng::LehmerRng;
use mindshift_engine::state::Difficulty;
use tracing::warn;

pub use mindshift_engine::select::{CardSelector, SelectionContext};

pub mod adaptive;
pub mod baseline;
pub mod impulsive;
pub mod tactical;

/// Named bot policy. Each variant picks one card from the candidate set.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Personality {
    Tactical,
    Impulsive,
    Adaptive,
}

impl Personality {
    pub const ALL: [Personality; 3] = [
        Personality::Tactical,
        Personality::Impulsive,
        Personality::Adaptive,
    ];

    /// Easy plays impulsively, medium adapts to the human, hard plays tactically.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Personality::Impulsive,
            Difficulty::Medium => Personality::Adaptive,
            Difficulty::Hard => Personality::Tactical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::Tactical => "tactical",
            Personality::Impulsive => "impulsive",
            Personality::Adaptive => "adaptive",
        }
    }

    /// Run this personality alone, without any fallback.
    pub fn select(
        &self,
        ctx: &SelectionContext<'_>,
        rng: &mut LehmerRng,
    ) -> Result<Card, SelectionError> {
        match self {
            Personality::Tactical => tactical::select(ctx),
            Personality::Impulsive => impulsive::select(ctx, rng),
            Personality::Adaptive => adaptive::select(ctx, rng),
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Personality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tactical" => Ok(Personality::Tactical),
            "impulsive" => Ok(Personality::Impulsive),
            "adaptive" => Ok(Personality::Adaptive),
            other => Err(format!(
                "Unknown personality: {} (expected tactical, impulsive or adaptive)",
                other
            )),
        }
    }
}

/// A personality behind the ordered fallback pipeline: the personality
/// first, then the [`baseline`] scorer, then a uniform pick. A stage that
/// errors or answers with a card outside the candidates hands over to the
/// next stage, so selection only fails when there is nothing to choose from.
///
/// # Example
///
/// ```rust
/// use mindshift_ai::{Bot, CardSelector, Personality};
///
/// let bot = Bot::new(Personality::Adaptive);
/// assert_eq!(bot.name(), "adaptive");
/// ```
#[derive(Debug, Clone)]
pub struct Bot {
    personality: Personality,
}

impl Bot {
    pub fn new(personality: Personality) -> Self {
        Self { personality }
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }
}

/// Accept `picked` only when it is one of the candidates.
fn checked(
    ctx: &SelectionContext<'_>,
    picked: Result<Card, SelectionError>,
) -> Result<Card, SelectionError> {
    let card = picked?;
    if ctx.is_candidate(&card) {
        Ok(card)
    } else {
        Err(SelectionError::OutsideCandidates(card))
    }
}

/// Last stage: any candidate, uniformly.
pub fn uniform(ctx: &SelectionContext<'_>, rng: &mut LehmerRng) -> Result<Card, SelectionError> {
    if ctx.candidates.is_empty() {
        return Err(SelectionError::NoCandidates);
    }
    Ok(ctx.candidates[rng.below(ctx.candidates.len())])
}

impl CardSelector for Bot {
    fn select_card(
        &self,
        ctx: &SelectionContext<'_>,
        rng: &mut LehmerRng,
    ) -> Result<Card, SelectionError> {
        if ctx.candidates.is_empty() {
            return Err(SelectionError::NoCandidates);
        }
        checked(ctx, self.personality.select(ctx, rng))
            .or_else(|e| {
                warn!(stage = self.personality.as_str(), error = %e, "personality failed");
                checked(ctx, baseline::select(ctx))
            })
            .or_else(|e| {
                warn!(stage = "baseline", error = %e, "scorer failed");
                uniform(ctx, rng)
            })
    }

    fn name(&self) -> &str {
        self.personality.as_str()
    }
}

/// Factory function to create a bot for a personality.
///
/// # Example
///
/// ```rust
/// use mindshift_ai::{create_bot, Personality};
///
/// let bot = create_bot(Personality::Tactical);
/// assert_eq!(bot.name(), "tactical");
/// ```
pub fn create_bot(personality: Personality) -> Box<dyn CardSelector> {
    Box::new(Bot::new(personality))
}


#[cfg(test)]
mod tests {
    use super::test_support::{c, ctx};
    use super::*;
    use mindshift_engine::cards::Color;
    use mindshift_engine::history::PlayerHistory;

    #[test]
    fn difficulty_maps_to_personality() {
        assert_eq!(
            Personality::for_difficulty(Difficulty::Easy),
            Personality::Impulsive
        );
        assert_eq!(
            Personality::for_difficulty(Difficulty::Medium),
            Personality::Adaptive
        );
        assert_eq!(
            Personality::for_difficulty(Difficulty::Hard),
            Personality::Tactical
        );
    }

    #[test]
    fn personality_names_round_trip() {
        for p in Personality::ALL {
            assert_eq!(p.as_str().parse::<Personality>(), Ok(p));
        }
        assert_eq!(" Tactical ".parse::<Personality>(), Ok(Personality::Tactical));
        assert!("greedy".parse::<Personality>().is_err());
    }

    #[test]
    fn bot_always_answers_with_a_candidate() {
        let hand = [c(Color::Red, 3), c(Color::Blue, 7), c(Color::Green, 0)];
        let history = PlayerHistory::new();
        let context = ctx(&hand, &[], &history, 20, Difficulty::Medium);
        for p in Personality::ALL {
            let bot = Bot::new(p);
            let mut rng = LehmerRng::from_seed_str(p.as_str());
            for _ in 0..50 {
                let card = bot.select_card(&context, &mut rng).expect("candidate");
                assert!(hand.contains(&card));
            }
        }
    }

    #[test]
    fn empty_candidates_fail_every_stage() {
        let history = PlayerHistory::new();
        let context = ctx(&[], &[], &history, 20, Difficulty::Hard);
        let mut rng = LehmerRng::from_seed_str("empty");
        assert_eq!(
            Bot::new(Personality::Tactical).select_card(&context, &mut rng),
            Err(SelectionError::NoCandidates)
        );
        assert_eq!(uniform(&context, &mut rng), Err(SelectionError::NoCandidates));
    }

    #[test]
    fn card_outside_candidates_is_rejected() {
        let hand = [c(Color::Red, 3), c(Color::Blue, 7)];
        let history = PlayerHistory::new();
        let context = SelectionContext {
            candidates: &hand[..1],
            ..ctx(&hand, &[], &history, 20, Difficulty::Hard)
        };
        assert_eq!(
            checked(&context, Ok(hand[1])),
            Err(SelectionError::OutsideCandidates(hand[1]))
        );
        assert_eq!(checked(&context, Ok(hand[0])), Ok(hand[0]));
    }

    #[test]
    fn factory_names_match_personality() {
        for p in Personality::ALL {
            assert_eq!(create_bot(p).name(), p.as_str());
        }
    }
}
