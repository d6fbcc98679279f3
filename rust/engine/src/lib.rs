//! # mindshift-engine: MindShift Game Engine Core
//!
//! A deterministic engine for MindShift, a two-seat (human vs. bot) card game
//! where every card played must satisfy the task set by the previous card and
//! then sets the next task itself. The first side to empty its hand wins.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Color, RuleType, Card) and deck construction
//! - [`rng`] - Seeded Lehmer generator shared by the shuffle and the bots
//! - [`deck`] - Draw pile with Fisher–Yates shuffling
//! - [`rules`] - The single card legality predicate
//! - [`state`] - Game state snapshot, phases, sides and difficulty
//! - [`engine`] - Turn engine: player and bot transitions, undo, restart
//! - [`history`] - Sliding window of the human's recent moves
//! - [`select`] - Interface implemented by bot personalities
//! - [`events`] - Events published after each transition
//! - [`logger`] - GameRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use mindshift_engine::engine::Game;
//! use mindshift_engine::state::{Difficulty, Phase, Side};
//!
//! let mut game = Game::new(Difficulty::Medium, "quick-start");
//!
//! // Any card is legal on the first turn
//! let idx = game.playable(Side::Player)[0];
//! let events = game.player_play(idx).expect("first play is always legal");
//! assert!(!events.is_empty());
//! assert_eq!(game.state().phase, Phase::BotTurn);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! A non-empty seed string fixes the deal and every bot coin flip:
//!
//! ```rust
//! use mindshift_engine::engine::Game;
//! use mindshift_engine::state::Difficulty;
//!
//! let a = Game::new(Difficulty::Hard, "same seed");
//! let b = Game::new(Difficulty::Hard, "same seed");
//! assert_eq!(a.state(), b.state());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod history;
pub mod logger;
pub mod rng;
pub mod rules;
pub mod select;
pub mod state;
