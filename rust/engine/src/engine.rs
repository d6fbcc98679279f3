use tracing::{debug, info, warn};

use crate::cards::{Card, RuleType};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::events::GameEvent;
use crate::history::PlayerHistory;
use crate::rng::LehmerRng;
use crate::rules::{is_playable, playable_indices};
use crate::select::{CardSelector, SelectionContext};
use crate::state::{Difficulty, GameState, Phase, Side};

/// Cards dealt to each side at the start of a game.
pub const HAND_SIZE: usize = 5;

/// At or below this many cards left in the deck the bot avoids numeric locks
/// the player cannot answer.
pub const FAIRNESS_DECK_THRESHOLD: usize = 6;

/// Consecutive empty-deck passes that end a game.
const BLOCKING_PASSES: u8 = 2;

/// Turn engine for one human-vs-bot game.
///
/// `Game` owns the state, the seeded generator, the human's move history
/// and the undo slot. Every transition validates whose turn it is, mutates
/// the state synchronously and returns the events it produced; a rejected
/// action leaves the state untouched.
///
/// # Examples
///
/// ```
/// use mindshift_engine::engine::Game;
/// use mindshift_engine::state::{Difficulty, Phase};
///
/// let game = Game::new(Difficulty::Medium, "seed-42");
/// assert_eq!(game.state().player_hand.len(), 5);
/// assert_eq!(game.state().bot_hand.len(), 5);
/// assert!(game.state().center.is_some());
/// assert_eq!(game.state().phase, Phase::PlayerTurn);
/// assert!(game.state().is_conserved());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    rng: LehmerRng,
    difficulty: Difficulty,
    /// Seed string the generator was built from
    seed: String,
    history: PlayerHistory,
    undo_available: bool,
    undo_snapshot: Option<GameState>,
    /// Every event published since the game started
    log: Vec<GameEvent>,
}

impl Game {
    /// Start a game: shuffle, deal five cards each, turn up the center card.
    pub fn new(difficulty: Difficulty, seed: &str) -> Self {
        let mut rng = LehmerRng::from_seed_str(seed);
        let state = deal(&mut rng);
        info!(
            seed = %seed,
            difficulty = %difficulty,
            center = ?state.center,
            "game started"
        );
        Self {
            state,
            rng,
            difficulty,
            seed: seed.to_string(),
            history: PlayerHistory::new(),
            undo_available: difficulty.allows_undo(),
            undo_snapshot: None,
            log: Vec::new(),
        }
    }

    /// Resume from a staged position. The generator is seeded from `seed`
    /// but no cards are dealt.
    pub fn from_state(difficulty: Difficulty, seed: &str, state: GameState) -> Self {
        Self {
            state,
            rng: LehmerRng::from_seed_str(seed),
            difficulty,
            seed: seed.to_string(),
            history: PlayerHistory::new(),
            undo_available: difficulty.allows_undo(),
            undo_snapshot: None,
            log: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn history(&self) -> &PlayerHistory {
        &self.history
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.log
    }

    pub fn is_over(&self) -> bool {
        self.state.phase.is_over()
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state.phase {
            Phase::GameOver { winner } => winner,
            _ => None,
        }
    }

    /// True when a snapshot is waiting and the single undo has not been spent.
    pub fn undo_available(&self) -> bool {
        self.undo_available && self.undo_snapshot.is_some()
    }

    /// Legal card positions in `side`'s hand under the current task.
    pub fn playable(&self, side: Side) -> Vec<usize> {
        playable_indices(
            self.state.hand(side),
            self.state.rule,
            self.state.center.as_ref(),
        )
    }

    /// Whether the player may pass: deck exhausted and nothing playable.
    pub fn can_pass(&self) -> bool {
        self.state.deck.is_empty() && self.playable(Side::Player).is_empty()
    }

    /// Play the card at `index` from the player's hand.
    pub fn player_play(&mut self, index: usize) -> Result<Vec<GameEvent>, GameError> {
        self.expect_turn(Side::Player)?;
        let len = self.state.player_hand.len();
        let card = *self
            .state
            .player_hand
            .get(index)
            .ok_or(GameError::InvalidCardIndex { index, len })?;

        if !is_playable(&card, self.state.rule, self.state.center.as_ref()) {
            debug!(index, card = %card, rule = %self.state.rule, "illegal move rejected");
            self.log.push(GameEvent::IllegalMove { index });
            return Err(GameError::IllegalMove { index });
        }

        self.state.player_hand.remove(index);
        self.state.place_center(card);
        self.state.turns += 1;
        self.history.record(&card);
        debug!(card = %card, rule = %card.rule, "player played");

        let mut events = vec![GameEvent::CardPlayed {
            by: Side::Player,
            card,
        }];
        if self.state.player_hand.is_empty() {
            self.finish(Some(Side::Player), &mut events);
        } else {
            self.state.phase = Phase::BotTurn;
        }
        Ok(self.publish(events))
    }

    /// Draw one card for the player. The turn stays with the player.
    pub fn player_draw(&mut self) -> Result<Vec<GameEvent>, GameError> {
        self.expect_turn(Side::Player)?;
        match self.state.deck.draw() {
            Some(card) => {
                self.state.player_hand.push(card);
                self.state.player_draws += 1;
                debug!(remaining = self.state.deck.remaining(), "player drew");
                Ok(self.publish(vec![GameEvent::CardDrawn { by: Side::Player }]))
            }
            None => {
                self.log.push(GameEvent::DeckEmpty { by: Side::Player });
                Err(GameError::DeckEmpty)
            }
        }
    }

    /// Hand the turn to the bot without playing. Only legal once the deck
    /// is empty and the player holds nothing playable.
    pub fn player_pass(&mut self) -> Result<Vec<GameEvent>, GameError> {
        self.expect_turn(Side::Player)?;
        if !self.can_pass() {
            return Err(GameError::PassNotAllowed);
        }
        let mut events = vec![GameEvent::TurnPassed { by: Side::Player }];
        if !self.count_pass(&mut events) {
            self.state.phase = Phase::BotTurn;
        }
        Ok(self.publish(events))
    }

    /// Let `selector` act for the player: play if possible, otherwise draw,
    /// otherwise pass. Used by simulations that seat a bot in the player's chair.
    pub fn player_autoplay(
        &mut self,
        selector: &dyn CardSelector,
    ) -> Result<Vec<GameEvent>, GameError> {
        self.expect_turn(Side::Player)?;
        let candidates = self.playable(Side::Player);
        if candidates.is_empty() {
            return if self.state.deck.is_empty() {
                self.player_pass()
            } else {
                self.player_draw()
            };
        }
        let empty = PlayerHistory::new();
        let pick = self.choose(selector, &candidates, Side::Player, &empty);
        self.player_play(candidates[pick])
    }

    /// Run the bot's whole turn.
    ///
    /// The bot may not follow its own `match_number` play with another one;
    /// when that leaves nothing to play it draws once and retries, and passes
    /// if it still cannot play. Near the end of the deck it avoids
    /// `match_number` cards whose value the player cannot answer, as long as
    /// another candidate remains. `selector` picks among what survives.
    pub fn bot_turn(&mut self, selector: &dyn CardSelector) -> Result<Vec<GameEvent>, GameError> {
        self.expect_turn(Side::Bot)?;
        if self.undo_available {
            self.undo_snapshot = Some(self.state.clone());
        }
        self.state.turns += 1;

        let mut events = Vec::new();
        let mut candidates = self.bot_candidates();
        let mut drew = false;
        if candidates.is_empty() {
            match self.state.deck.draw() {
                Some(card) => {
                    self.state.bot_hand.push(card);
                    self.state.bot_draws += 1;
                    drew = true;
                    events.push(GameEvent::CardDrawn { by: Side::Bot });
                    candidates = self.bot_candidates();
                }
                None => events.push(GameEvent::DeckEmpty { by: Side::Bot }),
            }
        }

        if candidates.is_empty() {
            debug!(drew, "bot has no legal move");
            events.push(GameEvent::TurnPassed { by: Side::Bot });
            let over = if drew {
                self.state.passes = 0;
                false
            } else {
                self.count_pass(&mut events)
            };
            if !over {
                self.state.phase = Phase::PlayerTurn;
            }
            return Ok(self.publish(events));
        }

        let candidates = self.fairness_filter(candidates);
        let history = self.history.clone();
        let pick = self.choose(selector, &candidates, Side::Bot, &history);
        let card = self.state.bot_hand.remove(candidates[pick]);
        self.state.place_center(card);
        self.state.last_bot_rule = Some(card.rule);
        debug!(card = %card, selector = selector.name(), "bot played");

        events.push(GameEvent::CardPlayed { by: Side::Bot, card });
        if self.state.bot_hand.is_empty() {
            self.finish(Some(Side::Bot), &mut events);
        } else {
            self.state.phase = Phase::PlayerTurn;
        }
        Ok(self.publish(events))
    }

    /// Roll back to the snapshot taken before the last bot turn. Easy
    /// difficulty only, once per game.
    pub fn request_undo(&mut self) -> Result<Vec<GameEvent>, GameError> {
        self.expect_turn(Side::Player)?;
        if !self.undo_available {
            return Err(GameError::UndoUnavailable);
        }
        let mut snapshot = self.undo_snapshot.take().ok_or(GameError::UndoUnavailable)?;
        snapshot.phase = Phase::PlayerTurn;
        self.state = snapshot;
        self.undo_available = false;
        info!(seed = %self.seed, "undo applied");
        Ok(self.publish(vec![GameEvent::UndoApplied]))
    }

    /// Deal a fresh game with the same difficulty. `None` reuses the
    /// current seed string.
    pub fn restart(&mut self, seed: Option<&str>) {
        if let Some(s) = seed {
            self.seed = s.to_string();
        }
        *self = Game::new(self.difficulty, &self.seed);
    }

    fn expect_turn(&self, side: Side) -> Result<(), GameError> {
        match self.state.phase.to_act() {
            None => Err(GameError::GameOver),
            Some(expected) if expected == side => Ok(()),
            Some(expected) => Err(GameError::InvalidTurnContext {
                expected,
                actual: side,
            }),
        }
    }

    /// Bot cards legal now, minus `match_number` cards right after a bot
    /// `match_number` play.
    fn bot_candidates(&self) -> Vec<usize> {
        let hand = &self.state.bot_hand;
        let mut idx = playable_indices(hand, self.state.rule, self.state.center.as_ref());
        if self.state.last_bot_rule == Some(RuleType::MatchNumber) {
            idx.retain(|&i| hand[i].rule != RuleType::MatchNumber);
        }
        idx
    }

    fn fairness_filter(&self, candidates: Vec<usize>) -> Vec<usize> {
        if self.state.deck.remaining() > FAIRNESS_DECK_THRESHOLD || candidates.len() < 2 {
            return candidates;
        }
        let hand = &self.state.bot_hand;
        let player = &self.state.player_hand;
        let safe: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&i| {
                let c = hand[i];
                c.rule != RuleType::MatchNumber || player.iter().any(|p| p.value == c.value)
            })
            .collect();
        if safe.is_empty() {
            candidates
        } else {
            safe
        }
    }

    /// Ask `selector` for a card among `candidates` (indices into `side`'s
    /// hand) and return a position in `candidates`. A failed or out-of-set
    /// answer falls back to a uniform pick.
    fn choose(
        &mut self,
        selector: &dyn CardSelector,
        candidates: &[usize],
        side: Side,
        history: &PlayerHistory,
    ) -> usize {
        let hand = self.state.hand(side);
        let cards: Vec<Card> = candidates.iter().map(|&i| hand[i]).collect();
        let ctx = SelectionContext {
            candidates: &cards,
            hand,
            opponent_hand: self.state.hand(side.other()),
            rule: self.state.rule,
            center: self.state.center.as_ref(),
            deck_remaining: self.state.deck.remaining(),
            history,
            difficulty: self.difficulty,
        };
        let picked = match selector.select_card(&ctx, &mut self.rng) {
            Ok(card) => cards.iter().position(|c| *c == card),
            Err(e) => {
                warn!(selector = selector.name(), error = %e, "selection failed");
                None
            }
        };
        match picked {
            Some(pos) => pos,
            None => {
                warn!(selector = selector.name(), "falling back to a uniform pick");
                self.rng.below(cards.len())
            }
        }
    }

    /// Record a pass made with an empty deck. Returns true if it ended the game.
    fn count_pass(&mut self, events: &mut Vec<GameEvent>) -> bool {
        self.state.passes += 1;
        if self.state.passes < BLOCKING_PASSES {
            return false;
        }
        let p = self.state.player_hand.len();
        let b = self.state.bot_hand.len();
        let winner = match p.cmp(&b) {
            std::cmp::Ordering::Less => Some(Side::Player),
            std::cmp::Ordering::Greater => Some(Side::Bot),
            std::cmp::Ordering::Equal => None,
        };
        info!(player_cards = p, bot_cards = b, "game blocked");
        self.finish(winner, events);
        true
    }

    fn finish(&mut self, winner: Option<Side>, events: &mut Vec<GameEvent>) {
        self.state.phase = Phase::GameOver { winner };
        self.undo_snapshot = None;
        info!(
            winner = winner.map(|w| w.as_str()).unwrap_or("none"),
            turns = self.state.turns,
            "game over"
        );
        events.push(GameEvent::GameOver { winner });
    }

    fn publish(&mut self, events: Vec<GameEvent>) -> Vec<GameEvent> {
        self.log.extend(events.iter().cloned());
        events
    }
}

fn deal(rng: &mut LehmerRng) -> GameState {
    let mut deck = Deck::new();
    deck.shuffle(rng);
    let mut player_hand = Vec::with_capacity(HAND_SIZE);
    let mut bot_hand = Vec::with_capacity(HAND_SIZE);
    for _ in 0..HAND_SIZE {
        player_hand.extend(deck.draw());
        bot_hand.extend(deck.draw());
    }
    let center = deck.draw();
    GameState {
        rule: RuleType::Any,
        ..GameState::from_position(deck.cards().to_vec(), player_hand, bot_hand, center)
    }
}
