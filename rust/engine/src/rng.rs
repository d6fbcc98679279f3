//! Seeded Lehmer (Park–Miller) generator.
//!
//! Every random decision in a game (the shuffle, bot coin flips and
//! tie-breaks) draws from one `LehmerRng`, so a seed string replays the
//! whole game.

use chrono::Utc;
use serde::{Deserialize, Serialize};

const MODULUS: u64 = 2_147_483_647;
const MULTIPLIER: u64 = 16_807;

/// Minimal-standard Lehmer generator with a 31-bit state in `[1, MODULUS - 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LehmerRng {
    state: u64,
}

impl LehmerRng {
    /// Seed from a string. Empty or whitespace-only strings fall back to the
    /// wall clock and are therefore not reproducible.
    pub fn from_seed_str(seed: &str) -> Self {
        if seed.trim().is_empty() {
            let millis = Utc::now().timestamp_millis().unsigned_abs();
            return Self {
                state: millis % (MODULUS - 1) + 1,
            };
        }
        let mut hash = hash_seed(seed);
        if hash == 0 {
            hash = 1;
        }
        Self {
            state: u64::from(hash) % (MODULUS - 1) + 1,
        }
    }

    /// Current internal state, mainly for diagnostics.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advance and return a float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state * MULTIPLIER % MODULUS;
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }

    /// Uniform index in `0..n`. `n` must be non-zero.
    pub fn below(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "below(0) has no valid result");
        let idx = (self.next_f64() * n as f64).floor() as usize;
        idx.min(n.saturating_sub(1))
    }
}

/// `hash = hash * 31 + code_unit` over UTF-16 code units, kept in 32 bits.
pub fn hash_seed(seed: &str) -> u32 {
    seed.encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)))
}
