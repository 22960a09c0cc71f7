//! Word spawner - random word creation at the top of the play area
//!
//! Picks uniformly from a fixed pool and a uniform horizontal start
//! position. The pool is non-empty by construction, so spawning cannot
//! fail.

use crate::core::rng::SimpleRng;
use crate::core::word::Word;
use crate::types::{SPAWN_X_MIN, SPAWN_X_SPAN};

/// Fixed in-memory word pool.
pub const WORD_POOL: [&str; 17] = [
    "shark", "code", "loop", "fish", "game", "rust", "crate", "class", "object", "score", "input",
    "event", "ocean", "swim", "coral", "wave", "deep",
];

/// Spawns words at random pool entries and horizontal positions.
#[derive(Debug, Clone)]
pub struct WordSpawner {
    rng: SimpleRng,
}

impl WordSpawner {
    /// Create a spawner with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Spawn one word at the top of the play area with the given fall speed.
    pub fn spawn(&mut self, speed: f32) -> Word {
        let text = WORD_POOL[self.rng.next_range(WORD_POOL.len() as u32) as usize];
        let x = SPAWN_X_MIN + self.rng.next_range(SPAWN_X_SPAN + 1) as f32;
        Word::new(text, x, 0.0, speed)
    }
}

impl Default for WordSpawner {
    fn default() -> Self {
        Self::new(1)
    }
}
