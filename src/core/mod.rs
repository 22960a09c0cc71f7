//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules and session state. It has zero
//! dependencies on UI, timing, or I/O and is fully deterministic under a
//! fixed seed.

pub mod game_state;
pub mod rng;
pub mod spawner;
pub mod word;

// Re-export commonly used types
pub use game_state::{GameState, ScoreEvent};
pub use rng::SimpleRng;
pub use spawner::{WordSpawner, WORD_POOL};
pub use word::Word;
