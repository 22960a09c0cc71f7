//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Virtual play area, in world units. Words fall through this space and the
/// terminal view projects it onto whatever cell grid is available.
pub const PLAY_WIDTH: f32 = 800.0;
pub const PLAY_HEIGHT: f32 = 600.0;

/// Words are missed once their y passes `PLAY_HEIGHT - BOTTOM_MARGIN`.
pub const BOTTOM_MARGIN: f32 = 20.0;

/// Horizontal spawn band: x is uniform in [SPAWN_X_MIN, SPAWN_X_MIN + SPAWN_X_SPAN].
pub const SPAWN_X_MIN: f32 = 50.0;
pub const SPAWN_X_SPAN: u32 = 700;

/// Frame pacing (milliseconds between ticks)
pub const TICK_MS: u32 = 16;

/// Session starting values
pub const INITIAL_LIVES: u32 = 3;
pub const INITIAL_LEVEL: u32 = 1;
pub const INITIAL_WORD_SPEED: f32 = 60.0;
pub const INITIAL_SPAWN_INTERVAL: f32 = 2.0;

/// Scoring and difficulty curve
pub const MATCH_SCORE: u32 = 10;
pub const LEVEL_SCORE_STEP: u32 = 50;
pub const SPEED_PER_LEVEL: f32 = 20.0;
pub const SPAWN_INTERVAL_DECAY: f32 = 0.9;

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Append a typed character to the input buffer (alphabetic only).
    Type(char),
    /// Remove the last character from the input buffer.
    Backspace,
    /// Match the input buffer against the falling words.
    Submit,
    /// Start a fresh session (game over screen only).
    Restart,
}
