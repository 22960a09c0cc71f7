//! Game state module - the complete typing session
//!
//! Owns every piece of mutable session state: the falling words, the input
//! buffer, score, lives, level, and the difficulty timers. The frame loop
//! feeds it typed actions and elapsed time; everything else is derived.
//!
//! Per tick the state advances through four phases: difficulty, spawn,
//! physics, cleanup. Input is applied between ticks via [`GameState::apply_action`].

use crate::core::spawner::WordSpawner;
use crate::core::word::Word;
use crate::types::*;

/// A score change produced by a successful match.
///
/// One-slot event consumed by the frame loop, which reports it as a log
/// line (the only subscriber).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEvent {
    pub score: u32,
    pub word: &'static str,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    words: Vec<Word>,
    input: String,
    score: u32,
    high_score: u32,
    lives: u32,
    level: u32,
    word_speed: f32,
    spawn_interval: f32,
    spawn_timer: f32,
    game_over: bool,
    started: bool,
    spawner: WordSpawner,
    /// Last score change (consumed by the notifier in the frame loop).
    last_event: Option<ScoreEvent>,
}

impl GameState {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            words: Vec::new(),
            input: String::new(),
            score: 0,
            high_score: 0,
            lives: INITIAL_LIVES,
            level: INITIAL_LEVEL,
            word_speed: INITIAL_WORD_SPEED,
            spawn_interval: INITIAL_SPAWN_INTERVAL,
            spawn_timer: 0.0,
            game_over: false,
            started: false,
            spawner: WordSpawner::new(seed),
            last_event: None,
        }
    }

    /// Start the session. The first word arrives after one spawn interval.
    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn word_speed(&self) -> f32 {
        self.word_speed
    }

    pub fn spawn_interval(&self) -> f32 {
        self.spawn_interval
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[cfg(test)]
    pub fn words_mut(&mut self) -> &mut Vec<Word> {
        &mut self.words
    }

    /// Spawn one word immediately at the current difficulty speed.
    ///
    /// The tick's spawn phase calls this on a timer; it is public so tests
    /// and benchmarks can populate the field deterministically.
    pub fn spawn_word(&mut self) {
        let word = self.spawner.spawn(self.word_speed);
        self.words.push(word);
    }

    /// Take and clear the last score event.
    pub fn take_last_event(&mut self) -> Option<ScoreEvent> {
        self.last_event.take()
    }

    /// Apply a player action. Returns whether the action had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Type(c) => {
                if self.game_over || !c.is_alphabetic() {
                    return false;
                }
                self.input.push(c);
                true
            }
            GameAction::Backspace => {
                if self.game_over {
                    return false;
                }
                self.input.pop().is_some()
            }
            GameAction::Submit => {
                if self.game_over {
                    return false;
                }
                self.submit_input()
            }
            GameAction::Restart => {
                if !self.game_over {
                    return false;
                }
                self.restart();
                true
            }
        }
    }

    /// Match the input buffer against the words, first in spawn order wins.
    ///
    /// The buffer is cleared whether or not anything matched.
    fn submit_input(&mut self) -> bool {
        let matched = self.words.iter().position(|w| w.text == self.input);

        if let Some(i) = matched {
            let word = self.words.remove(i);
            self.score += MATCH_SCORE;
            self.last_event = Some(ScoreEvent {
                score: self.score,
                word: word.text,
            });
        }

        self.input.clear();
        matched.is_some()
    }

    /// Reset to initial values and resume play.
    ///
    /// The high score and the RNG position survive into the new session.
    fn restart(&mut self) {
        self.words.clear();
        self.input.clear();
        self.score = 0;
        self.lives = INITIAL_LIVES;
        self.level = INITIAL_LEVEL;
        self.word_speed = INITIAL_WORD_SPEED;
        self.spawn_interval = INITIAL_SPAWN_INTERVAL;
        self.spawn_timer = 0.0;
        self.game_over = false;
    }

    /// Main game tick - difficulty, spawning, physics, and cleanup.
    ///
    /// `dt` is elapsed seconds since the previous tick. A no-op before
    /// `start()` and after game over.
    pub fn tick(&mut self, dt: f32) {
        if !self.started || self.game_over {
            return;
        }

        // Difficulty: at most one level per tick, even if the score has
        // already passed several thresholds.
        if self.score >= self.level * LEVEL_SCORE_STEP {
            self.level += 1;
            self.word_speed += SPEED_PER_LEVEL;
            self.spawn_interval *= SPAWN_INTERVAL_DECAY;
        }

        // Spawn on a timer.
        self.spawn_timer += dt;
        if self.spawn_timer >= self.spawn_interval {
            self.spawn_word();
            self.spawn_timer = 0.0;
        }

        // Physics.
        for word in &mut self.words {
            word.advance(dt);
        }

        // Cleanup: every word past the bottom line costs a life.
        let floor = PLAY_HEIGHT - BOTTOM_MARGIN;
        let before = self.words.len();
        self.words.retain(|w| !w.is_below(floor));
        let missed = (before - self.words.len()) as u32;

        if missed > 0 {
            self.lives = self.lives.saturating_sub(missed);
            if self.lives == 0 {
                self.game_over = true;
                if self.score > self.high_score {
                    self.high_score = self.score;
                }
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
