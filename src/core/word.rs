//! Word entity - a falling text target
//!
//! A word owns no rendering; `term::game_view` projects it onto the screen.
//! Bounds checking is the game state's job, not the word's.

/// A falling word. Text is fixed at spawn time (pool entries are static);
/// speed is set from the global difficulty speed when spawned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Word {
    pub text: &'static str,
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

impl Word {
    pub fn new(text: &'static str, x: f32, y: f32, speed: f32) -> Self {
        Self { text, x, y, speed }
    }

    /// Advance the fall by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.y += self.speed * dt;
    }

    /// True once the word has fallen past `floor`.
    pub fn is_below(&self, floor: f32) -> bool {
        self.y > floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_scales_with_speed_and_dt() {
        let mut word = Word::new("shark", 100.0, 0.0, 60.0);
        word.advance(0.5);
        assert_eq!(word.y, 30.0);
        word.advance(0.5);
        assert_eq!(word.y, 60.0);
        // x never changes while falling
        assert_eq!(word.x, 100.0);
    }

    #[test]
    fn test_is_below_is_strict() {
        let word = Word::new("coral", 100.0, 580.0, 60.0);
        assert!(!word.is_below(580.0));

        let mut word = word;
        word.advance(1.0);
        assert!(word.is_below(580.0));
    }
}
