//! Key event mapping for terminal environments.
//!
//! Typing input needs no repeat handling: every key press maps to at most
//! one action, and the set of live bindings depends on whether the session
//! is on the game over screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Quit on Esc, or Ctrl-C as a raw-mode fallback.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Map a key press to a game action.
///
/// While playing: letters type, Backspace edits, Enter submits. On the
/// game over screen only `r` is live (restart).
pub fn map_key(key: KeyEvent, game_over: bool) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    if game_over {
        return match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) if c.is_alphabetic() => Some(GameAction::Type(c)),
        KeyCode::Backspace => Some(GameAction::Backspace),
        KeyCode::Enter => Some(GameAction::Submit),
        _ => None,
    }
}
