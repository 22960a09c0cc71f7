//! Input module - crossterm key events to game actions.

pub mod handler;

pub use handler::{map_key, should_quit};
