//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view projects game state
//! into a simple framebuffer, and the renderer flushes it to a terminal
//! backend. The view is pure so it stays testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{background_source_rect, GameView, SourceRect, Viewport};
pub use renderer::TerminalRenderer;
