//! tui-meteor: a terminal typing arcade game.
//!
//! Words fall through a virtual 800x600 play area; type one and press
//! Enter to destroy it before it crosses the bottom line. `core` holds the
//! pure game rules, `term` the rendering, `input` the key mapping.

pub mod assets;
pub mod core;
pub mod input;
pub mod term;
pub mod types;
