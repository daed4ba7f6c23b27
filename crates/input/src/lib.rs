//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Every key
//! press becomes exactly one action; there is no auto-shift timing, the
//! terminal's own key repeat is passed through.

pub mod map;

pub use tick_tetris_types as types;

pub use map::{handle_key_event, is_actionable, should_quit};
