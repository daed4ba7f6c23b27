//! Terminal front end for the game.
//!
//! Renders into a plain framebuffer instead of a widget toolkit, then flushes
//! that framebuffer to the terminal with crossterm. Board cells are drawn two
//! characters wide so blocks look square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tick_tetris_core as core;
pub use tick_tetris_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{color_rgb, AnchorY, GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
