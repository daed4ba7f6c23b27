//! tick-tetris (workspace facade crate).
//!
//! Re-exports the member crates under `tick_tetris::{core,input,term,types}`
//! and hosts the binary's runtime configuration and event log.

pub mod config;
pub mod event_log;

pub use tick_tetris_core as core;
pub use tick_tetris_input as input;
pub use tick_tetris_term as term;
pub use tick_tetris_types as types;

pub use config::GameConfig;
pub use event_log::{EventLog, EventRecord};
