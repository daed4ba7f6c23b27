//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and the tick-driven state machine that
//! moves a piece through the grid. It has no dependencies on terminals, input
//! devices or files:
//!
//! - **Deterministic**: the piece sequence comes from a seeded 7-bag
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: the same engine runs under the terminal driver, benches and tests
//!
//! # Module Structure
//!
//! - [`grid`]: 20x10 occupancy map, row clears and the row cascade
//! - [`piece`]: the falling tetromino, its moves and the pivot rotation
//! - [`factory`]: the seven canonical spawn layouts
//! - [`bag`]: 7-bag randomizer
//! - [`engine`]: the tick loop tying it all together
//! - [`snapshot`]: copyable views of the game for renderers and logs
//!
//! # Game Rules
//!
//! - One row of gravity per tick; the driver picks the interval
//! - Left, right and a single fixed-direction quarter-turn, no wall kicks
//! - A piece locks on the tick it comes to rest
//! - Every full row is worth 100 points
//! - The game ends when a new piece spawns onto locked blocks
//!
//! # Example
//!
//! ```
//! use tick_tetris_core::GameEngine;
//! use tick_tetris_types::GameAction;
//!
//! let mut game = GameEngine::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//!
//! // Gravity: keep ticking until the first piece locks.
//! let mut locked = false;
//! for _ in 0..40 {
//!     if game.tick().locked {
//!         locked = true;
//!         break;
//!     }
//! }
//! assert!(locked);
//! assert_eq!(game.pieces_locked(), 1);
//! ```

pub mod bag;
pub mod engine;
pub mod factory;
pub mod grid;
pub mod piece;
pub mod snapshot;

pub use tick_tetris_types as types;

// Re-export commonly used types for convenience
pub use bag::Bag;
pub use engine::GameEngine;
pub use grid::Grid;
pub use piece::{rotate_about_pivot, Piece, PieceError};
pub use snapshot::{ActiveSnapshot, BoardSnapshot, GameSnapshot};
