//! Snapshot types - copyable views of the game
//!
//! Renderers and the event log read these instead of borrowing the engine.
//! [`GameEngine::snapshot_into`](crate::GameEngine::snapshot_into) refills an
//! existing snapshot so a frame loop can reuse one value.

use crate::piece::{Piece, PieceCells};
use crate::types::{Cell, Color, Coord, GameState, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Locked cells, row-major, top row first.
pub type BoardSnapshot = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: PieceCells,
    pub color: Color,
    pub pivot: Coord,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            cells: *value.cells(),
            color: value.color(),
            pivot: value.pivot(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardSnapshot,
    pub active: Option<ActiveSnapshot>,
    pub state: GameState,
    pub episode_id: u32,
    pub seed: u64,
    pub pieces_locked: u32,
    pub score: u32,
    pub lines: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Locked cell at a 1-based coordinate, `None` off the board.
    pub fn cell_at(&self, coord: Coord) -> Option<Cell> {
        if !coord.in_bounds() {
            return None;
        }
        Some(self.board[coord.row as usize - 1][coord.col as usize - 1])
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            state: GameState::Running,
            episode_id: 0,
            seed: 0,
            pieces_locked: 0,
            score: 0,
            lines: 0,
        }
    }
}
