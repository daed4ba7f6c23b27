//! Game engine - drives the grid and the active piece one tick at a time
//!
//! The engine owns every piece of mutable game state: the grid, the active
//! piece, the bag, the score and the [`GameState`]. An external driver calls
//! [`GameEngine::tick`] on a fixed interval and forwards player input between
//! ticks. Nothing here blocks or performs I/O.
//!
//! # Tick order
//!
//! 1. The active piece falls one row.
//! 2. If it can no longer descend it locks: the next kind is drawn from the
//!    bag and spawned, a spawn onto occupied cells ends the game, and every
//!    full row is cleared for [`LINE_CLEAR_BONUS`] points each.
//!
//! The lock test runs on the piece *after* it fell, so a piece locks on the
//! same tick it lands. A piece that is already resting when the tick starts
//! (because it was moved or rotated onto a ledge between ticks) locks where it
//! is instead of falling into the stack.

use crate::bag::Bag;
use crate::factory;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::snapshot::{ActiveSnapshot, BoardSnapshot, GameSnapshot};
use crate::types::{GameAction, GameState, PieceKind, TickResult, LINE_CLEAR_BONUS};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    /// The falling piece. After game over it is the piece that failed to spawn.
    active: Piece,
    bag: Bag,
    state: GameState,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    pieces_locked: u32,
    score: u32,
    lines: u32,
}

impl GameEngine {
    /// Create a new game on an empty grid and spawn the first piece
    pub fn new(seed: u64) -> Self {
        let mut bag = Bag::new(seed);
        let first = bag.draw();
        Self::start(Grid::new(), bag, first)
    }

    /// Start from a prepared grid with a chosen first piece.
    ///
    /// Later pieces come from a bag seeded with `seed`. If `first` overlaps the
    /// grid the game starts over.
    pub fn with_setup(grid: Grid, first: PieceKind, seed: u64) -> Self {
        Self::start(grid, Bag::new(seed), first)
    }

    fn start(grid: Grid, bag: Bag, first: PieceKind) -> Self {
        let active = factory::spawn(first);
        let state = if active.overlaps(&grid) {
            GameState::GameOver
        } else {
            GameState::Running
        };
        Self {
            grid,
            active,
            bag,
            state,
            episode_id: 0,
            pieces_locked: 0,
            score: 0,
            lines: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.bag.seed()
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Locked cells only, for renderers that draw the active piece themselves.
    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.grid.rows()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.grid.rows();
        out.active = Some(ActiveSnapshot::from(self.active));
        out.state = self.state;
        out.episode_id = self.episode_id;
        out.seed = self.bag.seed();
        out.pieces_locked = self.pieces_locked;
        out.score = self.score;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Place a fresh piece of `kind`; a spawn onto occupied cells ends the game.
    fn spawn(&mut self, kind: PieceKind) {
        let piece = factory::spawn(kind);
        if piece.overlaps(&self.grid) {
            self.state = GameState::GameOver;
        }
        self.active = piece;
    }

    /// Advance the game by one gravity step.
    pub fn tick(&mut self) -> TickResult {
        if self.is_game_over() {
            return TickResult::GAME_OVER;
        }
        let mut piece = self.active;

        let must_lock = if piece.would_collide_below(&self.grid) {
            true
        } else {
            piece.fall();
            piece.would_collide_below(&self.grid)
        };

        if !must_lock {
            self.active = piece;
            return TickResult::default();
        }

        piece.lock_into(&mut self.grid);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let next = self.bag.draw();
        self.spawn(next);

        let lines_cleared = self.clear_full_rows();
        let score_delta = lines_cleared * LINE_CLEAR_BONUS;
        self.lines += lines_cleared;
        self.score += score_delta;

        TickResult {
            locked: true,
            lines_cleared,
            score_delta,
            game_over: self.is_game_over(),
        }
    }

    /// Clear every full row and return how many there were.
    ///
    /// Rows go top to bottom: clearing a row only moves the rows above it, so
    /// the indices of the full rows still waiting below stay valid.
    fn clear_full_rows(&mut self) -> u32 {
        let full = self.grid.full_rows();
        for &row in &full {
            self.grid.clear_row(row);
        }
        full.len() as u32
    }

    pub fn move_left(&mut self) -> bool {
        self.with_active(|piece, grid| piece.move_left(grid))
    }

    pub fn move_right(&mut self) -> bool {
        self.with_active(|piece, grid| piece.move_right(grid))
    }

    pub fn rotate(&mut self) -> bool {
        self.with_active(|piece, grid| piece.rotate(grid))
    }

    fn with_active(&mut self, f: impl FnOnce(&mut Piece, &Grid) -> bool) -> bool {
        if self.is_game_over() {
            return false;
        }
        f(&mut self.active, &self.grid)
    }

    /// Throw away the current game and start a new one.
    ///
    /// The new bag is seeded with the next seed so consecutive games differ
    /// but stay reproducible.
    pub fn restart(&mut self) {
        let seed = self.bag.seed().wrapping_add(1);
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::new(seed);
        self.episode_id = next_episode;
    }

    /// Apply a game action. `Pause` is a driver concern and is not handled here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => false,
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}
