//! Piece module - the falling tetromino
//!
//! A piece is four grid coordinates plus a pivot. It translates and rotates
//! itself against a [`Grid`], but never writes to the grid until it is locked.
//!
//! Rotation is a single fixed quarter-turn about the pivot; there is no
//! rotation state and no wall kick. The geometric transform and the legality
//! checks live in separate functions so each can change on its own.

use thiserror::Error;

use crate::grid::Grid;
use crate::types::{Color, Coord, PieceKind, BOARD_HEIGHT, ROTATION_MAX_ROW, ROTATION_MIN_ROW};

/// Cell layout of a piece.
pub type PieceCells = [Coord; 4];

/// Reasons a piece layout is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PieceError {
    #[error("piece cell ({}, {}) is outside the grid", .0.row, .0.col)]
    OutOfBounds(Coord),
    #[error("piece cell ({}, {}) appears more than once", .0.row, .0.col)]
    DuplicateCell(Coord),
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    cells: PieceCells,
    color: Color,
    pivot: Coord,
}

impl Piece {
    /// Build a piece, checking that its four cells are distinct and on the grid.
    pub fn new(
        kind: PieceKind,
        cells: PieceCells,
        color: Color,
        pivot: Coord,
    ) -> Result<Self, PieceError> {
        for (i, &cell) in cells.iter().enumerate() {
            if !cell.in_bounds() {
                return Err(PieceError::OutOfBounds(cell));
            }
            if cells[..i].contains(&cell) {
                return Err(PieceError::DuplicateCell(cell));
            }
        }
        Ok(Self {
            kind,
            cells,
            color,
            pivot,
        })
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn cells(&self) -> &PieceCells {
        &self.cells
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn pivot(&self) -> Coord {
        self.pivot
    }

    /// Whether any cell of the piece sits on `coord`.
    pub fn covers(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Shift every cell and the pivot one row down.
    ///
    /// No collision check: the engine only calls this after
    /// [`Piece::would_collide_below`] returned `false`.
    pub fn fall(&mut self) {
        self.translate(1, 0);
    }

    /// True when the piece cannot descend: a cell is on the bottom row or the
    /// cell directly below one of its cells is occupied.
    pub fn would_collide_below(&self, grid: &Grid) -> bool {
        self.cells.iter().any(|&cell| {
            cell.row >= BOARD_HEIGHT as i8 || grid.is_occupied(cell.offset(1, 0))
        })
    }

    /// Whether any piece cell overlaps a locked block.
    pub fn overlaps(&self, grid: &Grid) -> bool {
        self.cells.iter().any(|&cell| grid.is_occupied(cell))
    }

    /// Move one column left if every destination is on the grid and free.
    pub fn move_left(&mut self, grid: &Grid) -> bool {
        self.try_shift_columns(-1, grid)
    }

    /// Move one column right if every destination is on the grid and free.
    pub fn move_right(&mut self, grid: &Grid) -> bool {
        self.try_shift_columns(1, grid)
    }

    fn try_shift_columns(&mut self, d_col: i8, grid: &Grid) -> bool {
        let blocked = self.cells.iter().any(|&cell| {
            let dest = cell.offset(0, d_col);
            !grid.contains(dest) || grid.is_occupied(dest)
        });
        if blocked {
            return false;
        }
        self.translate(0, d_col);
        true
    }

    /// Quarter-turn every cell about the pivot.
    ///
    /// The candidate layout must stay inside the rotation row window and every
    /// candidate cell must be on the grid and free; otherwise nothing changes.
    pub fn rotate(&mut self, grid: &Grid) -> bool {
        let candidate = self.cells.map(|cell| rotate_about_pivot(cell, self.pivot));
        if !within_rotation_rows(&candidate) || !fits(&candidate, grid) {
            return false;
        }
        self.cells = candidate;
        true
    }

    /// Write the piece into the grid as occupied cells of its color.
    ///
    /// Consumes the piece: a locked piece is never moved again.
    pub fn lock_into(self, grid: &mut Grid) {
        for &cell in &self.cells {
            grid.occupy(cell, self.color);
        }
    }

    fn translate(&mut self, d_row: i8, d_col: i8) {
        for cell in &mut self.cells {
            *cell = cell.offset(d_row, d_col);
        }
        self.pivot = self.pivot.offset(d_row, d_col);
    }
}

/// Clockwise quarter-turn of `cell` about `pivot`.
///
/// `(r, c) -> (p.r + (c - p.c), p.c - (r - p.r) - 1)`. The trailing `- 1`
/// shifts the result one column left so even-width pieces stay in place.
pub fn rotate_about_pivot(cell: Coord, pivot: Coord) -> Coord {
    Coord::new(
        pivot.row + (cell.col - pivot.col),
        pivot.col - (cell.row - pivot.row) - 1,
    )
}

/// Row window a rotated layout must stay within (`ROTATION_MIN_ROW..=ROTATION_MAX_ROW`).
pub fn within_rotation_rows(cells: &PieceCells) -> bool {
    cells
        .iter()
        .all(|cell| (ROTATION_MIN_ROW..=ROTATION_MAX_ROW).contains(&cell.row))
}

/// Every cell is on the grid and unoccupied.
pub fn fits(cells: &PieceCells, grid: &Grid) -> bool {
    cells
        .iter()
        .all(|&cell| grid.contains(cell) && !grid.is_occupied(cell))
}
