//! Piece factory - canonical spawn layouts
//!
//! Every piece spawns in the top rows around columns 5-6. Layouts are
//! `(row, col)` pairs; the pivot is the rotation center.

use crate::piece::{Piece, PieceCells};
use crate::types::{Coord, PieceKind};

const fn c(row: i8, col: i8) -> Coord {
    Coord::new(row, col)
}

/// Spawn cells and pivot for `kind`.
pub fn layout(kind: PieceKind) -> (PieceCells, Coord) {
    match kind {
        PieceKind::Z => ([c(1, 6), c(2, 6), c(2, 5), c(3, 5)], c(2, 6)),
        PieceKind::S => ([c(1, 5), c(2, 6), c(2, 5), c(3, 6)], c(2, 6)),
        PieceKind::O => ([c(1, 6), c(1, 5), c(2, 6), c(2, 5)], c(2, 6)),
        PieceKind::I => ([c(1, 6), c(2, 6), c(3, 6), c(4, 6)], c(3, 6)),
        PieceKind::J => ([c(1, 6), c(2, 6), c(3, 6), c(3, 5)], c(2, 6)),
        PieceKind::L => ([c(1, 5), c(2, 5), c(3, 5), c(3, 6)], c(2, 6)),
        PieceKind::T => ([c(1, 6), c(2, 6), c(3, 6), c(2, 5)], c(2, 5)),
    }
}

/// A fresh piece of `kind` at its spawn position.
pub fn spawn(kind: PieceKind) -> Piece {
    let (cells, pivot) = layout(kind);
    match Piece::new(kind, cells, kind.color(), pivot) {
        Ok(piece) => piece,
        // The table above is fixed; a failure here is a broken layout.
        Err(err) => panic!("invalid spawn layout for {:?}: {err}", kind),
    }
}
