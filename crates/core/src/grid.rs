//! Grid module - authoritative occupancy state of the playfield
//!
//! The grid is a 20x10 map of cells stored as a flat row-major array.
//! Coordinates are 1-based `(row, col)`; row 1 is the top of the well.
//!
//! Addressing a coordinate outside the playfield is a caller bug, not a game
//! event: every accessor panics with the offending coordinate. Callers decide
//! legality first with [`Grid::contains`].

use arrayvec::ArrayVec;

use crate::types::{Cell, Color, Coord, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices reported by [`Grid::full_rows`], ascending.
pub type FullRows = ArrayVec<i8, { BOARD_HEIGHT as usize }>;

/// The playfield - 10 columns x 20 rows of [`Cell`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; GRID_SIZE],
        }
    }

    /// Flat index of an in-bounds coordinate.
    #[inline(always)]
    fn index(coord: Coord) -> usize {
        assert!(
            coord.in_bounds(),
            "grid access out of bounds: ({}, {})",
            coord.row,
            coord.col
        );
        (coord.row as usize - 1) * BOARD_WIDTH as usize + (coord.col as usize - 1)
    }

    fn row_range(row: i8) -> std::ops::Range<usize> {
        let start = Self::index(Coord::new(row, 1));
        start..start + BOARD_WIDTH as usize
    }

    /// Explicit bounds check; the only way to probe a coordinate safely.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.in_bounds()
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[Self::index(coord)]
    }

    /// Whether a locked block sits at `coord`. Panics if out of bounds.
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.cells[Self::index(coord)].occupied
    }

    /// Mark `coord` occupied with `color`, overwriting whatever was there.
    pub fn occupy(&mut self, coord: Coord, color: Color) {
        self.cells[Self::index(coord)] = Cell::filled(color);
    }

    /// Reset `coord` to the empty background cell.
    pub fn erase(&mut self, coord: Coord) {
        self.cells[Self::index(coord)] = Cell::EMPTY;
    }

    /// Move every occupied cell of `source_row` into `target_row`.
    ///
    /// Columns whose target cell is already occupied are left alone: the
    /// source block stays where it is and the target keeps its color.
    pub fn collapse_row_into(&mut self, target_row: i8, source_row: i8) {
        for col in 1..=BOARD_WIDTH as i8 {
            let source = Coord::new(source_row, col);
            let target = Coord::new(target_row, col);
            let cell = self.cell(source);
            if cell.occupied && !self.is_occupied(target) {
                self.cells[Self::index(target)] = cell;
                self.erase(source);
            }
        }
    }

    /// Check if every column of `row` is occupied
    pub fn is_row_full(&self, row: i8) -> bool {
        self.cells[Self::row_range(row)]
            .iter()
            .all(|cell| cell.occupied)
    }

    /// All full rows, scanned from row 1 downwards.
    pub fn full_rows(&self) -> FullRows {
        (1..=BOARD_HEIGHT as i8)
            .filter(|&row| self.is_row_full(row))
            .collect()
    }

    /// Erase `row` and drop every row above it by one.
    ///
    /// Rows are collapsed from `row - 1` up to row 1, so each target row has
    /// just been emptied when it receives the row above.
    pub fn clear_row(&mut self, row: i8) {
        for col in 1..=BOARD_WIDTH as i8 {
            self.erase(Coord::new(row, col));
        }
        for source in (1..row).rev() {
            self.collapse_row_into(source + 1, source);
        }
    }

    /// Number of occupied cells on the whole grid
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.occupied).count()
    }

    /// Number of occupied cells in rows `1..=last_row`
    pub fn occupied_count_through(&self, last_row: i8) -> usize {
        if last_row < 1 {
            return 0;
        }
        let end = Self::row_range(last_row).end;
        self.cells[..end].iter().filter(|cell| cell.occupied).count()
    }

    /// Copy of the grid as rows, top to bottom.
    pub fn rows(&self) -> [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
        let mut out = [[Cell::EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (dst, src) in out
            .iter_mut()
            .zip(self.cells.chunks_exact(BOARD_WIDTH as usize))
        {
            dst.copy_from_slice(src);
        }
        out
    }

    /// Empty the whole grid
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Fill an entire row with `color`, leaving the listed columns empty.
    pub fn fill_row_except(&mut self, row: i8, color: Color, holes: &[i8]) {
        for col in 1..=BOARD_WIDTH as i8 {
            let coord = Coord::new(row, col);
            if holes.contains(&col) {
                self.erase(coord);
            } else {
                self.occupy(coord, color);
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
