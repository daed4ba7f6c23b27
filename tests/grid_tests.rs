//! Grid tests - occupancy, row clears and the row cascade

use tick_tetris::core::Grid;
use tick_tetris::types::{Cell, Color, Coord, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    for row in 1..=BOARD_HEIGHT as i8 {
        for col in 1..=BOARD_WIDTH as i8 {
            let coord = Coord::new(row, col);
            assert!(grid.contains(coord));
            assert_eq!(grid.cell(coord), Cell::EMPTY);
        }
    }
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_grid_contains_rejects_outside() {
    let grid = Grid::new();
    assert!(!grid.contains(Coord::new(0, 1)));
    assert!(!grid.contains(Coord::new(1, 0)));
    assert!(!grid.contains(Coord::new(21, 1)));
    assert!(!grid.contains(Coord::new(1, 11)));
}

#[test]
fn test_occupy_and_erase() {
    let mut grid = Grid::new();
    let at = Coord::new(7, 3);

    grid.occupy(at, Color::Orange);
    assert!(grid.is_occupied(at));
    assert_eq!(grid.cell(at).color, Some(Color::Orange));

    grid.occupy(at, Color::Blue);
    assert_eq!(grid.cell(at).color, Some(Color::Blue));

    grid.erase(at);
    assert_eq!(grid.cell(at), Cell::EMPTY);
}

#[test]
#[should_panic(expected = "grid access out of bounds")]
fn test_out_of_bounds_read_panics() {
    Grid::new().is_occupied(Coord::new(21, 1));
}

#[test]
#[should_panic(expected = "grid access out of bounds")]
fn test_out_of_bounds_write_panics() {
    Grid::new().occupy(Coord::new(1, 0), Color::Red);
}

#[test]
fn test_full_row_detection() {
    let mut grid = Grid::new();
    grid.fill_row_except(20, Color::Red, &[4]);
    assert!(!grid.is_row_full(20));
    assert!(grid.full_rows().is_empty());

    grid.occupy(Coord::new(20, 4), Color::Red);
    assert!(grid.is_row_full(20));
    assert_eq!(grid.full_rows().as_slice(), &[20]);
}

#[test]
fn test_clear_row_shifts_everything_above() {
    let mut grid = Grid::new();
    grid.occupy(Coord::new(5, 3), Color::Purple);
    grid.occupy(Coord::new(19, 7), Color::Lime);
    grid.fill_row_except(20, Color::Red, &[]);

    grid.clear_row(20);

    assert_eq!(grid.occupied_count(), 2);
    assert_eq!(grid.cell(Coord::new(6, 3)).color, Some(Color::Purple));
    assert_eq!(grid.cell(Coord::new(20, 7)).color, Some(Color::Lime));
    assert!(!grid.is_occupied(Coord::new(5, 3)));
    assert!(!grid.is_occupied(Coord::new(19, 7)));
}

#[test]
fn test_clear_row_leaves_rows_below_untouched() {
    let mut grid = Grid::new();
    grid.fill_row_except(20, Color::Blue, &[1]);
    grid.fill_row_except(15, Color::Yellow, &[]);
    grid.occupy(Coord::new(14, 2), Color::Red);

    grid.clear_row(15);

    assert_eq!(grid.occupied_count(), 9 + 1);
    assert!(grid.is_occupied(Coord::new(15, 2)));
    assert_eq!(grid.cell(Coord::new(20, 2)).color, Some(Color::Blue));
    assert!(!grid.is_occupied(Coord::new(20, 1)));
}

#[test]
fn test_collapse_row_skips_occupied_target() {
    let mut grid = Grid::new();
    grid.occupy(Coord::new(9, 1), Color::Red);
    grid.occupy(Coord::new(9, 2), Color::Lime);
    grid.occupy(Coord::new(10, 2), Color::Blue);

    grid.collapse_row_into(10, 9);

    assert_eq!(grid.cell(Coord::new(10, 1)).color, Some(Color::Red));
    assert!(!grid.is_occupied(Coord::new(9, 1)));
    // Column 2 was blocked: both blocks stay put.
    assert_eq!(grid.cell(Coord::new(10, 2)).color, Some(Color::Blue));
    assert_eq!(grid.cell(Coord::new(9, 2)).color, Some(Color::Lime));
}

#[test]
fn test_rows_snapshot_is_top_down() {
    let mut grid = Grid::new();
    grid.occupy(Coord::new(1, 1), Color::SkyBlue);
    grid.occupy(Coord::new(20, 10), Color::Orange);

    let rows = grid.rows();
    assert_eq!(rows[0][0], Cell::filled(Color::SkyBlue));
    assert_eq!(rows[19][9], Cell::filled(Color::Orange));
    assert_eq!(rows[10][5], Cell::EMPTY);
}

#[test]
fn test_clear_resets_grid() {
    let mut grid = Grid::new();
    grid.fill_row_except(18, Color::Purple, &[3, 4]);
    assert_eq!(grid.occupied_count(), 8);
    grid.clear();
    assert_eq!(grid, Grid::new());
}
