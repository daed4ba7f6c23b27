//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no dependencies, so the same types can be
//! used by the game core, the terminal front end and the event log.
//!
//! # Board Coordinates
//!
//! The playfield is addressed with 1-based `(row, col)` pairs:
//!
//! - **Rows**: 1 (top) to 20 (bottom)
//! - **Columns**: 1 (left) to 10 (right)
//!
//! Coordinates are stored as `i8` so that candidate positions produced by a
//! move or rotation can be represented (and rejected) before they ever reach
//! the grid.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 200 | Gravity interval used by the terminal driver |
//! | `MIN_TICK_MS` | 20 | Lower clamp for a configured interval |
//!
//! # Examples
//!
//! ```
//! use tick_tetris_types::{Coord, PieceKind, GameAction, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let below = Coord::new(3, 5).offset(1, 0);
//! assert_eq!(below, Coord::new(4, 5));
//!
//! assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Points awarded for every cleared row.
pub const LINE_CLEAR_BONUS: u32 = 100;

/// Gravity interval in milliseconds (one row per tick).
pub const DEFAULT_TICK_MS: u32 = 200;

/// Smallest tick interval the driver accepts.
pub const MIN_TICK_MS: u32 = 20;

/// Lowest row a rotated cell may land on before the occupancy check.
///
/// The window `[0, 21]` is one row wider than the playfield on each side.
/// Cells in those extra rows are still refused by the grid bounds check.
pub const ROTATION_MIN_ROW: i8 = 0;

/// Highest row a rotated cell may land on before the occupancy check.
pub const ROTATION_MAX_ROW: i8 = 21;

/// A `(row, col)` grid position, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Shift by `(d_row, d_col)`.
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Check whether this position lies on the playfield.
    pub const fn in_bounds(self) -> bool {
        self.row >= 1
            && self.row <= BOARD_HEIGHT as i8
            && self.col >= 1
            && self.col <= BOARD_WIDTH as i8
    }
}

/// Block colors, one per tetromino.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Lime,
    Yellow,
    SkyBlue,
    Blue,
    Orange,
    Purple,
}

impl Color {
    /// Lowercase name, stable across releases (used by the event log).
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Lime => "lime",
            Color::Yellow => "yellow",
            Color::SkyBlue => "sky_blue",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Purple => "purple",
        }
    }
}

/// A single grid cell.
///
/// `occupied` and `color` always move together: an occupied cell has a color,
/// an empty one has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub occupied: bool,
    pub color: Option<Color>,
}

impl Cell {
    /// The empty background cell.
    pub const EMPTY: Cell = Cell {
        occupied: false,
        color: None,
    };

    pub const fn filled(color: Color) -> Self {
        Self {
            occupied: true,
            color: Some(color),
        }
    }
}

/// The seven tetromino piece kinds
///
/// Each piece has a fixed spawn layout and color:
/// - **Z**: Red
/// - **S**: Lime
/// - **O**: Yellow, 2x2 square
/// - **I**: Sky blue, vertical bar
/// - **J**: Blue
/// - **L**: Orange
/// - **T**: Purple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Z,
    S,
    O,
    I,
    J,
    L,
    T,
}

impl PieceKind {
    /// All kinds, in the order a fresh bag is filled before shuffling.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Z,
        PieceKind::S,
        PieceKind::O,
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tick_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            "o" => Some(PieceKind::O),
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::T => "t",
        }
    }

    /// The block color this kind is drawn and locked with.
    pub fn color(&self) -> Color {
        match self {
            PieceKind::Z => Color::Red,
            PieceKind::S => Color::Lime,
            PieceKind::O => Color::Yellow,
            PieceKind::I => Color::SkyBlue,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Orange,
            PieceKind::T => Color::Purple,
        }
    }
}

/// Discrete commands the front end forwards to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Quarter-turn about the piece pivot
    Rotate,
    /// Stop or resume scheduling ticks (driver-side)
    Pause,
    /// Start a fresh game
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tick_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Lifecycle of a game. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Running,
    GameOver,
}

impl GameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::Running => "running",
            GameState::GameOver => "game_over",
        }
    }
}

/// Outcome of a single gravity tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickResult {
    /// The active piece locked this tick and the next one was spawned.
    pub locked: bool,
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub game_over: bool,
}

impl TickResult {
    /// The result every tick returns once the game has ended.
    pub const GAME_OVER: TickResult = TickResult {
        locked: false,
        lines_cleared: 0,
        score_delta: 0,
        game_over: true,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_bounds() {
        assert!(Coord::new(1, 1).in_bounds());
        assert!(Coord::new(20, 10).in_bounds());
        assert!(!Coord::new(0, 5).in_bounds());
        assert!(!Coord::new(21, 5).in_bounds());
        assert!(!Coord::new(5, 0).in_bounds());
        assert!(!Coord::new(5, 11).in_bounds());
    }

    #[test]
    fn rotation_window_is_one_row_wider_than_board() {
        assert_eq!(ROTATION_MIN_ROW, 0);
        assert_eq!(ROTATION_MAX_ROW, BOARD_HEIGHT as i8 + 1);
    }

    #[test]
    fn every_kind_has_distinct_color() {
        let mut colors: Vec<Color> = PieceKind::ALL.iter().map(|k| k.color()).collect();
        colors.sort_by_key(|c| c.as_str());
        colors.dedup();
        assert_eq!(colors.len(), 7);
    }

    #[test]
    fn filled_cell_is_occupied() {
        let cell = Cell::filled(Color::Blue);
        assert!(cell.occupied);
        assert_eq!(cell.color, Some(Color::Blue));
        assert_eq!(Cell::default(), Cell::EMPTY);
    }
}
