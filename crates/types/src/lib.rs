//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Reference playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: (width / 2, 0), i.e. (5, 0) on the reference board
//!
//! Rows above the visible board (negative y) are legal for a freshly spawned
//! piece but are never stored.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_FALL_MS` | 500 | Automatic descent interval at level 1 |
//! | `INPUT_POLL_MS` | 50 | Keyboard poll timeout used by the shell |
//!
//! The fall interval shrinks as `BASE_FALL_MS / level`.
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Automatic descent interval at level 1 (500ms per row)
pub const BASE_FALL_MS: u32 = 500;

/// Input poll timeout in milliseconds
pub const INPUT_POLL_MS: u32 = 50;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Bonus points per row descended with a hard drop
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Horizontal offsets tried, in order, when a rotation collides
pub const WALL_KICK_OFFSETS: [i8; 4] = [1, -1, 2, -2];

/// Line clear scoring table
///
/// Base points for clearing N lines in a single lock:
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
///
/// Points are multiplied by the current level (which starts at 1).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_rules_defaults() {
        assert_eq!(BASE_FALL_MS, 500);
        assert_eq!(INPUT_POLL_MS, 50);
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(HARD_DROP_POINTS_PER_ROW, 2);
        assert_eq!(WALL_KICK_OFFSETS, [1, -1, 2, -2]);
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
    }

    #[test]
    fn piece_kind_parses_letters() {
        for (letter, kind) in "iotszjl".chars().zip(PieceKind::ALL) {
            assert_eq!(PieceKind::from_str(&letter.to_string()), Some(kind));
        }
        assert_eq!(PieceKind::from_str("I"), Some(PieceKind::I));
        assert_eq!(PieceKind::from_str("x"), None);
    }

    #[test]
    fn piece_kind_index_matches_all_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, straight bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: White, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in table order. Uniform draws index into this array.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use term_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Position of this kind in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }
}

/// Commands the presentation shell can issue against the engine
///
/// Quitting is a shell concern and has no engine counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if it cannot descend
    SoftDrop,
    /// Drop piece until it locks, scoring 2 points per row
    HardDrop,
    /// Rotate piece 90° clockwise (with horizontal wall kicks)
    RotateCw,
    /// Toggle pause state
    Pause,
}

/// Engine lifecycle state
///
/// `Running` and `Paused` toggle freely; `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// Core-side event emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points awarded for the cleared lines (already level-multiplied).
    pub line_clear_score: u32,
    /// Hard-drop bonus, zero for gravity and soft-drop locks.
    pub drop_bonus: u32,
    /// The piece promoted after this lock could not spawn.
    pub topped_out: bool,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
///
/// The kind is only used for colour; gameplay treats any `Some` as occupied.
pub type Cell = Option<PieceKind>;
