//! Board module - manages the game grid
//!
//! The board is a fixed-size grid where each cell can be empty or filled with a
//! piece kind. Cells live in a flat row-major vector sized once at construction.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//!
//! Rows above the board (y < 0) are legal space for a spawning piece: they are
//! in bounds, never occupied, and never written.

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Largest accepted board width or height
///
/// Coordinates are `i8`. The headroom above this bound covers a piece anchor
/// on the last column or row plus a wall kick and the widest shape offset.
pub const MAX_BOARD_SIZE: u8 = i8::MAX as u8 - 8;

/// The game board - `width` columns x `height` rows using flat storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the reference 10x20 size
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create a new empty board with a fixed custom size
    ///
    /// Both dimensions must be in `1..=MAX_BOARD_SIZE`.
    pub fn with_size(width: u8, height: u8) -> Self {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&width),
            "invalid board width {width}"
        );
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&height),
            "invalid board height {height}"
        );
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Anchor where new pieces appear: horizontal center, top row
    pub fn spawn_position(&self) -> (i8, i8) {
        ((self.width / 2) as i8, 0)
    }

    /// Get cell at position (x, y)
    /// Returns None if off the grid
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false (and writes nothing) if off the grid, including y < 0
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check whether a block may exist at (x, y)
    ///
    /// x must be inside the columns and y above the floor. Negative y is allowed.
    pub fn is_in_bounds(&self, x: i8, y: i8) -> bool {
        x >= 0 && x < self.width as i8 && y < self.height as i8
    }

    /// Check if position is occupied (on the grid and filled)
    ///
    /// Cells above the board are always reported empty.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Indices of all full rows, top to bottom
    pub fn find_completed_rows(&self) -> Vec<usize> {
        (0..self.height as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove the listed rows and drop everything above them into the gap
    ///
    /// All listed rows vanish in one pass: surviving rows keep their relative
    /// order and move down by the number of removed rows beneath them, and the
    /// top is refilled with empty rows. Indices out of range are ignored.
    /// Returns the number of rows removed.
    pub fn clear_rows(&mut self, rows: &[usize]) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_y = height;
        let mut removed = 0;

        // Scan from bottom to top, compacting surviving rows downward.
        for read_y in (0..height).rev() {
            if rows.contains(&read_y) {
                removed += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        removed
    }

    /// Find and remove all full rows, returning their indices (top to bottom)
    pub fn clear_full_rows(&mut self) -> Vec<usize> {
        let rows = self.find_completed_rows();
        if !rows.is_empty() {
            self.clear_rows(&rows);
        }
        rows
    }

    /// Write `kind` into every listed cell that is on the grid
    ///
    /// Blocks above the board are skipped. Returns how many cells were written.
    pub fn lock_blocks(&mut self, blocks: &[(i8, i8)], kind: PieceKind) -> usize {
        blocks
            .iter()
            .filter(|&&(x, y)| self.set(x, y, Some(kind)))
            .count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from text rows, top to bottom
    ///
    /// `.` is empty, a piece letter (any case) fills the cell with that kind,
    /// and any other character fills it with `I`. Every row must have the same
    /// length.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut board = Self::with_size(width as u8, rows.len() as u8);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), width, "ragged row {y}");
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' => None,
                    c => Some(PieceKind::from_str(&c.to_string()).unwrap_or(PieceKind::I)),
                };
                board.set(x as i8, y as i8, cell);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
        assert_eq!(board.index(0, -1), None);
    }

    #[test]
    fn test_board_flat_layout() {
        let mut board = Board::new();
        board.set(0, 0, Some(PieceKind::I));
        board.set(5, 10, Some(PieceKind::T));

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_custom_size() {
        let board = Board::with_size(6, 8);
        assert_eq!(board.width(), 6);
        assert_eq!(board.height(), 8);
        assert_eq!(board.cells().len(), 48);
        assert_eq!(board.spawn_position(), (3, 0));
        assert!(board.is_in_bounds(5, 7));
        assert!(!board.is_in_bounds(6, 0));
        assert!(!board.is_in_bounds(0, 8));
    }

    #[test]
    fn test_largest_accepted_size() {
        let board = Board::with_size(MAX_BOARD_SIZE, MAX_BOARD_SIZE);
        let last = MAX_BOARD_SIZE as i8 - 1;
        assert!(board.is_in_bounds(last, last));
        assert!(!board.is_in_bounds(last + 1, 0));
        assert_eq!(board.spawn_position(), ((MAX_BOARD_SIZE / 2) as i8, 0));
    }

    #[test]
    #[should_panic(expected = "invalid board width")]
    fn test_width_above_limit_is_rejected() {
        let _board = Board::with_size(MAX_BOARD_SIZE + 1, 20);
    }

    #[test]
    #[should_panic(expected = "invalid board height")]
    fn test_height_above_limit_is_rejected() {
        let _board = Board::with_size(10, MAX_BOARD_SIZE + 1);
    }

    #[test]
    fn test_negative_rows_are_in_bounds_but_never_occupied() {
        let mut board = Board::new();
        assert!(board.is_in_bounds(0, -3));
        assert!(!board.is_in_bounds(-1, -3));
        assert!(!board.is_occupied(0, -1));
        assert!(!board.set(0, -1, Some(PieceKind::Z)));
        assert!(board.cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_clear_rows_compacts_multiple_rows() {
        let mut board = Board::from_rows(&[
            "..", //
            "T.", //
            "II", //
            ".S", //
            "OO", //
        ]);
        assert_eq!(board.find_completed_rows(), vec![2, 4]);
        assert_eq!(board.clear_rows(&[2, 4]), 2);
        assert_eq!(
            board,
            Board::from_rows(&[
                "..", //
                "..", //
                "..", //
                "T.", //
                ".S", //
            ])
        );
    }

    #[test]
    fn test_from_rows_reads_kinds() {
        let board = Board::from_rows(&["zx.", "..L"]);
        assert_eq!(board.get(0, 0), Some(Some(PieceKind::Z)));
        assert_eq!(board.get(1, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(2, 0), Some(None));
        assert_eq!(board.get(2, 1), Some(Some(PieceKind::L)));
    }
}
