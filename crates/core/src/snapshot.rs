//! Read-only view of the game for rendering.
//!
//! The board grid already has the falling piece merged in, so renderers never
//! need to know about piece geometry for the playfield.

use crate::pieces::{base_offsets, PieceShape};
use crate::types::{Cell, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Next piece preview: kind plus its relative offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextPreview {
    pub kind: PieceKind,
    pub offsets: PieceShape,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major `width * height` cells, locked blocks plus the current piece
    pub board: Vec<Cell>,
    pub next: NextPreview,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Cell at (x, y), `None` for empty or off-grid
    pub fn cell(&self, x: u8, y: u8) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.board[y as usize * self.width as usize + x as usize]
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else if self.paused {
            GameStatus::Paused
        } else {
            GameStatus::Running
        }
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: vec![None; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
            next: NextPreview {
                kind: PieceKind::I,
                offsets: base_offsets(PieceKind::I),
            },
            score: 0,
            lines: 0,
            level: 1,
            paused: false,
            game_over: false,
        }
    }
}
