//! Pieces module - Tetromino shapes and matrix rotation
//!
//! Each piece stores four block offsets relative to an anchor cell. Rotation
//! rewrites the offsets in place with a quarter-turn matrix; there is no
//! per-rotation lookup table. Validity against the board is the engine's job.

use crate::types::PieceKind;

/// Offset of a single block relative to the piece anchor
pub type BlockOffset = (i8, i8);

/// Shape of a piece - 4 block offsets from the anchor
pub type PieceShape = [BlockOffset; 4];

/// Spawn orientation offsets for a piece kind
///
/// The anchor is the block the piece turns around. y grows downward, so the
/// I, J and L pieces poke one row above the anchor at spawn.
pub fn base_offsets(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(0, -1), (0, 0), (0, 1), (0, 2)],
        PieceKind::O => [(0, 0), (0, 1), (1, 0), (1, 1)],
        PieceKind::T => [(0, 0), (-1, 0), (1, 0), (0, 1)],
        PieceKind::S => [(0, 0), (1, 0), (0, 1), (-1, 1)],
        PieceKind::Z => [(0, 0), (-1, 0), (0, 1), (1, 1)],
        PieceKind::J => [(0, 0), (0, -1), (0, 1), (-1, 1)],
        PieceKind::L => [(0, 0), (0, -1), (0, 1), (1, 1)],
    }
}

/// A tetromino on (or just above) the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    offsets: PieceShape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of `kind` in spawn orientation with its anchor at (x, y)
    pub fn new(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            offsets: base_offsets(kind),
            x,
            y,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Current relative block offsets
    pub fn offsets(&self) -> &PieceShape {
        &self.offsets
    }

    /// Absolute board coordinates of the four blocks
    pub fn blocks(&self) -> [(i8, i8); 4] {
        self.offsets
            .map(|(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }

    /// Copy of this piece moved by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Quarter turn clockwise: (dx, dy) -> (-dy, dx). No-op for O.
    pub fn rotate_cw(&mut self) {
        if self.kind == PieceKind::O {
            return;
        }
        for off in &mut self.offsets {
            *off = (-off.1, off.0);
        }
    }

    /// Quarter turn counter-clockwise: (dx, dy) -> (dy, -dx). No-op for O.
    pub fn rotate_ccw(&mut self) {
        if self.kind == PieceKind::O {
            return;
        }
        for off in &mut self.offsets {
            *off = (off.1, -off.0);
        }
    }
}
