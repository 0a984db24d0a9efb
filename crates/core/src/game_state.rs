//! Game state module - manages the complete game state
//!
//! This module ties together the board, pieces, RNG, and scoring. It handles
//! piece movement, rotation with wall kicks, locking, line clears, and the
//! running / paused / game-over lifecycle.
//!
//! Every command is a tentative move: the piece is moved on a copy, the copy is
//! checked against the board, and only a legal result is committed. Failed
//! commands leave the state untouched and report `false`.

use crate::{
    calculate_drop_score, calculate_level, calculate_line_score, fall_interval_ms, Board,
    GameSnapshot, NextPreview, Piece, PieceGenerator,
};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Piece,
    next: Piece,
    pieces: PieceGenerator,
    score: u32,
    lines: u32,
    level: u32,
    paused: bool,
    game_over: bool,
    /// Last lock event (consumed by the shell).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game on the reference board with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::new(), seed)
    }

    /// Create a new game on a prepared board
    ///
    /// If the first piece cannot spawn, the game is over from the start.
    pub fn with_board(board: Board, seed: u32) -> Self {
        let mut pieces = PieceGenerator::new(seed);
        let (x, y) = board.spawn_position();
        let current = Piece::new(pieces.draw(), x, y);
        let next = Piece::new(pieces.draw(), x, y);

        let mut state = Self {
            board,
            current,
            next,
            pieces,
            score: 0,
            lines: 0,
            level: 1,
            paused: false,
            game_over: false,
            last_event: None,
        };
        if !state.is_valid_position(&state.current) {
            state.game_over = true;
        }
        state
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
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

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u32 {
        self.pieces.seed()
    }

    /// Automatic descent interval for the current level
    pub fn fall_interval_ms(&self, base_ms: u32) -> u32 {
        fall_interval_ms(base_ms, self.level)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());

        let width = self.board.width() as usize;
        for (x, y) in self.current.blocks() {
            if x >= 0 && y >= 0 && x < self.board.width() as i8 && y < self.board.height() as i8 {
                out.board[y as usize * width + x as usize] = Some(self.current.kind());
            }
        }

        out.next = NextPreview {
            kind: self.next.kind(),
            offsets: *self.next.offsets(),
        };
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Check a piece against the walls, the floor, and locked blocks
    ///
    /// Blocks above the board only need a legal column.
    pub fn is_valid_position(&self, piece: &Piece) -> bool {
        piece.blocks().iter().all(|&(x, y)| {
            self.board.is_in_bounds(x, y) && (y < 0 || !self.board.is_occupied(x, y))
        })
    }

    /// Commands are only accepted while running
    fn accepts_commands(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Move the current piece if the destination is legal
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let moved = self.current.shifted(dx, dy);
        if self.is_valid_position(&moved) {
            self.current = moved;
            return true;
        }
        false
    }

    /// One row down; locks the piece when it cannot descend
    fn step_down(&mut self) -> bool {
        if self.try_move(0, 1) {
            return true;
        }
        self.lock_piece();
        false
    }

    pub fn move_left(&mut self) -> bool {
        self.accepts_commands() && self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.accepts_commands() && self.try_move(1, 0)
    }

    /// Soft drop / gravity step
    ///
    /// Returns false when the piece could not descend; in that case it has been
    /// locked and the next piece spawned.
    pub fn move_down(&mut self) -> bool {
        self.accepts_commands() && self.step_down()
    }

    /// Drop the current piece until it locks, scoring 2 points per row
    ///
    /// Returns false only when the command was rejected (paused or over).
    pub fn hard_drop(&mut self) -> bool {
        if !self.accepts_commands() {
            return false;
        }

        let mut distance: u32 = 0;
        while self.step_down() {
            distance += 1;
        }

        let bonus = calculate_drop_score(distance);
        self.score = self.score.saturating_add(bonus);
        if let Some(ev) = self.last_event.as_mut() {
            ev.drop_bonus = bonus;
        }
        true
    }

    /// Rotate clockwise, trying horizontal wall kicks on collision
    ///
    /// Kicks are tried in the order +1, -1, +2, -2 columns. If none fits, the
    /// piece keeps its original orientation and position. The O piece never
    /// rotates.
    pub fn rotate(&mut self) -> bool {
        if !self.accepts_commands() || self.current.kind() == PieceKind::O {
            return false;
        }

        let mut rotated = self.current;
        rotated.rotate_cw();

        let candidate = std::iter::once(0)
            .chain(WALL_KICK_OFFSETS)
            .map(|dx| rotated.shifted(dx, 0))
            .find(|p| self.is_valid_position(p));

        match candidate {
            Some(piece) => {
                self.current = piece;
                true
            }
            None => false,
        }
    }

    /// Toggle pause. Has no effect once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Lock the current piece onto the board and handle line clears
    ///
    /// Blocks above the board are dropped. After scoring, the next piece is
    /// promoted and a fresh one drawn; if the promoted piece does not fit at
    /// the spawn anchor the game is over.
    pub fn lock_piece(&mut self) {
        if self.game_over {
            return;
        }

        self.board
            .lock_blocks(&self.current.blocks(), self.current.kind());

        let cleared = self.board.clear_full_rows();
        let lines_cleared = cleared.len() as u32;

        let mut line_clear_score = 0;
        if lines_cleared > 0 {
            self.lines = self.lines.saturating_add(lines_cleared);
            // Uses the level from before this lock.
            line_clear_score = calculate_line_score(cleared.len(), self.level);
            self.score = self.score.saturating_add(line_clear_score);
            log::debug!(
                "cleared rows {:?} at level {} for {} points",
                cleared,
                self.level,
                line_clear_score
            );
        }
        self.level = calculate_level(self.lines);

        let (x, y) = self.board.spawn_position();
        let fresh = Piece::new(self.pieces.draw(), x, y);
        self.current = std::mem::replace(&mut self.next, fresh);
        log::trace!(
            "spawned {:?}, next {:?}",
            self.current.kind(),
            self.next.kind()
        );

        let topped_out = !self.is_valid_position(&self.current);
        if topped_out {
            self.game_over = true;
            log::debug!(
                "game over: score {} lines {} level {}",
                self.score,
                self.lines,
                self.level
            );
        }

        self.last_event = Some(LockEvent {
            lines_cleared,
            line_clear_score,
            drop_bonus: 0,
            topped_out,
        });
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.move_down(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateCw => self.rotate(),
            GameAction::Pause => self.toggle_pause(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
