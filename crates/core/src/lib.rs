//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has no dependencies on terminal I/O, which keeps it:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Unit tests for every rule next to the code
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with occupancy queries and row clearing
//! - [`game_state`]: current/next piece, scoring, pause and game-over lifecycle
//! - [`pieces`]: tetromino offsets and matrix rotation
//! - [`rng`]: uniform random piece selection
//! - [`scoring`]: line clear points, hard drop bonus, level and fall speed
//! - [`snapshot`]: render-ready copy of the game
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every piece is an independent draw among seven kinds
//! - **Rotation**: clockwise quarter turns with horizontal kicks of +1, -1, +2, -2
//! - **Locking**: a piece locks as soon as it fails to move down
//! - **Scoring**: 100/300/500/800 per 1-4 lines times level, +2 per hard-dropped row
//! - **Levels**: start at 1, one more every 10 lines
//!
//! # Example
//!
//! ```
//! use term_tetris_core::GameState;
//! use term_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! The engine has no clock. The shell calls
//! [`GameState::move_down`](game_state::GameState::move_down) every
//! [`GameState::fall_interval_ms`](game_state::GameState::fall_interval_ms)
//! milliseconds, which is the base interval divided by the level.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use term_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MAX_BOARD_SIZE};
pub use game_state::GameState;
pub use pieces::{base_offsets, BlockOffset, Piece, PieceShape};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{calculate_drop_score, calculate_level, calculate_line_score, fall_interval_ms};
pub use snapshot::{GameSnapshot, NextPreview};
