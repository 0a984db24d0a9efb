//! Terminal rendering for term-tetris.
//!
//! Frames are composed into a plain framebuffer (two columns per board cell)
//! and then flushed to the terminal through crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
