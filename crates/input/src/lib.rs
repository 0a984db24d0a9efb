//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and recognises the
//! two shell-only commands: quit and interrupt.

pub mod map;

pub use term_tetris_types as types;

pub use map::{handle_key_event, is_interrupt, should_quit};
