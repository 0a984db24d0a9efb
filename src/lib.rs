//! Terminal Tetris (workspace facade crate).
//!
//! The engine, input mapping and terminal rendering live in dedicated crates
//! under `crates/` and are re-exported here as `term_tetris::{core,input,term,types}`.

pub mod config;
pub mod logging;

pub use term_tetris_core as core;
pub use term_tetris_input as input;
pub use term_tetris_term as term;
pub use term_tetris_types as types;

pub use config::GameConfig;
