//! TUI Maze (workspace facade crate).
//!
//! This package exposes `tui_maze::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub mod logging;

pub use tui_maze_core as core;
pub use tui_maze_input as input;
pub use tui_maze_term as term;
pub use tui_maze_types as types;
