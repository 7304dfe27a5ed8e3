//! Terminal input module (world-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Action`] and tracks which
//! actions are held each frame, including on terminals without key-release
//! events.

pub mod handler;
pub mod map;

pub use tui_maze_types as types;

pub use handler::KeyState;
pub use map::{action_for_key, should_quit};
