//! Terminal "maze renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is flushed to a terminal
//! backend once per frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep frame composition pure (see [`scene_view`])
//! - Keep terminal I/O in one place (see [`renderer`])

pub mod fb;
pub mod renderer;
pub mod scene_view;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use scene_view::{hud_text, FrameStats, SceneView};
