//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (world simulation, ray casting, terminal rendering).
//!
//! # Screen and Map Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 120 | Console columns (one ray per column) |
//! | `SCREEN_HEIGHT` | 40 | Console rows |
//! | `MAP_WIDTH` | 16 | Default map width in cells |
//! | `MAP_HEIGHT` | 16 | Default map height in cells |
//!
//! # View and Movement Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FOV` | π/4 | Field of view in radians |
//! | `DEPTH` | 16.0 | Maximum ray travel in map units |
//! | `SPEED` | 5.0 | Movement speed in map units per second |
//! | `TURN_SPEED` | 0.8 | Turning speed in radians per second |
//! | `BOUNDARY_TOLERANCE` | 0.01 | Angular tolerance (radians) for wall seams |
//! | `RAY_STEP` | 0.1 | Fixed-step ray march increment |
//!
//! # Examples
//!
//! ```
//! use tui_maze_types::{Action, Cell, SCREEN_WIDTH, SCREEN_HEIGHT};
//!
//! assert_eq!(Cell::from_glyph('#'), Some(Cell::Wall));
//! assert_eq!(Cell::Open.glyph(), '.');
//!
//! assert_eq!(Action::ALL[Action::StrafeLeft.index()], Action::StrafeLeft);
//!
//! assert_eq!(SCREEN_WIDTH, 120);
//! assert_eq!(SCREEN_HEIGHT, 40);
//! ```

/// Screen width in characters (one ray per column)
pub const SCREEN_WIDTH: u16 = 120;

/// Screen height in characters
pub const SCREEN_HEIGHT: u16 = 40;

/// Default map width in cells
pub const MAP_WIDTH: usize = 16;

/// Default map height in cells
pub const MAP_HEIGHT: usize = 16;

/// Field of view in radians (45°)
pub const FOV: f32 = std::f32::consts::FRAC_PI_4;

/// Maximum ray travel distance before a ray counts as "no hit"
pub const DEPTH: f32 = 16.0;

/// Player movement speed in map units per second
pub const SPEED: f32 = 5.0;

/// Player turning speed in radians per second
pub const TURN_SPEED: f32 = 0.8;

/// Angular tolerance for flagging a column as a wall seam
pub const BOUNDARY_TOLERANCE: f32 = 0.01;

/// Fixed-step ray march increment in map units
pub const RAY_STEP: f32 = 0.1;

/// Initial player position and heading
pub const START_X: f32 = 8.0;
pub const START_Y: f32 = 8.0;
pub const START_HEADING: f32 = 0.0;

/// Maximum width of the status line, in characters (a 40-slot buffer with
/// room for its terminator)
pub const HUD_WIDTH: usize = 39;

/// Default maze layout, `#` for walls and `.` for open floor.
pub const DEFAULT_MAP: &str = "\
################
#..............#
####...##..##..#
#..............#
#..............#
#.........#....#
#..............#
#....###....#..#
#..............#
####...........#
#..............#
#..............#
#.......########
#..............#
#..............#
################";


/// A single map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Open,
}

impl Cell {
    /// Parse a map glyph
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_maze_types::Cell;
    ///
    /// assert_eq!(Cell::from_glyph('#'), Some(Cell::Wall));
    /// assert_eq!(Cell::from_glyph('.'), Some(Cell::Open));
    /// assert_eq!(Cell::from_glyph('x'), None);
    /// ```
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Open),
            _ => None,
        }
    }

    /// Glyph used in map strings and on the minimap
    pub fn glyph(&self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => '.',
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Cell::Wall)
    }
}

/// Logical player actions polled once per frame
///
/// The order of [`Action::ALL`] is the order in which held actions are
/// applied to the world each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Rotate heading counter-clockwise
    TurnLeft,
    /// Rotate heading clockwise
    TurnRight,
    /// Walk along the heading
    MoveForward,
    /// Walk against the heading
    MoveBackward,
    /// Walk along heading - 90°
    StrafeLeft,
    /// Walk along heading + 90°
    StrafeRight,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::TurnLeft,
        Action::TurnRight,
        Action::MoveForward,
        Action::MoveBackward,
        Action::StrafeLeft,
        Action::StrafeRight,
    ];

    /// Index into [`Action::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Action::TurnLeft => 0,
            Action::TurnRight => 1,
            Action::MoveForward => 2,
            Action::MoveBackward => 3,
            Action::StrafeLeft => 4,
            Action::StrafeRight => 5,
        }
    }
}
