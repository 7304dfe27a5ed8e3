//! Core maze logic module - pure, deterministic, and testable
//!
//! This module contains the world model, movement rules and ray casting.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: the same pose and map always produce the same rays
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: the renderer only needs a [`RayCaster`] and a [`World`]
//!
//! # Module Structure
//!
//! - [`map`]: immutable wall/open grid with bounds-checked lookups
//! - [`world`]: player pose, injected [`WorldConfig`], movement and collision
//! - [`raycast`]: the [`RayCaster`] seam with fixed-step and exact grid casters
//! - [`shade`]: distance → wall/floor glyph tiers and wall span
//! - [`compass`]: heading → minimap arrow
//!
//! # Example
//!
//! ```
//! use tui_maze_core::{RayCaster, World};
//! use tui_maze_types::Action;
//!
//! let mut world = World::default();
//! world.apply_actions(&[Action::MoveForward], 0.1);
//!
//! let pose = world.pose();
//! let hit = world.caster().cast(world.map(), pose.x, pose.y, pose.heading);
//! assert!(hit.distance <= world.config().depth);
//! ```

pub mod compass;
pub mod map;
pub mod raycast;
pub mod shade;
pub mod world;

pub use tui_maze_types as types;

pub use compass::Facing;
pub use map::{GridMap, MapError};
pub use raycast::{CasterKind, FixedStepMarcher, GridTraversal, RayCaster, RayHit};
pub use shade::{column_span, floor_glyph, WallShade};
pub use world::{normalize_angle, Pose, World, WorldConfig};
