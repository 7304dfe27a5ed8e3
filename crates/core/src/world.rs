//! World state: the map, the player pose, and the configuration that drives
//! movement and rendering.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::map::GridMap;
use crate::raycast::{CasterKind, RayCaster};
use crate::types::{
    Action, BOUNDARY_TOLERANCE, DEPTH, FOV, RAY_STEP, SPEED, START_HEADING, START_X, START_Y,
    TURN_SPEED,
};

/// Player position (map units) and heading (radians).
///
/// Heading 0 looks along +y; the movement direction is `(sin(h), cos(h))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub heading: f32,
}

impl Pose {
    pub fn new(x: f32, y: f32, heading: f32) -> Self {
        Self { x, y, heading }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(START_X, START_Y, START_HEADING)
    }
}

/// Wrap an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs.
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Tunables injected into the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    pub fov: f32,
    pub depth: f32,
    pub speed: f32,
    pub turn_speed: f32,
    pub boundary_tolerance: f32,
    pub ray_step: f32,
    pub caster: CasterKind,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            fov: FOV,
            depth: DEPTH,
            speed: SPEED,
            turn_speed: TURN_SPEED,
            boundary_tolerance: BOUNDARY_TOLERANCE,
            ray_step: RAY_STEP,
            caster: CasterKind::FixedStep,
        }
    }
}

impl WorldConfig {
    /// Create from environment variables, falling back to defaults.
    ///
    /// - `MAZE_FOV`: field of view in degrees
    /// - `MAZE_DEPTH`: maximum ray distance
    /// - `MAZE_SPEED`: movement speed
    /// - `MAZE_TURN_SPEED`: turning speed (radians per second)
    /// - `MAZE_RAYCASTER`: `march` or `grid`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`WorldConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let positive = |key: &str| -> Option<f32> {
            let raw = lookup(key)?;
            match raw.trim().parse::<f32>() {
                Ok(v) if v.is_finite() && v > 0.0 => Some(v),
                _ => {
                    tracing::warn!(key, value = %raw, "ignoring invalid setting");
                    None
                }
            }
        };

        let fov = positive("MAZE_FOV").map_or(defaults.fov, f32::to_radians);
        let depth = positive("MAZE_DEPTH").unwrap_or(defaults.depth);
        let speed = positive("MAZE_SPEED").unwrap_or(defaults.speed);
        let turn_speed = positive("MAZE_TURN_SPEED").unwrap_or(defaults.turn_speed);

        let caster = match lookup("MAZE_RAYCASTER") {
            None => defaults.caster,
            Some(raw) => CasterKind::from_str(raw.trim()).unwrap_or_else(|| {
                tracing::warn!(key = "MAZE_RAYCASTER", value = %raw, "ignoring invalid setting");
                defaults.caster
            }),
        };

        Self {
            fov,
            depth,
            speed,
            turn_speed,
            caster,
            ..defaults
        }
    }
}

/// The map, the player, and the config; owned by the frame loop.
#[derive(Debug, Clone)]
pub struct World {
    map: GridMap,
    pose: Pose,
    config: WorldConfig,
}

impl World {
    pub fn new(map: GridMap, pose: Pose, config: WorldConfig) -> Self {
        Self { map, pose, config }
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Build the ray caster selected by the config.
    pub fn caster(&self) -> Box<dyn RayCaster> {
        self.config.caster.build(&self.config)
    }

    /// Walk along `angle` for `elapsed` seconds.
    ///
    /// When the destination cell is solid the pose is restored bit for bit.
    /// There is no sweep: a large `elapsed` can carry the player across a
    /// thin wall.
    pub fn move_player(&mut self, angle: f32, elapsed: f32, forward: bool) {
        let step = if forward {
            self.config.speed
        } else {
            -self.config.speed
        };
        let dx = angle.sin() * step * elapsed;
        let dy = angle.cos() * step * elapsed;

        // (x + dx) - dx is not always x in f32.
        let before = self.pose;
        self.pose.x += dx;
        self.pose.y += dy;

        if self.map.is_wall_at(self.pose.x, self.pose.y) {
            self.pose = before;
        }
    }

    /// Rotate the heading by `delta` radians, keeping it in `[0, 2π)`.
    pub fn turn(&mut self, delta: f32) {
        self.pose.heading = normalize_angle(self.pose.heading + delta);
    }

    pub fn apply_action(&mut self, action: Action, elapsed: f32) {
        let heading = self.pose.heading;
        match action {
            Action::TurnLeft => self.turn(-self.config.turn_speed * elapsed),
            Action::TurnRight => self.turn(self.config.turn_speed * elapsed),
            Action::MoveForward => self.move_player(heading, elapsed, true),
            Action::MoveBackward => self.move_player(heading, elapsed, false),
            Action::StrafeLeft => self.move_player(heading - FRAC_PI_2, elapsed, true),
            Action::StrafeRight => self.move_player(heading + FRAC_PI_2, elapsed, true),
        }
    }

    /// Apply every held action for this frame, in [`Action::ALL`] order.
    pub fn apply_actions(&mut self, held: &[Action], elapsed: f32) {
        for action in Action::ALL {
            if held.contains(&action) {
                self.apply_action(action, elapsed);
            }
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(GridMap::default(), Pose::default(), WorldConfig::default())
    }
}
