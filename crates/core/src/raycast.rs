//! Ray casting against the grid map.
//!
//! A [`RayCaster`] turns an origin and an angle into a [`RayHit`]. Two
//! implementations share the same conventions:
//!
//! - direction is `(sin(angle), cos(angle))`
//! - leaving the map resolves to a miss at exactly `depth`
//! - a wall hit never reports more than `depth`
//! - a wall hit runs the corner heuristic to flag seam columns
//!
//! [`FixedStepMarcher`] samples the ray every `step` units and overshoots the
//! wall face by at most one step. [`GridTraversal`] visits every cell the ray
//! crosses (Amanatides & Woo) and reports the exact entry distance.

use crate::map::GridMap;
use crate::world::WorldConfig;

/// Result of casting a single ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    /// The ray grazes a corner of the wall cell it hit.
    pub boundary: bool,
    /// Wall cell that stopped the ray; `None` when the ray ran out of depth
    /// or left the map.
    pub cell: Option<(i32, i32)>,
}

impl RayHit {
    pub fn miss(depth: f32) -> Self {
        Self {
            distance: depth,
            boundary: false,
            cell: None,
        }
    }

    pub fn is_wall(&self) -> bool {
        self.cell.is_some()
    }
}

pub trait RayCaster {
    /// Cast from `(x, y)` along `angle` (radians).
    fn cast(&self, map: &GridMap, x: f32, y: f32, angle: f32) -> RayHit;

    fn depth(&self) -> f32;
}

/// Which [`RayCaster`] the renderer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasterKind {
    FixedStep,
    GridTraversal,
}

impl CasterKind {
    /// Parse from a config string: `march` / `fixed` or `grid` / `dda`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "march" | "fixed" => Some(CasterKind::FixedStep),
            "grid" | "dda" => Some(CasterKind::GridTraversal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CasterKind::FixedStep => "march",
            CasterKind::GridTraversal => "grid",
        }
    }

    pub fn build(&self, config: &WorldConfig) -> Box<dyn RayCaster> {
        match self {
            CasterKind::FixedStep => Box::new(FixedStepMarcher::from_config(config)),
            CasterKind::GridTraversal => Box::new(GridTraversal::from_config(config)),
        }
    }
}

/// Linear march in fixed increments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStepMarcher {
    pub step: f32,
    pub depth: f32,
    pub tolerance: f32,
}

impl FixedStepMarcher {
    pub fn from_config(config: &WorldConfig) -> Self {
        Self {
            step: config.ray_step,
            depth: config.depth,
            tolerance: config.boundary_tolerance,
        }
    }
}

impl RayCaster for FixedStepMarcher {
    fn cast(&self, map: &GridMap, x: f32, y: f32, angle: f32) -> RayHit {
        let (eye_x, eye_y) = (angle.sin(), angle.cos());
        let mut distance = 0.0_f32;

        while distance < self.depth {
            distance = (distance + self.step).min(self.depth);
            let test_x = (x + eye_x * distance).floor() as i32;
            let test_y = (y + eye_y * distance).floor() as i32;

            match map.cell(test_x, test_y) {
                None => return RayHit::miss(self.depth),
                Some(cell) if cell.is_wall() => {
                    return RayHit {
                        distance,
                        boundary: on_cell_corner(
                            (test_x, test_y),
                            (x, y),
                            (eye_x, eye_y),
                            self.tolerance,
                        ),
                        cell: Some((test_x, test_y)),
                    };
                }
                Some(_) => {}
            }
        }

        RayHit::miss(self.depth)
    }

    fn depth(&self) -> f32 {
        self.depth
    }
}

/// Exact cell-by-cell traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTraversal {
    pub depth: f32,
    pub tolerance: f32,
}

impl GridTraversal {
    pub fn from_config(config: &WorldConfig) -> Self {
        Self {
            depth: config.depth,
            tolerance: config.boundary_tolerance,
        }
    }
}

/// Per-axis traversal state: cell step, distance to the next grid line,
/// and distance between grid lines.
fn axis(origin: f32, dir: f32) -> (i32, f32, f32) {
    if dir > 0.0 {
        (1, (origin.floor() + 1.0 - origin) / dir, 1.0 / dir)
    } else if dir < 0.0 {
        (-1, (origin - origin.floor()) / -dir, -1.0 / dir)
    } else {
        (0, f32::INFINITY, f32::INFINITY)
    }
}

impl RayCaster for GridTraversal {
    fn cast(&self, map: &GridMap, x: f32, y: f32, angle: f32) -> RayHit {
        let (eye_x, eye_y) = (angle.sin(), angle.cos());
        let mut cell_x = x.floor() as i32;
        let mut cell_y = y.floor() as i32;

        let (step_x, mut next_x, delta_x) = axis(x, eye_x);
        let (step_y, mut next_y, delta_y) = axis(y, eye_y);

        loop {
            let distance = if next_x < next_y {
                cell_x += step_x;
                let d = next_x;
                next_x += delta_x;
                d
            } else {
                cell_y += step_y;
                let d = next_y;
                next_y += delta_y;
                d
            };

            if distance >= self.depth {
                return RayHit::miss(self.depth);
            }

            match map.cell(cell_x, cell_y) {
                None => return RayHit::miss(self.depth),
                Some(cell) if cell.is_wall() => {
                    return RayHit {
                        distance,
                        boundary: on_cell_corner(
                            (cell_x, cell_y),
                            (x, y),
                            (eye_x, eye_y),
                            self.tolerance,
                        ),
                        cell: Some((cell_x, cell_y)),
                    };
                }
                Some(_) => {}
            }
        }
    }

    fn depth(&self) -> f32 {
        self.depth
    }
}

/// Seam heuristic: the ray points at one of the two nearest corners of the
/// hit cell to within `tolerance` radians.
pub fn on_cell_corner(cell: (i32, i32), origin: (f32, f32), eye: (f32, f32), tolerance: f32) -> bool {
    let mut corners = [(0.0_f32, 0.0_f32); 4];
    let mut i = 0;
    for tx in 0..2 {
        for ty in 0..2 {
            let vx = (cell.0 + tx) as f32 - origin.0;
            let vy = (cell.1 + ty) as f32 - origin.1;
            let d = (vx * vx + vy * vy).sqrt();
            let dot = if d > 0.0 {
                (eye.0 * vx / d) + (eye.1 * vy / d)
            } else {
                1.0
            };
            corners[i] = (d, dot);
            i += 1;
        }
    }
    corners.sort_by(|a, b| a.0.total_cmp(&b.0));

    corners
        .iter()
        .take(2)
        .any(|&(_, dot)| dot.clamp(-1.0, 1.0).acos() < tolerance)
}
