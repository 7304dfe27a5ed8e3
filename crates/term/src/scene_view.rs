//! SceneView: maps a `core::World` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! A frame is composed in three passes, each overwriting the last:
//!
//! 1. one ray per column: ceiling, shaded wall span, floor gradient
//! 2. the minimap, one row below the top edge
//! 3. the status line on row 0

use crate::core::{column_span, floor_glyph, Facing, Pose, RayCaster, WallShade, World};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell as MapCell, HUD_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Frame timing shown on the status line.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    /// Seconds since the previous frame.
    pub elapsed: f32,
}

impl FrameStats {
    pub fn new(elapsed: f32) -> Self {
        Self { elapsed }
    }

    /// Frames per second; 0 when no time has passed.
    pub fn fps(&self) -> f32 {
        if self.elapsed > 0.0 {
            1.0 / self.elapsed
        } else {
            0.0
        }
    }
}

/// First-person renderer with minimap and status overlays.
pub struct SceneView {
    width: u16,
    height: u16,
}

impl Default for SceneView {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl SceneView {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Render a full frame into an existing framebuffer.
    ///
    /// Every cell of the screen area is rewritten.
    pub fn render_into(
        &self,
        world: &World,
        caster: &dyn RayCaster,
        stats: FrameStats,
        fb: &mut FrameBuffer,
    ) {
        if fb.width() != self.width || fb.height() != self.height {
            *fb = FrameBuffer::new(self.width, self.height);
        }
        self.draw_columns(world, caster, fb);
        self.draw_minimap(world, fb);
        self.draw_hud(world.pose(), stats, fb);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, world: &World, caster: &dyn RayCaster, stats: FrameStats) -> FrameBuffer {
        let mut fb = FrameBuffer::new(self.width, self.height);
        self.render_into(world, caster, stats, &mut fb);
        fb
    }

    /// Angle of the ray cast for screen column `x`.
    pub fn ray_angle(&self, heading: f32, fov: f32, x: u16) -> f32 {
        (heading - fov / 2.0) + (f32::from(x) / f32::from(self.width)) * fov
    }

    fn draw_columns(&self, world: &World, caster: &dyn RayCaster, fb: &mut FrameBuffer) {
        let pose = world.pose();
        let config = world.config();
        let ceiling_style = CellStyle::default();
        let floor_style = CellStyle::fg(Rgb::new(150, 130, 100));

        for x in 0..self.width {
            let angle = self.ray_angle(pose.heading, config.fov, x);
            let hit = caster.cast(world.map(), pose.x, pose.y, angle);

            let (ceiling, floor) = column_span(hit.distance, self.height);
            let shade = if hit.boundary {
                WallShade::Blank
            } else {
                WallShade::for_distance(hit.distance, caster.depth())
            };
            let wall = wall_style(shade).into_cell(shade.glyph());

            for y in 0..self.height {
                let row = i32::from(y);
                if row < ceiling {
                    fb.set(x, y, ceiling_style.into_cell(' '));
                } else if row < floor {
                    fb.set(x, y, wall);
                } else {
                    fb.set(x, y, floor_style.into_cell(floor_glyph(y, self.height)));
                }
            }
        }
    }

    fn draw_minimap(&self, world: &World, fb: &mut FrameBuffer) {
        let wall = CellStyle::fg(Rgb::gray(200));
        let open = CellStyle::fg(Rgb::gray(110));

        for (y, row) in world.map().rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let style = match cell {
                    MapCell::Wall => wall,
                    MapCell::Open => open,
                };
                fb.set_signed(x as i32, y as i32 + 1, style.into_cell(cell.glyph()));
            }
        }

        let pose = world.pose();
        let player = CellStyle {
            fg: Rgb::new(250, 210, 60),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        fb.set_signed(
            pose.x as i32,
            pose.y as i32 + 1,
            player.into_cell(Facing::from_heading(pose.heading).glyph()),
        );
    }

    fn draw_hud(&self, pose: Pose, stats: FrameStats, fb: &mut FrameBuffer) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        fb.put_str(0, 0, &hud_text(pose, stats), style);
    }
}

/// Status line text, capped at [`HUD_WIDTH`] characters.
pub fn hud_text(pose: Pose, stats: FrameStats) -> String {
    let full = format!(
        "X={:3.2}, Y={:3.2}, A={:3.2} FPS={:3.2} ",
        pose.x,
        pose.y,
        pose.heading,
        stats.fps()
    );
    full.chars().take(HUD_WIDTH).collect()
}

fn wall_style(shade: WallShade) -> CellStyle {
    let v = match shade {
        WallShade::Near => 235,
        WallShade::Close => 190,
        WallShade::Medium => 145,
        WallShade::Far => 100,
        WallShade::Blank => 0,
    };
    CellStyle::fg(Rgb::gray(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridMap, WorldConfig};

    #[test]
    fn fps_is_zero_without_elapsed_time() {
        assert_eq!(FrameStats::new(0.0).fps(), 0.0);
        assert_eq!(FrameStats::new(0.5).fps(), 2.0);
    }

    #[test]
    fn hud_text_formats_pose_and_fps() {
        let text = hud_text(Pose::new(8.0, 7.5, 1.25), FrameStats::new(0.02));
        assert_eq!(text, "X=8.00, Y=7.50, A=1.25 FPS=50.00 ");
    }

    #[test]
    fn hud_text_is_capped() {
        let text = hud_text(
            Pose::new(123456.0, 654321.0, 1.0),
            FrameStats::new(1e-7),
        );
        assert_eq!(text.chars().count(), HUD_WIDTH);
        // The last of 40 screen slots stays free for the terminator.
        assert_eq!(text.chars().count(), 39);
    }

    #[test]
    fn center_ray_follows_heading() {
        let view = SceneView::default();
        let fov = WorldConfig::default().fov;
        assert_eq!(view.ray_angle(0.0, fov, SCREEN_WIDTH / 2), 0.0);
        assert!((view.ray_angle(1.0, fov, 0) - (1.0 - fov / 2.0)).abs() < 1e-6);
    }

    #[test]
    fn wall_styles_get_darker_with_distance() {
        let near = wall_style(WallShade::Near).fg.r;
        let far = wall_style(WallShade::Far).fg.r;
        assert!(near > far);
    }

    #[test]
    fn minimap_sits_below_hud_row() {
        let map = GridMap::parse("###\n#.#\n###").unwrap();
        let world = World::new(map, Pose::new(1.5, 1.5, 0.0), WorldConfig::default());
        let caster = world.caster();
        let fb = SceneView::default().render(&world, caster.as_ref(), FrameStats::default());

        assert_eq!(&fb.row_text(1)[..3], "###");
        assert_eq!(&fb.row_text(2)[..3], "#v#");
        assert_eq!(&fb.row_text(3)[..3], "###");
    }
}
