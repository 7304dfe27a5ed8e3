//! Distance → glyph shading for walls and floor.

/// Wall brightness tier by hit distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallShade {
    /// `d <= depth / 4`
    Near,
    /// `d < depth / 3`
    Close,
    /// `d < depth / 2`
    Medium,
    /// `d < depth`
    Far,
    /// At or beyond depth, or on a seam.
    Blank,
}

impl WallShade {
    /// The near tier includes its upper threshold; every other tier excludes it.
    pub fn for_distance(distance: f32, depth: f32) -> Self {
        if distance <= depth / 4.0 {
            WallShade::Near
        } else if distance < depth / 3.0 {
            WallShade::Close
        } else if distance < depth / 2.0 {
            WallShade::Medium
        } else if distance < depth {
            WallShade::Far
        } else {
            WallShade::Blank
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            WallShade::Near => '█',
            WallShade::Close => '▓',
            WallShade::Medium => '▒',
            WallShade::Far => '░',
            WallShade::Blank => ' ',
        }
    }
}

/// Floor glyph for a screen row below the horizon.
///
/// `b` runs from 1 at mid-screen to 0 at the bottom row; lower is nearer.
pub fn floor_glyph(row: u16, screen_height: u16) -> char {
    let half = f32::from(screen_height) / 2.0;
    let b = 1.0 - (f32::from(row) - half) / half;
    if b < 0.25 {
        '#'
    } else if b < 0.5 {
        'x'
    } else if b < 0.75 {
        '.'
    } else if b < 0.9 {
        '~'
    } else {
        ' '
    }
}

/// Vertical wall span for a hit distance: rows `[ceiling, floor)` hold wall.
///
/// Height is inversely proportional to distance and symmetric about the
/// horizon. The ceiling is clamped to `[0, h/2]`, so a wall the player is
/// touching (distance 0) fills the whole column.
pub fn column_span(distance: f32, screen_height: u16) -> (i32, i32) {
    let h = f32::from(screen_height);
    let ceiling = (h / 2.0 - h / distance.max(f32::EPSILON)).clamp(0.0, h / 2.0) as i32;
    let floor = i32::from(screen_height) - ceiling;
    (ceiling, floor)
}
