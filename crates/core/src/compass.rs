//! Heading → minimap arrow.

use std::f32::consts::FRAC_PI_4;

use crate::world::normalize_angle;

/// Direction the player arrow points on the minimap.
///
/// Heading 0 walks toward +y, which is down the minimap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Down,
    Right,
    Up,
    Left,
}

impl Facing {
    /// Bucket a heading into 90° sectors centred on the axes.
    ///
    /// The heading is normalized first, so any accumulated value is valid.
    /// Each sector includes its lower bound.
    pub fn from_heading(heading: f32) -> Self {
        let h = normalize_angle(heading);
        if h < FRAC_PI_4 || h >= FRAC_PI_4 * 7.0 {
            Facing::Down
        } else if h < FRAC_PI_4 * 3.0 {
            Facing::Right
        } else if h < FRAC_PI_4 * 5.0 {
            Facing::Up
        } else {
            Facing::Left
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Facing::Down => 'v',
            Facing::Right => '>',
            Facing::Up => '^',
            Facing::Left => '<',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn cardinal_headings() {
        assert_eq!(Facing::from_heading(0.0), Facing::Down);
        assert_eq!(Facing::from_heading(FRAC_PI_2), Facing::Right);
        assert_eq!(Facing::from_heading(PI), Facing::Up);
        assert_eq!(Facing::from_heading(FRAC_PI_2 * 3.0), Facing::Left);
    }

    #[test]
    fn sector_bounds_belong_to_the_next_sector() {
        assert_eq!(Facing::from_heading(FRAC_PI_4), Facing::Right);
        assert_eq!(Facing::from_heading(FRAC_PI_4 * 3.0), Facing::Up);
        assert_eq!(Facing::from_heading(FRAC_PI_4 * 5.0), Facing::Left);
        assert_eq!(Facing::from_heading(FRAC_PI_4 * 7.0), Facing::Down);
    }

    #[test]
    fn unnormalized_headings_bucket_the_same() {
        assert_eq!(Facing::from_heading(-FRAC_PI_2), Facing::Left);
        assert_eq!(Facing::from_heading(TAU * 3.0 + PI), Facing::Up);
        assert_eq!(Facing::from_heading(-0.1), Facing::Down);
    }

    #[test]
    fn glyphs() {
        assert_eq!(Facing::Down.glyph(), 'v');
        assert_eq!(Facing::Right.glyph(), '>');
        assert_eq!(Facing::Up.glyph(), '^');
        assert_eq!(Facing::Left.glyph(), '<');
    }
}
