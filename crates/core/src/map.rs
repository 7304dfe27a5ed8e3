//! Grid map: an immutable width x height grid of wall/open cells.

use std::fmt;

use crate::types::{Cell, DEFAULT_MAP};

/// Reasons a map string cannot be turned into a [`GridMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    Empty,
    /// Row `row` has `found` cells where `expected` were required.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    UnknownGlyph {
        row: usize,
        col: usize,
        glyph: char,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Empty => write!(f, "map has no rows"),
            MapError::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            MapError::UnknownGlyph { row, col, glyph } => {
                write!(f, "unknown map glyph {glyph:?} at row {row}, column {col}")
            }
        }
    }
}

impl std::error::Error for MapError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl GridMap {
    /// Parse a map from newline-separated rows of `#` and `.`.
    ///
    /// Leading/trailing whitespace on each row is ignored, as are blank lines.
    pub fn parse(src: &str) -> Result<Self, MapError> {
        let mut width = 0;
        let mut height = 0;
        let mut cells = Vec::new();

        for line in src.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let mut found = 0;
            for (col, glyph) in line.chars().enumerate() {
                let cell = Cell::from_glyph(glyph).ok_or(MapError::UnknownGlyph {
                    row: height,
                    col,
                    glyph,
                })?;
                cells.push(cell);
                found += 1;
            }

            if height == 0 {
                width = found;
            } else if found != width {
                return Err(MapError::RaggedRow {
                    row: height,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }

        if height == 0 || width == 0 {
            return Err(MapError::Empty);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Get the cell at integer grid coordinates, `None` outside the map.
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.idx(x, y).is_some()
    }

    /// Wall test used by collision: anything outside the map is solid.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).map_or(true, |c| c.is_wall())
    }

    /// Wall test for a continuous map position (floored to its cell).
    pub fn is_wall_at(&self, x: f32, y: f32) -> bool {
        self.is_wall(x.floor() as i32, y.floor() as i32)
    }

    /// Whether every border cell is a wall.
    ///
    /// Not enforced by [`GridMap::parse`]; out-of-map rays still resolve to
    /// maximum depth when it does not hold.
    pub fn has_solid_border(&self) -> bool {
        let (w, h) = (self.width as i32, self.height as i32);
        (0..w).all(|x| self.is_wall(x, 0) && self.is_wall(x, h - 1))
            && (0..h).all(|y| self.is_wall(0, y) && self.is_wall(w - 1, y))
    }

    /// Iterate rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}

impl Default for GridMap {
    fn default() -> Self {
        let cells = DEFAULT_MAP
            .lines()
            .flat_map(|l| l.chars())
            .map(|ch| Cell::from_glyph(ch).unwrap_or(Cell::Wall))
            .collect::<Vec<_>>();
        let width = DEFAULT_MAP.lines().next().map_or(0, |l| l.chars().count());
        let height = if width == 0 { 0 } else { cells.len() / width };
        Self {
            width,
            height,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MAP_HEIGHT, MAP_WIDTH};

    #[test]
    fn default_map_is_sixteen_square_with_solid_border() {
        let map = GridMap::default();
        assert_eq!(map.width(), MAP_WIDTH);
        assert_eq!(map.height(), MAP_HEIGHT);
        assert!(map.has_solid_border());
        assert_eq!(map, GridMap::parse(DEFAULT_MAP).unwrap());
    }

    #[test]
    fn default_map_known_cells() {
        let map = GridMap::default();
        assert_eq!(map.cell(8, 8), Some(Cell::Open));
        assert_eq!(map.cell(8, 12), Some(Cell::Wall));
        assert_eq!(map.cell(1, 2), Some(Cell::Wall));
        assert_eq!(map.cell(4, 2), Some(Cell::Open));
    }

    #[test]
    fn out_of_bounds_is_wall_but_has_no_cell() {
        let map = GridMap::default();
        assert_eq!(map.cell(-1, 0), None);
        assert_eq!(map.cell(0, 16), None);
        assert!(map.is_wall(-1, 4));
        assert!(map.is_wall(16, 4));
        assert!(!map.in_bounds(16, 0));
    }

    #[test]
    fn continuous_positions_floor_to_cells() {
        let map = GridMap::parse("###\n#.#\n###").unwrap();
        assert!(!map.is_wall_at(1.99, 1.01));
        assert!(map.is_wall_at(2.0, 1.5));
        assert!(map.is_wall_at(-0.5, 1.5));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = GridMap::parse("###\n##\n###").unwrap_err();
        assert_eq!(
            err,
            MapError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_glyphs_and_empty_input() {
        assert_eq!(
            GridMap::parse("#.#\n#@#").unwrap_err(),
            MapError::UnknownGlyph {
                row: 1,
                col: 1,
                glyph: '@'
            }
        );
        assert_eq!(GridMap::parse("\n  \n").unwrap_err(), MapError::Empty);
    }

    #[test]
    fn open_border_is_reported() {
        let map = GridMap::parse("#.#\n#.#\n###").unwrap();
        assert!(!map.has_solid_border());
    }
}
