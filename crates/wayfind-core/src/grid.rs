//! The [`OccupancyGrid`] type — a static 2D map of walkable and blocked cells.
//!
//! Cells are plain `i32` occupancy values: [`WALKABLE`] (`0`) cells may be
//! traversed, any non-zero value blocks movement. Storage is a single
//! row-major buffer, so the grid is rectangular by construction.

use std::fmt;

use crate::error::GridError;
use crate::geom::Position;

/// Occupancy value of a walkable cell.
pub const WALKABLE: i32 = 0;

/// Occupancy value written for blocked cells by [`OccupancyGrid::parse`].
/// Any non-zero value is treated as blocked.
pub const BLOCKED: i32 = 1;

/// A rectangular occupancy map addressed by [`Position`].
///
/// Rows are indexed `0..height`, columns `0..width`. The grid is never
/// mutated by a search, so a shared `&OccupancyGrid` can serve any number
/// of concurrent searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: Vec<i32>,
    width: usize,
    height: usize,
}

impl OccupancyGrid {
    /// Create a grid of the given dimensions with every cell walkable.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            cells: vec![WALKABLE; width * height],
            width,
            height,
        }
    }

    /// Build a grid from rows of occupancy values.
    ///
    /// Every row must have the same length as the first one; otherwise
    /// [`GridError::Ragged`] is returned. An empty slice yields a 0×0 grid.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        Ok(Self {
            cells,
            width,
            height: rows.len(),
        })
    }

    /// Parse an ASCII map.
    ///
    /// `.` and `0` are walkable, `#` and `1` are blocked. `S` and `G` are
    /// accepted as walkable so that maps can carry start and goal marks.
    /// Trailing blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }

        let mut rows = Vec::with_capacity(lines.len());
        for (r, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                let value = match ch {
                    '.' | '0' | 'S' | 'G' => WALKABLE,
                    '#' | '1' => BLOCKED,
                    _ => {
                        return Err(GridError::InvalidCell {
                            ch,
                            pos: Position::new(r as i32, c as i32),
                        });
                    }
                };
                row.push(value);
            }
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `pos` lies within `[0, height) x [0, width)`.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.height
            && (pos.col as usize) < self.width
    }

    /// Convert a `Position` to a flat row-major index. Returns `None` if out
    /// of bounds.
    #[inline]
    pub fn index(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some(pos.row as usize * self.width + pos.col as usize)
    }

    /// Convert a flat index back to a `Position`. Returns `None` if `idx` is
    /// past the last cell, which covers every index on a grid with no
    /// columns.
    #[inline]
    pub fn position(&self, idx: usize) -> Option<Position> {
        if idx >= self.cells.len() {
            return None;
        }
        Some(Position::new(
            (idx / self.width) as i32,
            (idx % self.width) as i32,
        ))
    }

    /// Occupancy value at `pos`, or `None` if out of bounds.
    pub fn at(&self, pos: Position) -> Option<i32> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Set the occupancy value at `pos`. Does nothing if out of bounds.
    pub fn set(&mut self, pos: Position, value: i32) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = value;
        }
    }

    /// Whether `pos` is in bounds and its cell value is [`WALKABLE`].
    #[inline]
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.at(pos) == Some(WALKABLE)
    }

    /// Count of walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == WALKABLE).count()
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        (0..self.height).map(move |r| &self.cells[r * self.width..(r + 1) * self.width])
    }

    /// Render the grid as ASCII with `path` overlaid.
    ///
    /// Path cells are drawn as `*`, the first as `S` and the last as `G`.
    /// Positions outside the grid are skipped.
    pub fn render_path(&self, path: &[Position]) -> String {
        let mut canvas: Vec<char> = self
            .cells
            .iter()
            .map(|&c| if c == WALKABLE { '.' } else { '#' })
            .collect();
        for (i, &p) in path.iter().enumerate() {
            let Some(idx) = self.index(p) else {
                continue;
            };
            canvas[idx] = if i == 0 {
                'S'
            } else if i + 1 == path.len() {
                'G'
            } else {
                '*'
            };
        }

        let mut out = String::with_capacity(self.height * (self.width + 1));
        for r in 0..self.height {
            out.extend(&canvas[r * self.width..(r + 1) * self.width]);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &c in row {
                let ch = if c == WALKABLE { '.' } else { '#' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for OccupancyGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OccupancyGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<i32>>::deserialize(deserializer)?;
        OccupancyGrid::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = OccupancyGrid::parse("..#\n#..").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[0,0,1],[1,0,0]]");
        let back: OccupancyGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn ragged_rows_fail_to_deserialize() {
        let res: Result<OccupancyGrid, _> = serde_json::from_str("[[0,0],[0]]");
        assert!(res.is_err());
    }

    #[test]
    fn position_round_trip() {
        let p = Position::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
