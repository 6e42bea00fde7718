//! Geometry primitive: [`Position`].
//!
//! Coordinates are `(row, col)`: rows grow downward, columns grow right.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell coordinate on a grid, `(row, col)`.
///
/// Positions are plain values: they may lie outside any particular grid, so
/// bounds are always checked against an [`OccupancyGrid`](crate::OccupancyGrid).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Unit offset one column to the right.
    pub const RIGHT: Self = Self { row: 0, col: 1 };
    /// Unit offset one row down.
    pub const DOWN: Self = Self { row: 1, col: 0 };
    /// Unit offset one column to the left.
    pub const LEFT: Self = Self { row: 0, col: -1 };
    /// Unit offset one row up.
    pub const UP: Self = Self { row: -1, col: 0 };

    /// The four orthogonal unit offsets in expansion order: right, down,
    /// left, up.
    pub const ORTHOGONAL: [Self; 4] = [Self::RIGHT, Self::DOWN, Self::LEFT, Self::UP];

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours (right, down, left, up).
    ///
    /// No bounds checking is done here.
    #[inline]
    pub fn neighbors_4(self) -> [Position; 4] {
        Self::ORTHOGONAL.map(|d| self.shift(d.row, d.col))
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Position> for (i32, i32) {
    #[inline]
    fn from(p: Position) -> Self {
        (p.row, p.col)
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}
