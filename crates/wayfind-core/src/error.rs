use std::fmt;

use crate::geom::Position;

/// Errors that can occur when building an [`OccupancyGrid`](crate::OccupancyGrid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row does not have the same length as the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character in an ASCII map is neither walkable nor blocked.
    InvalidCell { ch: char, pos: Position },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid is not rectangular: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidCell { ch, pos } => {
                write!(f, "grid contains invalid cell \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
