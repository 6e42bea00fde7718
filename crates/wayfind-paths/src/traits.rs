use wayfind_core::{OccupancyGrid, Position};

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);
}

/// Orthogonal neighbors in the fixed order right, down, left, up, keeping
/// only in-bounds walkable cells.
impl Pather for OccupancyGrid {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_walkable(n)));
    }
}
