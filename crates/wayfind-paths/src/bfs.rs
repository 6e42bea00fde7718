use std::collections::VecDeque;

use wayfind_core::{OccupancyGrid, Position};

use crate::traits::Pather;

/// Sentinel distance for cells not reached by [`bfs_map`].
pub const UNREACHABLE: u32 = u32::MAX;

/// Compute a breadth-first distance map from `source`.
///
/// Each step has cost 1. The result is indexed like the grid
/// ([`OccupancyGrid::index`]); unreached cells hold [`UNREACHABLE`]. A
/// blocked or out-of-bounds source reaches nothing.
pub fn bfs_map(grid: &OccupancyGrid, source: Position) -> Vec<u32> {
    let mut dist = vec![UNREACHABLE; grid.len()];
    let Some(si) = grid.index(source) else {
        return dist;
    };
    if !grid.is_walkable(source) {
        return dist;
    }

    let mut queue: VecDeque<usize> = VecDeque::new();
    dist[si] = 0;
    queue.push_back(si);

    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = queue.pop_front() {
        let current_dist = dist[ci];
        let Some(cp) = grid.position(ci) else {
            continue;
        };

        nbuf.clear();
        grid.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = current_dist + 1;
            queue.push_back(ni);
        }
    }

    dist
}

/// Exact shortest edge count between `start` and `goal`, or `None` if the
/// goal cannot be reached.
///
/// Explores exhaustively, so it is a reference for checking other searches
/// rather than a fast path query.
pub fn bfs_distance(grid: &OccupancyGrid, start: Position, goal: Position) -> Option<u32> {
    let gi = grid.index(goal)?;
    if !grid.is_walkable(goal) {
        return None;
    }
    match bfs_map(grid, start)[gi] {
        UNREACHABLE => None,
        d => Some(d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_grid_distance_is_manhattan() {
        let g = OccupancyGrid::new(4, 6);
        let s = Position::new(0, 0);
        for row in 0..4 {
            for col in 0..6 {
                let t = Position::new(row, col);
                assert_eq!(bfs_distance(&g, s, t), Some(crate::manhattan(s, t)));
            }
        }
    }

    #[test]
    fn wall_forces_detour() {
        let g = OccupancyGrid::parse(
            "\
.#.
.#.
...",
        )
        .unwrap();
        assert_eq!(
            bfs_distance(&g, Position::new(0, 0), Position::new(0, 2)),
            Some(6)
        );
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let g = OccupancyGrid::parse(
            "\
.....
..#..
.#.#.
..#..
.....",
        )
        .unwrap();
        assert_eq!(bfs_distance(&g, Position::new(0, 0), Position::new(2, 2)), None);
        let map = bfs_map(&g, Position::new(0, 0));
        assert_eq!(map[g.index(Position::new(2, 2)).unwrap()], UNREACHABLE);
        assert_eq!(map[g.index(Position::new(4, 4)).unwrap()], 8);
    }

    #[test]
    fn blocked_source_reaches_nothing() {
        let g = OccupancyGrid::parse("#.").unwrap();
        assert!(bfs_map(&g, Position::new(0, 0)).iter().all(|&d| d == UNREACHABLE));
        assert_eq!(bfs_distance(&g, Position::new(0, 0), Position::new(0, 1)), None);
    }
}
