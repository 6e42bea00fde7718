use wayfind_core::{OccupancyGrid, Position};

use crate::node::{NodeArena, NodeId};

/// Follow predecessor links from `goal` back to the start node and return
/// the positions in start-to-goal order.
pub fn build_path(arena: &NodeArena, goal: NodeId) -> Vec<Position> {
    let mut path: Vec<Position> = arena.ancestors(goal).map(|n| n.position).collect();
    path.reverse();
    path
}

/// Whether `path` is a walkable, orthogonally connected route from `start`
/// to `goal` on `grid`.
pub fn is_valid_path(
    grid: &OccupancyGrid,
    path: &[Position],
    start: Position,
    goal: Position,
) -> bool {
    path.first() == Some(&start)
        && path.last() == Some(&goal)
        && path.iter().all(|&p| grid.is_walkable(p))
        && path.windows(2).all(|w| w[0].is_adjacent(w[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::SearchNode;

    #[test]
    fn build_path_reverses_back_links() {
        let mut arena = NodeArena::new();
        let mut prev = None;
        for col in 0..4 {
            prev = Some(arena.alloc(SearchNode {
                position: Position::new(0, col),
                cost_from_start: col as u32,
                heuristic_estimate: 3 - col as u32,
                predecessor: prev,
            }));
        }
        let path = build_path(&arena, prev.unwrap());
        assert_eq!(
            path,
            (0..4).map(|c| Position::new(0, c)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn single_node_path() {
        let mut arena = NodeArena::new();
        let id = arena.alloc(SearchNode {
            position: Position::new(2, 2),
            cost_from_start: 0,
            heuristic_estimate: 0,
            predecessor: None,
        });
        assert_eq!(build_path(&arena, id), vec![Position::new(2, 2)]);
    }

    #[test]
    fn validity_checks() {
        let g = OccupancyGrid::parse("..\n#.").unwrap();
        let s = Position::new(0, 0);
        let t = Position::new(1, 1);
        let good = [s, Position::new(0, 1), t];
        assert!(is_valid_path(&g, &good, s, t));
        // Diagonal jump.
        assert!(!is_valid_path(&g, &[s, t], s, t));
        // Through a wall.
        let walled = [s, Position::new(1, 0), t];
        assert!(!is_valid_path(&g, &walled, s, t));
        // Wrong endpoints.
        assert!(!is_valid_path(&g, &good, t, s));
        assert!(!is_valid_path(&g, &[], s, t));
    }
}
