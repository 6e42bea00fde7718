use wayfind_core::{OccupancyGrid, Position};

/// Walkable, in-bounds orthogonal neighbors of `pos` in the order right,
/// down, left, up.
///
/// The iterator is computed fresh on every call and borrows nothing but
/// the grid.
pub fn neighbors(pos: Position, grid: &OccupancyGrid) -> impl Iterator<Item = Position> + '_ {
    pos.neighbors_4()
        .into_iter()
        .filter(move |&n| grid.is_walkable(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pather;

    fn grid() -> OccupancyGrid {
        OccupancyGrid::parse(
            "\
.#.
...
.#.",
        )
        .unwrap()
    }

    #[test]
    fn fixed_order_right_down_left_up() {
        let g = OccupancyGrid::new(3, 3);
        let ns: Vec<_> = neighbors(Position::new(1, 1), &g).collect();
        assert_eq!(
            ns,
            vec![
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(0, 1),
            ]
        );
    }

    #[test]
    fn blocked_cells_are_skipped() {
        let ns: Vec<_> = neighbors(Position::new(1, 1), &grid()).collect();
        assert_eq!(ns, vec![Position::new(1, 2), Position::new(1, 0)]);
    }

    #[test]
    fn out_of_bounds_cells_are_skipped() {
        let ns: Vec<_> = neighbors(Position::new(0, 0), &grid()).collect();
        assert_eq!(ns, vec![Position::new(1, 0)]);
    }

    #[test]
    fn sequence_is_restartable() {
        let g = grid();
        let a: Vec<_> = neighbors(Position::new(1, 0), &g).collect();
        let b: Vec<_> = neighbors(Position::new(1, 0), &g).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn free_function_and_pather_agree() {
        let g = grid();
        let mut buf = Vec::new();
        for p in [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)] {
            buf.clear();
            g.neighbors(p, &mut buf);
            let free: Vec<_> = neighbors(p, &g).collect();
            assert_eq!(free, buf);
        }
    }
}
