use wayfind_core::Position;

/// Manhattan (L1) distance between two positions.
///
/// Admissible and consistent for orthogonal unit-cost moves.
#[inline]
pub fn manhattan(a: Position, b: Position) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Position::new(0, 0);
        let b = Position::new(4, 4);
        assert_eq!(manhattan(a, b), 8);
        assert_eq!(manhattan(b, a), 8);
        assert_eq!(manhattan(a, a), 0);
        assert_eq!(manhattan(Position::new(-2, 3), Position::new(1, -1)), 7);
    }
}
