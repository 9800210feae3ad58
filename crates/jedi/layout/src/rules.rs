//! Placement constraints.

use jedi_core::{CardinalDirection, Position};

/// Most walls allowed among the agent's four orthogonal neighbours.
pub const MAX_WALLS_AROUND_AGENT: usize = 3;

/// Most droids two orthogonally adjacent groups may hold together.
pub const MAX_ADJACENT_DROIDS: u32 = 6;

pub(crate) fn orthogonally_adjacent(a: Position, b: Position) -> bool {
    CardinalDirection::neighbors(a).contains(&b)
}

/// Walls among the agent's orthogonal neighbours.
pub(crate) fn walls_around<'a, I>(agent: Position, walls: I) -> usize
where
    I: IntoIterator<Item = &'a Position>,
{
    walls
        .into_iter()
        .filter(|wall| orthogonally_adjacent(agent, **wall))
        .count()
}

/// Whether two groups may sit where they are.
pub(crate) fn groups_compatible(a: (Position, u32), b: (Position, u32)) -> bool {
    !orthogonally_adjacent(a.0, b.0) || a.1 + b.1 <= MAX_ADJACENT_DROIDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_neighbours_are_not_adjacent() {
        let origin = Position::new(3, 3);
        assert!(orthogonally_adjacent(origin, Position::new(3, 4)));
        assert!(!orthogonally_adjacent(origin, Position::new(4, 4)));
        assert!(!orthogonally_adjacent(origin, origin));
    }

    #[test]
    fn adjacency_cap_is_inclusive() {
        let a = Position::new(1, 1);
        let b = Position::new(2, 1);
        assert!(groups_compatible((a, 3), (b, 3)));
        assert!(!groups_compatible((a, 4), (b, 3)));
        assert!(groups_compatible((a, 7), (Position::new(3, 1), 7)));
    }
}
