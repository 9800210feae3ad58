//! Grid directions, distances, and the exact visiting-order solver.
//!
//! Diagonal steps cost the same time as orthogonal ones, so Chebyshev distance
//! is the exact lower bound on unobstructed travel between two cells.

use arrayvec::ArrayVec;

use crate::state::Position;

/// Maximum number of points [`exact_travel_order`] accepts.
///
/// One representative per quadrant; keeps the permutation search at 24
/// orderings at most.
pub const MAX_WAYPOINTS: usize = 4;

/// Fixed-capacity point set fed to [`exact_travel_order`].
pub type Waypoints = ArrayVec<Position, MAX_WAYPOINTS>;

/// Orthogonal step directions, in generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::South,
        CardinalDirection::East,
        CardinalDirection::West,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, 1),
            CardinalDirection::South => (0, -1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }

    /// The four orthogonal neighbours of `origin`.
    pub fn neighbors(origin: Position) -> [Position; 4] {
        Self::ALL.map(|dir| origin.offset(dir.delta()))
    }
}

/// Diagonal step directions, in generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DiagonalDirection {
    NorthEast,
    SouthEast,
    NorthWest,
    SouthWest,
}

impl DiagonalDirection {
    pub const ALL: [DiagonalDirection; 4] = [
        DiagonalDirection::NorthEast,
        DiagonalDirection::SouthEast,
        DiagonalDirection::NorthWest,
        DiagonalDirection::SouthWest,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            DiagonalDirection::NorthEast => (1, 1),
            DiagonalDirection::SouthEast => (1, -1),
            DiagonalDirection::NorthWest => (-1, 1),
            DiagonalDirection::SouthWest => (-1, -1),
        }
    }
}

/// `max(|ax − bx|, |ay − by|)`.
#[inline]
pub fn chebyshev_distance(a: Position, b: Position) -> u32 {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y))
}

/// Minimum total Chebyshev cost of visiting every point in `points`, starting
/// from `start`, over all visiting orders.
///
/// Exhaustive: every permutation is evaluated (with shared prefixes summed
/// once). Returns 0 when `points` is empty.
pub fn exact_travel_order(start: Position, points: &Waypoints) -> u32 {
    let mut remaining = points.clone();
    shortest_tour(start, &mut remaining)
}

fn shortest_tour(current: Position, remaining: &mut Waypoints) -> u32 {
    if remaining.is_empty() {
        return 0;
    }

    let mut best = u32::MAX;
    for i in 0..remaining.len() {
        let next = remaining.swap_remove(i);
        let leg = chebyshev_distance(current, next);
        let cost = leg.saturating_add(shortest_tour(next, remaining));
        best = best.min(cost);

        // Restore the original slot so the loop index stays meaningful.
        remaining.push(next);
        let last = remaining.len() - 1;
        remaining.swap(i, last);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoints(points: &[(i32, i32)]) -> Waypoints {
        points.iter().map(|&p| Position::from(p)).collect()
    }

    #[test]
    fn chebyshev_takes_larger_axis() {
        assert_eq!(chebyshev_distance(Position::new(0, 0), Position::new(5, 5)), 5);
        assert_eq!(chebyshev_distance(Position::new(-2, 1), Position::new(3, -1)), 5);
        assert_eq!(chebyshev_distance(Position::new(4, 4), Position::new(4, 4)), 0);
    }

    #[test]
    fn empty_tour_costs_nothing() {
        assert_eq!(exact_travel_order(Position::new(3, 3), &Waypoints::new()), 0);
    }

    #[test]
    fn single_point_is_direct_distance() {
        let points = waypoints(&[(7, 2)]);
        assert_eq!(exact_travel_order(Position::ORIGIN, &points), 7);
    }

    #[test]
    fn three_points_match_manual_enumeration() {
        let start = Position::new(0, 0);
        let a = Position::new(4, 0);
        let b = Position::new(-3, 0);
        let c = Position::new(0, 2);
        let orders = [
            [a, b, c],
            [a, c, b],
            [b, a, c],
            [b, c, a],
            [c, a, b],
            [c, b, a],
        ];
        let manual = orders
            .iter()
            .map(|order| {
                let mut at = start;
                order
                    .iter()
                    .map(|&p| {
                        let d = chebyshev_distance(at, p);
                        at = p;
                        d
                    })
                    .sum::<u32>()
            })
            .min()
            .unwrap();

        let points = waypoints(&[(4, 0), (-3, 0), (0, 2)]);
        assert_eq!(exact_travel_order(start, &points), manual);
        // start -> b -> c -> a: 3 + 3 + 4
        assert_eq!(manual, 10);
    }

    #[test]
    fn four_quadrant_corners() {
        let points = waypoints(&[(-2, -2), (-2, 2), (2, 2), (2, -2)]);
        // 2 to the first corner, then three sides of length 4.
        assert_eq!(exact_travel_order(Position::ORIGIN, &points), 14);
    }

    #[test]
    fn input_order_is_left_untouched() {
        let points = waypoints(&[(1, 0), (5, 5), (-1, -4)]);
        let before = points.clone();
        let _ = exact_travel_order(Position::ORIGIN, &points);
        assert_eq!(points, before);
    }

    #[test]
    fn neighbors_follow_cardinal_order() {
        let around = CardinalDirection::neighbors(Position::new(1, 1));
        assert_eq!(
            around,
            [
                Position::new(1, 2),
                Position::new(1, 0),
                Position::new(2, 1),
                Position::new(0, 1),
            ]
        );
    }
}
