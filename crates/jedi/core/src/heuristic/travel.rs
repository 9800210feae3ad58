use crate::geometry::{Waypoints, chebyshev_distance, exact_travel_order};
use crate::state::{DroidSet, Position};

/// Direction sector around the agent.
///
/// The boundaries mix strict and non-strict comparisons so that every cell
/// except the agent's own falls into exactly one quadrant:
///
/// | quadrant    | x            | y            |
/// |-------------|--------------|--------------|
/// | upper-left  | `x <= ax`    | `y < ay`     |
/// | lower-left  | `x < ax`     | `y >= ay`    |
/// | lower-right | `x >= ax`    | `y > ay`     |
/// | upper-right | `x > ax`     | `y <= ay`    |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Quadrant {
    UpperLeft,
    LowerLeft,
    LowerRight,
    UpperRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UpperLeft,
        Quadrant::LowerLeft,
        Quadrant::LowerRight,
        Quadrant::UpperRight,
    ];

    /// Classifies `cell` relative to `agent`. The agent's own cell has no quadrant.
    pub fn of(agent: Position, cell: Position) -> Option<Self> {
        let (x, y) = (cell.x, cell.y);
        let (ax, ay) = (agent.x, agent.y);

        if x <= ax && y < ay {
            Some(Quadrant::UpperLeft)
        } else if x < ax && y >= ay {
            Some(Quadrant::LowerLeft)
        } else if x >= ax && y > ay {
            Some(Quadrant::LowerRight)
        } else if x > ax && y <= ay {
            Some(Quadrant::UpperRight)
        } else {
            None
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Farthest droid cell (by Chebyshev distance from `agent`) in each quadrant.
///
/// Groups on the agent's cell are skipped. On equal distance the later group in
/// iteration order wins. Output is in [`Quadrant::ALL`] order, empty quadrants
/// omitted, so at most four points come back.
pub fn quadrant_representatives(agent: Position, droids: &DroidSet) -> Waypoints {
    let mut farthest: [Option<(u32, Position)>; 4] = [None; 4];

    for group in droids.iter() {
        let Some(quadrant) = Quadrant::of(agent, group.position) else {
            continue;
        };

        let distance = chebyshev_distance(agent, group.position);
        let slot = &mut farthest[quadrant.index()];
        if slot.is_none_or(|(best, _)| distance >= best) {
            *slot = Some((distance, group.position));
        }
    }

    farthest
        .into_iter()
        .flatten()
        .map(|(_, position)| position)
        .collect()
}

/// Minimum seconds of movement needed to reach every quadrant's farthest droid.
///
/// Visiting a subset of the droid cells is never more expensive than visiting
/// all of them, so this never exceeds the true travel time.
pub fn travel_lower_bound(agent: Position, droids: &DroidSet) -> u32 {
    let representatives = quadrant_representatives(agent, droids);
    exact_travel_order(agent, &representatives)
}
