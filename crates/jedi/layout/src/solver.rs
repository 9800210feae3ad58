//! Chronological backtracking over cell assignments.
//!
//! Variables are assigned in a fixed order: the agent first, then every wall,
//! then every droid group. Each placement is checked against the pieces already
//! placed, so a constraint is tested as soon as all of its variables are bound.

use jedi_core::{DroidGroup, InitialCondition, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, trace, warn};

use crate::error::LayoutError;
use crate::request::LayoutRequest;
use crate::rules::{MAX_WALLS_AROUND_AGENT, groups_compatible, walls_around};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Piece {
    Agent,
    Wall,
    Droid(u32),
}

struct Backtracker<'a> {
    pieces: &'a [Piece],
    domains: Vec<Vec<Position>>,
    placed: Vec<Position>,
    steps: u64,
}

impl<'a> Backtracker<'a> {
    fn new(pieces: &'a [Piece], domains: Vec<Vec<Position>>) -> Self {
        Self {
            pieces,
            domains,
            placed: Vec::with_capacity(pieces.len()),
            steps: 0,
        }
    }

    fn solve(&mut self) -> bool {
        let index = self.placed.len();
        if index == self.pieces.len() {
            return true;
        }

        for candidate_index in 0..self.domains[index].len() {
            let candidate = self.domains[index][candidate_index];
            self.steps += 1;
            if !self.consistent(index, candidate) {
                continue;
            }

            self.placed.push(candidate);
            if self.solve() {
                return true;
            }
            self.placed.pop();
        }

        trace!(variable = index, steps = self.steps, "backtrack");
        false
    }

    /// Checks `candidate` for piece `index` against every earlier placement.
    fn consistent(&self, index: usize, candidate: Position) -> bool {
        if self.placed.contains(&candidate) {
            return false;
        }

        match self.pieces[index] {
            Piece::Agent => true,
            Piece::Wall => {
                let agent = self.placed[0];
                let walls = self.placed[1..]
                    .iter()
                    .chain(std::iter::once(&candidate))
                    .zip(&self.pieces[1..])
                    .filter(|(_, piece)| **piece == Piece::Wall)
                    .map(|(position, _)| position);
                walls_around(agent, walls) <= MAX_WALLS_AROUND_AGENT
            }
            Piece::Droid(count) => self
                .placed
                .iter()
                .zip(self.pieces)
                .all(|(&position, piece)| match piece {
                    Piece::Droid(other) => groups_compatible((candidate, count), (position, *other)),
                    _ => true,
                }),
        }
    }

    fn into_placements(self) -> Vec<Position> {
        self.placed
    }
}

/// Places the agent, walls, and droid groups described by `request`.
///
/// Candidate cells are tried in grid order, or in a seeded shuffle of it when
/// `request.seed` is set. The same request always yields the same layout.
///
/// # Errors
///
/// [`LayoutError::InvalidRequest`] for malformed requests and
/// [`LayoutError::Unsatisfiable`] when no placement meets every constraint.
pub fn generate_layout(request: &LayoutRequest) -> Result<InitialCondition, LayoutError> {
    request.check()?;

    let pieces: Vec<Piece> = std::iter::once(Piece::Agent)
        .chain(std::iter::repeat_n(Piece::Wall, request.walls))
        .chain(request.droids.iter().map(|&count| Piece::Droid(count)))
        .collect();

    let all_cells: Vec<Position> = request.size.cells().collect();
    let interior: Vec<Position> = request.size.interior().collect();
    let mut rng = request.seed.map(StdRng::seed_from_u64);

    let domains = pieces
        .iter()
        .map(|piece| {
            let mut domain = match piece {
                Piece::Agent => interior.clone(),
                _ => all_cells.clone(),
            };
            if let Some(rng) = rng.as_mut() {
                domain.shuffle(rng);
            }
            domain
        })
        .collect();

    debug!(
        width = request.size.width,
        height = request.size.height,
        walls = request.walls,
        groups = request.droids.len(),
        seed = ?request.seed,
        "generating layout"
    );

    let mut backtracker = Backtracker::new(&pieces, domains);
    if !backtracker.solve() {
        warn!(steps = backtracker.steps, "layout request is unsatisfiable");
        return Err(LayoutError::Unsatisfiable {
            width: request.size.width,
            height: request.size.height,
            walls: request.walls,
            groups: request.droids.len(),
        });
    }
    debug!(steps = backtracker.steps, "layout found");

    let placements = backtracker.into_placements();
    let mut walls = Vec::with_capacity(request.walls);
    let mut droids = Vec::with_capacity(request.droids.len());
    for (&position, piece) in placements.iter().zip(&pieces).skip(1) {
        match piece {
            Piece::Wall => walls.push(position),
            Piece::Droid(count) => droids.push(DroidGroup::new(position, *count)),
            Piece::Agent => {}
        }
    }

    Ok(InitialCondition::new(
        placements[0],
        request.concentration,
        walls,
        droids,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::GridSize;

    #[test]
    fn unseeded_generation_takes_first_cells() {
        let request = LayoutRequest::new(GridSize::new(3, 3), 1, vec![2]);
        let layout = generate_layout(&request).unwrap();

        assert_eq!(layout.agent, Position::new(1, 1));
        assert_eq!(layout.walls, vec![Position::new(0, 0)]);
        assert_eq!(layout.droids, vec![DroidGroup::new(Position::new(0, 1), 2)]);
        assert_eq!(layout.concentration, LayoutRequest::DEFAULT_CONCENTRATION);
    }

    #[test]
    fn fourth_wall_next_to_agent_is_skipped() {
        // The agent takes (1, 1); walls fill grid order but may not close the
        // last open side.
        let request = LayoutRequest::new(GridSize::new(3, 3), 6, vec![]);
        let layout = generate_layout(&request).unwrap();

        let around = walls_around(layout.agent, &layout.walls);
        assert_eq!(around, MAX_WALLS_AROUND_AGENT);
        assert_eq!(layout.walls.len(), 6);
    }

    #[test]
    fn heavy_neighbours_are_pushed_apart() {
        let request = LayoutRequest::new(GridSize::new(3, 3), 0, vec![4, 4]);
        let layout = generate_layout(&request).unwrap();

        let [a, b] = [layout.droids[0], layout.droids[1]];
        assert!(groups_compatible((a.position, a.count), (b.position, b.count)));
        assert_eq!(a.position, Position::new(0, 0));
        assert_eq!(b.position, Position::new(0, 2));
    }

    #[test]
    fn same_seed_same_layout() {
        let request = LayoutRequest::new(GridSize::new(6, 5), 4, vec![3, 2, 1]).with_seed(Some(7));
        assert_eq!(
            generate_layout(&request).unwrap(),
            generate_layout(&request).unwrap()
        );
    }

    #[test]
    fn seven_stack_among_eight_groups_is_unsatisfiable() {
        let request = LayoutRequest::new(GridSize::new(3, 3), 0, vec![7, 1, 1, 1, 1, 1, 1, 1]);
        let err = generate_layout(&request).unwrap_err();

        assert_eq!(err.error_code(), "unsatisfiable");
    }
}
