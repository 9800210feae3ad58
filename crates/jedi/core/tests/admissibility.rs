//! Cross-checks the heuristic against uniform-cost search on small rooms.

use std::collections::{HashSet, VecDeque};

use jedi_core::{
    Action, AgentState, DroidGroup, DroidSet, JediProblem, Position, SolverConfig, Walls,
    WorldState, apply_action, available_actions, estimate,
};
use jedi_search::{SearchOptions, SearchProblem, astar};

/// Same rules as [`JediProblem`] with the heuristic switched off.
struct Blind<'a>(&'a JediProblem);

impl SearchProblem for Blind<'_> {
    type State = WorldState;
    type Action = Action;

    fn initial_state(&self) -> WorldState {
        self.0.initial_state()
    }

    fn is_goal(&self, state: &WorldState) -> bool {
        self.0.is_goal(state)
    }

    fn actions(&self, state: &WorldState) -> Vec<Action> {
        self.0.actions(state)
    }

    fn result(&self, state: &WorldState, action: &Action) -> WorldState {
        self.0.result(state, action)
    }

    fn cost(&self, state: &WorldState, action: &Action, next: &WorldState) -> u32 {
        self.0.cost(state, action, next)
    }
}

/// Walls around the rectangle `(1, 1)..=(width, height)`.
fn room(width: i32, height: i32) -> Walls {
    let mut cells = Vec::new();
    for x in 0..=width + 1 {
        cells.push(Position::new(x, 0));
        cells.push(Position::new(x, height + 1));
    }
    for y in 1..=height {
        cells.push(Position::new(0, y));
        cells.push(Position::new(width + 1, y));
    }
    Walls::new(cells)
}

fn world(agent: (i32, i32), concentration: i32, droids: &[((i32, i32), u32)]) -> WorldState {
    WorldState::new(
        AgentState::new(agent.into(), concentration),
        droids
            .iter()
            .map(|&(p, count)| DroidGroup::new(p.into(), count))
            .collect::<DroidSet>(),
    )
}

fn fixtures() -> Vec<(WorldState, Walls)> {
    vec![
        (world((1, 1), 0, &[((3, 3), 1)]), room(3, 3)),
        (world((2, 2), 6, &[((1, 1), 2), ((3, 1), 1)]), room(3, 3)),
        (world((1, 2), 5, &[((4, 1), 3), ((1, 3), 1)]), room(4, 3)),
        (world((2, 1), 1, &[((2, 1), 2), ((4, 3), 1)]), room(4, 3)),
    ]
}

/// Distinct states within `depth` actions of `start`.
fn neighborhood(start: &WorldState, walls: &Walls, depth: usize) -> Vec<WorldState> {
    let mut seen = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([(start.clone(), 0)]);
    let mut out = Vec::new();

    while let Some((state, d)) = queue.pop_front() {
        out.push(state.clone());
        if d == depth {
            continue;
        }
        for action in available_actions(&state, walls) {
            let next = apply_action(&state, &action);
            if seen.insert(next.clone()) {
                queue.push_back((next, d + 1));
            }
        }
    }
    out
}

fn true_cost(state: &WorldState, walls: &Walls) -> u32 {
    let problem = JediProblem::new(state.clone(), walls.clone());
    astar(&Blind(&problem), SearchOptions::new())
        .expect("every fixture is solvable from every reachable state")
        .cost()
}

#[test]
fn heuristic_never_overestimates_nearby_states() {
    for (start, walls) in fixtures() {
        for state in neighborhood(&start, &walls, 2) {
            let h = estimate(&state).total();
            let actual = true_cost(&state, &walls);
            assert!(h <= actual, "h = {h} exceeds true cost {actual} at {state:?}");
        }
    }
}

#[test]
fn informed_search_matches_uniform_cost() {
    for (start, walls) in fixtures() {
        let problem = JediProblem::new(start.clone(), walls.clone());
        let plan = problem.solve(&SolverConfig::default()).unwrap();

        assert_eq!(plan.total_time(), true_cost(&start, &walls));
    }
}

#[test]
fn generated_actions_never_overdraw_concentration() {
    for (start, walls) in fixtures() {
        for state in neighborhood(&start, &walls, 3) {
            for action in available_actions(&state, &walls) {
                let next = apply_action(&state, &action);
                assert!(
                    next.agent.concentration >= 0,
                    "{action} from {:?} overdraws",
                    state.agent
                );
                assert!(!walls.contains(next.agent.position));
            }
        }
    }
}

#[test]
fn goal_states_score_zero_and_stay_goals() {
    let walls = room(3, 3);
    let goal = world((2, 2), 4, &[]);

    assert!(goal.is_goal());
    assert_eq!(estimate(&goal).total(), 0);
    for action in available_actions(&goal, &walls) {
        assert!(apply_action(&goal, &action).is_goal());
    }
}
