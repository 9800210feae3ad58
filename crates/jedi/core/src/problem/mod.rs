//! Search-engine adapter.
//!
//! [`JediProblem`] binds a starting [`WorldState`] to its wall layout and
//! implements [`SearchProblem`], handing the engine the goal test, legality
//! generator, transition, step cost, and heuristic defined in this crate.

mod error;
mod plan;

pub use error::PlanError;
pub use plan::Plan;

use jedi_search::{SearchProblem, astar};
use tracing::{debug, trace};

use crate::action::{Action, apply_action, available_actions};
use crate::config::SolverConfig;
use crate::heuristic;
use crate::state::{InitialCondition, Walls, WorldState};

/// A single planning run: where the agent starts and which cells are blocked.
///
/// Walls are fixed at construction and only read afterwards.
#[derive(Clone, Debug)]
pub struct JediProblem {
    initial: WorldState,
    walls: Walls,
}

impl JediProblem {
    pub fn new(initial: WorldState, walls: Walls) -> Self {
        Self { initial, walls }
    }

    pub fn from_initial_condition(condition: &InitialCondition) -> Self {
        Self::new(condition.world_state(), condition.walls())
    }

    pub fn initial(&self) -> &WorldState {
        &self.initial
    }

    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    /// Runs the search and returns the ordered action list.
    ///
    /// The engine's path starts with an action-less entry for the initial
    /// state; it is dropped here. A start that is already a goal yields an
    /// empty plan, which is a success.
    ///
    /// # Errors
    ///
    /// [`PlanError`] when no plan exists or the expansion limit runs out.
    pub fn solve(&self, config: &SolverConfig) -> Result<Plan, PlanError> {
        debug!(
            agent = %self.initial.agent.position,
            concentration = self.initial.agent.concentration,
            groups = self.initial.droids.len(),
            walls = self.walls.len(),
            "planning"
        );

        let solution = astar(self, config.search_options()).inspect_err(|error| {
            debug!(code = error.error_code(), "planning failed: {error}");
        })?;

        let total_time = solution.cost();
        let stats = solution.stats();
        let actions: Vec<Action> = solution
            .into_path()
            .into_iter()
            .filter_map(|(action, _)| action)
            .collect();

        debug!(
            steps = actions.len(),
            total_time,
            expanded = stats.expanded,
            generated = stats.generated,
            "plan found"
        );
        Ok(Plan::new(actions, total_time, stats))
    }
}

impl SearchProblem for JediProblem {
    type State = WorldState;
    type Action = Action;

    fn initial_state(&self) -> WorldState {
        self.initial.clone()
    }

    fn is_goal(&self, state: &WorldState) -> bool {
        state.is_goal()
    }

    fn actions(&self, state: &WorldState) -> Vec<Action> {
        available_actions(state, &self.walls)
    }

    fn result(&self, state: &WorldState, action: &Action) -> WorldState {
        apply_action(state, action)
    }

    fn cost(&self, _state: &WorldState, action: &Action, _next: &WorldState) -> u32 {
        action.time()
    }

    fn heuristic(&self, state: &WorldState) -> u32 {
        let breakdown = heuristic::estimate(state);
        trace!(
            attack = breakdown.attack,
            travel = breakdown.travel,
            "heuristic"
        );
        breakdown.total()
    }
}

/// Plans a full game from an initial condition.
///
/// # Errors
///
/// See [`JediProblem::solve`].
pub fn play_game(condition: &InitialCondition, config: &SolverConfig) -> Result<Plan, PlanError> {
    JediProblem::from_initial_condition(condition).solve(config)
}
