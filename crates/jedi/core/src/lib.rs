//! Planning rules for the Jedi-versus-droids grid puzzle.
//!
//! `jedi-core` defines the problem handed to the search engine: world state,
//! the action catalog and its cost table, the legality generator, the pure
//! transition function, and the admissible heuristic. The search itself lives
//! in `jedi-search`; this crate only supplies a correct problem instance and
//! turns the engine's result into a [`Plan`].
pub mod action;
pub mod config;
pub mod geometry;
pub mod heuristic;
pub mod problem;
pub mod state;

pub use action::{Action, ActionCost, ActionKind, apply_action, available_actions};
pub use config::SolverConfig;
pub use geometry::{
    CardinalDirection, DiagonalDirection, MAX_WAYPOINTS, Waypoints, chebyshev_distance,
    exact_travel_order,
};
pub use heuristic::{
    HeuristicBreakdown, Quadrant, attack_lower_bound, estimate, quadrant_representatives,
    travel_lower_bound,
};
pub use problem::{JediProblem, Plan, PlanError, play_game};
pub use state::{AgentState, DroidGroup, DroidSet, InitialCondition, Position, Walls, WorldState};
