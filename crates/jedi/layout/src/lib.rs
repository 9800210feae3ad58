//! Map layout generation and validation.
//!
//! Placing the agent, walls, and droid groups on a bounded grid is modelled as
//! a constraint-satisfaction problem and solved by chronological backtracking.
//! The produced [`InitialCondition`](jedi_core::InitialCondition) is ready to
//! hand to the planner.
//!
//! # Module Structure
//!
//! - `request`: what to place and on how large a grid
//! - `solver`: the backtracking search over cell assignments
//! - `rules`: the placement constraints shared by the solver and the validator
//! - `validate`: checks an existing layout against the same constraints
//! - `render`: plain-text grid rendering for terminals and logs
mod error;
mod render;
mod request;
mod rules;
mod solver;
mod validate;

pub use error::{LayoutError, LayoutViolation};
pub use render::render_grid;
pub use request::{GridSize, LayoutRequest};
pub use rules::{MAX_ADJACENT_DROIDS, MAX_WALLS_AROUND_AGENT};
pub use solver::generate_layout;
pub use validate::validate_layout;
