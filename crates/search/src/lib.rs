//! Generic optimal search over problem descriptions.
//!
//! This crate provides a small, deterministic A* engine. Callers describe a
//! problem through the [`SearchProblem`] trait (initial state, successor
//! generator, goal test, step cost, heuristic) and receive either an optimal
//! path or an explicit [`SearchError`].
//!
//! - **Deterministic**: ties on `f` are broken by lower `h`, then by insertion
//!   order, so repeated runs return the same path.
//! - **Graph or tree search**: [`SearchOptions::graph_search`] toggles state
//!   deduplication.
//! - **Bounded**: an optional expansion limit turns runaway searches into a
//!   distinct error instead of an unbounded loop.
//!
//! # Architecture
//!
//! - [`SearchProblem`]: problem contract implemented by callers
//! - [`astar`]: the search loop
//! - [`Solution`]: path of `(action, state)` pairs plus cost and statistics

pub mod astar;
pub mod error;
pub mod problem;
pub mod solution;

pub use astar::{SearchOptions, astar};
pub use error::SearchError;
pub use problem::SearchProblem;
pub use solution::{SearchStats, Solution};
