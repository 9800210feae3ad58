//! Problem contract consumed by the search engine.
//!
//! This module defines the [`SearchProblem`] trait. The engine never inspects
//! states or actions directly; everything it knows about the domain flows
//! through these hooks.

use std::hash::Hash;

/// A search problem the engine can solve.
///
/// Costs are non-negative integers. For [`astar`](crate::astar) to return an
/// optimal path, [`heuristic`](SearchProblem::heuristic) must never exceed the
/// true remaining cost from the given state.
pub trait SearchProblem {
    /// Node payload. Must be hashable so graph search can deduplicate states.
    type State: Clone + Eq + Hash;

    /// Edge label returned alongside each state on the solution path.
    type Action: Clone;

    /// Returns the state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Returns `true` if `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Enumerates the actions applicable in `state`.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Applies `action` to `state`, returning the successor.
    ///
    /// The engine only passes actions produced by [`actions`](Self::actions)
    /// for the same state.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Returns the cost of the edge `state --action--> next`.
    fn cost(&self, state: &Self::State, action: &Self::Action, next: &Self::State) -> u32;

    /// Estimates the remaining cost from `state` to the nearest goal.
    fn heuristic(&self, _state: &Self::State) -> u32 {
        0
    }
}
