//! Successful search results.

/// Counters collected while the engine runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the frontier and expanded.
    pub expanded: usize,
    /// Successor nodes pushed onto the frontier.
    pub generated: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// An optimal path from the initial state to a goal state.
#[derive(Clone, Debug)]
pub struct Solution<S, A> {
    path: Vec<(Option<A>, S)>,
    cost: u32,
    stats: SearchStats,
}

impl<S, A> Solution<S, A> {
    pub(crate) fn new(path: Vec<(Option<A>, S)>, cost: u32, stats: SearchStats) -> Self {
        Self { path, cost, stats }
    }

    /// Returns the path as `(action, state)` pairs.
    ///
    /// The first entry is always `(None, initial_state)`; every following
    /// entry holds the action taken and the state it produced.
    pub fn path(&self) -> &[(Option<A>, S)] {
        &self.path
    }

    /// Consumes the solution, returning the owned path.
    pub fn into_path(self) -> Vec<(Option<A>, S)> {
        self.path
    }

    /// Iterates over the actions on the path, skipping the initial entry.
    pub fn actions(&self) -> impl Iterator<Item = &A> + '_ {
        self.path.iter().filter_map(|(action, _)| action.as_ref())
    }

    /// Returns the goal state reached by the path.
    pub fn goal(&self) -> Option<&S> {
        self.path.last().map(|(_, state)| state)
    }

    /// Total accumulated step cost.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
