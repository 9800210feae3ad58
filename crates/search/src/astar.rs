//! A* search loop.
//!
//! Nodes live in a single arena indexed by position; the frontier is a binary
//! heap of indices ordered by `f = g + h`. Parent links are arena indices, so
//! reconstructing the path never walks shared pointers.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::{SearchError, SearchProblem, SearchStats, Solution};

/// Tunable knobs for a single search run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Deduplicate states by their best known path cost.
    ///
    /// When disabled the engine performs tree search and may expand the same
    /// state many times.
    pub graph_search: bool,

    /// Maximum number of node expansions before giving up.
    pub max_expansions: Option<usize>,
}

impl SearchOptions {
    pub const fn new() -> Self {
        Self {
            graph_search: true,
            max_expansions: None,
        }
    }

    #[must_use]
    pub const fn with_graph_search(mut self, graph_search: bool) -> Self {
        self.graph_search = graph_search;
        self
    }

    #[must_use]
    pub const fn with_max_expansions(mut self, max_expansions: Option<usize>) -> Self {
        self.max_expansions = max_expansions;
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::new()
    }
}

struct Node<S, A> {
    state: S,
    action: Option<A>,
    parent: Option<usize>,
    g: u32,
}

/// Frontier entry. Ordering is reversed so `BinaryHeap` pops the smallest `f`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Frontier {
    f: u32,
    h: u32,
    seq: u64,
    index: usize,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Runs A* on `problem` and returns the cheapest path to a goal.
///
/// The goal test is applied when a node is popped, not when it is generated,
/// so the returned path is optimal whenever the heuristic is admissible. In
/// graph-search mode a state is re-opened if a strictly cheaper path to it is
/// found later, which keeps the result optimal for admissible but inconsistent
/// heuristics.
///
/// # Errors
///
/// - [`SearchError::NoSolution`] when the reachable state space holds no goal
/// - [`SearchError::ExpansionLimit`] when `options.max_expansions` runs out
pub fn astar<P>(
    problem: &P,
    options: SearchOptions,
) -> Result<Solution<P::State, P::Action>, SearchError>
where
    P: SearchProblem,
{
    let mut nodes: Vec<Node<P::State, P::Action>> = Vec::new();
    let mut frontier = BinaryHeap::new();
    let mut best_g: HashMap<P::State, u32> = HashMap::new();
    let mut stats = SearchStats::default();
    let mut seq = 0u64;

    let initial = problem.initial_state();
    let initial_h = problem.heuristic(&initial);
    debug!(
        initial_h,
        graph_search = options.graph_search,
        max_expansions = ?options.max_expansions,
        "starting A* search"
    );

    if options.graph_search {
        best_g.insert(initial.clone(), 0);
    }
    nodes.push(Node {
        state: initial,
        action: None,
        parent: None,
        g: 0,
    });
    frontier.push(Frontier {
        f: initial_h,
        h: initial_h,
        seq,
        index: 0,
    });
    seq += 1;
    stats.max_frontier = 1;

    while let Some(entry) = frontier.pop() {
        let node = &nodes[entry.index];
        let g = node.g;

        // Superseded by a cheaper path queued after this entry.
        if options.graph_search && best_g.get(&node.state).is_some_and(|&best| best < g) {
            continue;
        }

        if problem.is_goal(&node.state) {
            debug!(
                cost = g,
                expanded = stats.expanded,
                generated = stats.generated,
                "A* search reached goal"
            );
            let path = reconstruct(&nodes, entry.index);
            return Ok(Solution::new(path, g, stats));
        }

        if let Some(limit) = options.max_expansions
            && stats.expanded >= limit
        {
            debug!(limit, "A* search hit expansion limit");
            return Err(SearchError::ExpansionLimit { limit, stats });
        }

        stats.expanded += 1;
        trace!(index = entry.index, f = entry.f, g, h = entry.h, "expanding node");

        let state = node.state.clone();
        for action in problem.actions(&state) {
            let next = problem.result(&state, &action);
            let next_g = g.saturating_add(problem.cost(&state, &action, &next));

            if options.graph_search {
                if best_g.get(&next).is_some_and(|&known| known <= next_g) {
                    continue;
                }
                best_g.insert(next.clone(), next_g);
            }

            let h = problem.heuristic(&next);
            let index = nodes.len();
            nodes.push(Node {
                state: next,
                action: Some(action),
                parent: Some(entry.index),
                g: next_g,
            });
            frontier.push(Frontier {
                f: next_g.saturating_add(h),
                h,
                seq,
                index,
            });
            seq += 1;
            stats.generated += 1;
        }
        stats.max_frontier = stats.max_frontier.max(frontier.len());
    }

    debug!(expanded = stats.expanded, "A* search exhausted the state space");
    Err(SearchError::NoSolution { stats })
}

/// Walks parent links from `goal` back to the root.
fn reconstruct<S, A>(nodes: &[Node<S, A>], goal: usize) -> Vec<(Option<A>, S)>
where
    S: Clone,
    A: Clone,
{
    let mut path = Vec::new();
    let mut cursor = Some(goal);
    while let Some(index) = cursor {
        let node = &nodes[index];
        path.push((node.action.clone(), node.state.clone()));
        cursor = node.parent;
    }
    path.reverse();
    path
}
