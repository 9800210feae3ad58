use jedi_search::SearchStats;

use crate::action::{Action, ActionKind, apply_action};
use crate::state::WorldState;

/// An optimal action sequence that clears the map.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Plan {
    actions: Vec<Action>,
    total_time: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    stats: SearchStats,
}

impl Plan {
    pub(crate) fn new(actions: Vec<Action>, total_time: u32, stats: SearchStats) -> Self {
        Self {
            actions,
            total_time,
            stats,
        }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }

    /// Sum of the actions' time costs.
    pub fn total_time(&self) -> u32 {
        self.total_time
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of actions of the given kind in the plan.
    pub fn count_of(&self, kind: ActionKind) -> usize {
        self.actions.iter().filter(|a| a.kind() == kind).count()
    }

    /// Replays the plan from `initial`, returning every intermediate state
    /// including the initial and final ones.
    pub fn replay(&self, initial: &WorldState) -> Vec<WorldState> {
        let mut states = Vec::with_capacity(self.actions.len() + 1);
        states.push(initial.clone());
        for action in &self.actions {
            let next = apply_action(states.last().unwrap_or(initial), action);
            states.push(next);
        }
        states
    }
}
