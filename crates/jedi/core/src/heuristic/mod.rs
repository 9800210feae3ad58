//! Admissible lower bound on the remaining plan time.
//!
//! Two bounds over disjoint kinds of work are summed:
//! - [`attack_lower_bound`]: seconds spent on Slash/Force
//! - [`travel_lower_bound`]: seconds spent on Move/Jump
//!
//! Rest time is never counted. Both parts are recomputed from scratch for every
//! state; nothing is cached between calls.

mod attack;
mod travel;

pub use attack::attack_lower_bound;
pub use travel::{Quadrant, quadrant_representatives, travel_lower_bound};

use crate::state::WorldState;

/// The two components of the heuristic, kept apart for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeuristicBreakdown {
    pub attack: u32,
    pub travel: u32,
}

impl HeuristicBreakdown {
    pub const fn total(&self) -> u32 {
        self.attack + self.travel
    }
}

/// Computes both bounds for `state`.
pub fn estimate(state: &WorldState) -> HeuristicBreakdown {
    HeuristicBreakdown {
        attack: attack_lower_bound(&state.droids, state.agent.concentration),
        travel: travel_lower_bound(state.agent.position, &state.droids),
    }
}
