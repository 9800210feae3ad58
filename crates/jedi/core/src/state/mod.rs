//! Planning state representation.
//!
//! This module owns the value types the search engine stores per node. A
//! [`WorldState`] is never mutated once handed to the engine; every transition
//! builds a fresh value, so states may be retained freely for deduplication
//! and path reconstruction.
mod droids;
mod initial;
mod position;
mod walls;

pub use droids::{DroidGroup, DroidSet};
pub use initial::InitialCondition;
pub use position::Position;
pub use walls::Walls;

/// The controllable agent: where it stands and how much concentration it holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub position: Position,

    /// Resource spent by Jump, Slash, and Force and restored by Rest.
    ///
    /// No upper cap is enforced. The legality generator only offers affordable
    /// actions, so this never drops below zero along a generated path.
    pub concentration: i32,
}

impl AgentState {
    pub fn new(position: Position, concentration: i32) -> Self {
        Self {
            position,
            concentration,
        }
    }
}

/// Canonical snapshot of one search node.
///
/// Equality and hashing ignore the order droid groups were inserted in, since
/// [`DroidSet`] keeps them sorted by position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    pub agent: AgentState,
    pub droids: DroidSet,
}

impl WorldState {
    pub fn new(agent: AgentState, droids: DroidSet) -> Self {
        Self { agent, droids }
    }

    /// Returns `true` once every droid group has been eliminated.
    pub fn is_goal(&self) -> bool {
        self.droids.is_empty()
    }

    /// Droid count on the agent's own cell, if any.
    pub fn droids_under_agent(&self) -> Option<u32> {
        self.droids.count_at(self.agent.position)
    }
}
