use super::{AgentState, DroidGroup, DroidSet, Position, Walls, WorldState};

/// Blueprint describing a map at the start of a game.
///
/// Produced by the layout generator or a scenario file and consumed by
/// [`JediProblem`](crate::JediProblem). Placement rules (no overlaps, the
/// adjacency cap, wall limits around the agent) are the producer's
/// responsibility; nothing here re-checks them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitialCondition {
    pub agent: Position,
    pub concentration: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub walls: Vec<Position>,
    pub droids: Vec<DroidGroup>,
}

impl InitialCondition {
    pub fn new(
        agent: Position,
        concentration: i32,
        walls: Vec<Position>,
        droids: Vec<DroidGroup>,
    ) -> Self {
        Self {
            agent,
            concentration,
            walls,
            droids,
        }
    }

    pub fn world_state(&self) -> WorldState {
        WorldState::new(
            AgentState::new(self.agent, self.concentration),
            DroidSet::from_groups(self.droids.iter().copied()),
        )
    }

    pub fn walls(&self) -> Walls {
        Walls::new(self.walls.iter().copied())
    }
}
