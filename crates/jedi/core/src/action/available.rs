//! Generate the legal actions for a state.
//!
//! Nothing downstream re-checks these rules: [`apply_action`](super::apply_action)
//! assumes every action it receives came from here.

use crate::action::{Action, ActionKind};
use crate::geometry::{CardinalDirection, DiagonalDirection};
use crate::state::{Walls, WorldState};

/// Get all actions the agent can perform right now.
///
/// Emission order is fixed so searches are reproducible:
/// 1. one Move per orthogonal direction not blocked by a wall
/// 2. Rest, when neither the agent's cell nor its orthogonal neighbours hold droids
/// 3. one Jump per diagonal direction not blocked by a wall (needs concentration)
/// 4. Slash, then Force, when droids share the agent's cell and it can pay
pub fn available_actions(state: &WorldState, walls: &Walls) -> Vec<Action> {
    let origin = state.agent.position;
    let concentration = state.agent.concentration;
    let mut actions = Vec::with_capacity(11);

    for dir in CardinalDirection::ALL {
        let to = origin.offset(dir.delta());
        if !walls.contains(to) {
            actions.push(Action::Move(to));
        }
    }

    if can_rest(state) {
        actions.push(Action::Rest);
    }

    if ActionKind::Jump.affordable_with(concentration) {
        for dir in DiagonalDirection::ALL {
            let to = origin.offset(dir.delta());
            if !walls.contains(to) {
                actions.push(Action::Jump(to));
            }
        }
    }

    if state.droids.contains(origin) {
        if ActionKind::Slash.affordable_with(concentration) {
            actions.push(Action::Slash);
        }
        if ActionKind::Force.affordable_with(concentration) {
            actions.push(Action::Force);
        }
    }

    actions
}

/// Rest needs the agent's cell and all four orthogonal neighbours free of droids.
/// Walls are irrelevant here.
fn can_rest(state: &WorldState) -> bool {
    let origin = state.agent.position;
    !state.droids.contains(origin)
        && CardinalDirection::neighbors(origin)
            .into_iter()
            .all(|cell| !state.droids.contains(cell))
}
