//! Pure state transition.

use crate::action::Action;
use crate::state::WorldState;

/// Applies `action` to `state`, returning the successor.
///
/// The input is left untouched; the returned state owns its own droid set.
/// Preconditions are not re-checked: callers must only pass actions produced by
/// [`available_actions`](super::available_actions) for the same state.
pub fn apply_action(state: &WorldState, action: &Action) -> WorldState {
    let mut next = state.clone();
    next.agent.concentration -= action.cost().concentration;

    if let Some(to) = action.destination() {
        next.agent.position = to;
    }

    let here = next.agent.position;
    match action {
        Action::Slash => {
            next.droids.strike_one(here);
        }
        Action::Force => {
            next.droids.clear_cell(here);
        }
        Action::Move(_) | Action::Jump(_) | Action::Rest => {}
    }

    next
}
