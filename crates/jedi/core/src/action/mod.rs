//! Action catalog, legality, and transitions.
//!
//! # Module Structure
//!
//! - `kind`: [`ActionKind`] and the fixed [`ActionCost`] table
//! - `available`: the legality generator, the single source of truth for which
//!   actions may be applied to a state
//! - `transition`: the pure state transition; it trusts the generator and
//!   performs no re-validation

mod available;
mod kind;
mod transition;

pub use available::available_actions;
pub use kind::{ActionCost, ActionKind};
pub use transition::apply_action;

use std::fmt;

use crate::state::Position;

/// A concrete action. Only movement variants carry a destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    /// Step to an orthogonally adjacent cell.
    Move(Position),
    /// Leap to a diagonally adjacent cell.
    Jump(Position),
    /// Kill one droid on the agent's cell.
    Slash,
    /// Kill every droid on the agent's cell.
    Force,
    /// Recover concentration away from droids.
    Rest,
}

impl Action {
    pub const fn kind(&self) -> ActionKind {
        match self {
            Action::Move(_) => ActionKind::Move,
            Action::Jump(_) => ActionKind::Jump,
            Action::Slash => ActionKind::Slash,
            Action::Force => ActionKind::Force,
            Action::Rest => ActionKind::Rest,
        }
    }

    pub const fn cost(&self) -> ActionCost {
        self.kind().cost()
    }

    /// Seconds this action takes.
    pub const fn time(&self) -> u32 {
        self.cost().time
    }

    pub const fn destination(&self) -> Option<Position> {
        match self {
            Action::Move(to) | Action::Jump(to) => Some(*to),
            Action::Slash | Action::Force | Action::Rest => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.destination() {
            Some(to) => write!(f, "{} {}", self.kind(), to),
            None => write!(f, "{}", self.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_kind_and_destination() {
        assert_eq!(Action::Move(Position::new(2, -1)).to_string(), "move (2, -1)");
        assert_eq!(Action::Jump(Position::new(0, 3)).to_string(), "jump (0, 3)");
        assert_eq!(Action::Force.to_string(), "force");
    }

    #[test]
    fn only_movement_has_destination() {
        assert_eq!(
            Action::Jump(Position::new(1, 1)).destination(),
            Some(Position::new(1, 1))
        );
        assert_eq!(Action::Slash.destination(), None);
        assert_eq!(Action::Rest.destination(), None);
    }
}
