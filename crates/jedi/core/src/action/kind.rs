//! Action kind enumeration and the fixed cost table.

/// Fixed price of an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionCost {
    /// Seconds spent; the quantity the search minimises.
    pub time: u32,

    /// Concentration consumed. Negative values restore concentration.
    pub concentration: i32,
}

impl ActionCost {
    pub const fn new(time: u32, concentration: i32) -> Self {
        Self {
            time,
            concentration,
        }
    }
}

/// Types of actions the agent can perform.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    Move,
    Jump,
    Slash,
    Force,
    Rest,
}

impl ActionKind {
    /// | kind  | time | concentration |
    /// |-------|------|---------------|
    /// | move  | 1    | 0             |
    /// | jump  | 1    | 1             |
    /// | slash | 1    | 1             |
    /// | force | 2    | 5             |
    /// | rest  | 3    | -10           |
    pub const fn cost(self) -> ActionCost {
        match self {
            ActionKind::Move => ActionCost::new(1, 0),
            ActionKind::Jump => ActionCost::new(1, 1),
            ActionKind::Slash => ActionCost::new(1, 1),
            ActionKind::Force => ActionCost::new(2, 5),
            ActionKind::Rest => ActionCost::new(3, -10),
        }
    }

    /// Returns `true` if an agent holding `concentration` can pay for this kind.
    pub const fn affordable_with(self, concentration: i32) -> bool {
        concentration >= self.cost().concentration
    }

    /// Returns `true` for kinds that eliminate droids.
    pub const fn is_attack(self) -> bool {
        matches!(self, ActionKind::Slash | ActionKind::Force)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn parses_snake_case_names() {
        assert_eq!(ActionKind::from_str("force"), Ok(ActionKind::Force));
        assert_eq!(ActionKind::from_str("REST"), Ok(ActionKind::Rest));
        assert_eq!(ActionKind::Jump.as_ref(), "jump");
        assert!(ActionKind::from_str("teleport").is_err());
    }

    #[test]
    fn affordability_thresholds() {
        assert!(ActionKind::Move.affordable_with(0));
        assert!(ActionKind::Rest.affordable_with(0));
        assert!(!ActionKind::Jump.affordable_with(0));
        assert!(ActionKind::Slash.affordable_with(1));
        assert!(!ActionKind::Force.affordable_with(4));
        assert!(ActionKind::Force.affordable_with(5));
    }

    #[test]
    fn every_kind_takes_time() {
        assert!(ActionKind::iter().all(|kind| kind.cost().time > 0));
        assert_eq!(ActionKind::iter().filter(|k| k.is_attack()).count(), 2);
    }
}
