//! Scenarios compiled into the binary.

use jedi_core::{DroidGroup, InitialCondition, Position};
use jedi_layout::GridSize;

use crate::Scenario;

/// Named reference puzzles.
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
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum BuiltinScenario {
    /// One droid already under the agent.
    Underfoot,
    /// An exhausted agent far from a single droid; resting first pays off.
    LongWalk,
    /// A wall column between the agent and its target.
    Barricade,
    /// Three stacks spread around a bounded room.
    Crossroads,
}

impl BuiltinScenario {
    pub fn scenario(self) -> Scenario {
        match self {
            Self::Underfoot => Scenario::new(InitialCondition::new(
                Position::new(1, 1),
                10,
                Vec::new(),
                vec![DroidGroup::new(Position::new(1, 1), 1)],
            )),
            Self::LongWalk => Scenario::new(InitialCondition::new(
                Position::ORIGIN,
                0,
                Vec::new(),
                vec![DroidGroup::new(Position::new(5, 5), 1)],
            )),
            Self::Barricade => Scenario::new(InitialCondition::new(
                Position::new(1, 1),
                1,
                (0..4).map(|y| Position::new(2, y)).collect(),
                vec![DroidGroup::new(Position::new(3, 1), 1)],
            )),
            Self::Crossroads => Scenario::new(InitialCondition::new(
                Position::new(3, 3),
                6,
                vec![Position::new(4, 4), Position::new(2, 4)],
                vec![
                    DroidGroup::new(Position::new(1, 1), 3),
                    DroidGroup::new(Position::new(5, 2), 1),
                    DroidGroup::new(Position::new(3, 5), 2),
                ],
            ))
            .with_grid(GridSize::new(7, 7)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn names_round_trip() {
        for builtin in BuiltinScenario::iter() {
            let parsed: BuiltinScenario = builtin.as_ref().parse().unwrap();
            assert_eq!(parsed, builtin);
        }
        assert_eq!(
            "LONG-WALK".parse::<BuiltinScenario>().unwrap(),
            BuiltinScenario::LongWalk
        );
    }

    #[test]
    fn bounded_builtins_obey_layout_rules() {
        for builtin in BuiltinScenario::iter() {
            assert_eq!(builtin.scenario().validate(), Ok(()), "{builtin}");
        }
    }
}
