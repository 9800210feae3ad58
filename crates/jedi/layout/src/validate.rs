use std::collections::BTreeSet;

use jedi_core::InitialCondition;

use crate::error::LayoutViolation;
use crate::request::GridSize;
use crate::rules::{MAX_WALLS_AROUND_AGENT, groups_compatible, walls_around};

/// Checks a finished layout against the placement rules on a grid of `size`.
///
/// Rules are checked in this order and the first failure is reported:
/// bounds, agent off the border, one piece per cell, no empty groups, at
/// least one open side around the agent, and the adjacent-droid cap.
pub fn validate_layout(
    condition: &InitialCondition,
    size: GridSize,
) -> Result<(), LayoutViolation> {
    let pieces = std::iter::once(condition.agent)
        .chain(condition.walls.iter().copied())
        .chain(condition.droids.iter().map(|group| group.position));

    if let Some(position) = pieces.clone().find(|cell| !size.contains(*cell)) {
        return Err(LayoutViolation::OutOfBounds { position });
    }

    if size.on_border(condition.agent) {
        return Err(LayoutViolation::AgentOnBorder {
            position: condition.agent,
        });
    }

    let mut seen = BTreeSet::new();
    if let Some(position) = pieces.clone().find(|cell| !seen.insert(*cell)) {
        return Err(LayoutViolation::SharedCell { position });
    }

    if let Some(group) = condition.droids.iter().find(|group| group.count == 0) {
        return Err(LayoutViolation::EmptyGroup {
            position: group.position,
        });
    }

    if walls_around(condition.agent, &condition.walls) > MAX_WALLS_AROUND_AGENT {
        return Err(LayoutViolation::AgentWalledIn {
            position: condition.agent,
        });
    }

    for (i, first) in condition.droids.iter().enumerate() {
        for second in &condition.droids[i + 1..] {
            if !groups_compatible(
                (first.position, first.count),
                (second.position, second.count),
            ) {
                return Err(LayoutViolation::CrowdedNeighbours {
                    first: first.position,
                    second: second.position,
                    total: first.count + second.count,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jedi_core::{DroidGroup, Position};

    fn layout(
        agent: (i32, i32),
        walls: &[(i32, i32)],
        droids: &[((i32, i32), u32)],
    ) -> InitialCondition {
        InitialCondition::new(
            agent.into(),
            5,
            walls.iter().map(|&w| w.into()).collect(),
            droids
                .iter()
                .map(|&(p, count)| DroidGroup::new(p.into(), count))
                .collect(),
        )
    }

    const GRID: GridSize = GridSize::new(5, 5);

    #[test]
    fn accepts_a_legal_layout() {
        let condition = layout(
            (2, 2),
            &[(2, 1), (1, 2), (3, 2)],
            &[((0, 0), 3), ((0, 1), 3)],
        );
        assert_eq!(validate_layout(&condition, GRID), Ok(()));
    }

    #[test]
    fn reports_first_broken_rule() {
        let cases = [
            (layout((2, 2), &[(5, 0)], &[]), "out_of_bounds"),
            (layout((0, 2), &[], &[]), "agent_on_border"),
            (layout((2, 2), &[(1, 1)], &[((1, 1), 1)]), "shared_cell"),
            (layout((2, 2), &[], &[((2, 2), 1)]), "shared_cell"),
            (layout((2, 2), &[], &[((4, 4), 0)]), "empty_group"),
            (
                layout((2, 2), &[(2, 1), (1, 2), (3, 2), (2, 3)], &[]),
                "agent_walled_in",
            ),
            (
                layout((2, 2), &[], &[((0, 0), 4), ((1, 0), 3)]),
                "crowded_neighbours",
            ),
        ];

        for (condition, code) in cases {
            let violation = validate_layout(&condition, GRID).unwrap_err();
            assert_eq!(violation.error_code(), code, "{condition:?}");
        }
    }

    #[test]
    fn crowded_pair_names_both_cells() {
        let condition = layout((2, 2), &[], &[((4, 4), 6), ((4, 3), 1)]);
        assert_eq!(
            validate_layout(&condition, GRID),
            Err(LayoutViolation::CrowdedNeighbours {
                first: Position::new(4, 4),
                second: Position::new(4, 3),
                total: 7,
            })
        );
    }
}
