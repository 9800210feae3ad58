//! Scenario loader.
//!
//! Scenario files list every piece as plain tuples:
//!
//! ```ron
//! (
//!     grid: Some((7, 7)),
//!     agent: (3, 3),
//!     concentration: 6,
//!     walls: [(4, 4), (2, 4)],
//!     droids: [(1, 1, 3), (5, 2, 1)], // (x, y, count)
//! )
//! ```
//!
//! `grid` and `walls` may be omitted. When a grid is given the layout rules are
//! enforced on load.

use std::path::Path;

use jedi_core::{DroidGroup, InitialCondition, Position};
use jedi_layout::GridSize;
use serde::{Deserialize, Serialize};

use crate::Scenario;
use crate::loaders::{LoadResult, read_file};

/// Scenario structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScenarioRon {
    #[serde(default)]
    grid: Option<(u32, u32)>,
    agent: (i32, i32),
    concentration: i32,
    #[serde(default)]
    walls: Vec<(i32, i32)>,
    droids: Vec<(i32, i32, u32)>, // (x, y, count)
}

impl From<ScenarioRon> for Scenario {
    fn from(data: ScenarioRon) -> Self {
        let condition = InitialCondition::new(
            data.agent.into(),
            data.concentration,
            data.walls.into_iter().map(Position::from).collect(),
            data.droids
                .into_iter()
                .map(|(x, y, count)| DroidGroup::new(Position::new(x, y), count))
                .collect(),
        );

        Scenario {
            condition,
            grid: data.grid.map(|(width, height)| GridSize::new(width, height)),
        }
    }
}

impl From<&Scenario> for ScenarioRon {
    fn from(scenario: &Scenario) -> Self {
        let condition = &scenario.condition;
        Self {
            grid: scenario.grid.map(|grid| (grid.width, grid.height)),
            agent: (condition.agent.x, condition.agent.y),
            concentration: condition.concentration,
            walls: condition.walls.iter().map(|w| (w.x, w.y)).collect(),
            droids: condition
                .droids
                .iter()
                .map(|g| (g.position.x, g.position.y, g.count))
                .collect(),
        }
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    ///
    /// Fails when the file cannot be read or parsed, or when it declares a
    /// grid and the layout breaks a placement rule.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let data: ScenarioRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        let scenario = Scenario::from(data);
        scenario
            .validate()
            .map_err(|violation| anyhow::anyhow!("Layout rule broken: {}", violation))?;

        Ok(scenario)
    }

    /// Render a scenario in the same format [`load`](Self::load) reads.
    pub fn to_ron(scenario: &Scenario) -> LoadResult<String> {
        ron::ser::to_string_pretty(&ScenarioRon::from(scenario), ron::ser::PrettyConfig::new())
            .map_err(|e| anyhow::anyhow!("Failed to serialize scenario: {}", e))
    }

    /// Write a scenario to a RON file.
    pub fn save(path: &Path, scenario: &Scenario) -> LoadResult<()> {
        let content = Self::to_ron(scenario)?;
        std::fs::write(path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_scenario() {
        let scenario =
            ScenarioLoader::parse("(agent: (1, 1), concentration: 10, droids: [(1, 1, 1)])")
                .unwrap();

        assert_eq!(scenario.grid, None);
        assert!(scenario.condition.walls.is_empty());
        assert_eq!(
            scenario.condition.droids,
            vec![DroidGroup::new(Position::new(1, 1), 1)]
        );
    }

    #[test]
    fn enforces_layout_rules_with_a_grid() {
        let err = ScenarioLoader::parse(
            "(grid: Some((5, 5)), agent: (0, 2), concentration: 0, droids: [(3, 3, 1)])",
        )
        .unwrap_err();

        assert!(err.to_string().contains("border"), "{err}");
    }

    #[test]
    fn missing_agent_is_a_parse_error() {
        let err = ScenarioLoader::parse("(concentration: 0, droids: [])").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse scenario RON"));
    }
}
