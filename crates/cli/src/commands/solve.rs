//! Solve a scenario file or a built-in scenario.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use jedi_content::{BuiltinScenario, Scenario, ScenarioLoader};
use jedi_core::play_game;
use jedi_layout::render_grid;
use tracing::info;

use crate::config::load_solver_config;
use crate::output::{OutputFormat, print_plan};

/// Find a minimum-time plan
#[derive(Parser)]
pub struct Solve {
    /// RON scenario file to solve
    #[arg(value_name = "SCENARIO", required_unless_present = "builtin")]
    scenario: Option<PathBuf>,

    /// Solve a built-in scenario instead of a file (see `jedi scenarios`)
    #[arg(short, long, value_name = "NAME", conflicts_with = "scenario")]
    builtin: Option<BuiltinScenario>,

    /// TOML solver configuration
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Cap on node expansions, overriding file and environment
    #[arg(long, value_name = "N")]
    max_expansions: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl Solve {
    pub fn execute(self) -> Result<()> {
        let mut config = load_solver_config(self.config.as_deref())?;
        if let Some(limit) = self.max_expansions {
            config.max_expansions = Some(limit.max(1));
        }

        let (label, scenario) = self.scenario_to_solve()?;
        info!(scenario = %label, graph_search = config.graph_search, "solving");

        if matches!(self.format, OutputFormat::Text) {
            println!("{} {}", style("Scenario:").bold().cyan(), label);
            if let Some(grid) = scenario.grid {
                print!("{}", render_grid(&scenario.condition, grid));
            }
            println!();
        }

        let plan = play_game(&scenario.condition, &config)
            .with_context(|| format!("Failed to solve {}", label))?;

        print_plan(&plan, &scenario.condition.world_state(), self.format)
    }

    fn scenario_to_solve(&self) -> Result<(String, Scenario)> {
        match (&self.builtin, &self.scenario) {
            (Some(builtin), _) => Ok((format!("builtin:{builtin}"), builtin.scenario())),
            (None, Some(path)) => Ok((path.display().to_string(), ScenarioLoader::load(path)?)),
            (None, None) => anyhow::bail!("Either a scenario file or --builtin is required"),
        }
    }
}
