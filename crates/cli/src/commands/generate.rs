//! Generate a layout and optionally solve it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use jedi_content::{Scenario, ScenarioLoader};
use jedi_core::play_game;
use jedi_layout::{GridSize, LayoutRequest, generate_layout, render_grid};
use tracing::info;

use crate::config::load_solver_config;
use crate::output::{OutputFormat, print_plan};

/// Generate a layout satisfying the placement rules
#[derive(Parser)]
pub struct Generate {
    /// Grid width in cells
    #[arg(long, value_name = "W")]
    width: u32,

    /// Grid height in cells
    #[arg(long, value_name = "H")]
    height: u32,

    /// Number of walls to place
    #[arg(long, value_name = "N", default_value_t = 0)]
    walls: usize,

    /// Droid counts, one per group (e.g. 3,2,1)
    #[arg(long, value_name = "COUNTS", value_delimiter = ',', required = true)]
    droids: Vec<u32>,

    /// Starting concentration of the agent
    #[arg(long, value_name = "C", default_value_t = LayoutRequest::DEFAULT_CONCENTRATION)]
    concentration: i32,

    /// Shuffle candidate cells with this seed
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Write the scenario to this RON file instead of printing it
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Solve the generated layout right away
    #[arg(long)]
    solve: bool,

    /// TOML solver configuration (with --solve)
    #[arg(short, long, value_name = "FILE", requires = "solve")]
    config: Option<PathBuf>,

    /// Plan output format (with --solve)
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl Generate {
    pub fn execute(self) -> Result<()> {
        let size = GridSize::new(self.width, self.height);
        let request = LayoutRequest::new(size, self.walls, self.droids.clone())
            .with_concentration(self.concentration)
            .with_seed(self.seed);

        let condition = generate_layout(&request).context("Failed to generate layout")?;
        let scenario = Scenario::new(condition).with_grid(size);
        info!(
            walls = request.walls,
            groups = request.droids.len(),
            "layout generated"
        );

        println!("{}", style("=== Layout ===").bold().green());
        print!("{}", render_grid(&scenario.condition, size));
        println!();

        match &self.output {
            Some(path) => {
                ScenarioLoader::save(path, &scenario)?;
                println!("{} {}", style("Saved:").bold().cyan(), path.display());
            }
            None => println!("{}", ScenarioLoader::to_ron(&scenario)?),
        }

        if self.solve {
            let config = load_solver_config(self.config.as_deref())?;
            let plan = play_game(&scenario.condition, &config)
                .context("Failed to solve generated layout")?;
            println!();
            print_plan(&plan, &scenario.condition.world_state(), self.format)?;
        }

        Ok(())
    }
}
