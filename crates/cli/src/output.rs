//! Terminal rendering of plans and layouts.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use console::style;
use jedi_core::{Plan, WorldState};

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Step-by-step listing with running time and concentration
    #[default]
    Text,
    /// The plan as JSON
    Json,
}

/// Plan steps as aligned text, one line per action.
pub fn plan_table(plan: &Plan, initial: &WorldState) -> String {
    let states = plan.replay(initial);
    let mut out = String::new();
    let mut elapsed = 0;

    for (index, (action, after)) in plan.actions().iter().zip(&states[1..]).enumerate() {
        elapsed += action.time();
        let _ = writeln!(
            out,
            "{:>4}. {:<16} t={:<4} concentration={:<4} droids={}",
            index + 1,
            action.to_string(),
            elapsed,
            after.agent.concentration,
            after.droids.total_droids()
        );
    }
    out
}

pub fn print_plan(plan: &Plan, initial: &WorldState, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", style("=== Plan ===").bold().green());
            if plan.is_empty() {
                println!("  Nothing to do: no droids remain.");
            } else {
                print!("{}", plan_table(plan, initial));
            }
            println!();
            println!(
                "{} {}s over {} actions",
                style("Total time:").bold().cyan(),
                plan.total_time(),
                plan.len()
            );
            let stats = plan.stats();
            println!(
                "{} {} expanded, {} generated, peak frontier {}",
                style("Search:").bold().cyan(),
                stats.expanded,
                stats.generated,
                stats.max_frontier
            );
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(plan).context("Failed to serialize plan to JSON")?;
            println!("{}", json);
        }
    }
    Ok(())
}
