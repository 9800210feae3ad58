//! `jedi`: plan optimal droid hunts and generate puzzle layouts.
//!
//! Run with: `jedi <command>`

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use commands::{Generate, Scenarios, Solve};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Optimal planner for the Jedi-versus-droids grid puzzle
#[derive(Parser)]
#[command(name = "jedi")]
#[command(about = "Plan and generate Jedi-versus-droids puzzles", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Find a minimum-time plan for a scenario
    Solve(Solve),

    /// Generate a layout satisfying the placement rules
    Generate(Generate),

    /// List the built-in scenarios
    Scenarios(Scenarios),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for JEDI_* overrides and RUST_LOG)
    let _ = dotenvy::dotenv();

    setup_logging();

    let cli = Cli::parse();

    match cli.command {
        Command::Solve(cmd) => cmd.execute(),
        Command::Generate(cmd) => cmd.execute(),
        Command::Scenarios(cmd) => cmd.execute(),
    }
}

/// Setup logging to stderr so stdout stays clean for plans and layouts.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn solve_needs_a_source() {
        assert!(Cli::try_parse_from(["jedi", "solve"]).is_err());
        assert!(Cli::try_parse_from(["jedi", "solve", "--builtin", "long-walk"]).is_ok());
        assert!(Cli::try_parse_from(["jedi", "solve", "map.ron", "--builtin", "underfoot"]).is_err());
    }

    #[test]
    fn generate_splits_droid_counts() {
        let cli = Cli::try_parse_from([
            "jedi", "generate", "--width", "6", "--height", "5", "--droids", "3,2,1",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::Generate(_)));
        assert!(Cli::try_parse_from(["jedi", "generate", "--width", "6", "--height", "5"]).is_err());
    }
}
