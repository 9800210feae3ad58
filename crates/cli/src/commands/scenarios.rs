use anyhow::Result;
use clap::Parser;
use console::style;
use jedi_content::BuiltinScenario;
use strum::IntoEnumIterator;

/// List the built-in scenarios
#[derive(Parser)]
pub struct Scenarios {}

impl Scenarios {
    pub fn execute(self) -> Result<()> {
        println!("{}", style("Built-in scenarios:").bold().yellow());
        for builtin in BuiltinScenario::iter() {
            let scenario = builtin.scenario();
            let condition = &scenario.condition;
            println!(
                "  {:<12} agent {} concentration {}, {} walls, {} droid groups",
                builtin.as_ref(),
                condition.agent,
                condition.concentration,
                condition.walls.len(),
                condition.droids.len()
            );
        }
        Ok(())
    }
}
