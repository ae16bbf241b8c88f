//! Load a slot through the validator and print it.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use world_core::GameEngine;
use world_core::serializer::to_pretty_text;
use world_core::validation::check_position_sanity;
use world_runtime::{RuntimeConfig, StateSerializer};

use super::{open_repository, print_audit, print_state};

/// Load a saved slot and print it
#[derive(Parser)]
pub struct Inspect {
    /// Slot to read (defaults to WORLD_SAVE_SLOT)
    #[arg(short, long, value_name = "SLOT")]
    slot: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Summary, map and audit findings
    Summary,
    /// Full JSON output
    Json,
}

impl Inspect {
    pub fn execute(self, config: &RuntimeConfig) -> Result<ExitCode> {
        let slot = self.slot.as_deref().unwrap_or(&config.save_slot);
        let repository = open_repository(config)?;

        let mut engine = GameEngine::new();
        StateSerializer::new(&mut engine, &repository)
            .load(slot)
            .with_context(|| format!("Failed to load slot `{slot}`"))?;
        let state = engine.state();

        match self.format {
            OutputFormat::Json => println!("{}", to_pretty_text(state)?),
            OutputFormat::Summary => {
                println!("{} {}", style("Slot:").bold().cyan(), slot);
                println!();
                print_state(state, config.map_size);
                println!();
                if !check_position_sanity(state) {
                    println!("{}", style("Player stands outside the world bounds").red());
                }
                print_audit(state);
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}
