//! Overwrite a slot with the starting world.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use world_core::GameEngine;
use world_runtime::{RuntimeConfig, StateSerializer};

use super::open_repository;

/// Overwrite a slot with the starting world
#[derive(Parser)]
pub struct Reset {
    /// Slot to overwrite (defaults to WORLD_SAVE_SLOT)
    #[arg(short, long, value_name = "SLOT")]
    slot: Option<String>,
}

impl Reset {
    pub fn execute(self, config: &RuntimeConfig) -> Result<ExitCode> {
        let slot = self.slot.as_deref().unwrap_or(&config.save_slot);
        let repository = open_repository(config)?;

        let mut engine = GameEngine::new();
        StateSerializer::new(&mut engine, &repository)
            .save(slot)
            .with_context(|| format!("Failed to write slot `{slot}`"))?;

        println!("{} {}", style("Reset slot").bold().green(), slot);
        Ok(ExitCode::SUCCESS)
    }
}
