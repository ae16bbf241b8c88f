//! Consistency audit of a saved slot.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use world_core::GameState;
use world_runtime::{RepositoryError, RuntimeConfig, StateRepository};

use super::{open_repository, print_audit};

/// Report consistency problems in a saved slot
///
/// The slot is decoded without the load-time validator, so states the
/// engine would refuse to load are still audited.
#[derive(Parser)]
pub struct Audit {
    /// Slot to audit (defaults to WORLD_SAVE_SLOT)
    #[arg(short, long, value_name = "SLOT")]
    slot: Option<String>,
}

impl Audit {
    pub fn execute(self, config: &RuntimeConfig) -> Result<ExitCode> {
        let slot = self.slot.as_deref().unwrap_or(&config.save_slot);
        let repository = open_repository(config)?;

        let text = repository
            .load(slot)?
            .ok_or_else(|| RepositoryError::SlotNotFound(slot.to_owned()))?;
        let state: GameState = serde_json::from_str(&text)
            .with_context(|| format!("Slot `{slot}` does not hold a game state"))?;

        if print_audit(&state) == 0 {
            Ok(ExitCode::SUCCESS)
        } else {
            Ok(ExitCode::FAILURE)
        }
    }
}
