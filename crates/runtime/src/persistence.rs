//! Bridges the engine's text save/load path to a repository.

use world_core::GameEngine;

use crate::repository::{RepositoryError, Result, StateRepository};

/// Saves and restores one engine through one repository.
///
/// Loading always goes through [`GameEngine::load`], so a slot with bad
/// data is rejected without touching the engine, and a good one replaces
/// the state and notifies subscribers exactly once.
pub struct StateSerializer<'a, R: ?Sized> {
    engine: &'a mut GameEngine,
    repository: &'a R,
}

impl<'a, R> StateSerializer<'a, R>
where
    R: StateRepository + ?Sized,
{
    pub fn new(engine: &'a mut GameEngine, repository: &'a R) -> Self {
        Self { engine, repository }
    }

    /// Writes the current state to `slot`.
    pub fn save(&self, slot: &str) -> Result<()> {
        let text = self
            .engine
            .save()
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        self.repository.save(slot, &text)?;
        tracing::debug!(slot, nonce = self.engine.nonce(), "game state saved");
        Ok(())
    }

    /// Replaces the engine state with the contents of `slot`.
    pub fn load(&mut self, slot: &str) -> Result<()> {
        let text = self
            .repository
            .load(slot)?
            .ok_or_else(|| RepositoryError::SlotNotFound(slot.to_owned()))?;

        if let Err(error) = self.engine.load(&text) {
            tracing::warn!(slot, "rejected saved game: {}", error);
            return Err(error.into());
        }

        tracing::debug!(slot, "game state loaded");
        Ok(())
    }
}
