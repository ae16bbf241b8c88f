//! Game creation, reset and difficulty presets.

use world_core::{Action, ExecuteError, GameEngine, GameState, WorldConfig};

/// Difficulty preset applied to a freshly created game.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::VariantNames,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Restores full health.
    Easy,
    #[default]
    Normal,
    /// Removes half of max health.
    Hard,
}

/// Creates engines from a starting snapshot.
#[derive(Clone, Debug)]
pub struct GameInitializer {
    initial_state: GameState,
    config: WorldConfig,
}

impl GameInitializer {
    /// Uses the fixed starting configuration.
    pub fn new() -> Self {
        Self::with_state(GameState::initial())
    }

    /// Uses a custom starting snapshot.
    ///
    /// Note that `RESET_STATE` on the created engine still restores the
    /// fixed configuration, not this snapshot.
    pub fn with_state(initial_state: GameState) -> Self {
        Self {
            initial_state,
            config: WorldConfig::default(),
        }
    }

    pub fn config(mut self, config: WorldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn initial_state(&self) -> &GameState {
        &self.initial_state
    }

    /// Creates an engine seeded with a copy of the starting snapshot.
    pub fn create_new_game(&self) -> GameEngine {
        GameEngine::with_config(self.initial_state.clone(), self.config.clone())
    }

    pub fn reset_game(&self, engine: &mut GameEngine) {
        // RESET_STATE cannot fail.
        if let Err(error) = engine.dispatch(&Action::reset_state()) {
            tracing::error!("reset rejected: {}", error);
        }
    }

    pub fn apply_difficulty(
        &self,
        engine: &mut GameEngine,
        difficulty: Difficulty,
    ) -> Result<(), ExecuteError> {
        let max_health = engine.state().player.max_health;
        let action = match difficulty {
            Difficulty::Easy => Action::apply_healing(max_health),
            Difficulty::Hard => Action::apply_damage(max_health * 0.5),
            Difficulty::Normal => return Ok(()),
        };

        engine.dispatch(&action)?;
        tracing::info!(%difficulty, health = engine.state().player.health, "difficulty applied");
        Ok(())
    }
}

impl Default for GameInitializer {
    fn default() -> Self {
        Self::new()
    }
}
