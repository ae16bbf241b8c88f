use crate::config::WorldConfig;
use crate::state::GameState;

/// Defines how a concrete action variant validates and mutates game state.
///
/// The engine drives every implementor through the same three phases:
/// `pre_validate` → `apply` → `post_validate`. All precondition checks
/// belong in `pre_validate` so that a rejected action never mutates state;
/// `post_validate` only guards engine invariants, and a failure there is
/// rolled back by the engine.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _config: &WorldConfig) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly. Implementations
    /// may assume that `pre_validate` has already run successfully.
    fn apply(
        &self,
        state: &mut GameState,
        config: &WorldConfig,
    ) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _config: &WorldConfig) -> Result<(), Self::Error> {
        Ok(())
    }
}
