use crate::action::ActionTransition;
use crate::config::WorldConfig;
use crate::error::NeverError;
use crate::state::GameState;
use crate::validation::{self, ValidationError};

/// Replaces the whole state with the fixed initial configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResetStateAction;

impl ActionTransition for ResetStateAction {
    type Error = NeverError;
    type Result = ();

    fn apply(&self, state: &mut GameState, _config: &WorldConfig) -> Result<(), Self::Error> {
        *state = GameState::initial();
        Ok(())
    }
}

/// Replaces the whole state with a caller-supplied snapshot after it passes
/// validation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadStateAction {
    pub state: Box<GameState>,
}

impl LoadStateAction {
    pub fn new(state: GameState) -> Self {
        Self {
            state: Box::new(state),
        }
    }
}

impl ActionTransition for LoadStateAction {
    type Error = ValidationError;
    type Result = ();

    fn pre_validate(&self, _state: &GameState, _config: &WorldConfig) -> Result<(), Self::Error> {
        validation::validate_state(&self.state)
    }

    fn apply(&self, state: &mut GameState, _config: &WorldConfig) -> Result<(), Self::Error> {
        state.clone_from(&self.state);
        Ok(())
    }
}
