use crate::action::ActionTransition;
use crate::config::WorldConfig;
use crate::error::{ErrorKind, ErrorSeverity, GameError};
use crate::geometry;
use crate::state::{GameState, Position};

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid position: {position}")]
    InvalidPosition { position: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidPosition
    }
}

/// Places the player at an absolute position inside the world bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub position: Position,
}

impl MoveAction {
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;
    type Result = ();

    fn pre_validate(&self, _state: &GameState, config: &WorldConfig) -> Result<(), Self::Error> {
        if geometry::is_within_bounds(self.position, config.world_size) {
            Ok(())
        } else {
            Err(MoveError::InvalidPosition {
                position: self.position,
            })
        }
    }

    fn apply(&self, state: &mut GameState, _config: &WorldConfig) -> Result<(), Self::Error> {
        state.player.position = self.position;
        Ok(())
    }
}
