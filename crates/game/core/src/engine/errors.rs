//! Error types for the action execution pipeline.

use crate::action::{InteractError, MoveError, PickupError, UseItemError};
use crate::error::{ErrorKind, ErrorSeverity, GameError};
use crate::validation::ValidationError;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

impl<E: GameError> GameError for TransitionPhaseError<E> {
    fn severity(&self) -> ErrorSeverity {
        // Anything caught after mutation means the rules broke an invariant.
        if self.phase == TransitionPhase::PostValidate {
            ErrorSeverity::Internal
        } else {
            self.error.severity()
        }
    }

    fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

/// Errors surfaced while dispatching an action through the game engine.
///
/// Actions that cannot fail (damage, healing, reset) have no variant.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ExecuteError {
    #[error("move player action failed: {0}")]
    MovePlayer(TransitionPhaseError<MoveError>),

    #[error("pickup item action failed: {0}")]
    PickupItem(TransitionPhaseError<PickupError>),

    #[error("use item action failed: {0}")]
    UseItem(TransitionPhaseError<UseItemError>),

    #[error("interact action failed: {0}")]
    Interact(TransitionPhaseError<InteractError>),

    #[error("load state action failed: {0}")]
    LoadState(TransitionPhaseError<ValidationError>),
}

impl ExecuteError {
    /// Pipeline stage that rejected the action.
    pub fn phase(&self) -> TransitionPhase {
        match self {
            Self::MovePlayer(e) => e.phase,
            Self::PickupItem(e) => e.phase,
            Self::UseItem(e) => e.phase,
            Self::Interact(e) => e.phase,
            Self::LoadState(e) => e.phase,
        }
    }

    fn inner(&self) -> &dyn GameError {
        match self {
            Self::MovePlayer(e) => e,
            Self::PickupItem(e) => e,
            Self::UseItem(e) => e,
            Self::Interact(e) => e,
            Self::LoadState(e) => e,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.inner().severity()
    }

    fn kind(&self) -> ErrorKind {
        self.inner().kind()
    }

    fn error_code(&self) -> &'static str {
        self.inner().error_code()
    }
}
