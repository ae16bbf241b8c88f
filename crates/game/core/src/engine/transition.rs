//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionResult, ActionTransition, LoadStateAction, ResetStateAction};
use crate::config::WorldConfig;
use crate::error::NeverError;
use crate::state::GameState;
use crate::validation::ValidationError;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    config: &WorldConfig,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

fn infallible<T>(result: Result<T, TransitionPhaseError<NeverError>>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => match error.error {},
    }
}

/// Routes each action to its transition and wraps the outcome in
/// [`ActionResult`].
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    config: &WorldConfig,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::MovePlayer(transition) => {
            drive_transition(transition, state, config).map_err(ExecuteError::MovePlayer)?;
            Ok(ActionResult::MovePlayer)
        }
        Action::PickupItem(transition) => {
            drive_transition(transition, state, config).map_err(ExecuteError::PickupItem)?;
            Ok(ActionResult::PickupItem)
        }
        Action::UseItem(transition) => {
            let effect =
                drive_transition(transition, state, config).map_err(ExecuteError::UseItem)?;
            Ok(ActionResult::UseItem(effect))
        }
        Action::Interact(transition) => {
            let interaction =
                drive_transition(transition, state, config).map_err(ExecuteError::Interact)?;
            Ok(ActionResult::Interact(interaction))
        }
        Action::ApplyDamage(transition) => {
            infallible(drive_transition(transition, state, config));
            Ok(ActionResult::ApplyDamage)
        }
        Action::ApplyHealing(transition) => {
            infallible(drive_transition(transition, state, config));
            Ok(ActionResult::ApplyHealing)
        }
        Action::ResetState => {
            infallible(drive_transition(&ResetStateAction, state, config));
            Ok(ActionResult::ResetState)
        }
        Action::LoadState(transition) => {
            load_state(transition, state, config).map_err(ExecuteError::LoadState)?;
            Ok(ActionResult::LoadState)
        }
    }
}

/// Runs a `LOAD_STATE` transition on its own, keeping the typed rejection.
pub(super) fn load_state(
    transition: &LoadStateAction,
    state: &mut GameState,
    config: &WorldConfig,
) -> Result<(), TransitionPhaseError<ValidationError>> {
    drive_transition(transition, state, config)
}
