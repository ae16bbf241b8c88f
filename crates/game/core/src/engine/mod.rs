//! Action dispatch and subscriber notification.
//!
//! The [`GameEngine`] is the sole owner of the live [`GameState`]. Every
//! mutation goes through [`GameEngine::dispatch`], which runs the action's
//! transition pipeline and, on success only, notifies subscribers.
//!
//! Dispatch is synchronous and runs to completion. Subscribers receive a
//! shared borrow of the new state while the engine is mutably borrowed, so a
//! subscriber cannot dispatch from inside its callback.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use std::fmt;

use crate::action::{Action, ActionResult};
use crate::config::WorldConfig;
use crate::logic::WorldQuery;
use crate::state::GameState;
#[cfg(feature = "serde")]
use crate::{
    action::LoadStateAction,
    serializer::{self, SerializeError},
    validation::LoadError,
};

/// Outcome of a successful dispatch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DispatchOutcome {
    /// Number of successful dispatches so far, including this one.
    pub nonce: u64,
    pub result: ActionResult,
}

/// Handle identifying one registered subscriber.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&GameState)>;

/// Rejections that know which pipeline phase produced them.
trait PhasedError: fmt::Display {
    fn phase(&self) -> TransitionPhase;
}

impl PhasedError for ExecuteError {
    fn phase(&self) -> TransitionPhase {
        ExecuteError::phase(self)
    }
}

impl<E: fmt::Display> PhasedError for TransitionPhaseError<E> {
    fn phase(&self) -> TransitionPhase {
        self.phase
    }
}

/// Owner of the canonical world state.
pub struct GameEngine {
    state: GameState,
    config: WorldConfig,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    nonce: u64,
}

impl GameEngine {
    /// Creates an engine seeded with the fixed initial configuration.
    pub fn new() -> Self {
        Self::with_state(GameState::initial())
    }

    /// Creates an engine seeded with a caller-supplied snapshot.
    pub fn with_state(state: GameState) -> Self {
        Self::with_config(state, WorldConfig::default())
    }

    pub fn with_config(state: GameState, config: WorldConfig) -> Self {
        Self {
            state,
            config,
            subscribers: Vec::new(),
            next_subscription: 0,
            nonce: 0,
        }
    }

    /// Borrow of the live state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Independent deep copy of the live state.
    pub fn current_state(&self) -> GameState {
        self.state.clone()
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Number of successful dispatches since construction.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Read-only derived queries over the live state.
    pub fn query(&self) -> WorldQuery<'_> {
        WorldQuery::new(&self.state, &self.config)
    }

    /// Registers a callback invoked with the new state after every
    /// successful dispatch.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&GameState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes exactly the subscriber registered under `id`.
    ///
    /// Returns false if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(subscription, _)| *subscription != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Executes one action.
    ///
    /// On success the state is updated and every subscriber is notified once.
    /// On failure the state is left exactly as it was and nobody is notified.
    pub fn dispatch(&mut self, action: &Action) -> Result<DispatchOutcome, ExecuteError> {
        let name = action.type_name();
        let (nonce, result) = self.commit(name, |state, config| {
            transition::execute_transition(action, state, config)
        })?;
        Ok(DispatchOutcome { nonce, result })
    }

    /// Runs one mutation against the live state.
    ///
    /// Restores the previous state on error; on success bumps the nonce and
    /// notifies subscribers.
    fn commit<R, E>(
        &mut self,
        action: &'static str,
        run: impl FnOnce(&mut GameState, &WorldConfig) -> Result<R, E>,
    ) -> Result<(u64, R), E>
    where
        R: fmt::Debug,
        E: PhasedError,
    {
        let before = self.state.clone();

        match run(&mut self.state, &self.config) {
            Ok(result) => {
                self.nonce += 1;
                tracing::debug!(nonce = self.nonce, action, ?result, "action applied");
                self.notify_subscribers();
                Ok((self.nonce, result))
            }
            Err(error) => {
                self.state = before;
                tracing::warn!(
                    nonce = self.nonce,
                    action,
                    phase = error.phase().as_str(),
                    "action rejected: {}",
                    error
                );
                Err(error)
            }
        }
    }

    /// Serializes the live state to JSON text.
    #[cfg(feature = "serde")]
    pub fn save(&self) -> Result<String, SerializeError> {
        serializer::to_text(&self.state)
    }

    /// Parses and validates `text`, then replaces the live state through the
    /// `LOAD_STATE` path.
    ///
    /// Malformed or invalid text leaves the state untouched and notifies
    /// nobody; success notifies subscribers exactly once.
    #[cfg(feature = "serde")]
    pub fn load(&mut self, text: &str) -> Result<(), LoadError> {
        let load = LoadStateAction::new(serializer::from_text(text)?);
        self.commit("LOAD_STATE", |state, config| {
            transition::load_state(&load, state, config)
        })
        .map(|_| ())
        .map_err(|rejected| LoadError::Invalid(rejected.error))
    }

    fn notify_subscribers(&mut self) {
        for (_, callback) in &mut self.subscribers {
            callback(&self.state);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("subscribers", &self.subscribers.len())
            .field("nonce", &self.nonce)
            .finish()
    }
}
