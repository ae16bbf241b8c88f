//! Authoritative world state and the rules that mutate it.
//!
//! `world-core` defines the canonical data model (player, items, environment
//! objects), the closed set of actions, and the engine that applies them.
//! All state mutation flows through [`engine::GameEngine`]; collaborators
//! only read snapshots or submit further actions.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod logic;
#[cfg(feature = "serde")]
pub mod serializer;
pub mod state;
pub mod validation;

pub use action::{
    Action, ActionResult, ActionTransition, ApplyDamageAction, ApplyHealingAction,
    InteractAction, InteractError, Interaction, ItemEffect, LoadStateAction, MoveAction,
    MoveError, PickupError, PickupItemAction, ResetStateAction, UseItemAction, UseItemError,
};
pub use config::WorldConfig;
pub use engine::{
    DispatchOutcome, ExecuteError, GameEngine, SubscriptionId, TransitionPhase,
    TransitionPhaseError,
};
pub use error::{ErrorKind, ErrorSeverity, GameError, NeverError};
pub use geometry::{distance, is_valid_position};
pub use logic::{GameLogic, WorldQuery};
#[cfg(feature = "serde")]
pub use serializer::SerializeError;
pub use state::{
    ChestState, DoorState, EntityTable, EnvironmentObject, GameState, ItemId, ItemKind,
    ItemState, LeverState, ObjectId, ObjectKind, PlayerState, PortalState, Position,
};
pub use validation::{LoadError, ValidationError, audit_state, validate_state};
