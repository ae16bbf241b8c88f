//! Action definitions and their state transitions.
//!
//! [`Action`] is the closed set of intents the engine accepts. Each variant
//! wraps a payload type implementing [`ActionTransition`]; the engine matches
//! the enum exhaustively, so adding an action forces a handler.
mod interact;
mod inventory;
mod lifecycle;
mod movement;
mod transition;
mod vitals;

pub use interact::{InteractAction, InteractError, Interaction};
pub use inventory::{ItemEffect, PickupError, PickupItemAction, UseItemAction, UseItemError};
pub use lifecycle::{LoadStateAction, ResetStateAction};
pub use movement::{MoveAction, MoveError};
pub use transition::ActionTransition;
pub use vitals::{ApplyDamageAction, ApplyHealingAction};

use crate::state::{GameState, ItemId, ObjectId, Position};

/// Tagged action accepted by [`crate::engine::GameEngine::dispatch`].
///
/// Serialized form is internally tagged by `type`, e.g.
/// `{"type":"PICKUP_ITEM","itemId":"potion1"}`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Action {
    MovePlayer(MoveAction),
    PickupItem(PickupItemAction),
    UseItem(UseItemAction),
    Interact(InteractAction),
    ApplyDamage(ApplyDamageAction),
    ApplyHealing(ApplyHealingAction),
    ResetState,
    LoadState(LoadStateAction),
}

impl Action {
    pub fn move_player(position: Position) -> Self {
        Self::MovePlayer(MoveAction::new(position))
    }

    pub fn pickup_item(item_id: impl Into<ItemId>) -> Self {
        Self::PickupItem(PickupItemAction::new(item_id))
    }

    pub fn use_item(item_id: impl Into<ItemId>) -> Self {
        Self::UseItem(UseItemAction::new(item_id))
    }

    pub fn interact(object_id: impl Into<ObjectId>) -> Self {
        Self::Interact(InteractAction::new(object_id))
    }

    pub fn apply_damage(amount: f64) -> Self {
        Self::ApplyDamage(ApplyDamageAction::new(amount))
    }

    pub fn apply_healing(amount: f64) -> Self {
        Self::ApplyHealing(ApplyHealingAction::new(amount))
    }

    pub fn reset_state() -> Self {
        Self::ResetState
    }

    pub fn load_state(state: GameState) -> Self {
        Self::LoadState(LoadStateAction::new(state))
    }

    /// Wire tag of this action.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::MovePlayer(_) => "MOVE_PLAYER",
            Self::PickupItem(_) => "PICKUP_ITEM",
            Self::UseItem(_) => "USE_ITEM",
            Self::Interact(_) => "INTERACT",
            Self::ApplyDamage(_) => "APPLY_DAMAGE",
            Self::ApplyHealing(_) => "APPLY_HEALING",
            Self::ResetState => "RESET_STATE",
            Self::LoadState(_) => "LOAD_STATE",
        }
    }
}

/// Action-specific outcome of a successful dispatch.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    MovePlayer,
    PickupItem,
    UseItem(ItemEffect),
    Interact(Interaction),
    ApplyDamage,
    ApplyHealing,
    ResetState,
    LoadState,
}
