//! Authoritative world state representation.
//!
//! The engine owns the live [`GameState`]; everything handed to callers is a
//! clone or a shared borrow. Mutation happens exclusively through actions.
mod initial;
pub mod types;

pub use types::{
    ChestState, DoorState, EntityTable, EnvironmentObject, ItemId, ItemKind, ItemState, Keyed,
    LeverState, ObjectId, ObjectKind, PlayerState, PortalState, Position,
};

/// Canonical snapshot of the world.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub player: PlayerState,
    /// Items by id, in placement order. Used items keep their entry.
    pub items: EntityTable<ItemState>,
    /// Environment objects by id, in placement order.
    pub environment: EntityTable<EnvironmentObject>,
}

impl GameState {
    pub fn new(
        player: PlayerState,
        items: EntityTable<ItemState>,
        environment: EntityTable<EnvironmentObject>,
    ) -> Self {
        Self {
            player,
            items,
            environment,
        }
    }

    /// The fixed starting configuration restored by `RESET_STATE`.
    pub fn initial() -> Self {
        initial::initial_state()
    }

    pub fn item(&self, id: &str) -> Option<&ItemState> {
        self.items.get(id)
    }

    pub fn object(&self, id: &str) -> Option<&EnvironmentObject> {
        self.environment.get(id)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
