mod common;
mod environment;
mod item;
mod player;
mod table;

pub use common::{ItemId, ObjectId, Position};
pub use environment::{
    ChestState, DoorState, EnvironmentObject, LeverState, ObjectKind, PortalState,
};
pub use item::{ItemKind, ItemState};
pub use player::PlayerState;
pub use table::{EntityTable, Keyed};
