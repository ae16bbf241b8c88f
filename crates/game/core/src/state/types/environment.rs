use super::table::Keyed;
use super::{ItemId, ObjectId, Position};

macro_rules! object_state {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            Debug,
            PartialEq,
            Eq,
            Hash,
            strum::Display,
            strum::EnumString,
            strum::AsRefStr,
            strum::IntoStaticStr,
        )]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
        #[strum(serialize_all = "lowercase", ascii_case_insensitive)]
        pub enum $name {
            $($variant),+
        }
    };
}

object_state!(
    /// Door lifecycle. A door never returns to `Locked` once opened with its key.
    DoorState { Locked, Closed, Open }
);

object_state!(
    /// Chests open once and stay open.
    ChestState { Closed, Open }
);

object_state!(LeverState { Active, Inactive });

object_state!(
    /// Portals have a single state; their behavior depends on `linked_id`.
    PortalState { Active }
);

impl LeverState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

/// Type-specific part of an environment object.
///
/// Each variant carries only the states legal for its type, so an open
/// lever or a locked chest cannot be represented.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum ObjectKind {
    Door {
        state: DoorState,
        #[cfg_attr(
            feature = "serde",
            serde(
                rename = "requiredItem",
                default,
                skip_serializing_if = "Option::is_none"
            )
        )]
        required_item: Option<ItemId>,
    },
    Chest {
        state: ChestState,
    },
    Lever {
        state: LeverState,
    },
    Portal {
        state: PortalState,
        /// Reference to another object by id, never an embedded object.
        #[cfg_attr(
            feature = "serde",
            serde(rename = "linkedId", default, skip_serializing_if = "Option::is_none")
        )]
        linked_id: Option<ObjectId>,
    },
}

impl ObjectKind {
    pub fn door(state: DoorState, required_item: Option<ItemId>) -> Self {
        Self::Door {
            state,
            required_item,
        }
    }

    pub fn portal(linked_id: Option<ObjectId>) -> Self {
        Self::Portal {
            state: PortalState::Active,
            linked_id,
        }
    }

    /// Lowercase type name as it appears in snapshots.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Door { .. } => "door",
            Self::Chest { .. } => "chest",
            Self::Lever { .. } => "lever",
            Self::Portal { .. } => "portal",
        }
    }

    /// Lowercase state name as it appears in snapshots.
    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Door { state, .. } => (*state).into(),
            Self::Chest { state } => (*state).into(),
            Self::Lever { state } => (*state).into(),
            Self::Portal { state, .. } => (*state).into(),
        }
    }
}

/// Interactive object placed in the world.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentObject {
    pub id: ObjectId,
    pub position: Position,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: ObjectKind,
}

impl EnvironmentObject {
    pub fn new(id: impl Into<ObjectId>, position: Position, kind: ObjectKind) -> Self {
        Self {
            id: id.into(),
            position,
            kind,
        }
    }
}

impl Keyed for EnvironmentObject {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}
