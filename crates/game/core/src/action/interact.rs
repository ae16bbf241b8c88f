use crate::action::ActionTransition;
use crate::config::WorldConfig;
use crate::error::{ErrorKind, ErrorSeverity, GameError};
use crate::state::{
    ChestState, DoorState, GameState, ItemId, LeverState, ObjectId, ObjectKind, PlayerState,
    Position,
};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InteractError {
    #[error("environment object {0} not found")]
    ObjectNotFound(ObjectId),

    #[error("too far to interact with {object} (distance {distance:.2})")]
    TooFar { object: ObjectId, distance: f64 },

    #[error("door {door} is locked. Missing required key.")]
    LockedNoKey {
        door: ObjectId,
        required_item: Option<ItemId>,
    },
}

impl GameError for InteractError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ObjectNotFound(_) => ErrorSeverity::Validation,
            Self::TooFar { .. } | Self::LockedNoKey { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn kind(&self) -> ErrorKind {
        match self {
            Self::ObjectNotFound(_) => ErrorKind::NotFound,
            Self::TooFar { .. } => ErrorKind::TooFar,
            Self::LockedNoKey { .. } => ErrorKind::LockedNoKey,
        }
    }
}

/// State transition produced by an interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interaction {
    DoorUnlocked,
    DoorOpened,
    DoorClosed,
    ChestOpened,
    ChestAlreadyOpen,
    LeverToggled(LeverState),
    Teleported { destination: Position },
    /// Portal without a resolvable link; nothing happened.
    PortalInert,
}

/// Interacts with an environment object within reach.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct InteractAction {
    pub object_id: ObjectId,
}

impl InteractAction {
    pub fn new(object_id: impl Into<ObjectId>) -> Self {
        Self {
            object_id: object_id.into(),
        }
    }

    fn not_found(&self) -> InteractError {
        InteractError::ObjectNotFound(self.object_id.clone())
    }

    fn check_door_key(
        &self,
        player: &PlayerState,
        state: DoorState,
        required_item: &Option<ItemId>,
    ) -> Result<(), InteractError> {
        if state != DoorState::Locked {
            return Ok(());
        }
        match required_item {
            Some(key) if player.holds(key.as_str()) => Ok(()),
            _ => Err(InteractError::LockedNoKey {
                door: self.object_id.clone(),
                required_item: required_item.clone(),
            }),
        }
    }
}

impl ActionTransition for InteractAction {
    type Error = InteractError;
    type Result = Interaction;

    fn pre_validate(&self, state: &GameState, config: &WorldConfig) -> Result<(), Self::Error> {
        let object = state
            .object(self.object_id.as_str())
            .ok_or_else(|| self.not_found())?;

        let distance = state.player.position.distance_to(object.position);
        if distance > config.interact_distance {
            return Err(InteractError::TooFar {
                object: self.object_id.clone(),
                distance,
            });
        }

        if let ObjectKind::Door {
            state: door_state,
            required_item,
        } = &object.kind
        {
            self.check_door_key(&state.player, *door_state, required_item)?;
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &WorldConfig,
    ) -> Result<Interaction, Self::Error> {
        let object = state
            .object(self.object_id.as_str())
            .ok_or_else(|| self.not_found())?;

        // A portal only needs to resolve its link; a missing or dangling link
        // is a silent no-op rather than an error.
        if let ObjectKind::Portal { linked_id, .. } = &object.kind {
            let destination = linked_id
                .as_ref()
                .and_then(|target| state.object(target.as_str()))
                .map(|target| target.position);

            return Ok(match destination {
                Some(destination) => {
                    state.player.position = destination;
                    Interaction::Teleported { destination }
                }
                None => Interaction::PortalInert,
            });
        }

        let player = &state.player;
        let object = state
            .environment
            .get_mut(self.object_id.as_str())
            .ok_or_else(|| self.not_found())?;

        let interaction = match &mut object.kind {
            ObjectKind::Door {
                state: door_state,
                required_item,
            } => {
                self.check_door_key(player, *door_state, required_item)?;
                let (next, interaction) = match door_state {
                    DoorState::Locked => (DoorState::Closed, Interaction::DoorUnlocked),
                    DoorState::Closed => (DoorState::Open, Interaction::DoorOpened),
                    DoorState::Open => (DoorState::Closed, Interaction::DoorClosed),
                };
                *door_state = next;
                interaction
            }
            ObjectKind::Chest { state: chest_state } => match chest_state {
                ChestState::Closed => {
                    *chest_state = ChestState::Open;
                    Interaction::ChestOpened
                }
                ChestState::Open => Interaction::ChestAlreadyOpen,
            },
            ObjectKind::Lever { state: lever_state } => {
                *lever_state = lever_state.toggled();
                Interaction::LeverToggled(*lever_state)
            }
            ObjectKind::Portal { .. } => Interaction::PortalInert,
        };

        Ok(interaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EnvironmentObject, PortalState};

    fn config() -> WorldConfig {
        WorldConfig::default()
    }

    fn interact(state: &mut GameState, id: &str) -> Result<Interaction, InteractError> {
        let action = InteractAction::new(id);
        action.pre_validate(state, &config())?;
        action.apply(state, &config())
    }

    fn door_state(state: &GameState, id: &str) -> DoorState {
        match state.object(id).unwrap().kind {
            ObjectKind::Door { state, .. } => state,
            ref other => panic!("{id} is not a door: {other:?}"),
        }
    }

    fn at(x: f64, y: f64) -> GameState {
        let mut state = GameState::initial();
        state.player.position = Position::new(x, y);
        state
    }

    #[test]
    fn unknown_object_is_not_found() {
        let mut state = GameState::initial();
        let err = interact(&mut state, "ghost").unwrap_err();
        assert_eq!(err, InteractError::ObjectNotFound("ghost".into()));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn distant_object_is_too_far() {
        let mut state = GameState::initial();
        let err = interact(&mut state, "chest1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooFar);
    }

    #[test]
    fn locked_door_without_key_stays_locked() {
        let mut state = at(10.0, 0.0);
        let err = interact(&mut state, "door1").unwrap_err();
        assert_eq!(
            err,
            InteractError::LockedNoKey {
                door: "door1".into(),
                required_item: Some("key1".into()),
            }
        );
        assert_eq!(door_state(&state, "door1"), DoorState::Locked);
    }

    #[test]
    fn door_cycles_after_unlock_and_never_relocks() {
        let mut state = at(10.0, 0.0);
        state.player.inventory.push("key1".into());
        state.items.get_mut("key1").unwrap().mark_collected();

        assert_eq!(interact(&mut state, "door1"), Ok(Interaction::DoorUnlocked));
        assert_eq!(door_state(&state, "door1"), DoorState::Closed);
        assert_eq!(interact(&mut state, "door1"), Ok(Interaction::DoorOpened));
        assert_eq!(door_state(&state, "door1"), DoorState::Open);
        assert_eq!(interact(&mut state, "door1"), Ok(Interaction::DoorClosed));
        assert_eq!(door_state(&state, "door1"), DoorState::Closed);
    }

    #[test]
    fn locked_door_without_required_item_can_never_open() {
        let mut state = at(1.0, 1.0);
        state.environment.insert(EnvironmentObject::new(
            "vault",
            Position::new(1.0, 1.0),
            ObjectKind::door(DoorState::Locked, None),
        ));
        assert!(matches!(
            interact(&mut state, "vault"),
            Err(InteractError::LockedNoKey {
                required_item: None,
                ..
            })
        ));
    }

    #[test]
    fn chest_open_is_idempotent() {
        let mut state = at(7.0, 4.0);
        assert_eq!(interact(&mut state, "chest1"), Ok(Interaction::ChestOpened));
        assert_eq!(
            interact(&mut state, "chest1"),
            Ok(Interaction::ChestAlreadyOpen)
        );
        assert_eq!(
            state.object("chest1").unwrap().kind,
            ObjectKind::Chest {
                state: ChestState::Open
            }
        );
    }

    #[test]
    fn lever_toggles() {
        let mut state = at(2.0, 2.0);
        state.environment.insert(EnvironmentObject::new(
            "lever1",
            Position::new(2.0, 2.0),
            ObjectKind::Lever {
                state: LeverState::Inactive,
            },
        ));
        assert_eq!(
            interact(&mut state, "lever1"),
            Ok(Interaction::LeverToggled(LeverState::Active))
        );
        assert_eq!(
            interact(&mut state, "lever1"),
            Ok(Interaction::LeverToggled(LeverState::Inactive))
        );
    }

    #[test]
    fn portal_teleports_to_linked_portal() {
        let mut state = at(15.0, 5.0);
        assert_eq!(
            interact(&mut state, "portal1"),
            Ok(Interaction::Teleported {
                destination: Position::new(3.0, 8.0)
            })
        );
        assert_eq!(state.player.position, Position::new(3.0, 8.0));
        // The linked portal is untouched.
        assert_eq!(
            state.object("portal2").unwrap().position,
            Position::new(3.0, 8.0)
        );
    }

    #[test]
    fn portal_with_dangling_or_missing_link_is_silent() {
        let mut state = at(1.0, 1.0);
        state.environment.insert(EnvironmentObject::new(
            "broken",
            Position::new(1.0, 1.0),
            ObjectKind::Portal {
                state: PortalState::Active,
                linked_id: Some("nowhere".into()),
            },
        ));
        state.environment.insert(EnvironmentObject::new(
            "unlinked",
            Position::new(1.5, 1.0),
            ObjectKind::portal(None),
        ));
        let before = state.clone();

        assert_eq!(interact(&mut state, "broken"), Ok(Interaction::PortalInert));
        assert_eq!(interact(&mut state, "unlinked"), Ok(Interaction::PortalInert));
        assert_eq!(state, before);
    }
}
