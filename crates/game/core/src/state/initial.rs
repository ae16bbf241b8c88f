use super::{
    ChestState, DoorState, EnvironmentObject, GameState, ItemKind, ItemState, ObjectKind,
    PlayerState, Position,
};

pub(super) fn initial_state() -> GameState {
    let player = PlayerState::new(Position::ORIGIN, 100.0, 100.0);

    let items = [
        ItemState::new("potion1", Position::new(5.0, 3.0), ItemKind::HealthPotion).with_value(20.0),
        ItemState::new("key1", Position::new(8.0, 2.0), ItemKind::Key),
        ItemState::new("weapon1", Position::new(12.0, 7.0), ItemKind::Weapon).with_value(15.0),
    ]
    .into_iter()
    .collect();

    let environment = [
        EnvironmentObject::new(
            "door1",
            Position::new(10.0, 0.0),
            ObjectKind::door(DoorState::Locked, Some("key1".into())),
        ),
        EnvironmentObject::new(
            "chest1",
            Position::new(7.0, 4.0),
            ObjectKind::Chest {
                state: ChestState::Closed,
            },
        ),
        EnvironmentObject::new(
            "portal1",
            Position::new(15.0, 5.0),
            ObjectKind::portal(Some("portal2".into())),
        ),
        EnvironmentObject::new(
            "portal2",
            Position::new(3.0, 8.0),
            ObjectKind::portal(Some("portal1".into())),
        ),
    ]
    .into_iter()
    .collect();

    GameState::new(player, items, environment)
}
