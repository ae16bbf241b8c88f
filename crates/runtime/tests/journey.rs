use std::cell::RefCell;
use std::rc::Rc;

use world_core::{
    ActionResult, ChestState, DoorState, GameEngine, GameLogic, GameState, Interaction, ItemKind,
    LeverState, ObjectKind, Position, audit_state,
};
use world_runtime::{Difficulty, GameInitializer, PlayerActions};

fn door_state(engine: &GameEngine, id: &str) -> DoorState {
    match engine.state().object(id).map(|o| &o.kind) {
        Some(ObjectKind::Door { state, .. }) => *state,
        other => panic!("{id} is not a door: {other:?}"),
    }
}

/// End-to-end session: explore, collect, unlock, heal, teleport, reset.
#[test]
fn complete_session_from_spawn_to_reset() {
    // ================================================================
    // PHASE 1: Setup
    // ================================================================
    let initializer = GameInitializer::new();
    let mut engine = initializer.create_new_game();
    initializer
        .apply_difficulty(&mut engine, Difficulty::Hard)
        .expect("hard preset should apply");
    assert_eq!(engine.state().player.health, 50.0);

    let notifications = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&notifications);
    engine.subscribe(move |_| *counter.borrow_mut() += 1);

    // ================================================================
    // PHASE 2: Collect the potion and the key
    // ================================================================
    {
        let mut player = PlayerActions::new(&mut engine);
        player
            .move_to(Position::new(5.0, 3.0))
            .expect("move to potion");
        player.pick_up("potion1").expect("potion in reach");
        player.move_to(Position::new(8.0, 2.0)).expect("move to key");
        player.pick_up("key1").expect("key in reach");
    }
    assert_eq!(engine.state().player.inventory.len(), 2);

    // ================================================================
    // PHASE 3: Unlock and open the door
    // ================================================================
    PlayerActions::new(&mut engine)
        .move_to(Position::new(10.0, 1.0))
        .expect("move next to door");
    assert!(
        GameLogic::new(&mut engine)
            .unlock_door("door1")
            .expect("door in reach")
    );
    assert_eq!(door_state(&engine, "door1"), DoorState::Closed);

    let opened = PlayerActions::new(&mut engine)
        .interact("door1")
        .expect("closed door opens");
    assert_eq!(opened.result, ActionResult::Interact(Interaction::DoorOpened));

    // ================================================================
    // PHASE 4: Take damage and auto-heal
    // ================================================================
    PlayerActions::new(&mut engine)
        .receive_damage(10.0)
        .expect("damage never fails");
    let healed_with = GameLogic::new(&mut engine)
        .auto_heal_player()
        .expect("potion is usable");
    assert_eq!(healed_with.as_ref().map(|id| id.as_str()), Some("potion1"));
    assert_eq!(engine.state().player.health, 60.0);

    // The used potion stays collected but leaves the inventory.
    let audit = audit_state(engine.state());
    assert_eq!(audit.len(), 1, "unexpected audit findings: {audit:?}");
    assert!(audit[0].contains("potion1"));

    // ================================================================
    // PHASE 5: Portal hop
    // ================================================================
    let mut player = PlayerActions::new(&mut engine);
    player
        .move_to(Position::new(14.0, 5.0))
        .expect("move next to portal");
    let hop = player.interact("portal1").expect("portal in reach");
    assert_eq!(
        hop.result,
        ActionResult::Interact(Interaction::Teleported {
            destination: Position::new(3.0, 8.0)
        })
    );
    assert_eq!(engine.state().player.position, Position::new(3.0, 8.0));

    let nearest = engine
        .query()
        .find_nearest_item(Some(ItemKind::Weapon))
        .map(|item| item.id.clone());
    assert_eq!(nearest.as_ref().map(|id| id.as_str()), Some("weapon1"));

    // ================================================================
    // PHASE 6: Reset
    // ================================================================
    let before_reset = *notifications.borrow();
    initializer.reset_game(&mut engine);
    assert_eq!(engine.current_state(), GameState::initial());
    assert_eq!(*notifications.borrow(), before_reset + 1);
}

#[test]
fn chest_and_lever_state_machines() {
    let mut state = GameState::initial();
    state.environment.insert(world_core::EnvironmentObject::new(
        "lever1",
        Position::new(7.0, 5.0),
        ObjectKind::Lever {
            state: LeverState::Inactive,
        },
    ));
    state.player.position = Position::new(7.0, 4.5);
    let mut engine = GameEngine::with_state(state);
    let mut player = PlayerActions::new(&mut engine);

    let first = player.interact("chest1").expect("chest in reach");
    let second = player.interact("chest1").expect("open chest stays open");
    assert_eq!(first.result, ActionResult::Interact(Interaction::ChestOpened));
    assert_eq!(
        second.result,
        ActionResult::Interact(Interaction::ChestAlreadyOpen)
    );

    player.interact("lever1").expect("lever in reach");
    player.interact("lever1").expect("lever toggles back");

    let kinds: Vec<_> = engine
        .state()
        .environment
        .iter()
        .filter(|o| o.id == "chest1" || o.id == "lever1")
        .map(|o| o.kind.clone())
        .collect();
    assert_eq!(
        kinds,
        vec![
            ObjectKind::Chest {
                state: ChestState::Open
            },
            ObjectKind::Lever {
                state: LeverState::Inactive
            },
        ]
    );
}
