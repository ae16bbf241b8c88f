use world_core::{Action, GameEngine, GameState, ItemKind, ItemState, Position};
use world_runtime::{render_world, state_summary};

#[test]
fn summary_lists_player_items_and_objects() {
    let mut engine = GameEngine::new();
    engine
        .dispatch(&Action::move_player(Position::new(5.0, 3.0)))
        .unwrap();
    engine.dispatch(&Action::pickup_item("potion1")).unwrap();

    let summary = state_summary(engine.state());
    let lines: Vec<&str> = summary.lines().collect();

    assert_eq!(lines[0], "--- GAME STATE SUMMARY ---");
    assert_eq!(lines[1], "Player: [HP: 100/100]");
    assert_eq!(lines[2], "Position: (5, 3)");
    assert_eq!(lines[3], "Inventory: [potion1]");
    assert!(lines.contains(&"- potion1: health-potion at (5, 3) (Collected)"));
    assert!(lines.contains(&"- key1: key at (8, 2)"));
    assert!(lines.contains(&"- door1: door [locked] at (10, 0)"));
    assert!(lines.contains(&"- portal2: portal [active] at (3, 8)"));
}

#[test]
fn map_draws_entities_inside_bounds_only() {
    let map = render_world(&GameState::initial(), 10);
    let rows: Vec<Vec<&str>> = map
        .lines()
        .map(|row| row.split(' ').collect())
        .collect();

    assert_eq!(rows.len(), 10);
    assert!(rows.iter().all(|row| row.len() == 10));
    assert_eq!(rows[0][0], "P");
    assert_eq!(rows[3][5], "I");
    assert_eq!(rows[2][8], "I");
    assert_eq!(rows[4][7], "C");
    assert_eq!(rows[8][3], "O");
    // door1 at x = 10 and portal1 at x = 15 fall outside a 10x10 grid.
    assert!(!map.contains('D'));
    assert_eq!(map.matches('O').count(), 1);
}

#[test]
fn later_entities_overwrite_earlier_ones() {
    let mut state = GameState::initial();
    state.player.position = Position::new(7.9, 4.2);

    let map = render_world(&state, 10);
    let row: Vec<&str> = map.lines().nth(4).unwrap().split(' ').collect();

    assert_eq!(row[7], "C");
    assert!(!map.contains('P'));
}

#[test]
fn collected_items_are_not_drawn() {
    let mut state = GameState::initial();
    for item in state.items.iter_mut() {
        item.mark_collected();
    }
    let map = render_world(&state, 20);
    assert!(!map.contains('I'));
    assert!(map.contains('D'));
}

#[test]
fn negative_coordinates_are_skipped_not_truncated() {
    let mut state = GameState::initial();
    for item in state.items.iter_mut() {
        item.mark_collected();
    }
    state
        .items
        .insert(ItemState::new("shard", Position::new(-0.5, 3.0), ItemKind::Key));

    let map = render_world(&state, 10);
    let rows: Vec<Vec<&str>> = map.lines().map(|row| row.split(' ').collect()).collect();

    assert_eq!(rows[3][0], "·");
    assert!(!map.contains('I'));
}
