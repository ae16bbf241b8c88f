//! Human-readable renderings of a snapshot.
//!
//! Output only; nothing here reads back what it prints.

use world_core::{GameState, ObjectKind, Position};

const EMPTY_CELL: char = '·';

/// Multi-line summary of the player, items and environment objects.
pub fn state_summary(state: &GameState) -> String {
    let player = &state.player;
    let inventory = player
        .inventory
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        "--- GAME STATE SUMMARY ---".to_owned(),
        format!("Player: [HP: {}/{}]", player.health, player.max_health),
        format!("Position: {}", player.position),
        format!("Inventory: [{inventory}]"),
        String::new(),
        "Items:".to_owned(),
    ];

    lines.extend(state.items.iter().map(|item| {
        let collected = if item.is_collected() { " (Collected)" } else { "" };
        format!("- {}: {} at {}{collected}", item.id, item.kind, item.position)
    }));

    lines.push(String::new());
    lines.push("Environment Objects:".to_owned());
    lines.extend(state.environment.iter().map(|object| {
        format!(
            "- {}: {} [{}] at {}",
            object.id,
            object.kind.type_name(),
            object.kind.state_name(),
            object.position
        )
    }));

    lines.join("\n")
}

/// Occupancy grid of `size` rows and columns, one line per row.
///
/// Cells are addressed by truncated coordinates. The player is drawn first,
/// then uncollected items, then objects, and a later entity overwrites an
/// earlier one in the same cell. Entities outside the grid are skipped.
pub fn render_world(state: &GameState, size: usize) -> String {
    let mut grid = vec![vec![EMPTY_CELL; size]; size];

    let mut plot = |position: Position, symbol: char| {
        if let Some((col, row)) = cell(position, size) {
            grid[row][col] = symbol;
        }
    };

    plot(state.player.position, 'P');

    for item in state.items.iter().filter(|item| !item.is_collected()) {
        plot(item.position, 'I');
    }

    for object in &state.environment {
        plot(object.position, object_symbol(&object.kind));
    }

    grid.iter()
        .map(|row| {
            row.iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn object_symbol(kind: &ObjectKind) -> char {
    match kind {
        ObjectKind::Door { .. } => 'D',
        ObjectKind::Chest { .. } => 'C',
        ObjectKind::Portal { .. } => 'O',
        ObjectKind::Lever { .. } => 'L',
    }
}

fn cell(position: Position, size: usize) -> Option<(usize, usize)> {
    let bound = size as f64;
    let inside = |v: f64| (0.0..bound).contains(&v);
    if inside(position.x) && inside(position.y) {
        Some((position.x as usize, position.y as usize))
    } else {
        None
    }
}
