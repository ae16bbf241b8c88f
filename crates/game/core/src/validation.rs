//! Structural validation and consistency auditing of full snapshots.
//!
//! Two independent checks, both read-only:
//! - [`validate_state`] gates every load. It rejects states the engine
//!   cannot operate on and never partially applies anything.
//! - [`audit_state`] is a diagnostic pass that lists every discrepancy it
//!   finds. It is stricter than the load gate and never fails.

use crate::config::WorldConfig;
use crate::error::{ErrorKind, ErrorSeverity, GameError};
use crate::geometry;
use crate::state::{DoorState, GameState, ItemId, ObjectKind};

/// Reasons a snapshot is rejected at load time.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid game state structure: missing `{0}` section")]
    MissingSection(&'static str),

    #[error("player health {health} out of bounds [0, {max_health}]")]
    HealthOutOfBounds { health: f64, max_health: f64 },

    #[error("inventory contains invalid item id: {0}")]
    UnknownInventoryItem(ItemId),
}

impl GameError for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

/// Failure of the text load path: either the text is not a decodable
/// snapshot, or the decoded snapshot fails validation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("failed to load game state: malformed save data: {0}")]
    Malformed(String),

    #[error("failed to load game state: {0}")]
    Invalid(#[from] ValidationError),
}

impl GameError for LoadError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

/// Checks the invariants the engine relies on.
///
/// Fails on health outside `[0, max_health]` or an inventory entry that
/// does not name an existing item.
pub fn validate_state(state: &GameState) -> Result<(), ValidationError> {
    let player = &state.player;
    if !(player.health >= 0.0 && player.health <= player.max_health) {
        return Err(ValidationError::HealthOutOfBounds {
            health: player.health,
            max_health: player.max_health,
        });
    }

    if let Some(unknown) = player
        .inventory
        .iter()
        .find(|id| !state.items.contains(id.as_str()))
    {
        return Err(ValidationError::UnknownInventoryItem(unknown.clone()));
    }

    Ok(())
}

/// Validates an untyped JSON document and decodes it into a [`GameState`].
///
/// Missing (or null) top-level sections are reported as validation errors
/// before any decoding is attempted.
#[cfg(feature = "serde")]
pub fn validate_document(document: serde_json::Value) -> Result<GameState, LoadError> {
    let sections = document
        .as_object()
        .ok_or_else(|| LoadError::Malformed("expected a JSON object".to_owned()))?;

    for section in ["player", "items", "environment"] {
        if sections.get(section).is_none_or(serde_json::Value::is_null) {
            return Err(ValidationError::MissingSection(section).into());
        }
    }

    let state: GameState =
        serde_json::from_value(document).map_err(|e| LoadError::Malformed(e.to_string()))?;
    validate_state(&state)?;
    Ok(state)
}

/// Lists every consistency problem in the snapshot, in a stable order:
/// health, item flags, inventory entries, environment objects.
///
/// An empty list means the state is self-consistent. Note that a used item
/// is reported here (collected but no longer held); that asymmetry is
/// expected after `USE_ITEM`.
pub fn audit_state(state: &GameState) -> Vec<String> {
    let mut errors = Vec::new();
    let player = &state.player;

    if player.health < 0.0 {
        errors.push("Player health cannot be negative".to_owned());
    }
    if player.health > player.max_health {
        errors.push(format!(
            "Player health exceeds maximum ({})",
            player.max_health
        ));
    }

    for item in &state.items {
        if item.is_collected() && !player.holds(item.id.as_str()) {
            errors.push(format!(
                "Item {} marked collected but not in inventory",
                item.id
            ));
        }
    }

    for id in &player.inventory {
        match state.item(id.as_str()) {
            None => errors.push(format!("Inventory contains invalid item: {id}")),
            Some(item) if !item.is_collected() => {
                errors.push(format!("Inventory item {id} not marked as collected"));
            }
            Some(_) => {}
        }
    }

    for object in &state.environment {
        match &object.kind {
            ObjectKind::Door {
                state: DoorState::Locked,
                required_item: None,
            } => {
                errors.push(format!(
                    "Locked door {} missing requiredItem property",
                    object.id
                ));
            }
            ObjectKind::Portal {
                linked_id: None, ..
            } => {
                errors.push(format!("Portal {} missing linkedId property", object.id));
            }
            ObjectKind::Portal {
                linked_id: Some(target),
                ..
            } if !state.environment.contains(target.as_str()) => {
                errors.push(format!(
                    "Portal {} links to non-existent portal {}",
                    object.id, target
                ));
            }
            _ => {}
        }
    }

    errors
}

/// Returns true when the player stands inside the default world bounds.
pub fn check_position_sanity(state: &GameState) -> bool {
    geometry::is_within_bounds(state.player.position, WorldConfig::WORLD_SIZE)
}
