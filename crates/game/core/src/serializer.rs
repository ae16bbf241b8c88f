//! JSON text encoding of snapshots.
//!
//! Decoding always goes through [`validate_document`], so text that parses
//! but describes an unusable world is rejected the same way a `LOAD_STATE`
//! would reject it.

use crate::state::GameState;
use crate::validation::{LoadError, validate_document};

/// Failure to encode a snapshot as text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("failed to serialize game state: {0}")]
pub struct SerializeError(pub String);

/// Compact JSON.
pub fn to_text(state: &GameState) -> Result<String, SerializeError> {
    serde_json::to_string(state).map_err(|e| SerializeError(e.to_string()))
}

/// Indented JSON for human inspection.
pub fn to_pretty_text(state: &GameState) -> Result<String, SerializeError> {
    serde_json::to_string_pretty(state).map_err(|e| SerializeError(e.to_string()))
}

/// Parses and validates a snapshot.
pub fn from_text(text: &str) -> Result<GameState, LoadError> {
    let document: serde_json::Value =
        serde_json::from_str(text).map_err(|e| LoadError::Malformed(e.to_string()))?;
    validate_document(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::engine::GameEngine;
    use crate::state::{DoorState, EnvironmentObject, LeverState, ObjectKind, Position};
    use crate::validation::ValidationError;

    #[test]
    fn round_trips_initial_state() {
        let state = GameState::initial();
        let text = to_text(&state).unwrap();
        assert_eq!(from_text(&text).unwrap(), state);
    }

    #[test]
    fn round_trips_mutated_state_with_fractional_values() {
        let mut engine = GameEngine::new();
        engine
            .dispatch(&Action::move_player(Position::new(4.1, 2.7)))
            .unwrap();
        engine.dispatch(&Action::pickup_item("potion1")).unwrap();
        engine.dispatch(&Action::apply_damage(33.3)).unwrap();
        engine
            .dispatch(&Action::move_player(Position::new(15.0, 4.0)))
            .unwrap();
        engine.dispatch(&Action::interact("portal1")).unwrap();

        let state = engine.current_state();
        let pretty = to_pretty_text(&state).unwrap();
        assert_eq!(from_text(&pretty).unwrap(), state);
    }

    #[test]
    fn round_trips_optional_links_and_levers() {
        let mut state = GameState::initial();
        state.environment.insert(EnvironmentObject::new(
            "lever1",
            Position::new(2.0, 6.0),
            ObjectKind::Lever {
                state: LeverState::Inactive,
            },
        ));
        state.environment.insert(EnvironmentObject::new(
            "portal9",
            Position::new(9.0, 9.0),
            ObjectKind::portal(None),
        ));
        state.environment.insert(EnvironmentObject::new(
            "gate",
            Position::new(12.0, 1.0),
            ObjectKind::door(DoorState::Closed, None),
        ));

        let text = to_text(&state).unwrap();
        let document: serde_json::Value = serde_json::from_str(&text).unwrap();
        let environment = &document["environment"];
        assert_eq!(environment["lever1"]["state"], "inactive");
        assert!(environment["portal9"].get("linkedId").is_none());
        assert!(environment["gate"].get("requiredItem").is_none());

        assert_eq!(from_text(&text).unwrap(), state);
    }

    #[test]
    fn output_preserves_table_order_and_wire_names() {
        let text = to_text(&GameState::initial()).unwrap();

        let potion = text.find("\"potion1\"").unwrap();
        let key = text.find("\"key1\"").unwrap();
        let weapon = text.find("\"weapon1\"").unwrap();
        assert!(potion < key && key < weapon);

        assert!(text.contains("\"maxHealth\":100.0"));
        assert!(text.contains("\"type\":\"health-potion\""));
        assert!(text.contains("\"requiredItem\":\"key1\""));
        assert!(text.contains("\"linkedId\":\"portal2\""));
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(from_text("not json"), Err(LoadError::Malformed(_))));
        assert!(matches!(from_text("[1, 2]"), Err(LoadError::Malformed(_))));
    }

    #[test]
    fn missing_section_is_a_validation_error() {
        let err = from_text(r#"{"player": {}, "items": {}}"#).unwrap_err();
        assert_eq!(
            err,
            LoadError::Invalid(ValidationError::MissingSection("environment"))
        );
    }

    #[test]
    fn out_of_range_health_is_rejected() {
        let mut state = GameState::initial();
        state.player.health = 120.0;
        let text = to_text(&state).unwrap();

        assert!(matches!(
            from_text(&text),
            Err(LoadError::Invalid(ValidationError::HealthOutOfBounds { .. }))
        ));
    }
}
