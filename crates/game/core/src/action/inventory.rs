use crate::action::ActionTransition;
use crate::config::WorldConfig;
use crate::error::{ErrorKind, ErrorSeverity, GameError};
use crate::state::{GameState, ItemId, ItemKind};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PickupError {
    #[error("item {0} does not exist")]
    ItemNotFound(ItemId),

    #[error("item {0} already collected")]
    AlreadyCollected(ItemId),

    #[error("too far to pick up item {item} (distance {distance:.2})")]
    TooFar { item: ItemId, distance: f64 },

    #[error("item {0} missing from inventory after pickup")]
    InventoryDesync(ItemId),
}

impl GameError for PickupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ItemNotFound(_) | Self::AlreadyCollected(_) => ErrorSeverity::Validation,
            Self::TooFar { .. } => ErrorSeverity::Recoverable,
            Self::InventoryDesync(_) => ErrorSeverity::Internal,
        }
    }

    fn kind(&self) -> ErrorKind {
        match self {
            Self::ItemNotFound(_) => ErrorKind::NotFound,
            Self::AlreadyCollected(_) => ErrorKind::AlreadyCollected,
            Self::TooFar { .. } => ErrorKind::TooFar,
            Self::InventoryDesync(_) => ErrorKind::Internal,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UseItemError {
    #[error("item {0} not in inventory")]
    NotInInventory(ItemId),

    #[error("inventory references unknown item {0}")]
    UnknownItem(ItemId),
}

impl GameError for UseItemError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotInInventory(_) => ErrorSeverity::Validation,
            Self::UnknownItem(_) => ErrorSeverity::Internal,
        }
    }

    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotInInventory(_) => ErrorKind::NotInInventory,
            Self::UnknownItem(_) => ErrorKind::Internal,
        }
    }
}

/// Picks up an uncollected item within interaction range.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PickupItemAction {
    pub item_id: ItemId,
}

impl PickupItemAction {
    pub fn new(item_id: impl Into<ItemId>) -> Self {
        Self {
            item_id: item_id.into(),
        }
    }
}

impl ActionTransition for PickupItemAction {
    type Error = PickupError;
    type Result = ();

    fn pre_validate(&self, state: &GameState, config: &WorldConfig) -> Result<(), Self::Error> {
        let item = state
            .item(self.item_id.as_str())
            .ok_or_else(|| PickupError::ItemNotFound(self.item_id.clone()))?;

        if item.is_collected() {
            return Err(PickupError::AlreadyCollected(self.item_id.clone()));
        }

        let distance = state.player.position.distance_to(item.position);
        if distance > config.interact_distance {
            return Err(PickupError::TooFar {
                item: self.item_id.clone(),
                distance,
            });
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, _config: &WorldConfig) -> Result<(), Self::Error> {
        let item = state
            .items
            .get_mut(self.item_id.as_str())
            .ok_or_else(|| PickupError::ItemNotFound(self.item_id.clone()))?;

        item.mark_collected();
        state.player.inventory.push(self.item_id.clone());
        Ok(())
    }

    fn post_validate(&self, state: &GameState, _config: &WorldConfig) -> Result<(), Self::Error> {
        let flagged = state
            .item(self.item_id.as_str())
            .is_some_and(|item| item.is_collected());

        if flagged && state.player.holds(self.item_id.as_str()) {
            Ok(())
        } else {
            Err(PickupError::InventoryDesync(self.item_id.clone()))
        }
    }
}

/// What using an item did to the world.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    /// Health actually restored after clamping to max health.
    Healed { amount: f64 },
    /// The item was consumed without changing any other state.
    Consumed,
}

/// Uses (and thereby consumes) an item from the inventory.
///
/// The item leaves the inventory but keeps `collected = true`; it never
/// returns to the world.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UseItemAction {
    pub item_id: ItemId,
}

impl UseItemAction {
    pub fn new(item_id: impl Into<ItemId>) -> Self {
        Self {
            item_id: item_id.into(),
        }
    }
}

impl ActionTransition for UseItemAction {
    type Error = UseItemError;
    type Result = ItemEffect;

    fn pre_validate(&self, state: &GameState, _config: &WorldConfig) -> Result<(), Self::Error> {
        if !state.player.holds(self.item_id.as_str()) {
            return Err(UseItemError::NotInInventory(self.item_id.clone()));
        }
        if state.item(self.item_id.as_str()).is_none() {
            return Err(UseItemError::UnknownItem(self.item_id.clone()));
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        config: &WorldConfig,
    ) -> Result<ItemEffect, Self::Error> {
        let index = state
            .player
            .inventory_index(self.item_id.as_str())
            .ok_or_else(|| UseItemError::NotInInventory(self.item_id.clone()))?;
        let item = state
            .items
            .get(self.item_id.as_str())
            .ok_or_else(|| UseItemError::UnknownItem(self.item_id.clone()))?;

        let effect = match item.kind {
            ItemKind::HealthPotion => {
                // A zero or missing potency falls back to the default dose.
                let potency = item
                    .value
                    .filter(|value| *value != 0.0 && !value.is_nan())
                    .unwrap_or(config.default_potion_heal);
                ItemEffect::Healed {
                    amount: state.player.heal(potency),
                }
            }
            ItemKind::Weapon => {
                tracing::info!(item = %self.item_id, "used weapon");
                ItemEffect::Consumed
            }
            ItemKind::Key => ItemEffect::Consumed,
        };

        state.player.inventory.remove(index);
        Ok(effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ItemState, Position};

    fn config() -> WorldConfig {
        WorldConfig::default()
    }

    fn standing_at(x: f64, y: f64) -> GameState {
        let mut state = GameState::initial();
        state.player.position = Position::new(x, y);
        state
    }

    fn pick_up(state: &mut GameState, id: &str) {
        let action = PickupItemAction::new(id);
        action.pre_validate(state, &config()).unwrap();
        action.apply(state, &config()).unwrap();
        action.post_validate(state, &config()).unwrap();
    }

    #[test]
    fn pickup_from_origin_is_too_far() {
        let state = GameState::initial();
        let err = PickupItemAction::new("potion1")
            .pre_validate(&state, &config())
            .unwrap_err();
        assert!(matches!(err, PickupError::TooFar { ref item, distance } if item == "potion1" && distance > 5.8));
        assert_eq!(err.kind(), ErrorKind::TooFar);
    }

    #[test]
    fn pickup_marks_item_and_appends_to_inventory() {
        let mut state = standing_at(5.0, 3.0);
        pick_up(&mut state, "potion1");

        assert_eq!(state.player.inventory, vec![ItemId::from("potion1")]);
        assert!(state.item("potion1").unwrap().is_collected());
    }

    #[test]
    fn pickup_reaches_exactly_the_interaction_radius() {
        let state = standing_at(5.0, 1.0);
        assert!(
            PickupItemAction::new("potion1")
                .pre_validate(&state, &config())
                .is_ok()
        );

        let state = standing_at(5.0, 0.999);
        assert!(
            PickupItemAction::new("potion1")
                .pre_validate(&state, &config())
                .is_err()
        );
    }

    #[test]
    fn pickup_rejects_unknown_and_collected_items() {
        let mut state = standing_at(5.0, 3.0);
        assert_eq!(
            PickupItemAction::new("ghost").pre_validate(&state, &config()),
            Err(PickupError::ItemNotFound("ghost".into()))
        );

        pick_up(&mut state, "potion1");
        assert_eq!(
            PickupItemAction::new("potion1").pre_validate(&state, &config()),
            Err(PickupError::AlreadyCollected("potion1".into()))
        );
    }

    #[test]
    fn potion_heals_by_value_and_clamps() {
        let mut state = standing_at(5.0, 3.0);
        pick_up(&mut state, "potion1");
        state.player.health = 90.0;

        let effect = UseItemAction::new("potion1")
            .apply(&mut state, &config())
            .unwrap();

        assert_eq!(effect, ItemEffect::Healed { amount: 10.0 });
        assert_eq!(state.player.health, 100.0);
        assert!(state.player.inventory.is_empty());
        assert!(state.item("potion1").unwrap().is_collected());
    }

    #[test]
    fn potion_without_value_uses_default_dose() {
        let mut state = GameState::initial();
        let mut tonic = ItemState::new("tonic", Position::ORIGIN, ItemKind::HealthPotion);
        tonic.mark_collected();
        state.items.insert(tonic);
        state.player.inventory.push("tonic".into());
        state.player.health = 50.0;

        UseItemAction::new("tonic")
            .apply(&mut state, &config())
            .unwrap();

        assert_eq!(state.player.health, 70.0);
    }

    #[test]
    fn weapon_use_only_removes_it_from_inventory() {
        let mut state = standing_at(12.0, 7.0);
        pick_up(&mut state, "weapon1");
        let before = state.clone();

        let effect = UseItemAction::new("weapon1")
            .apply(&mut state, &config())
            .unwrap();

        assert_eq!(effect, ItemEffect::Consumed);
        assert!(state.player.inventory.is_empty());
        assert_eq!(state.player.health, before.player.health);
        assert_eq!(state.player.position, before.player.position);
        assert_eq!(state.items, before.items);
    }

    #[test]
    fn use_requires_inventory_membership() {
        let state = GameState::initial();
        let err = UseItemAction::new("potion1")
            .pre_validate(&state, &config())
            .unwrap_err();
        assert_eq!(err, UseItemError::NotInInventory("potion1".into()));
        assert_eq!(err.kind(), ErrorKind::NotInInventory);
    }

    #[test]
    fn use_keeps_order_of_remaining_items() {
        let mut state = standing_at(7.0, 2.5);
        pick_up(&mut state, "key1");
        state.player.position = Position::new(5.0, 3.0);
        pick_up(&mut state, "potion1");
        state.player.position = Position::new(12.0, 7.0);
        pick_up(&mut state, "weapon1");

        UseItemAction::new("potion1")
            .apply(&mut state, &config())
            .unwrap();

        assert_eq!(
            state.player.inventory,
            vec![ItemId::from("key1"), ItemId::from("weapon1")]
        );
    }
}
