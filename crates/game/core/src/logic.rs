//! Derived queries and small policies layered on top of the engine.
//!
//! [`WorldQuery`] is read-only and works on any snapshot. [`GameLogic`]
//! borrows the engine explicitly and turns policies into dispatched actions.

use crate::action::Action;
use crate::config::WorldConfig;
use crate::engine::{ExecuteError, GameEngine};
use crate::geometry;
use crate::state::{DoorState, GameState, ItemId, ItemKind, ItemState, ObjectKind};

/// Read-only derivations over a snapshot.
#[derive(Clone, Copy, Debug)]
pub struct WorldQuery<'a> {
    state: &'a GameState,
    config: &'a WorldConfig,
}

impl<'a> WorldQuery<'a> {
    pub fn new(state: &'a GameState, config: &'a WorldConfig) -> Self {
        Self { state, config }
    }

    /// True when the object exists and is within interaction range.
    pub fn can_interact_with(&self, object_id: &str) -> bool {
        self.state.object(object_id).is_some_and(|object| {
            geometry::distance(self.state.player.position, object.position)
                <= self.config.interact_distance
        })
    }

    pub fn is_item_in_inventory(&self, item_id: &str) -> bool {
        self.state.player.holds(item_id)
    }

    /// Closest uncollected item, optionally restricted to one kind.
    ///
    /// Ties go to the item placed first.
    pub fn find_nearest_item(&self, kind: Option<ItemKind>) -> Option<&'a ItemState> {
        let origin = self.state.player.position;
        let mut nearest: Option<(&ItemState, f64)> = None;

        for item in self.state.items.iter() {
            if item.is_collected() || kind.is_some_and(|kind| item.kind != kind) {
                continue;
            }
            let dist = geometry::distance(origin, item.position);
            if nearest.is_none_or(|(_, best)| dist < best) {
                nearest = Some((item, dist));
            }
        }

        nearest.map(|(item, _)| item)
    }

    /// First held health potion in inventory order.
    pub fn first_health_potion(&self) -> Option<&'a ItemId> {
        self.state.player.inventory.iter().find(|id| {
            self.state
                .item(id.as_str())
                .is_some_and(|item| item.kind == ItemKind::HealthPotion)
        })
    }

    /// Health is strictly below the auto-heal threshold.
    pub fn needs_healing(&self) -> bool {
        let player = &self.state.player;
        player.health < player.max_health * self.config.auto_heal_threshold
    }

    /// Locked door whose required item is currently held.
    pub fn can_unlock(&self, door_id: &str) -> bool {
        match self.state.object(door_id).map(|object| &object.kind) {
            Some(ObjectKind::Door {
                state: DoorState::Locked,
                required_item: Some(key),
            }) => self.state.player.holds(key.as_str()),
            _ => false,
        }
    }
}

/// Policies that act on the engine they were handed.
#[derive(Debug)]
pub struct GameLogic<'a> {
    engine: &'a mut GameEngine,
}

impl<'a> GameLogic<'a> {
    pub fn new(engine: &'a mut GameEngine) -> Self {
        Self { engine }
    }

    fn query(&self) -> WorldQuery<'_> {
        self.engine.query()
    }

    pub fn can_interact_with(&self, object_id: &str) -> bool {
        self.query().can_interact_with(object_id)
    }

    pub fn is_item_in_inventory(&self, item_id: &str) -> bool {
        self.query().is_item_in_inventory(item_id)
    }

    pub fn find_nearest_item(&self, kind: Option<ItemKind>) -> Option<ItemState> {
        self.query().find_nearest_item(kind).cloned()
    }

    /// Drinks the first held potion when health is below the threshold.
    ///
    /// Returns the potion used, or `None` when healing was not needed or no
    /// potion is held.
    pub fn auto_heal_player(&mut self) -> Result<Option<ItemId>, ExecuteError> {
        let query = self.query();
        if !query.needs_healing() {
            return Ok(None);
        }
        let Some(potion) = query.first_health_potion().cloned() else {
            tracing::debug!("auto-heal skipped: no health potion held");
            return Ok(None);
        };

        self.engine.dispatch(&Action::use_item(potion.clone()))?;
        Ok(Some(potion))
    }

    /// Interacts with a locked door if its key is held.
    ///
    /// Returns false without dispatching when the door is not locked, has no
    /// key requirement, or the key is missing.
    pub fn unlock_door(&mut self, door_id: &str) -> Result<bool, ExecuteError> {
        if !self.query().can_unlock(door_id) {
            return Ok(false);
        }
        self.engine.dispatch(&Action::interact(door_id))?;
        Ok(true)
    }
}
