use super::{ItemId, Position};

/// The single controllable actor.
///
/// Invariant: `0 <= health <= max_health`. The inventory keeps pickup order
/// and is not expected to hold duplicates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayerState {
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    pub inventory: Vec<ItemId>,
}

impl PlayerState {
    pub fn new(position: Position, health: f64, max_health: f64) -> Self {
        Self {
            position,
            health,
            max_health,
            inventory: Vec::new(),
        }
    }

    /// Returns true if the inventory holds the given item.
    pub fn holds(&self, item: &str) -> bool {
        self.inventory.iter().any(|held| held == item)
    }

    /// Index of the item in pickup order.
    pub fn inventory_index(&self, item: &str) -> Option<usize> {
        self.inventory.iter().position(|held| held == item)
    }

    /// Lowers health by `amount`, never below zero.
    pub fn take_damage(&mut self, amount: f64) {
        self.health = (self.health - amount).max(0.0);
    }

    /// Raises health by `amount`, never above `max_health`.
    ///
    /// Returns the health actually restored.
    pub fn heal(&mut self, amount: f64) -> f64 {
        let before = self.health;
        self.health = (self.health + amount).min(self.max_health);
        self.health - before
    }
}
