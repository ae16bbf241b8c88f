/// World constants and tunable rule parameters.
///
/// The engine reads every distance, bound and default from its config so
/// tests and tools can run the same rules on a differently sized world.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WorldConfig {
    /// Exclusive upper bound of both coordinates; the lower bound is 0.
    pub world_size: f64,
    /// Maximum Euclidean distance for pickups and interactions.
    pub interact_distance: f64,
    /// Healing applied by a potion that carries no `value`.
    pub default_potion_heal: f64,
    /// Fraction of max health below which auto-heal drinks a potion.
    pub auto_heal_threshold: f64,
}

impl WorldConfig {
    pub const WORLD_SIZE: f64 = 20.0;
    pub const INTERACT_DISTANCE: f64 = 2.0;
    pub const DEFAULT_POTION_HEAL: f64 = 20.0;
    pub const AUTO_HEAL_THRESHOLD: f64 = 0.5;

    pub fn new() -> Self {
        Self {
            world_size: Self::WORLD_SIZE,
            interact_distance: Self::INTERACT_DISTANCE,
            default_potion_heal: Self::DEFAULT_POTION_HEAL,
            auto_heal_threshold: Self::AUTO_HEAL_THRESHOLD,
        }
    }

    pub fn with_world_size(world_size: f64) -> Self {
        Self {
            world_size,
            ..Self::new()
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::new()
    }
}
