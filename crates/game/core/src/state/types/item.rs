use super::table::Keyed;
use super::{ItemId, Position};

/// Item categories. New kinds extend this enum and the `UseItem` handler.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ItemKind {
    HealthPotion,
    Key,
    Weapon,
}

/// A collectible item placed in the world.
///
/// `collected` mirrors inventory membership while the item is held. A used
/// item leaves the inventory but stays collected: it is consumed, not
/// returned to the world.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemState {
    pub id: ItemId,
    pub position: Position,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ItemKind,
    /// Potency for potions, damage for weapons.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub value: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub collected: Option<bool>,
}

impl ItemState {
    pub fn new(id: impl Into<ItemId>, position: Position, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            position,
            kind,
            value: None,
            collected: None,
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn is_collected(&self) -> bool {
        self.collected.unwrap_or(false)
    }

    pub fn mark_collected(&mut self) {
        self.collected = Some(true);
    }
}

impl Keyed for ItemState {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}
