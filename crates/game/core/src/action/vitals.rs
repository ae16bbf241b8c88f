use crate::action::ActionTransition;
use crate::config::WorldConfig;
use crate::error::NeverError;
use crate::state::GameState;

/// Lowers player health, clamping at zero.
///
/// `amount` is not bounds-checked; callers supply a non-negative value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplyDamageAction {
    pub amount: f64,
}

impl ApplyDamageAction {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }
}

impl ActionTransition for ApplyDamageAction {
    type Error = NeverError;
    type Result = ();

    fn apply(&self, state: &mut GameState, _config: &WorldConfig) -> Result<(), Self::Error> {
        state.player.take_damage(self.amount);
        Ok(())
    }
}

/// Raises player health, clamping at max health.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplyHealingAction {
    pub amount: f64,
}

impl ApplyHealingAction {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }
}

impl ActionTransition for ApplyHealingAction {
    type Error = NeverError;
    type Result = ();

    fn apply(&self, state: &mut GameState, _config: &WorldConfig) -> Result<(), Self::Error> {
        state.player.heal(self.amount);
        Ok(())
    }
}
