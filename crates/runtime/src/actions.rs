//! Player-intent wrappers over the engine.

use world_core::{Action, DispatchOutcome, ExecuteError, GameEngine, ItemId, ObjectId, Position};

/// Turns player intents into dispatched actions on one engine.
///
/// Each call returns the engine's own result; nothing is retried or
/// swallowed.
#[derive(Debug)]
pub struct PlayerActions<'a> {
    engine: &'a mut GameEngine,
}

type ActionResult = Result<DispatchOutcome, ExecuteError>;

impl<'a> PlayerActions<'a> {
    pub fn new(engine: &'a mut GameEngine) -> Self {
        Self { engine }
    }

    pub fn move_to(&mut self, position: Position) -> ActionResult {
        self.engine.dispatch(&Action::move_player(position))
    }

    pub fn pick_up(&mut self, item_id: impl Into<ItemId>) -> ActionResult {
        self.engine.dispatch(&Action::pickup_item(item_id))
    }

    pub fn use_item(&mut self, item_id: impl Into<ItemId>) -> ActionResult {
        self.engine.dispatch(&Action::use_item(item_id))
    }

    pub fn interact(&mut self, object_id: impl Into<ObjectId>) -> ActionResult {
        self.engine.dispatch(&Action::interact(object_id))
    }

    pub fn receive_damage(&mut self, amount: f64) -> ActionResult {
        self.engine.dispatch(&Action::apply_damage(amount))
    }

    pub fn restore_health(&mut self, amount: f64) -> ActionResult {
        self.engine.dispatch(&Action::apply_healing(amount))
    }
}

#[cfg(test)]
mod tests {
    use world_core::{ErrorKind, GameError};

    use super::*;

    #[test]
    fn wrappers_dispatch_to_the_borrowed_engine() {
        let mut engine = GameEngine::new();
        let mut player = PlayerActions::new(&mut engine);

        player.move_to(Position::new(8.0, 2.0)).unwrap();
        player.pick_up("key1").unwrap();
        player.receive_damage(30.0).unwrap();
        player.restore_health(10.0).unwrap();
        let err = player.interact("door1").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::TooFar);
        assert_eq!(engine.nonce(), 4);
        assert_eq!(engine.state().player.health, 80.0);
        assert!(engine.state().player.holds("key1"));
    }
}
