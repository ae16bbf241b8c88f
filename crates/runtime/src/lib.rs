//! Collaborators around the world engine.
//!
//! Everything here borrows a [`world_core::GameEngine`] explicitly; nothing
//! holds a global handle. Modules are organized by responsibility:
//! - [`actions`] wraps player intents as dispatched actions
//! - [`initializer`] creates, resets and tunes games
//! - [`diagnostics`] renders snapshots for humans
//! - [`repository`] and [`persistence`] move save text to and from storage
//! - [`config`] reads runtime settings from the environment
pub mod actions;
pub mod config;
pub mod diagnostics;
pub mod initializer;
pub mod persistence;
pub mod repository;

pub use actions::PlayerActions;
pub use config::RuntimeConfig;
pub use diagnostics::{render_world, state_summary};
pub use initializer::{Difficulty, GameInitializer};
pub use persistence::StateSerializer;
pub use repository::{
    FileStateRepository, InMemoryStateRepo, RepositoryError, Result, StateRepository,
};
