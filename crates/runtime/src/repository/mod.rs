//! Repository layer for save data.
//!
//! Repositories only move text between the engine and storage:
//! - [`FileStateRepository`] writes one JSON file per slot
//! - [`InMemoryStateRepo`] keeps saves in a map for tests and local runs

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStateRepository;
pub use memory::InMemoryStateRepo;
pub use traits::StateRepository;
