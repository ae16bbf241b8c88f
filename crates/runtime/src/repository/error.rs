//! Error types raised by repository implementations.

use thiserror::Error;
use world_core::LoadError;

/// Errors surfaced by repositories and the state serializer.
///
/// Storage failures (`Io`, `LockPoisoned`) are kept apart from bad save
/// data (`Load`) so callers can retry the former and reject the latter.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("state repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("no saved game in slot `{0}`")]
    SlotNotFound(String),

    #[error(transparent)]
    Load(#[from] LoadError),
}

impl RepositoryError {
    /// True for storage failures that may succeed on retry.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::LockPoisoned)
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
