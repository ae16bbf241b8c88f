//! Common error infrastructure for world-core.
//!
//! Domain-specific errors (`MoveError`, `PickupError`, ...) live next to the
//! actions that raise them. This module holds the classification shared by
//! all of them so callers can react to a failure without matching on every
//! concrete enum.

/// Severity level of an error, used for logging and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// The same intent may succeed after a different action first.
    ///
    /// Examples: target out of reach, door locked while the key is elsewhere
    Recoverable,

    /// Invalid input, should not be retried unchanged.
    ///
    /// Examples: unknown item id, out-of-bounds destination, bad save data
    Validation,

    /// Unexpected state inconsistency. Indicates a bug in the engine.
    Internal,
}

impl ErrorSeverity {
    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Coarse failure category shared by every action and load error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    InvalidPosition,
    NotFound,
    AlreadyCollected,
    TooFar,
    NotInInventory,
    LockedNoKey,
    Validation,
    Internal,
}

/// Common trait for all world-core errors.
///
/// - All error enums implement this trait
/// - `#[derive(thiserror::Error)]` provides Display/Error
/// - Severity is chosen by recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the coarse category of this error.
    fn kind(&self) -> ErrorKind;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the kind name.
    fn error_code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidPosition => "invalid_position",
            ErrorKind::NotFound => "not_found",
            ErrorKind::AlreadyCollected => "already_collected",
            ErrorKind::TooFar => "too_far",
            ErrorKind::NotInInventory => "not_in_inventory",
            ErrorKind::LockedNoKey => "locked_no_key",
            ErrorKind::Validation => "validation",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Error type for actions that never fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("this error should never be constructed")]
pub enum NeverError {}

impl GameError for NeverError {
    fn severity(&self) -> ErrorSeverity {
        match *self {}
    }

    fn kind(&self) -> ErrorKind {
        match *self {}
    }

    fn error_code(&self) -> &'static str {
        match *self {}
    }
}
