//! Position bounds and distance helpers.
//!
//! Comparisons are exact: no epsilon is applied to the bounds or to the
//! interaction radius, so a distance of exactly 2.0 is in reach and a
//! coordinate of exactly `WORLD_SIZE` is out of bounds.

use crate::config::WorldConfig;
use crate::state::Position;

/// Returns true when both coordinates lie in `[0, WORLD_SIZE)`.
pub fn is_valid_position(position: Position) -> bool {
    is_within_bounds(position, WorldConfig::WORLD_SIZE)
}

/// Returns true when both coordinates lie in `[0, world_size)`.
///
/// NaN coordinates are never within bounds.
pub fn is_within_bounds(position: Position, world_size: f64) -> bool {
    position.x >= 0.0 && position.x < world_size && position.y >= 0.0 && position.y < world_size
}

/// Euclidean distance between two positions.
pub fn distance(a: Position, b: Position) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}
