//! Obstacle queries against the operational environment.

use mvplan_core::GeoCoordinate;

/// Source of obstacle information for an operational area.
///
/// A grid may carry an environment, but decomposition does not consult it
/// yet: every cell is created as free space and no per-cell polygon bounds
/// are computed. How obstacles should shape the grid (drop the cell, mark it,
/// or cut it) has not been decided.
pub trait Environment: Send + Sync {
    /// Whether the given location is blocked
    fn obstacle_at(&self, location: &GeoCoordinate) -> bool;
}
