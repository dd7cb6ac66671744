//! A* pathfinding algorithm.
//!
//! Implements A* search on the walkability grid with:
//! - 4-connected movement, unit cost per step
//! - Manhattan (default) or squared-Euclidean heuristic
//! - Decrease-key frontier with deterministic tie-breaking
//! - Optional expansion limit and cancellation

mod frontier;
mod planner;
mod types;

pub use planner::AStarPlanner;
pub use types::{
    AStarConfig, AbortReason, CancelToken, GridPath, Heuristic, PathOutcome, PathResult,
};

use crate::core::GridCoord;
use crate::error::Result;
use crate::grid::WalkabilityGrid;

/// Quick path finding with default configuration
pub fn find_path(grid: &WalkabilityGrid, start: GridCoord, goal: GridCoord) -> Result<PathResult> {
    AStarPlanner::with_defaults(grid).find_path(start, goal)
}

/// Check if a path exists
pub fn path_exists(grid: &WalkabilityGrid, start: GridCoord, goal: GridCoord) -> Result<bool> {
    Ok(find_path(grid, start, goal)?.is_found())
}
