//! Path planning on the walkability grid.
//!
//! ```rust
//! use marga::core::GridCoord;
//! use marga::grid::WalkabilityGrid;
//! use marga::pathfinding::{AStarConfig, AStarPlanner, Heuristic};
//!
//! let grid = WalkabilityGrid::from_ascii("
//!     ...
//!     .#.
//!     ...
//! ").unwrap();
//!
//! let planner = AStarPlanner::new(&grid, AStarConfig::with_heuristic(Heuristic::Manhattan));
//! let result = planner.find_path(GridCoord::new(0, 0), GridCoord::new(2, 2)).unwrap();
//! if let Some(path) = result.path() {
//!     println!("Path found with {} cells", path.len());
//! }
//! ```

pub mod astar;

pub use astar::{
    AStarConfig, AStarPlanner, AbortReason, CancelToken, GridPath, Heuristic, PathOutcome,
    PathResult, find_path, path_exists,
};
