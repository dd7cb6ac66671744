//! # Marga: GAT terrain routing
//!
//! Decodes GAT field files into a walkability grid and plans 4-connected
//! routes across it with A*.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga::core::GridCoord;
//! use marga::io::load_gat;
//! use marga::pathfinding::{AStarPlanner, PathOutcome};
//!
//! let grid = load_gat("prontera.gat")?;
//! let planner = AStarPlanner::with_defaults(&grid);
//!
//! match planner.find_path(GridCoord::new(150, 180), GridCoord::new(156, 60))?.outcome {
//!     PathOutcome::Found(path) => println!("{} steps", path.cost()),
//!     PathOutcome::NotFound => println!("unreachable"),
//!     PathOutcome::Aborted(reason) => println!("gave up: {:?}", reason),
//! }
//! # Ok::<(), marga::Error>(())
//! ```
//!
//! ## Coordinate Frame
//!
//! - **X**: column index, `0..width`
//! - **Y**: row index, `0..height`, in file order (row 0 is the first row
//!   stored in the file)
//!
//! ## Data Flow
//!
//! ```text
//!   .gat bytes ──parse_gat()──► WalkabilityGrid ──AStarPlanner::find_path()──► PathResult
//!                                (immutable, shared)                           Found / NotFound / Aborted
//! ```
//!
//! ## Modules
//!
//! - [`core`]: `GridCoord`, `CellFlag`
//! - [`io`]: GAT decoding
//! - [`grid`]: `WalkabilityGrid`
//! - [`pathfinding`]: A* planner
//! - [`config`]: YAML configuration

pub mod config;
pub mod core;
pub mod error;
pub mod grid;
pub mod io;
pub mod pathfinding;

// Re-export main types at crate root
pub use config::MargaConfig;
pub use crate::core::{CellFlag, GridCoord};
pub use error::{Error, FormatError, Result};
pub use grid::WalkabilityGrid;
pub use io::{load_gat, parse_gat};
pub use pathfinding::{AStarConfig, AStarPlanner, GridPath, Heuristic, PathOutcome, PathResult};
