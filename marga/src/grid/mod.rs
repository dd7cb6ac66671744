//! Walkability grid.
//!
//! - [`WalkabilityGrid`]: immutable row-major grid of [`CellFlag`](crate::core::CellFlag)s
//! - [`CellCounts`]: walkable/blocked totals

mod storage;

pub use storage::{CellCounts, WalkabilityGrid};
