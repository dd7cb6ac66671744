//! Core types shared by the parser, grid and planner.
//!
//! - [`GridCoord`]: integer cell coordinate
//! - [`CellFlag`]: walkable/blocked flag decoded from terrain type bytes

mod cell;
mod point;

pub use cell::{CellFlag, WALKABLE_TYPES};
pub use point::GridCoord;
