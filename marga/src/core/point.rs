//! Grid coordinate type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid coordinates (integer cell indices)
///
/// Signed so that neighbor arithmetic at the grid edge produces a coordinate
/// that simply fails the bounds check instead of wrapping. Grids are capped
/// at `i32::MAX` cells per side, so every cell (and each of its neighbors)
/// is representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> u64 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        dx + dy
    }

    /// Squared Euclidean distance to another coordinate
    #[inline]
    pub fn squared_distance(&self, other: &GridCoord) -> u64 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        dx * dx + dy * dy
    }

    /// Get the 4 cardinal neighbors (N, E, S, W)
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        [
            GridCoord::new(self.x, self.y + 1), // North
            GridCoord::new(self.x + 1, self.y), // East
            GridCoord::new(self.x, self.y - 1), // South
            GridCoord::new(self.x - 1, self.y), // West
        ]
    }

    /// True if `other` is exactly one cardinal step away
    #[inline]
    pub fn is_cardinal_neighbor(&self, other: &GridCoord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for GridCoord {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        GridCoord::new(x, y)
    }
}

impl From<GridCoord> for (i32, i32) {
    #[inline]
    fn from(coord: GridCoord) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
