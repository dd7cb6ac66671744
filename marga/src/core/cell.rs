//! Cell walkability flag.
//!
//! Terrain files carry a per-cell type byte with several engine-specific
//! meanings (water, cliff, snipeable gap...). Routing only needs to know
//! whether a character can stand on the cell, so every type collapses to one
//! of two flags.

use serde::{Deserialize, Serialize};

/// Type bytes that map to walkable cells (plain ground, walkable water).
pub const WALKABLE_TYPES: [u8; 2] = [0, 3];

/// Binary traversability of a grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CellFlag {
    /// A unit can stand on and move through this cell
    #[default]
    Walkable = 0,

    /// Wall, cliff, deep water or anything else that stops movement
    Blocked = 1,
}

impl CellFlag {
    /// Map a raw terrain type byte to a flag.
    ///
    /// 0 and 3 are walkable; every other value is blocked.
    #[inline]
    pub fn from_type_byte(value: u8) -> Self {
        if WALKABLE_TYPES.contains(&value) {
            CellFlag::Walkable
        } else {
            CellFlag::Blocked
        }
    }

    /// Can a unit traverse this cell?
    #[inline]
    pub fn is_walkable(self) -> bool {
        matches!(self, CellFlag::Walkable)
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellFlag::Walkable => '.',
            CellFlag::Blocked => '#',
        }
    }

    /// Inverse of [`CellFlag::as_char`]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellFlag::Walkable),
            '#' => Some(CellFlag::Blocked),
            _ => None,
        }
    }
}
