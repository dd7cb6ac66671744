//! Walkability grid storage.

use crate::core::{CellFlag, GridCoord};
use crate::error::{Error, Result};

/// Cell counts by flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    /// Number of walkable cells
    pub walkable: usize,
    /// Number of blocked cells
    pub blocked: usize,
}

impl CellCounts {
    /// Total number of cells
    pub fn total(&self) -> usize {
        self.walkable + self.blocked
    }
}

/// Immutable 2D walkability grid.
///
/// The grid uses a coordinate system where:
/// - (0, 0) is the first cell of the first row
/// - Positive X moves along a row (column index)
/// - Positive Y moves to the next row (row index)
///
/// Flags are stored row-major: cell (x, y) lives at `y * width + x`.
/// There are no mutation operations, so a grid can be shared by reference
/// across any number of concurrent searches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkabilityGrid {
    flags: Vec<CellFlag>,
    width: usize,
    height: usize,
}

impl WalkabilityGrid {
    /// Build a grid from row-major flags.
    ///
    /// Fails if either dimension is zero or exceeds `i32::MAX`, or if
    /// `flags.len() != width * height`.
    pub fn from_flags(width: usize, height: usize, flags: Vec<CellFlag>) -> Result<Self> {
        let expected = Self::checked_area(width, height)?;
        if flags.len() != expected {
            return Err(Error::InvalidGrid(format!(
                "expected {} flags for {}x{}, got {}",
                expected,
                width,
                height,
                flags.len()
            )));
        }
        Ok(Self {
            flags,
            width,
            height,
        })
    }

    /// Build a fully walkable grid
    pub fn open(width: usize, height: usize) -> Result<Self> {
        let count = Self::checked_area(width, height)?;
        Self::from_flags(width, height, vec![CellFlag::Walkable; count])
    }

    /// Cell count for valid dimensions.
    ///
    /// Every cell must be addressable by a `GridCoord`, so each side is
    /// capped at `i32::MAX`.
    fn checked_area(width: usize, height: usize) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidGrid(format!(
                "dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(Error::InvalidGrid(format!(
                "{}x{} exceeds the i32 coordinate range",
                width, height
            )));
        }
        width
            .checked_mul(height)
            .ok_or_else(|| Error::InvalidGrid(format!("{}x{} overflows", width, height)))
    }

    /// Build a grid from a text picture.
    ///
    /// One line per row, row 0 first. `.` is walkable, `#` is blocked.
    /// Blank lines and surrounding whitespace are ignored; all rows must have
    /// the same width.
    ///
    /// ```
    /// use marga::grid::WalkabilityGrid;
    ///
    /// let grid = WalkabilityGrid::from_ascii("
    ///     ..#
    ///     ...
    /// ").unwrap();
    /// assert_eq!((grid.width(), grid.height()), (3, 2));
    /// ```
    pub fn from_ascii(picture: &str) -> Result<Self> {
        let mut flags = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for line in picture.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row_start = flags.len();
            for c in line.chars() {
                let flag = CellFlag::from_char(c).ok_or_else(|| {
                    Error::InvalidGrid(format!("unexpected character {:?} in row {}", c, height))
                })?;
                flags.push(flag);
            }
            let row_width = flags.len() - row_start;
            if height == 0 {
                width = row_width;
            } else if row_width != width {
                return Err(Error::InvalidGrid(format!(
                    "row {} has width {}, expected {}",
                    height, row_width, width
                )));
            }
            height += 1;
        }

        Self::from_flags(width, height, flags)
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert grid coordinates to flat array index
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Convert flat array index to grid coordinates
    #[inline]
    pub fn index_to_coord(&self, index: usize) -> GridCoord {
        GridCoord::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Flag at grid coordinates, `None` when out of bounds
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<CellFlag> {
        self.coord_to_index(coord).map(|i| self.flags[i])
    }

    /// Flag at `(x, y)`.
    ///
    /// Fails with [`Error::OutOfBounds`] if `x` is not in `[0, width)` or `y`
    /// is not in `[0, height)`.
    pub fn flag_at(&self, x: i64, y: i64) -> Result<CellFlag> {
        let in_bounds = x >= 0
            && y >= 0
            && (x as u64) < self.width as u64
            && (y as u64) < self.height as u64;
        if !in_bounds {
            return Err(self.out_of_bounds(x, y));
        }
        Ok(self.flags[y as usize * self.width + x as usize])
    }

    /// Can a unit stand on this cell? False when out of bounds.
    #[inline]
    pub fn is_walkable(&self, coord: GridCoord) -> bool {
        self.get(coord).is_some_and(CellFlag::is_walkable)
    }

    /// Bounds-checked variant of [`Self::is_valid_coord`] that returns the error
    pub(crate) fn check_bounds(&self, coord: GridCoord) -> Result<()> {
        if self.is_valid_coord(coord) {
            Ok(())
        } else {
            Err(self.out_of_bounds(i64::from(coord.x), i64::from(coord.y)))
        }
    }

    fn out_of_bounds(&self, x: i64, y: i64) -> Error {
        Error::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Iterate over rows, row 0 first
    pub fn rows(&self) -> impl Iterator<Item = &[CellFlag]> {
        self.flags.chunks_exact(self.width)
    }

    /// Count cells by flag
    pub fn counts(&self) -> CellCounts {
        let walkable = self.flags.iter().filter(|f| f.is_walkable()).count();
        CellCounts {
            walkable,
            blocked: self.flags.len() - walkable,
        }
    }

    /// Text picture of the grid, the inverse of [`Self::from_ascii`]
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            out.extend(row.iter().map(|f| f.as_char()));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags_validates_length() {
        assert!(WalkabilityGrid::from_flags(2, 2, vec![CellFlag::Walkable; 3]).is_err());
        assert!(WalkabilityGrid::from_flags(0, 2, Vec::new()).is_err());
        let grid = WalkabilityGrid::from_flags(2, 2, vec![CellFlag::Walkable; 4]).unwrap();
        assert_eq!(grid.cell_count(), 4);
    }

    #[test]
    fn test_open_rejects_oversized_dimensions() {
        // Must fail cleanly before any allocation
        let too_wide = i32::MAX as usize + 1;
        for (w, h) in [(too_wide, 1), (1, too_wide), (usize::MAX, 2), (0, 5)] {
            let err = WalkabilityGrid::open(w, h).unwrap_err();
            assert!(matches!(err, Error::InvalidGrid(_)), "{w}x{h}: {err:?}");
        }
        assert!(WalkabilityGrid::from_flags(too_wide, 1, Vec::new()).is_err());

        let grid = WalkabilityGrid::open(4, 3).unwrap();
        assert_eq!(grid.counts().walkable, 12);
    }

    #[test]
    fn test_row_major_layout() {
        let grid = WalkabilityGrid::from_ascii(
            "
            .#.
            ...
            ",
        )
        .unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.flag_at(1, 0).unwrap(), CellFlag::Blocked);
        assert_eq!(grid.flag_at(1, 1).unwrap(), CellFlag::Walkable);
        assert_eq!(grid.coord_to_index(GridCoord::new(1, 1)), Some(4));
        assert_eq!(grid.index_to_coord(4), GridCoord::new(1, 1));
    }

    #[test]
    fn test_flag_at_out_of_bounds() {
        let grid = WalkabilityGrid::open(3, 2).unwrap();
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 2), (i64::MAX, 0)] {
            let err = grid.flag_at(x, y).unwrap_err();
            assert!(
                matches!(err, Error::OutOfBounds { width: 3, height: 2, .. }),
                "({x},{y}) gave {err:?}"
            );
        }
        assert!(grid.flag_at(2, 1).is_ok());
    }

    #[test]
    fn test_is_walkable_outside_grid() {
        let grid = WalkabilityGrid::open(2, 2).unwrap();
        assert!(grid.is_walkable(GridCoord::new(1, 1)));
        assert!(!grid.is_walkable(GridCoord::new(2, 1)));
        assert!(!grid.is_walkable(GridCoord::new(-1, 0)));
    }

    #[test]
    fn test_ragged_ascii_rejected() {
        let err = WalkabilityGrid::from_ascii("...\n..").unwrap_err();
        assert!(matches!(err, Error::InvalidGrid(_)));
        let err = WalkabilityGrid::from_ascii("..x").unwrap_err();
        assert!(matches!(err, Error::InvalidGrid(_)));
    }

    #[test]
    fn test_counts_and_ascii() {
        let picture = "#..\n.##\n";
        let grid = WalkabilityGrid::from_ascii(picture).unwrap();
        let counts = grid.counts();
        assert_eq!(counts.walkable, 3);
        assert_eq!(counts.blocked, 3);
        assert_eq!(counts.total(), grid.cell_count());
        assert_eq!(grid.to_ascii(), picture);
    }
}
