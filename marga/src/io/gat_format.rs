//! GAT field file decoding.
//!
//! Format:
//! - Header (14 bytes):
//!   - Magic: "GRAT" + version 1.2 (6 bytes)
//!   - Width: u32 (4 bytes, little-endian)
//!   - Height: u32 (4 bytes, little-endian)
//! - Cell blocks: width * height records of 20 bytes, row-major
//!   - Upper-left height: f32 (4 bytes, little-endian)
//!   - Upper-right height: f32 (4 bytes, little-endian)
//!   - Lower-left height: f32 (4 bytes, little-endian)
//!   - Lower-right height: f32 (4 bytes, little-endian)
//!   - Type: u8 (1 byte)
//!   - Reserved: 3 bytes
//!
//! Block `i` is cell `(i % width, i / width)`.

use crate::core::CellFlag;
use crate::error::{FormatError, Result};
use crate::grid::WalkabilityGrid;
use log::debug;
use std::io::Read;
use std::path::Path;

/// Magic bytes for .gat files ("GRAT", major 1, minor 2)
pub const GAT_MAGIC: &[u8; 6] = b"GRAT\x01\x02";

/// Header size in bytes
pub const HEADER_SIZE: usize = 14;

/// Cell block size in bytes
pub const BLOCK_SIZE: usize = 20;

/// Largest accepted width or height (the range of a `GridCoord` axis)
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Decoded file header
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerrainHeader {
    /// Grid width in cells
    pub width: u32,
    /// Grid height in cells
    pub height: u32,
}

impl TerrainHeader {
    /// Decode and validate the header at the start of `bytes`.
    ///
    /// The signature is checked as soon as its six bytes are present, so a
    /// short buffer with the wrong magic reports `InvalidSignature`.
    pub fn parse(bytes: &[u8]) -> std::result::Result<Self, FormatError> {
        let Some(magic) = bytes.get(..GAT_MAGIC.len()) else {
            return Err(FormatError::TruncatedData {
                expected: GAT_MAGIC.len(),
                available: bytes.len(),
            });
        };

        // Compare raw bytes, not any text form of them
        if magic != GAT_MAGIC {
            let mut found = [0u8; 6];
            found.copy_from_slice(magic);
            return Err(FormatError::InvalidSignature { found });
        }

        let Some(header) = bytes.get(..HEADER_SIZE) else {
            return Err(FormatError::TruncatedData {
                expected: HEADER_SIZE,
                available: bytes.len(),
            });
        };

        let width = u32::from_le_bytes([header[6], header[7], header[8], header[9]]);
        let height = u32::from_le_bytes([header[10], header[11], header[12], header[13]]);

        // Cells are addressed with i32 coordinates
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(FormatError::InvalidDimensions { width, height });
        }

        Ok(Self { width, height })
    }

    /// Number of cell blocks declared, `None` on overflow
    pub fn cell_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Total file length implied by the header, `None` on overflow
    pub fn expected_len(&self) -> Option<usize> {
        self.cell_count()?
            .checked_mul(BLOCK_SIZE)?
            .checked_add(HEADER_SIZE)
    }
}

/// One 20-byte cell record
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellBlock {
    /// Corner heights: upper-left, upper-right, lower-left, lower-right
    pub heights: [f32; 4],
    /// Raw terrain type byte
    pub cell_type: u8,
}

impl CellBlock {
    /// Decode a block. The three trailing reserved bytes are skipped.
    #[inline]
    pub fn decode(raw: &[u8; BLOCK_SIZE]) -> Self {
        let height = |o: usize| f32::from_le_bytes([raw[o], raw[o + 1], raw[o + 2], raw[o + 3]]);
        Self {
            heights: [height(0), height(4), height(8), height(12)],
            cell_type: raw[16],
        }
    }

    /// Walkability derived from the type byte
    #[inline]
    pub fn flag(&self) -> CellFlag {
        CellFlag::from_type_byte(self.cell_type)
    }
}

/// Decode a complete GAT buffer into a walkability grid.
///
/// Fails on a bad signature, an empty grid, or a buffer shorter than the
/// header declares. Bytes past the last block are ignored.
pub fn parse_gat(bytes: &[u8]) -> Result<WalkabilityGrid> {
    let header = TerrainHeader::parse(bytes)?;

    // Overflow means no real buffer can hold the blocks
    let expected = header.expected_len().unwrap_or(usize::MAX);
    if bytes.len() < expected {
        return Err(FormatError::TruncatedData {
            expected,
            available: bytes.len(),
        }
        .into());
    }

    let width = header.width as usize;
    let height = header.height as usize;
    let blocks = &bytes[HEADER_SIZE..expected];

    // chunks_exact yields blocks in file order, so index i lands at
    // (i % width, i / width) in the row-major flag vector
    let flags: Vec<CellFlag> = blocks
        .chunks_exact(BLOCK_SIZE)
        .map(|chunk| {
            let mut raw = [0u8; BLOCK_SIZE];
            raw.copy_from_slice(chunk);
            CellBlock::decode(&raw).flag()
        })
        .collect();

    if bytes.len() > expected {
        debug!(
            "[GAT] ignoring {} trailing bytes after cell blocks",
            bytes.len() - expected
        );
    }

    let grid = WalkabilityGrid::from_flags(width, height, flags)?;
    let counts = grid.counts();
    debug!(
        "[GAT] decoded {}x{} grid: {} walkable, {} blocked",
        width, height, counts.walkable, counts.blocked
    );
    Ok(grid)
}

/// Read a GAT stream to the end and decode it
pub fn read_gat<R: Read>(reader: &mut R) -> Result<WalkabilityGrid> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_gat(&bytes)
}

/// Load a grid from a .gat file
pub fn load_gat<P: AsRef<Path>>(path: P) -> Result<WalkabilityGrid> {
    let path = path.as_ref();
    debug!("[GAT] loading {}", path.display());
    let bytes = std::fs::read(path)?;
    parse_gat(&bytes)
}
