//! Terrain file input.
//!
//! - [`gat_format`]: GAT field file decoding into a [`WalkabilityGrid`](crate::grid::WalkabilityGrid)

pub mod gat_format;

pub use gat_format::{
    BLOCK_SIZE, CellBlock, GAT_MAGIC, HEADER_SIZE, MAX_DIMENSION, TerrainHeader, load_gat, parse_gat,
    read_gat,
};
