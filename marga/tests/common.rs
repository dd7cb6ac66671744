//! Test utilities for marga.
//!
//! Builders for raw GAT buffers and a breadth-first reference router.

#![allow(dead_code)]

use marga::GridCoord;
use marga::grid::WalkabilityGrid;
use marga::io::{BLOCK_SIZE, GAT_MAGIC};
use std::collections::VecDeque;

/// Raw GAT buffer from row-major type bytes.
pub fn gat_bytes(width: u32, height: u32, types: &[u8]) -> Vec<u8> {
    assert_eq!(types.len(), (width * height) as usize);
    let mut data = Vec::with_capacity(14 + types.len() * BLOCK_SIZE);
    data.extend_from_slice(GAT_MAGIC);
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    for (i, &t) in types.iter().enumerate() {
        // Non-trivial heights so misalignment would corrupt the type bytes
        let h = i as f32 * 0.5 - 3.0;
        for corner in [h, h + 1.0, h - 1.0, h * 2.0] {
            data.extend_from_slice(&corner.to_le_bytes());
        }
        data.push(t);
        data.extend_from_slice(&[0x7F, 0x80, 0xFF]);
    }
    data
}

/// Raw GAT buffer from a text picture ('.' → type 0, '#' → type 1).
pub fn gat_from_ascii(picture: &str) -> Vec<u8> {
    let rows: Vec<&str> = picture
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let width = rows[0].len() as u32;
    let types: Vec<u8> = rows
        .iter()
        .flat_map(|r| r.chars().map(|c| if c == '.' { 0 } else { 1 }))
        .collect();
    gat_bytes(width, rows.len() as u32, &types)
}

/// Shortest step count by breadth-first search, `None` if unreachable.
pub fn bfs_distance(grid: &WalkabilityGrid, start: GridCoord, goal: GridCoord) -> Option<u32> {
    let mut dist = vec![None; grid.cell_count()];
    let mut queue = VecDeque::new();
    dist[grid.coord_to_index(start)?] = Some(0u32);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let d = dist[grid.coord_to_index(current)?]?;
        if current == goal {
            return Some(d);
        }
        for n in current.neighbors_4() {
            if let Some(idx) = grid.coord_to_index(n) {
                if dist[idx].is_none() && grid.is_walkable(n) {
                    dist[idx] = Some(d + 1);
                    queue.push_back(n);
                }
            }
        }
    }
    None
}

/// Deterministic pseudo-random maze with the given blocked percentage.
pub fn scattered_grid(width: usize, height: usize, blocked_pct: u64, seed: u64) -> WalkabilityGrid {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut picture = String::with_capacity((width + 1) * height);
    for _ in 0..height {
        for _ in 0..width {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            picture.push(if (state >> 33) % 100 < blocked_pct { '#' } else { '.' });
        }
        picture.push('\n');
    }
    WalkabilityGrid::from_ascii(&picture).expect("generated picture is rectangular")
}
