//! Open set with decrease-key by position.
//!
//! A `BinaryHeap` paired with a position → best-node map. Improving a
//! position pushes a fresh heap entry and repoints the map; the superseded
//! entry stays in the heap and is dropped when it surfaces. Both operations
//! are O(log n) amortized.

use crate::core::GridCoord;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use super::types::NodeId;

#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    f_cost: u64,
    h_cost: u64,
    seq: u64,
    coord: GridCoord,
    node: NodeId,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior.
        // Ties: lower f, then lower h, then earliest insertion.
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.h_cost.cmp(&self.h_cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Indexed priority queue of search nodes
#[derive(Debug, Default)]
pub(super) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    best: HashMap<GridCoord, NodeId>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node currently representing `coord`, if it is in the open set
    #[inline]
    pub fn tracked(&self, coord: GridCoord) -> Option<NodeId> {
        self.best.get(&coord).copied()
    }

    /// Insert `coord`, or replace its current entry.
    ///
    /// The caller decides whether a replacement is an improvement.
    pub fn upsert(&mut self, coord: GridCoord, node: NodeId, f_cost: u64, h_cost: u64) {
        self.best.insert(coord, node);
        self.heap.push(FrontierEntry {
            f_cost,
            h_cost,
            seq: self.next_seq,
            coord,
            node,
        });
        self.next_seq += 1;
    }

    /// Remove and return the live node with the smallest priority
    pub fn pop(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.heap.pop() {
            if self.best.get(&entry.coord) == Some(&entry.node) {
                self.best.remove(&entry.coord);
                return Some(entry.node);
            }
            // Superseded by a cheaper entry for the same position
        }
        None
    }

    /// Number of positions in the open set
    #[inline]
    pub fn len(&self) -> usize {
        self.best.len()
    }
}
