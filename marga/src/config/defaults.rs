//! Default value functions for serde deserialization.

use crate::pathfinding::Heuristic;

pub fn heuristic() -> Heuristic {
    Heuristic::Manhattan
}

pub fn max_iterations() -> Option<usize> {
    None
}
