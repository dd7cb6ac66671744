//! A* pathfinding types.

use crate::core::GridCoord;
use crate::grid::WalkabilityGrid;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Index of a node in the per-search node arena
pub(super) type NodeId = usize;

/// A node in the A* search.
///
/// Nodes are append-only: a cheaper route to a position creates a new node
/// rather than editing this one, so `parent` links can never go stale.
#[derive(Clone, Debug)]
pub(super) struct SearchNode {
    pub coord: GridCoord,
    pub parent: Option<NodeId>,
    pub g_cost: u32, // Steps from start
    pub h_cost: u64, // Heuristic to goal
    pub f_cost: u64, // g_cost + h_cost
}

impl SearchNode {
    pub fn new(coord: GridCoord, parent: Option<NodeId>, g_cost: u32, h_cost: u64) -> Self {
        Self {
            coord,
            parent,
            g_cost,
            h_cost,
            f_cost: u64::from(g_cost) + h_cost,
        }
    }
}

/// Remaining-cost estimate used to order the frontier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// |dx| + |dy|. Admissible for unit cardinal steps, so paths are optimal.
    #[default]
    Manhattan,

    /// dx² + dy². Greedier and not admissible: paths are usually but not
    /// always shortest. Matches the behavior of older routing clients.
    SquaredEuclidean,
}

impl Heuristic {
    /// Estimate the cost from `from` to `to`
    #[inline]
    pub fn estimate(self, from: GridCoord, to: GridCoord) -> u64 {
        match self {
            Heuristic::Manhattan => from.manhattan_distance(&to),
            Heuristic::SquaredEuclidean => from.squared_distance(&to),
        }
    }
}

/// Cooperative cancellation flag shared between a caller and a running search
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a token in the not-cancelled state
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; searches observe it before their next expansion
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Has cancellation been requested?
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// A* pathfinding configuration
#[derive(Clone, Debug, Default)]
pub struct AStarConfig {
    /// Heuristic used for h
    pub heuristic: Heuristic,
    /// Maximum number of nodes to expand before giving up (None = unlimited)
    pub max_iterations: Option<usize>,
    /// Optional cancellation flag checked once per expansion
    pub cancel: Option<CancelToken>,
}

impl AStarConfig {
    /// Create with a specific heuristic
    pub fn with_heuristic(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            ..Default::default()
        }
    }

    /// Limit the number of node expansions
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Attach a cancellation token
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

/// An ordered route from source to destination, both inclusive.
///
/// Always holds at least one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridPath {
    cells: Vec<GridCoord>,
    cost: u32,
}

impl GridPath {
    /// Build a path from its cells, source first.
    ///
    /// Returns `None` for an empty sequence or one with more steps than
    /// `u32` can count. Contiguity is not checked here; see [`Self::is_valid_on`].
    pub fn from_cells(cells: Vec<GridCoord>) -> Option<Self> {
        let steps = cells.len().checked_sub(1)?;
        let cost = u32::try_from(steps).ok()?;
        Some(Self { cells, cost })
    }

    /// Planner-side constructor; `cells` holds `cost + 1` entries
    pub(super) fn from_parts(cells: Vec<GridCoord>, cost: u32) -> Self {
        debug_assert_eq!(cells.len(), cost as usize + 1);
        Self { cells, cost }
    }

    /// Cells from source to destination
    #[inline]
    pub fn cells(&self) -> &[GridCoord] {
        &self.cells
    }

    /// Number of cardinal steps (`len() - 1`)
    #[inline]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Number of cells on the path
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; kept alongside `len`
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// First cell (the source)
    pub fn start(&self) -> GridCoord {
        self.cells[0]
    }

    /// Last cell (the destination)
    pub fn goal(&self) -> GridCoord {
        self.cells[self.cells.len() - 1]
    }

    /// Cells as `(x, y)` pairs
    pub fn to_tuples(&self) -> Vec<(i32, i32)> {
        self.cells.iter().map(|&c| c.into()).collect()
    }

    /// Check the path against a grid.
    ///
    /// True when consecutive cells are one cardinal step apart, every cell
    /// after the source is walkable, and no cell repeats.
    pub fn is_valid_on(&self, grid: &WalkabilityGrid) -> bool {
        let contiguous = self
            .cells
            .windows(2)
            .all(|w| w[0].is_cardinal_neighbor(&w[1]));
        let walkable = self.cells.iter().skip(1).all(|&c| grid.is_walkable(c));
        let unique = self.cells.iter().collect::<HashSet<_>>().len() == self.cells.len();
        grid.is_valid_coord(self.start()) && contiguous && walkable && unique
    }
}

/// Why a search stopped before finishing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbortReason {
    /// `max_iterations` expansions were exceeded
    IterationLimit,
    /// The [`CancelToken`] was triggered
    Cancelled,
}

/// How a search ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOutcome {
    /// Destination reached
    Found(GridPath),
    /// Frontier emptied without reaching the destination
    NotFound,
    /// Search stopped early; says nothing about reachability
    Aborted(AbortReason),
}

/// Result of A* pathfinding
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResult {
    /// Search outcome
    pub outcome: PathOutcome,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
}

impl PathResult {
    /// Whether a path was found
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, PathOutcome::Found(_))
    }

    /// Whether the search proved the destination unreachable
    pub fn is_not_found(&self) -> bool {
        matches!(self.outcome, PathOutcome::NotFound)
    }

    /// The path, if one was found
    pub fn path(&self) -> Option<&GridPath> {
        match &self.outcome {
            PathOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Consume the result, keeping only the path
    pub fn into_path(self) -> Option<GridPath> {
        match self.outcome {
            PathOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristics() {
        let a = GridCoord::new(0, 0);
        let b = GridCoord::new(3, 4);
        assert_eq!(Heuristic::Manhattan.estimate(a, b), 7);
        assert_eq!(Heuristic::SquaredEuclidean.estimate(a, b), 25);
        assert_eq!(Heuristic::default(), Heuristic::Manhattan);
    }

    #[test]
    fn test_search_node_f_cost() {
        let node = SearchNode::new(GridCoord::new(1, 1), None, u32::MAX, 10);
        assert_eq!(node.f_cost, u64::from(u32::MAX) + 10);
    }

    #[test]
    fn test_cancel_token_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_path_validation() {
        let grid = WalkabilityGrid::from_ascii("..\n#.").unwrap();
        let path = |cells: &[(i32, i32)]| {
            GridPath::from_cells(cells.iter().map(|&c| c.into()).collect()).unwrap()
        };

        let good = path(&[(0, 0), (1, 0), (1, 1)]);
        assert!(good.is_valid_on(&grid));
        assert_eq!(good.start(), GridCoord::new(0, 0));
        assert_eq!(good.goal(), GridCoord::new(1, 1));
        assert_eq!(good.to_tuples(), vec![(0, 0), (1, 0), (1, 1)]);

        assert!(!path(&[(0, 0), (0, 1)]).is_valid_on(&grid), "through wall");
        assert!(!path(&[(0, 0), (1, 1)]).is_valid_on(&grid), "diagonal jump");
        assert!(!path(&[(0, 0), (1, 0), (0, 0)]).is_valid_on(&grid), "repeat");
    }

    #[test]
    fn test_path_from_cells() {
        assert_eq!(GridPath::from_cells(Vec::new()), None);

        let single = GridPath::from_cells(vec![GridCoord::new(4, 2)]).unwrap();
        assert_eq!(single.cost(), 0);
        assert_eq!(single.start(), GridCoord::new(4, 2));
        assert_eq!(single.goal(), GridCoord::new(4, 2));
        assert!(!single.is_empty());

        let cells = vec![GridCoord::new(0, 0), GridCoord::new(0, 1), GridCoord::new(0, 2)];
        let line = GridPath::from_cells(cells.clone()).unwrap();
        assert_eq!(line.cost(), 2);
        assert_eq!(line.cells(), cells.as_slice());
    }

    #[test]
    fn test_result_accessors() {
        let found = PathResult {
            outcome: PathOutcome::Found(GridPath::from_cells(vec![GridCoord::new(0, 0)]).unwrap()),
            nodes_expanded: 1,
        };
        assert!(found.is_found());
        assert_eq!(found.path().map(GridPath::len), Some(1));

        let missing = PathResult {
            outcome: PathOutcome::NotFound,
            nodes_expanded: 4,
        };
        assert!(missing.is_not_found());
        assert!(missing.into_path().is_none());
    }
}
