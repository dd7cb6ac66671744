//! A* planner implementation.

use crate::core::GridCoord;
use crate::error::Result;
use crate::grid::WalkabilityGrid;
use log::{debug, trace};

use super::frontier::Frontier;
use super::types::{
    AStarConfig, AbortReason, GridPath, NodeId, PathOutcome, PathResult, SearchNode,
};

/// A* pathfinder over a borrowed, immutable grid.
///
/// The planner holds no search state between calls, so one planner (or many
/// planners on the same grid) can serve any number of queries.
pub struct AStarPlanner<'a> {
    grid: &'a WalkabilityGrid,
    config: AStarConfig,
}

impl<'a> AStarPlanner<'a> {
    /// Create a new A* planner
    pub fn new(grid: &'a WalkabilityGrid, config: AStarConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a WalkabilityGrid) -> Self {
        Self::new(grid, AStarConfig::default())
    }

    /// Planner configuration
    pub fn config(&self) -> &AStarConfig {
        &self.config
    }

    /// Find a path from start to goal.
    ///
    /// Fails only when `start` or `goal` is outside the grid. An unreachable
    /// goal is reported as [`PathOutcome::NotFound`].
    pub fn find_path(&self, start: GridCoord, goal: GridCoord) -> Result<PathResult> {
        trace!("[AStar] find_path: start={} goal={}", start, goal);

        if let Err(e) = self
            .grid
            .check_bounds(start)
            .and_then(|_| self.grid.check_bounds(goal))
        {
            debug!("[AStar] FAILED: {}", e);
            return Err(e);
        }

        let heuristic = self.config.heuristic;
        let mut nodes: Vec<SearchNode> = Vec::new();
        let mut frontier = Frontier::new();
        let mut closed = vec![false; self.grid.cell_count()];

        let h_start = heuristic.estimate(start, goal);
        nodes.push(SearchNode::new(start, None, 0, h_start));
        frontier.upsert(start, 0, nodes[0].f_cost, h_start);

        let mut nodes_expanded = 0;

        loop {
            if self
                .config
                .cancel
                .as_ref()
                .is_some_and(|token| token.is_cancelled())
            {
                debug!("[AStar] ABORTED: cancelled after {} nodes", nodes_expanded);
                return Ok(Self::aborted(AbortReason::Cancelled, nodes_expanded));
            }

            let Some(current_id) = frontier.pop() else {
                break;
            };
            nodes_expanded += 1;

            if self
                .config
                .max_iterations
                .is_some_and(|max| nodes_expanded > max)
            {
                debug!(
                    "[AStar] ABORTED: IterationLimit ({} nodes)",
                    nodes_expanded
                );
                return Ok(Self::aborted(AbortReason::IterationLimit, nodes_expanded));
            }

            let current = nodes[current_id].clone();
            if let Some(idx) = self.grid.coord_to_index(current.coord) {
                closed[idx] = true;
            }

            // Goal reached
            if current.coord == goal {
                let path = Self::reconstruct_path(&nodes, current_id);
                trace!(
                    "[AStar] SUCCESS: path length={} cells, cost={}, nodes_expanded={}, open={}",
                    path.len(),
                    path.cost(),
                    nodes_expanded,
                    frontier.len()
                );
                return Ok(PathResult {
                    outcome: PathOutcome::Found(path),
                    nodes_expanded,
                });
            }

            for neighbor in current.coord.neighbors_4() {
                // Off-grid neighbors are skipped, never read
                let Some(idx) = self.grid.coord_to_index(neighbor) else {
                    continue;
                };
                if closed[idx] || !self.grid.is_walkable(neighbor) {
                    continue;
                }

                let g = current.g_cost + 1;
                let h = heuristic.estimate(neighbor, goal);
                let candidate = SearchNode::new(neighbor, Some(current_id), g, h);

                let improves = match frontier.tracked(neighbor) {
                    None => true,
                    Some(existing) => candidate.f_cost < nodes[existing].f_cost,
                };
                if improves {
                    let id = nodes.len();
                    frontier.upsert(neighbor, id, candidate.f_cost, h);
                    nodes.push(candidate);
                }
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        Ok(PathResult {
            outcome: PathOutcome::NotFound,
            nodes_expanded,
        })
    }

    fn aborted(reason: AbortReason, nodes_expanded: usize) -> PathResult {
        PathResult {
            outcome: PathOutcome::Aborted(reason),
            nodes_expanded,
        }
    }

    /// Walk parent links from the goal node back to the root
    fn reconstruct_path(nodes: &[SearchNode], goal_id: NodeId) -> GridPath {
        let cost = nodes[goal_id].g_cost;
        let mut cells = Vec::with_capacity(cost as usize + 1);
        let mut cursor = Some(goal_id);

        while let Some(id) = cursor {
            cells.push(nodes[id].coord);
            cursor = nodes[id].parent;
        }
        cells.reverse();

        GridPath::from_parts(cells, cost)
    }
}
