//! Pathfinding configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::pathfinding::{AStarConfig, Heuristic};

/// A* settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathfindingSection {
    /// Heuristic: `manhattan` (optimal) or `squared_euclidean`
    #[serde(default = "defaults::heuristic")]
    pub heuristic: Heuristic,

    /// Maximum nodes to expand (omit for unlimited)
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: Option<usize>,
}

impl Default for PathfindingSection {
    fn default() -> Self {
        Self {
            heuristic: defaults::heuristic(),
            max_iterations: defaults::max_iterations(),
        }
    }
}

impl From<&PathfindingSection> for AStarConfig {
    fn from(section: &PathfindingSection) -> Self {
        AStarConfig {
            heuristic: section.heuristic,
            max_iterations: section.max_iterations,
            cancel: None,
        }
    }
}
