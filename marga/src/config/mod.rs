//! Configuration loading.
//!
//! All settings come from a single YAML file:
//!
//! ```yaml
//! pathfinding:
//!   heuristic: manhattan
//!   max_iterations: 200000
//! ```

mod defaults;
mod pathfinding;

pub use pathfinding::PathfindingSection;

use crate::error::Result;
use crate::pathfinding::AStarConfig;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MargaConfig {
    /// A* settings
    #[serde(default)]
    pub pathfinding: PathfindingSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("[Config] loading {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Planner configuration derived from the pathfinding section
    pub fn astar(&self) -> AStarConfig {
        AStarConfig::from(&self.pathfinding)
    }
}
