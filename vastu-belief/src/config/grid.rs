//! Grid configuration section.

use serde::{Deserialize, Serialize};

use crate::grid::GridConfig;

use super::defaults;

/// Grid configuration section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSection {
    /// Extent along x (rows), border included
    #[serde(default = "defaults::grid_size")]
    pub width: usize,

    /// Extent along y (columns), border included
    #[serde(default = "defaults::grid_size")]
    pub height: usize,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            width: defaults::grid_size(),
            height: defaults::grid_size(),
        }
    }
}

impl GridSection {
    /// Convert to GridConfig
    pub fn to_grid_config(&self) -> GridConfig {
        GridConfig::new(self.width, self.height)
    }
}
