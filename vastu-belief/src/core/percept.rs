//! Local percepts reported by the environment after each action.

use serde::{Deserialize, Serialize};

/// Percept pair for one time step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Percept {
    /// Dirt sensed under the agent
    pub dirt: bool,
    /// Last forward move hit an obstacle
    pub bump: bool,
}

impl Percept {
    /// Create a new percept
    #[inline]
    pub fn new(dirt: bool, bump: bool) -> Self {
        Self { dirt, bump }
    }
}
