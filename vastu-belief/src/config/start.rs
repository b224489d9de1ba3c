//! Start pose configuration section.

use serde::{Deserialize, Serialize};

use crate::core::{Heading, Pose};

use super::defaults;

/// Initial agent pose
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartSection {
    /// Start row
    #[serde(default = "defaults::start_coord")]
    pub x: i32,

    /// Start column
    #[serde(default = "defaults::start_coord")]
    pub y: i32,

    /// Start heading (North, East, South, West)
    #[serde(default = "defaults::heading")]
    pub heading: Heading,
}

impl Default for StartSection {
    fn default() -> Self {
        Self {
            x: defaults::start_coord(),
            y: defaults::start_coord(),
            heading: defaults::heading(),
        }
    }
}

impl StartSection {
    /// Convert to Pose
    pub fn to_pose(&self) -> Pose {
        Pose::new(self.x, self.y, self.heading)
    }
}
