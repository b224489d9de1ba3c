//! Grid coordinates and agent pose.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::heading::Heading;

/// Grid coordinates (integer cell indices)
///
/// `x` is the row axis (North decreases it), `y` is the column axis
/// (West decreases it).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Row index
    pub x: i32,
    /// Column index
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring coordinate one step along `heading`.
    #[inline]
    pub fn step(self, heading: Heading) -> GridCoord {
        match heading {
            Heading::North => GridCoord::new(self.x - 1, self.y),
            Heading::South => GridCoord::new(self.x + 1, self.y),
            Heading::West => GridCoord::new(self.x, self.y - 1),
            Heading::East => GridCoord::new(self.x, self.y + 1),
        }
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Agent position and heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    /// Current square
    pub position: GridCoord,
    /// Current heading
    pub heading: Heading,
}

impl Pose {
    /// Create a new pose
    #[inline]
    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self {
            position: GridCoord::new(x, y),
            heading,
        }
    }

    /// Square directly ahead, assuming no wall.
    #[inline]
    pub fn ahead(&self) -> GridCoord {
        self.position.step(self.heading)
    }
}
