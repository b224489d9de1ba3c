//! Compass heading and relative turn directions.

use serde::{Deserialize, Serialize};

/// Absolute heading of the agent on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    /// Towards decreasing x
    North,
    /// Towards increasing y
    East,
    /// Towards increasing x
    South,
    /// Towards decreasing y
    West,
}

impl Heading {
    /// All four headings, clockwise from North.
    pub const ALL: [Heading; 4] = [
        Heading::North,
        Heading::East,
        Heading::South,
        Heading::West,
    ];

    /// Heading after a 90° counter-clockwise turn (N→W→S→E→N).
    #[inline]
    pub fn turn_left(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Heading after a 90° clockwise turn (N→E→S→W→N).
    #[inline]
    pub fn turn_right(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Heading obtained by looking in a relative direction.
    #[inline]
    pub fn turned(self, direction: TurnDirection) -> Heading {
        match direction {
            TurnDirection::Forward => self,
            TurnDirection::Left => self.turn_left(),
            TurnDirection::Right => self.turn_right(),
        }
    }
}

/// Direction relative to the current heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnDirection {
    /// Keep the current heading
    Forward,
    /// Rotate 90° counter-clockwise
    Left,
    /// Rotate 90° clockwise
    Right,
}
