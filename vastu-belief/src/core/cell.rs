//! Cell states for the belief grid.
//!
//! A cell state is what the agent *believes* about a square, inferred from
//! its own action history and percepts. It can be wrong.

use serde::{Deserialize, Serialize};

/// Believed state of a single square.
///
/// - `Unknown` - Never visited or bumped into
/// - `Wall` - Bumped into while moving forward
/// - `Edge` - Outer border ring (synthesized on read, never stored)
/// - `Clean` - Visited, no dirt sensed (or sucked)
/// - `Dirt` - Visited, dirt sensed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Never visited or bumped
    #[default]
    Unknown = 0,

    /// Interior obstacle inferred from a bump
    Wall = 1,

    /// Part of the outer border ring
    Edge = 2,

    /// Visited and believed clean
    Clean = 3,

    /// Visited and believed dirty
    Dirt = 4,
}

impl CellState {
    /// Has anything been learned about this cell?
    #[inline]
    pub fn is_known(self) -> bool {
        self != CellState::Unknown
    }

    /// Can the agent not enter this cell?
    #[inline]
    pub fn is_obstacle(self) -> bool {
        matches!(self, CellState::Wall | CellState::Edge)
    }

    /// Has the agent stood on this cell?
    #[inline]
    pub fn is_visited(self) -> bool {
        matches!(self, CellState::Clean | CellState::Dirt)
    }

    /// Convert from a raw code. Unrecognised codes map to `Unknown`.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => CellState::Wall,
            2 => CellState::Edge,
            3 => CellState::Clean,
            4 => CellState::Dirt,
            _ => CellState::Unknown,
        }
    }
}
