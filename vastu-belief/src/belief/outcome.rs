//! Result of applying one step to the belief grid.

use serde::{Deserialize, Serialize};

use crate::core::{CellState, GridCoord, Heading};

/// The single effect one `update` call had on the belief.
///
/// Each variant touches at most one cell and at most one of
/// position/heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// No-op step: current cell marked from the dirt percept
    Observed {
        /// Current cell
        coord: GridCoord,
        /// Clean or Dirt
        state: CellState,
    },

    /// Suck step: current cell marked clean
    Cleaned {
        /// Current cell
        coord: GridCoord,
    },

    /// Turn step: heading rotated
    Turned {
        /// New heading
        heading: Heading,
    },

    /// Forward step that succeeded
    Moved {
        /// New position
        to: GridCoord,
        /// Clean or Dirt
        state: CellState,
    },

    /// Forward step that bumped
    Bumped {
        /// Cell recorded as wall, `None` when the blocked cell is on the border
        wall: Option<GridCoord>,
    },
}

impl StepOutcome {
    /// The cell whose stored state was written, if any.
    pub fn changed_cell(&self) -> Option<GridCoord> {
        match *self {
            StepOutcome::Observed { coord, .. } => Some(coord),
            StepOutcome::Cleaned { coord } => Some(coord),
            StepOutcome::Moved { to, .. } => Some(to),
            StepOutcome::Bumped { wall } => wall,
            StepOutcome::Turned { .. } => None,
        }
    }

    /// Did the agent change position?
    pub fn moved(&self) -> bool {
        matches!(self, StepOutcome::Moved { .. })
    }

    /// Did the agent change heading?
    pub fn turned(&self) -> bool {
        matches!(self, StepOutcome::Turned { .. })
    }
}
