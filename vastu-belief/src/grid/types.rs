//! Types used by belief storage.

use serde::{Deserialize, Serialize};

/// Cell counts by believed state (interior cells only).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCounts {
    /// Cells never visited or bumped.
    pub unknown: usize,
    /// Cells recorded as walls.
    pub wall: usize,
    /// Visited cells believed clean.
    pub clean: usize,
    /// Visited cells believed dirty.
    pub dirt: usize,
}

impl CellCounts {
    /// Total known cells.
    pub fn known(&self) -> usize {
        self.wall + self.clean + self.dirt
    }

    /// Total visited cells.
    pub fn visited(&self) -> usize {
        self.clean + self.dirt
    }

    /// Total cells.
    pub fn total(&self) -> usize {
        self.unknown + self.known()
    }
}
