//! Cell storage for the belief grid.
//!
//! Cells are kept in one flat array, row-major by x:
//! ```text
//! index = x * height + y
//! ```
//! The border ring has slots in the array but they are never written.
//! Reads on the ring always yield [`CellState::Edge`].

use crate::core::{CellState, GridCoord};
use crate::error::{BeliefError, Result};

use super::types::CellCounts;

/// Flat storage of believed cell states.
#[derive(Clone, Debug)]
pub struct BeliefStorage {
    cells: Vec<CellState>,
    width: usize,
    height: usize,
}

impl BeliefStorage {
    /// Create storage with every cell `Unknown`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![CellState::Unknown; width * height],
            width,
            height,
        }
    }

    /// Extent along x, border included
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Extent along y, border included
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Is the coordinate on the outer border ring?
    #[inline]
    pub fn is_border(&self, coord: GridCoord) -> bool {
        let (x, y) = (i64::from(coord.x), i64::from(coord.y));
        x == 0 || x == self.width as i64 - 1 || y == 0 || y == self.height as i64 - 1
    }

    /// Is the coordinate strictly inside the border ring?
    #[inline]
    pub fn is_inbounds(&self, coord: GridCoord) -> bool {
        let (x, y) = (i64::from(coord.x), i64::from(coord.y));
        x > 0 && x < self.width as i64 - 1 && y > 0 && y < self.height as i64 - 1
    }

    /// Is the coordinate anywhere within the full grid extent?
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    #[inline]
    fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.x as usize * self.height + coord.y as usize)
        } else {
            None
        }
    }

    fn out_of_range(&self, coord: GridCoord) -> BeliefError {
        BeliefError::OutOfRange {
            x: coord.x,
            y: coord.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Believed state at `coord`.
    ///
    /// Border cells read as `Edge` regardless of storage. Coordinates that
    /// are neither border nor interior are an error.
    pub fn state_at(&self, coord: GridCoord) -> Result<CellState> {
        if self.is_border(coord) {
            return Ok(CellState::Edge);
        }
        if !self.is_inbounds(coord) {
            return Err(self.out_of_range(coord));
        }
        self.coord_to_index(coord)
            .map(|i| self.cells[i])
            .ok_or_else(|| self.out_of_range(coord))
    }

    /// Store a state for an interior cell.
    ///
    /// Returns whether the stored value changed.
    pub fn set(&mut self, coord: GridCoord, state: CellState) -> Result<bool> {
        debug_assert_ne!(state, CellState::Edge, "Edge is never stored");

        if !self.is_inbounds(coord) {
            return Err(self.out_of_range(coord));
        }
        let i = self
            .coord_to_index(coord)
            .ok_or_else(|| self.out_of_range(coord))?;

        let changed = self.cells[i] != state;
        self.cells[i] = state;
        Ok(changed)
    }

    /// Iterate interior cells with their stored state.
    pub fn iter_interior(&self) -> impl Iterator<Item = (GridCoord, CellState)> + '_ {
        let xs = 1..self.width.saturating_sub(1);
        xs.flat_map(move |x| {
            (1..self.height.saturating_sub(1)).map(move |y| {
                let coord = GridCoord::new(x as i32, y as i32);
                (coord, self.cells[x * self.height + y])
            })
        })
    }

    /// Count interior cells by state.
    pub fn count_by_state(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for (_, state) in self.iter_interior() {
            match state {
                CellState::Unknown => counts.unknown += 1,
                CellState::Wall => counts.wall += 1,
                CellState::Clean => counts.clean += 1,
                CellState::Dirt => counts.dirt += 1,
                CellState::Edge => {}
            }
        }
        counts
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Unknown);
    }
}
