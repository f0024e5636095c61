//! Saves grids.

use crate::{
    cells::{CellState, Coord},
    error::Error,
    grid::Grid,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A representation of a grid which can be easily serialized.
///
/// Only the living cells are kept, so the transitional states
/// are saved as their steady counterparts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridSer {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// Living cells, row by row.
    pub living: Vec<Coord>,
}

impl Grid {
    /// Saves the grid as a [`GridSer`].
    pub fn ser(&self) -> GridSer {
        GridSer {
            rows: self.rows(),
            cols: self.cols(),
            living: self.living_positions(),
        }
    }
}

impl GridSer {
    /// Restores the grid.
    ///
    /// Living cells must lie inside the grid; they are not wrapped.
    pub fn grid(&self) -> Result<Grid, Error> {
        let mut grid = Grid::empty(self.rows, self.cols);
        for &(row, col) in &self.living {
            let inside = usize::try_from(row).is_ok_and(|row| row < self.rows)
                && usize::try_from(col).is_ok_and(|col| col < self.cols);
            if !inside {
                return Err(Error::CellOutOfBounds((row, col), self.rows, self.cols));
            }
            grid.set((row, col), CellState::Alive);
        }
        Ok(grid)
    }
}

/// A grid saved under a name, ready to be handed to storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SavedGrid {
    /// The name.
    pub title: String,

    /// The grid.
    pub grid: GridSer,
}

impl SavedGrid {
    /// Saves a grid under a name.
    pub fn new<S: Into<String>>(title: S, grid: &Grid) -> Self {
        SavedGrid {
            title: title.into(),
            grid: grid.ser(),
        }
    }

    /// Restores the grid.
    pub fn restore(&self) -> Result<Grid, Error> {
        self.grid.grid()
    }
}
