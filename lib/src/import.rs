//! Turning imported records into grids.
//!
//! A record only lists the living cells. The size of the grid is guessed
//! from the largest coordinate, following an [`ImportPolicy`].

use crate::{
    cells::{CellState, Coord},
    error::Error,
    grid::Grid,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A configuration as published by a pattern source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImportRecord {
    /// The title.
    pub title: String,

    /// Living cells, as `[row, column]` pairs.
    pub contents: Vec<Vec<i32>>,
}

impl ImportRecord {
    /// Creates a record from a title and a list of living cells.
    pub fn new<S, I>(title: S, living: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Coord>,
    {
        ImportRecord {
            title: title.into(),
            contents: living.into_iter().map(|(r, c)| vec![r, c]).collect(),
        }
    }

    /// The living cells, or the first entry that is not a pair.
    pub fn living(&self) -> Result<Vec<Coord>, Error> {
        self.contents
            .iter()
            .map(|coord| match coord.as_slice() {
                &[row, col] => Ok((row, col)),
                _ => Err(Error::MalformedCoord {
                    title: self.title.clone(),
                    coord: coord.clone(),
                }),
            })
            .collect()
    }

    /// Builds the grid with the default [`ImportPolicy`].
    pub fn grid(&self) -> Result<Grid, Error> {
        ImportPolicy::default().grid(self)
    }
}

/// How to choose the size of an imported grid.
///
/// Let `max` be the largest coordinate in the record,
/// but at least [`min_size`](ImportPolicy::min_size).
///
/// * If `max` is in the large band, the grid is about as large as `max`:
///   `max` rounded up to a multiple of ten.
/// * Otherwise the grid is twice `max` rounded up to a multiple of ten.
///
/// Records that would need a grid larger than
/// [`max_size`](ImportPolicy::max_size) are rejected.
///
/// Imported grids are always square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImportPolicy {
    /// The smallest value of `max`.
    pub min_size: usize,

    /// Lower end of the large band.
    pub large_min: usize,

    /// Upper end of the large band.
    pub large_max: usize,

    /// The largest grid allowed.
    pub max_size: usize,
}

impl Default for ImportPolicy {
    fn default() -> Self {
        ImportPolicy {
            min_size: 10,
            large_min: 75,
            large_max: 150,
            max_size: 150,
        }
    }
}

impl ImportPolicy {
    /// Sets the smallest value of `max`.
    pub fn set_min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size;
        self
    }

    /// Sets the large band.
    pub fn set_large_band(mut self, large_min: usize, large_max: usize) -> Self {
        self.large_min = large_min;
        self.large_max = large_max;
        self
    }

    /// Sets the largest grid allowed.
    pub fn set_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// The size of the grid for the given living cells,
    /// before checking [`max_size`](ImportPolicy::max_size).
    pub fn grid_size(&self, living: &[Coord]) -> usize {
        let max = living
            .iter()
            .flat_map(|&(row, col)| [row, col])
            .filter_map(|v| usize::try_from(v).ok())
            .fold(self.min_size, usize::max);
        let rounded = max.div_ceil(10) * 10;
        if (self.large_min..=self.large_max).contains(&max) {
            rounded
        } else {
            rounded * 2
        }
    }

    /// Builds the grid of a record.
    ///
    /// Either the whole record is accepted, or nothing is built.
    pub fn grid(&self, record: &ImportRecord) -> Result<Grid, Error> {
        let living = record.living()?;
        let size = self.grid_size(&living);
        if size > self.max_size {
            return Err(Error::GridTooLarge {
                title: record.title.clone(),
                size,
                max: self.max_size,
            });
        }
        let mut grid = Grid::empty(size, size);
        for coord in living {
            grid.set(coord, CellState::Alive);
        }
        Ok(grid)
    }
}
