//! Iterating over generations until the pattern repeats.

use crate::{cells::Coord, grid::Grid};
use log::debug;
use std::iter::FusedIterator;

/// An iterator over the successive generations of a grid.
///
/// Each call to [`next`](Iterator::next) computes one more generation.
/// The iterator stops, for good, at the first generation whose
/// living cells are exactly those of an earlier generation
/// (the starting grid included). That generation is not yielded.
///
/// Since the grid is finite, every pattern eventually becomes periodic,
/// so the iterator always terminates.
///
/// Every new generation is compared against the whole history,
/// so the cost is quadratic in the number of generations.
#[derive(Clone, Debug)]
pub struct Generations {
    /// The latest generation.
    grid: Grid,

    /// Living cells of every visited generation, oldest first.
    ///
    /// Entries are never modified after being pushed.
    history: Vec<Vec<Coord>>,

    /// Whether a repeat has been found.
    done: bool,
}

impl Generations {
    /// Starts iterating from `grid`.
    ///
    /// The starting grid is not yielded by the iterator,
    /// but it counts as a visited generation.
    pub fn new(grid: Grid) -> Self {
        let history = vec![grid.living_positions()];
        Generations {
            grid,
            history,
            done: false,
        }
    }

    /// The latest generation yielded, or the starting grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of visited generations, the starting grid included.
    pub fn visited(&self) -> usize {
        self.history.len()
    }

    /// Whether the iterator has found a repeat.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// How many generations back the repeated configuration was seen,
    /// if the living cells `living` were already visited.
    fn period_of(&self, living: &[Coord]) -> Option<usize> {
        self.history
            .iter()
            .rev()
            .position(|visited| visited.as_slice() == living)
            .map(|i| i + 1)
    }
}

impl Iterator for Generations {
    type Item = Grid;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let grid = self.grid.next();
        let living = grid.living_positions();
        if let Some(period) = self.period_of(&living) {
            debug!(
                "Found a cycle of period {} after {} generations.",
                period,
                self.history.len()
            );
            self.done = true;
            return None;
        }
        self.history.push(living);
        self.grid = grid.clone();
        Some(grid)
    }
}

impl FusedIterator for Generations {}
