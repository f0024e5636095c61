//! The grid.

use crate::{
    cells::{CellState, Coord},
    generations::Generations,
};
use rand::Rng;
use std::{
    fmt::{self, Display, Formatter},
    ops::Index,
};

/// Offsets of the eight neighbors of a cell.
const NEIGHBORHOOD: [Coord; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cells of the glider in [`Grid::glider`].
const GLIDER: [Coord; 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// Normalizes a coordinate into `0..size`.
#[inline]
fn wrap(v: i32, size: usize) -> usize {
    (v as i64).rem_euclid(size as i64) as usize
}

/// A rectangular grid of cells whose edges wrap around.
///
/// The size of a grid never changes after its creation,
/// but the states of its cells can be changed with [`set`](Grid::set).
///
/// Every coordinate is valid: rows and columns are taken modulo
/// the number of rows and columns. A grid with no cells reads as
/// [`Empty`](CellState::Empty) everywhere and ignores writes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Number of rows.
    rows: usize,

    /// Number of columns.
    cols: usize,

    /// The cells, row by row.
    cells: Box<[CellState]>,
}

impl Grid {
    /// Creates a new grid, calling `init` exactly once for each cell
    /// to get its initial state.
    pub fn new<F>(rows: usize, cols: usize, init: F) -> Self
    where
        F: FnMut(Coord) -> CellState,
    {
        let cells = positions(rows, cols).map(init).collect();
        Grid { rows, cols, cells }
    }

    /// Creates a grid where every cell is [`Empty`](CellState::Empty).
    pub fn empty(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![CellState::Empty; rows * cols].into_boxed_slice(),
        }
    }

    /// Creates a grid where the given cells are [`Alive`](CellState::Alive)
    /// and the rest are [`Empty`](CellState::Empty).
    ///
    /// The coordinates wrap around as usual.
    pub fn from_living<I>(rows: usize, cols: usize, living: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut grid = Grid::empty(rows, cols);
        for coord in living {
            grid.set(coord, CellState::Alive);
        }
        grid
    }

    /// Creates a grid with a glider in its top left corner.
    pub fn glider(rows: usize, cols: usize) -> Self {
        Grid::from_living(rows, cols, GLIDER)
    }

    /// Creates a grid where each cell is alive with the given probability.
    ///
    /// `density` is clamped to `0.0..=1.0`.
    pub fn random<R: Rng>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Self {
        let density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };
        Grid::new(rows, cols, |_| {
            if rng.gen_bool(density) {
                CellState::Alive
            } else {
                CellState::Empty
            }
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Position of a cell in `cells`.
    fn offset(&self, (row, col): Coord) -> Option<usize> {
        if self.cells.is_empty() {
            None
        } else {
            Some(wrap(row, self.rows) * self.cols + wrap(col, self.cols))
        }
    }

    /// Gets the state of a cell.
    #[inline]
    pub fn get(&self, coord: Coord) -> CellState {
        self.offset(coord)
            .map_or(CellState::Empty, |offset| self.cells[offset])
    }

    /// Sets the state of a cell.
    #[inline]
    pub fn set(&mut self, coord: Coord, state: CellState) {
        if let Some(offset) = self.offset(coord) {
            self.cells[offset] = state;
        }
    }

    /// Toggles a cell between living and not living.
    ///
    /// See [`CellState::toggled`].
    pub fn toggle(&mut self, coord: Coord) {
        let state = self.get(coord).toggled();
        self.set(coord, state);
    }

    /// Iterates over all coordinates of the grid, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Coord> {
        positions(self.rows, self.cols)
    }

    /// Iterates over all cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    /// Number of living neighbors of a cell.
    fn living_neighbors(&self, (row, col): Coord) -> usize {
        NEIGHBORHOOD
            .iter()
            .filter(|(dr, dc)| self.get((row + dr, col + dc)).is_alive())
            .count()
    }

    /// Computes the next generation.
    ///
    /// Survival on 2 or 3 living neighbors, birth on 3.
    /// The grid itself is left untouched.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Self {
        Grid::new(self.rows, self.cols, |coord| {
            self.get(coord).successor(self.living_neighbors(coord))
        })
    }

    /// Coordinates of all living cells, row by row.
    pub fn living_positions(&self) -> Vec<Coord> {
        self.iter()
            .filter(|(_, state)| state.is_alive())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    /// Counts the cells in each state.
    pub fn cell_counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for &state in self.cells.iter() {
            match state {
                CellState::Alive => counts.alive += 1,
                CellState::Empty => counts.empty += 1,
                CellState::Born => counts.born += 1,
                CellState::Died => counts.died += 1,
            }
        }
        counts
    }

    /// An iterator over the following generations,
    /// which stops as soon as a configuration repeats.
    pub fn generations(&self) -> Generations {
        Generations::new(self.clone())
    }
}

/// Coordinates of a `rows` by `cols` grid, row by row.
fn positions(rows: usize, cols: usize) -> impl Iterator<Item = Coord> {
    (0..rows).flat_map(move |row| (0..cols).map(move |col| (row as i32, col as i32)))
}

/// Reads a cell with `grid[(row, col)]`.
impl Index<Coord> for Grid {
    type Output = CellState;

    fn index(&self, coord: Coord) -> &Self::Output {
        match self.offset(coord) {
            Some(offset) => &self.cells[offset],
            None => &CellState::Empty,
        }
    }
}

/// Displays the grid in [Plaintext](https://conwaylife.com/wiki/Plaintext)-like
/// format, one line per row.
///
/// * **Living** cells are represented by `*`;
/// * **Dead** cells are represented by `.`.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.cols) {
            for state in row {
                write!(f, "{}", state)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Number of cells in each state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellCounts {
    /// Number of [`Alive`](CellState::Alive) cells.
    pub alive: usize,
    /// Number of [`Empty`](CellState::Empty) cells.
    pub empty: usize,
    /// Number of [`Born`](CellState::Born) cells.
    pub born: usize,
    /// Number of [`Died`](CellState::Died) cells.
    pub died: usize,
}

impl CellCounts {
    /// Number of cells in the given state.
    pub fn count(&self, state: CellState) -> usize {
        match state {
            CellState::Alive => self.alive,
            CellState::Empty => self.empty,
            CellState::Born => self.born,
            CellState::Died => self.died,
        }
    }

    /// Number of living cells.
    pub fn living(&self) -> usize {
        self.alive + self.born
    }

    /// Total number of cells.
    pub fn total(&self) -> usize {
        self.iter().map(|(_, count)| count).sum()
    }

    /// Each state with its count, in the order of [`CellState::ALL`].
    pub fn iter(&self) -> impl Iterator<Item = (CellState, usize)> + '_ {
        CellState::ALL
            .iter()
            .map(move |&state| (state, self.count(state)))
    }
}
