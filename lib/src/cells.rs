//! Cells in the cellular automaton.

use educe::Educe;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
///
/// Only two of them matter to the rule: a cell is either living
/// ([`Alive`](CellState::Alive) or [`Born`](CellState::Born))
/// or not ([`Empty`](CellState::Empty) or [`Died`](CellState::Died)).
/// The transitional labels only tell a viewer what happened
/// in the last generation.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellState {
    /// A living cell that was also living in the last generation.
    Alive,
    /// A dead cell that was also dead in the last generation.
    #[educe(Default)]
    Empty,
    /// A living cell that was dead in the last generation.
    Born,
    /// A dead cell that was living in the last generation.
    Died,
}

impl CellState {
    /// All four states, in the order of [`CellCounts::iter`](crate::CellCounts::iter).
    pub const ALL: [CellState; 4] = [
        CellState::Alive,
        CellState::Empty,
        CellState::Born,
        CellState::Died,
    ];

    /// Whether the cell is currently living.
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Alive | CellState::Born)
    }

    /// The state after a click in an editor.
    ///
    /// Living cells become [`Empty`](CellState::Empty),
    /// everything else becomes [`Alive`](CellState::Alive).
    #[inline]
    pub fn toggled(self) -> Self {
        if self.is_alive() {
            CellState::Empty
        } else {
            CellState::Alive
        }
    }

    /// The state of a cell in the next generation,
    /// given its number of living neighbors.
    #[inline]
    pub(crate) fn successor(self, living_neighbors: usize) -> Self {
        match (self.is_alive(), living_neighbors) {
            (true, 2) | (true, 3) => CellState::Alive,
            (false, 3) => CellState::Born,
            (true, _) => CellState::Died,
            (false, _) => CellState::Empty,
        }
    }
}

/// Displays `*` for living cells and `.` for the others.
impl Display for CellState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_alive() {
            f.write_str("*")
        } else {
            f.write_str(".")
        }
    }
}

/// The coordinates of a cell.
///
/// `(row, column)`. Any integer is a valid coordinate;
/// it wraps around the edges of the grid.
pub type Coord = (i32, i32);
