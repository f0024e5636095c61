//! __Rlifesim__ runs [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! on finite grids whose edges wrap around.
//!
//! * A [`Grid`] computes its own next generation.
//! * [`Generations`] iterates over generations until the pattern repeats.
//! * An [`Engine`] owns the current grid and notifies an observer and
//!   any number of listeners whenever it changes.
//! * A [`Simulation`] steps an engine at a fixed interval.
//! * A [`Registry`] stores named grids.
//! * A [`Session`] puts all of them together.
//!
//! # Example
//!
//! ```rust
//! use rlifesim_lib::{Engine, Grid};
//!
//! let mut engine = Engine::with_grid(Grid::glider(8, 8));
//! for _ in 0..4 {
//!     engine.step();
//! }
//! assert_eq!(
//!     engine.grid().living_positions(),
//!     vec![(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]
//! );
//! ```

mod cells;
mod engine;
mod error;
mod generations;
mod grid;
mod import;
mod registry;
mod save;
mod session;
mod simulation;

pub use cells::{CellState, Coord};
pub use engine::{Engine, Listener, ListenerId, Observer};
pub use error::Error;
pub use generations::Generations;
pub use grid::{CellCounts, Grid};
pub use import::{ImportPolicy, ImportRecord};
pub use registry::{Entry, Registry};
pub use save::{GridSer, SavedGrid};
pub use session::{Session, DEFAULT_SIZE};
pub use simulation::Simulation;
