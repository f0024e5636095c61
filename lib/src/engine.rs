//! The engine, which owns the current grid and tells others when it changes.

use crate::{
    cells::{CellState, Coord},
    grid::{CellCounts, Grid},
};
use educe::Educe;
use log::{debug, trace};
use std::{
    mem,
    panic::{self, AssertUnwindSafe},
    time::Duration,
};

/// The single observer of an [`Engine`].
///
/// It is called with the new grid after every change.
pub type Observer = Box<dyn FnMut(&Grid) + Send>;

/// A subscriber to the updates of an [`Engine`].
///
/// It is called with the engine itself after every change,
/// after the [`Observer`].
pub type Listener = Box<dyn FnMut(&Engine) + Send>;

/// A handle returned by [`Engine::subscribe`],
/// used to cancel the subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// The engine.
///
/// It owns the current grid. Every change of the grid through
/// [`step`](Engine::step), [`set_grid`](Engine::set_grid),
/// [`change_grid_size`](Engine::change_grid_size) or the cell editing methods
/// is reported, synchronously and after the grid is updated,
/// first to the observer and then to every listener in subscription order.
///
/// An engine does not step by itself. Wrap it in a
/// [`Simulation`](crate::Simulation) for that.
#[derive(Educe)]
#[educe(Debug)]
pub struct Engine {
    /// The current grid.
    grid: Grid,

    /// Number of rows of the current grid.
    rows: usize,

    /// Number of columns of the current grid.
    cols: usize,

    /// Interval between two automatic steps.
    ///
    /// Zero means no automatic stepping.
    refresh_rate: Duration,

    /// Number of steps since the grid was last replaced.
    generation: u64,

    /// The title of the current grid, if it was loaded from a named configuration.
    name: Option<String>,

    /// Cell counts as of the last call to
    /// [`update_cell_status_counts`](Engine::update_cell_status_counts).
    counts: CellCounts,

    /// The observer.
    #[educe(Debug(ignore))]
    observer: Option<Observer>,

    /// All listeners, in subscription order.
    #[educe(Debug(ignore))]
    listeners: Vec<(ListenerId, Listener)>,

    /// The id of the next listener.
    next_listener: u64,
}

impl Engine {
    /// Creates a new engine with an empty grid of the given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        Engine::with_grid(Grid::empty(rows, cols))
    }

    /// Creates a new engine that starts from the given grid.
    pub fn with_grid(grid: Grid) -> Self {
        let (rows, cols) = grid.size();
        Engine {
            grid,
            rows,
            cols,
            refresh_rate: Duration::ZERO,
            generation: 0,
            name: None,
            counts: CellCounts::default(),
            observer: None,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// The current grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
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

    /// Interval between two automatic steps. Zero if not running.
    #[inline]
    pub fn refresh_rate(&self) -> Duration {
        self.refresh_rate
    }

    /// Only the [`Simulation`](crate::Simulation) knows whether a timer is armed.
    pub(crate) fn record_refresh_rate(&mut self, refresh_rate: Duration) {
        self.refresh_rate = refresh_rate;
    }

    /// Number of steps since the grid was last replaced or resized.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The title of the current grid, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Gives the current grid a title.
    pub fn rename<S: Into<String>>(&mut self, name: S) {
        self.name = Some(name.into());
    }

    /// Gets the state of a cell of the current grid.
    #[inline]
    pub fn get(&self, coord: Coord) -> CellState {
        self.grid.get(coord)
    }

    /// Sets the single observer, replacing the old one.
    pub fn set_observer<F>(&mut self, observer: F)
    where
        F: FnMut(&Grid) + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Removes the observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Whether an observer is set.
    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// Adds a listener to be called after every change.
    ///
    /// Keep the returned id to [`unsubscribe`](Engine::unsubscribe) later.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Engine) + Send + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if there is no such listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let len = self.listeners.len();
        self.listeners.retain(|(i, _)| *i != id);
        self.listeners.len() != len
    }

    /// Number of listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Tells the observer and then the listeners that the grid has changed.
    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.grid);
        }
        // Listeners only get a shared reference, so they cannot
        // subscribe or unsubscribe while being called.
        let mut listeners = mem::take(&mut self.listeners);
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            for (_, listener) in listeners.iter_mut() {
                listener(&*self);
            }
        }));
        // A panicking listener must not unsubscribe everyone.
        self.listeners = listeners;
        if let Err(payload) = result {
            panic::resume_unwind(payload);
        }
    }

    /// Replaces the current grid with the next generation.
    pub fn step(&mut self) -> &Grid {
        self.grid = self.grid.next();
        self.generation += 1;
        trace!("Generation {}.", self.generation);
        self.notify();
        &self.grid
    }

    /// Replaces the current grid with the given one, as is.
    ///
    /// The size of the engine follows the size of the new grid.
    pub fn set_grid(&mut self, grid: Grid) {
        self.replace_grid(grid, None);
    }

    /// Replaces the current grid with a named one.
    pub fn set_grid_named<S: Into<String>>(&mut self, name: S, grid: Grid) {
        self.replace_grid(grid, Some(name.into()));
    }

    fn replace_grid(&mut self, grid: Grid, name: Option<String>) {
        let (rows, cols) = grid.size();
        debug!("Setting a {}x{} grid ({:?}).", rows, cols, name);
        self.grid = grid;
        self.rows = rows;
        self.cols = cols;
        self.generation = 0;
        self.name = name;
        self.notify();
    }

    /// Discards the current grid and starts over
    /// with an empty grid of the given size.
    ///
    /// Zero rows or columns give a grid without cells.
    pub fn change_grid_size(&mut self, rows: usize, cols: usize) {
        debug!("Resizing to {}x{}.", rows, cols);
        self.grid = Grid::empty(rows, cols);
        self.rows = rows;
        self.cols = cols;
        self.generation = 0;
        self.name = None;
        self.notify();
    }

    /// Sets the state of a cell of the current grid.
    pub fn set_cell(&mut self, coord: Coord, state: CellState) {
        self.grid.set(coord, state);
        self.notify();
    }

    /// Toggles a cell of the current grid.
    pub fn toggle_cell(&mut self, coord: Coord) {
        self.grid.toggle(coord);
        self.notify();
    }

    /// Recounts the cells in each state.
    ///
    /// The counts returned by [`cell_counts`](Engine::cell_counts)
    /// are only updated by this method.
    pub fn update_cell_status_counts(&mut self) -> CellCounts {
        self.counts = self.grid.cell_counts();
        self.counts
    }

    /// Cell counts as of the last call to
    /// [`update_cell_status_counts`](Engine::update_cell_status_counts).
    #[inline]
    pub fn cell_counts(&self) -> CellCounts {
        self.counts
    }
}

impl Default for Engine {
    /// A 10x10 empty engine.
    fn default() -> Self {
        Engine::new(10, 10)
    }
}
