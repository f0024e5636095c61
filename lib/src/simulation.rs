//! Automatic stepping.

use crate::{
    cells::{CellState, Coord},
    engine::Engine,
    grid::Grid,
};
use log::{debug, trace, warn};
use std::{
    panic::{self, AssertUnwindSafe},
    sync::{
        mpsc::{self, RecvTimeoutError, Sender},
        Arc, Mutex, MutexGuard, PoisonError,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

/// Locks the engine, ignoring poisoning.
///
/// A panicking observer or listener leaves the engine in a consistent state:
/// the grid is always updated before anyone is notified,
/// and the listeners stay subscribed.
fn lock(engine: &Mutex<Engine>) -> MutexGuard<'_, Engine> {
    engine.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A background thread that steps the engine at a fixed interval.
struct Ticker {
    /// Dropping or sending on it stops the thread.
    cancel: Sender<()>,

    /// The thread.
    handle: JoinHandle<()>,
}

impl Ticker {
    fn spawn(engine: Arc<Mutex<Engine>>, interval: Duration) -> Self {
        let (cancel, cancelled) = mpsc::channel();
        let handle = thread::spawn(move || loop {
            match cancelled.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    trace!("Tick.");
                    let stepped = panic::catch_unwind(AssertUnwindSafe(|| {
                        lock(&engine).step();
                    }));
                    if stepped.is_err() {
                        warn!("A step panicked. Automatic stepping stopped.");
                        lock(&engine).record_refresh_rate(Duration::ZERO);
                        break;
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        Ticker { cancel, handle }
    }

    /// Whether the thread is still stepping.
    fn is_alive(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stops the thread and waits for it to finish,
    /// so that no step happens after this returns.
    fn cancel(self) {
        // The thread may already have quit, in which case nobody is listening.
        let _ = self.cancel.send(());
        if self.handle.join().is_err() {
            debug!("The ticker thread panicked.");
        }
    }
}

/// An [`Engine`] that can step by itself.
///
/// The engine lives behind a mutex shared with the ticker thread.
/// Direct calls and automatic steps never interleave.
///
/// Observers and listeners of the engine are called on the ticker thread
/// during automatic steps, while the mutex is held.
/// They must not try to lock the engine again.
pub struct Simulation {
    /// The engine.
    engine: Arc<Mutex<Engine>>,

    /// The ticker, when automatic stepping is on.
    ticker: Option<Ticker>,
}

impl Simulation {
    /// Wraps an engine. Automatic stepping is off.
    pub fn new(mut engine: Engine) -> Self {
        engine.record_refresh_rate(Duration::ZERO);
        Simulation {
            engine: Arc::new(Mutex::new(engine)),
            ticker: None,
        }
    }

    /// Locks the engine for direct access.
    ///
    /// Automatic steps wait until the guard is dropped.
    pub fn engine(&self) -> MutexGuard<'_, Engine> {
        lock(&self.engine)
    }

    /// A copy of the current grid.
    pub fn grid(&self) -> Grid {
        self.engine().grid().clone()
    }

    /// Steps once and returns a copy of the new grid.
    pub fn step(&self) -> Grid {
        self.engine().step().clone()
    }

    /// See [`Engine::set_grid`].
    pub fn set_grid(&self, grid: Grid) {
        self.engine().set_grid(grid);
    }

    /// See [`Engine::set_grid_named`].
    pub fn set_grid_named<S: Into<String>>(&self, name: S, grid: Grid) {
        self.engine().set_grid_named(name, grid);
    }

    /// See [`Engine::change_grid_size`].
    pub fn change_grid_size(&self, rows: usize, cols: usize) {
        self.engine().change_grid_size(rows, cols);
    }

    /// See [`Engine::set_cell`].
    pub fn set_cell(&self, coord: Coord, state: CellState) {
        self.engine().set_cell(coord, state);
    }

    /// See [`Engine::toggle_cell`].
    pub fn toggle_cell(&self, coord: Coord) {
        self.engine().toggle_cell(coord);
    }

    /// Interval between two automatic steps. Zero if not running.
    pub fn refresh_rate(&self) -> Duration {
        self.engine().refresh_rate()
    }

    /// Whether automatic stepping is on.
    ///
    /// It turns off by itself if a step panics.
    pub fn is_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(Ticker::is_alive)
    }

    /// Sets the interval between two automatic steps.
    ///
    /// Any running timer is cancelled first, and no step fired by it
    /// can happen after this returns.
    /// A zero interval turns automatic stepping off.
    pub fn set_refresh_rate(&mut self, refresh_rate: Duration) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
            debug!("Automatic stepping stopped.");
        }
        self.engine().record_refresh_rate(refresh_rate);
        if !refresh_rate.is_zero() {
            debug!("Stepping every {:?}.", refresh_rate);
            self.ticker = Some(Ticker::spawn(Arc::clone(&self.engine), refresh_rate));
        }
    }

    /// Turns automatic stepping off.
    pub fn stop(&mut self) {
        self.set_refresh_rate(Duration::ZERO);
    }
}

impl From<Engine> for Simulation {
    fn from(engine: Engine) -> Self {
        Simulation::new(engine)
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Simulation::new(Engine::default())
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}
