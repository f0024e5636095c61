//! A simulation, an editor and a registry working together.

use crate::{
    engine::Engine,
    error::Error,
    import::{ImportPolicy, ImportRecord},
    registry::Registry,
    save::SavedGrid,
    simulation::Simulation,
};
use log::{info, warn};

/// The size the simulation is reset to.
pub const DEFAULT_SIZE: usize = 10;

/// Everything an application needs to run the simulation.
///
/// * The simulation shows the current grid and steps it.
/// * The editor is a scratch engine where a configuration is changed
///   before being committed back to the registry.
/// * The registry stores named configurations.
#[derive(Default)]
pub struct Session {
    /// The simulation.
    simulation: Simulation,

    /// The editor.
    editor: Engine,

    /// Named configurations.
    registry: Registry,

    /// How to size imported records.
    policy: ImportPolicy,
}

impl Session {
    /// Creates a session whose simulation starts with an empty grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Session {
            simulation: Simulation::new(Engine::new(rows, cols)),
            ..Session::default()
        }
    }

    /// Sets how to size imported records.
    pub fn set_policy(mut self, policy: ImportPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The simulation.
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// The simulation, to change its refresh rate.
    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.simulation
    }

    /// The editor.
    pub fn editor(&self) -> &Engine {
        &self.editor
    }

    /// The editor, to change its cells.
    pub fn editor_mut(&mut self) -> &mut Engine {
        &mut self.editor
    }

    /// The registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The registry, to add, replace or remove entries directly.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Adds every acceptable record to the end of the registry.
    ///
    /// Records that fail are skipped. Returns the number of records added.
    pub fn import<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = ImportRecord>,
    {
        let mut count = 0;
        for record in records {
            match self.policy.grid(&record) {
                Ok(grid) => {
                    self.registry.append(record.title, grid);
                    count += 1;
                }
                Err(e) => warn!("Skipping a configuration: {}", e),
            }
        }
        info!("Imported {} configurations.", count);
        count
    }

    /// Loads the configuration at `index` into the simulation.
    pub fn load(&self, index: usize) -> Result<(), Error> {
        let entry = self.registry.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.registry.len(),
        })?;
        self.simulation
            .set_grid_named(entry.title.clone(), entry.grid.clone());
        Ok(())
    }

    /// Saves the current grid of the simulation under a name.
    ///
    /// It is inserted at the front of the registry, and also returned
    /// so that it can be written to storage.
    pub fn save_current<S: Into<String>>(&mut self, title: S) -> SavedGrid {
        let title = title.into();
        let grid = {
            let mut engine = self.simulation.engine();
            engine.rename(title.clone());
            engine.grid().clone()
        };
        let saved = SavedGrid::new(title.clone(), &grid);
        self.registry.prepend(title, grid);
        saved
    }

    /// Loads the configuration at `index` into the editor.
    pub fn edit(&mut self, index: usize) -> Result<(), Error> {
        let entry = self.registry.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.registry.len(),
        })?;
        self.editor
            .set_grid_named(entry.title.clone(), entry.grid.clone());
        Ok(())
    }

    /// Starts editing a new, empty configuration.
    pub fn edit_new(&mut self, rows: usize, cols: usize) {
        self.editor.change_grid_size(rows, cols);
    }

    /// Stores the grid of the editor in the registry, and loads it
    /// into the simulation.
    ///
    /// With an `index`, the entry there is replaced;
    /// otherwise a new entry is added at the end.
    /// Returns the index of the entry.
    pub fn commit_edit<S: Into<String>>(
        &mut self,
        title: S,
        index: Option<usize>,
    ) -> Result<usize, Error> {
        let title = title.into();
        let grid = self.editor.grid().clone();
        let index = match index {
            Some(index) => {
                self.registry.replace(title.clone(), grid.clone(), index)?;
                index
            }
            None => self.registry.append(title.clone(), grid.clone()),
        };
        self.simulation.set_grid_named(title, grid);
        Ok(index)
    }

    /// Starts over with an empty grid of the default size.
    pub fn reset(&self) {
        self.simulation.change_grid_size(DEFAULT_SIZE, DEFAULT_SIZE);
    }
}
