//! Named configurations.

use crate::{error::Error, grid::Grid};
use std::mem;

/// A named grid stored in a [`Registry`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// The title. Titles need not be unique.
    pub title: String,
    /// The grid.
    pub grid: Grid,
}

/// An ordered list of named grids, addressed by position.
///
/// A title and its grid are always added, replaced and removed together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Registry::default()
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there is no entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check(&self, index: usize, len: usize) -> Result<(), Error> {
        if index < len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    /// Inserts an entry at `index`, shifting the later entries.
    ///
    /// `index` may be at most [`len`](Registry::len).
    pub fn insert<S: Into<String>>(
        &mut self,
        title: S,
        grid: Grid,
        index: usize,
    ) -> Result<(), Error> {
        self.check(index, self.len() + 1)?;
        let title = title.into();
        self.entries.insert(index, Entry { title, grid });
        Ok(())
    }

    /// Adds an entry at the front.
    pub fn prepend<S: Into<String>>(&mut self, title: S, grid: Grid) {
        let title = title.into();
        self.entries.insert(0, Entry { title, grid });
    }

    /// Adds an entry at the end. Returns its index.
    pub fn append<S: Into<String>>(&mut self, title: S, grid: Grid) -> usize {
        let title = title.into();
        self.entries.push(Entry { title, grid });
        self.entries.len() - 1
    }

    /// Replaces the entry at `index`, returning the old one.
    pub fn replace<S: Into<String>>(
        &mut self,
        title: S,
        grid: Grid,
        index: usize,
    ) -> Result<Entry, Error> {
        self.check(index, self.len())?;
        let title = title.into();
        Ok(mem::replace(&mut self.entries[index], Entry { title, grid }))
    }

    /// Removes the entry at `index`, shifting the later entries.
    pub fn remove(&mut self, index: usize) -> Result<Entry, Error> {
        self.check(index, self.len())?;
        Ok(self.entries.remove(index))
    }

    /// The entry at `index`.
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// The title at `index`.
    pub fn title(&self, index: usize) -> Option<&str> {
        self.get(index).map(|entry| entry.title.as_str())
    }

    /// The grid at `index`.
    pub fn grid(&self, index: usize) -> Option<&Grid> {
        self.get(index).map(|entry| &entry.grid)
    }

    /// Index of the first entry with the given title.
    pub fn position(&self, title: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.title == title)
    }

    /// All titles, in order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.title.as_str())
    }

    /// All entries, in order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<S: Into<String>> FromIterator<(S, Grid)> for Registry {
    fn from_iter<I: IntoIterator<Item = (S, Grid)>>(iter: I) -> Self {
        let mut registry = Registry::new();
        registry.extend(iter);
        registry
    }
}

impl<S: Into<String>> Extend<(S, Grid)> for Registry {
    fn extend<I: IntoIterator<Item = (S, Grid)>>(&mut self, iter: I) {
        for (title, grid) in iter {
            self.append(title, grid);
        }
    }
}
