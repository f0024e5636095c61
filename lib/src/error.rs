//! All kinds of errors in this crate.

use crate::cells::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Index {index} is out of range for a registry of length {len}.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the registry.
        len: usize,
    },
    /// Configuration {title:?} contains a coordinate that is not a pair: {coord:?}.
    MalformedCoord {
        /// Title of the offending record.
        title: String,
        /// The offending entry.
        coord: Vec<i32>,
    },
    /// Configuration {title:?} needs a {size}x{size} grid, larger than the maximum {max}.
    GridTooLarge {
        /// Title of the offending record.
        title: String,
        /// The computed grid size.
        size: usize,
        /// The largest allowed size.
        max: usize,
    },
    /// Cell at {0:?} lies outside a {1}x{2} grid.
    CellOutOfBounds(Coord, usize, usize),
}
