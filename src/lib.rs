//! Lifegrid is a library for running Conway's Game of Life on finite, bounded grids.
//!
//! The universe is a fixed rectangle with no wraparound: coordinates outside it are
//! never alive and contribute nothing to neighbor counts. Stepping never mutates the
//! current generation; it builds a brand-new matrix value, so "has the simulation
//! stabilized" is just an equality comparison against the previous generation.

mod coord;
mod direction;
#[cfg(feature = "persist")]
mod layout;
mod square_grid;

pub use coord::*;
pub use direction::*;
#[cfg(feature = "persist")]
pub use layout::*;
pub use square_grid::*;

use std::collections::HashSet;

/// Defines one generation of a bounded Game of Life universe.
///
/// This enforces a rule in that the next generation is only produced from the old
/// board state. `step` takes the receiver by shared reference and returns a fresh
/// value, which prevents read-after-write hazards from corrupting neighbor counts
/// and lets hosts detect fixed points by comparing consecutive generations.
pub trait Matrix: Sized + PartialEq {
    /// Make a new empty matrix of the given dimensions.
    fn new(width: usize, height: usize) -> Self;

    /// Make a new matrix of the given dimensions with the given cells alive.
    fn new_coords<I>(width: usize, height: usize, coords: I) -> Self
    where
        I: IntoIterator<Item = Coord>;

    /// The matrix width. Fixed for the lifetime of the value.
    fn width(&self) -> usize;

    /// The matrix height. Fixed for the lifetime of the value.
    fn height(&self) -> usize;

    /// Whether `coord` is a valid position on this matrix. This says nothing about
    /// liveness; callers use it to guard reads and writes.
    #[inline]
    fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width() && coord.y < self.height()
    }

    /// Whether the cell at `coord` is alive. Panics if `coord` is out of bounds.
    fn is_alive(&self, coord: Coord) -> bool;

    /// Set the cell at `coord` alive or dead. Panics if `coord` is out of bounds.
    fn set_alive(&mut self, coord: Coord, alive: bool);

    /// The set of all currently alive cells.
    fn active_cells(&self) -> &HashSet<Coord>;

    /// Whether no cell is alive.
    #[inline]
    fn is_empty(&self) -> bool {
        self.active_cells().is_empty()
    }

    /// Produce the next generation. The receiver is left untouched.
    fn step(&self) -> Self;
}
