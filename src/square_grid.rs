use crate::{Coord, Matrix};
use boolinator::Boolinator;
use log::debug;
use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;
use std::collections::HashSet;
use std::iter::once;

/// A dense bounded grid of Game of Life cells.
///
/// Cells live in a row-major boolean store sized `width * height`, mirrored by a
/// set of the alive coordinates so that `active_cells` costs O(population) rather
/// than O(area). Every coordinate in the mirror set is in bounds.
#[derive(Clone, Debug)]
pub struct SquareGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    active: HashSet<Coord>,
}

impl SquareGrid {
    #[inline]
    fn index(&self, coord: Coord) -> usize {
        coord.y * self.width + coord.x
    }
}

/// Dimensions plus the active set fully determine the dense store, so equality
/// ignores `cells`. This is what lets hosts stop on a fixed point by comparing
/// consecutive generations.
impl PartialEq for SquareGrid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.active == other.active
    }
}

impl Eq for SquareGrid {}

impl Matrix for SquareGrid {
    fn new(width: usize, height: usize) -> Self {
        assert!(
            width >= 1 && height >= 1,
            "lifegrid::SquareGrid::new: grid is empty, which isnt allowed"
        );
        SquareGrid {
            width,
            height,
            cells: vec![false; width * height],
            active: HashSet::new(),
        }
    }

    fn new_coords<I>(width: usize, height: usize, coords: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut grid = Self::new(width, height);
        for coord in coords {
            grid.set_alive(coord, true);
        }
        grid
    }

    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn is_alive(&self, coord: Coord) -> bool {
        assert!(
            self.contains(coord),
            "lifegrid::SquareGrid::is_alive: {:?} is out of bounds on a {}x{} grid",
            coord,
            self.width,
            self.height
        );
        self.cells[self.index(coord)]
    }

    fn set_alive(&mut self, coord: Coord, alive: bool) {
        assert!(
            self.contains(coord),
            "lifegrid::SquareGrid::set_alive: {:?} is out of bounds on a {}x{} grid",
            coord,
            self.width,
            self.height
        );
        let ix = self.index(coord);
        self.cells[ix] = alive;
        if alive {
            self.active.insert(coord);
        } else {
            self.active.remove(&coord);
        }
    }

    #[inline]
    fn active_cells(&self) -> &HashSet<Coord> {
        &self.active
    }

    /// Run the standard birth/survival rule over one generation.
    ///
    /// Only the alive cells and their neighborhoods can change, so the scan covers
    /// exactly that candidate set instead of the whole area. Every read goes to the
    /// previous generation's snapshot; the result is written into a fresh grid.
    fn step(&self) -> Self {
        let candidates: HashSet<Coord> = self
            .active
            .iter()
            .flat_map(|&cell| once(cell).chain(cell.neighbors()))
            .filter(|&cell| self.contains(cell))
            .collect();

        let next: HashSet<Coord> = candidates
            .par_iter()
            .filter_map(|&cell| {
                let neighbors = cell
                    .neighbors()
                    .filter(|neighbor| self.active.contains(neighbor))
                    .count();
                let lives = if self.active.contains(&cell) {
                    neighbors == 2 || neighbors == 3
                } else {
                    neighbors == 3
                };
                lives.as_some(cell)
            })
            .collect();

        debug!(
            "stepped {}x{} grid: {} -> {} active cells",
            self.width,
            self.height,
            self.active.len(),
            next.len()
        );

        Self::new_coords(self.width, self.height, next)
    }
}
