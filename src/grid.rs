//! Dense rectangular grid of cells, generic over the grid role.

use alloc::vec::Vec;
use core::fmt;

use crate::cell::{Cell, CellState, SeaState, TargetState};
use crate::common::{Coord, SeaError, DIAGONAL, ORTHOGONAL};

/// A player's own fleet grid.
pub type SeaGrid = Grid<SeaState>;

/// A shooter's overlay of what is known about the opponent's grid.
pub type TargetGrid = Grid<TargetState>;

/// `width × height` cells stored row-major, one per coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<S> {
    width: usize,
    height: usize,
    cells: Vec<Cell<S>>,
}

impl<S: CellState> Grid<S> {
    /// Create a grid with every cell in the default (empty) state.
    pub fn new(width: usize, height: usize) -> Result<Self, SeaError> {
        if width == 0 || height == 0 {
            return Err(SeaError::InvalidSize { width, height });
        }
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(Coord::new(x, y))))
            .collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from rows of state symbols, top row first.
    pub fn from_rows(rows: &[&str]) -> Result<Self, SeaError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = Self::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(SeaError::InvalidSize {
                    width: row.chars().count(),
                    height,
                });
            }
            for (x, symbol) in row.chars().enumerate() {
                grid.set_state(x, y, S::try_from(symbol)?)?;
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Result<usize, SeaError> {
        if self.is_in_bounds(x, y) {
            Ok(y * self.width + x)
        } else {
            Err(SeaError::OutOfBounds { x, y })
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Result<&Cell<S>, SeaError> {
        let idx = self.index(x, y)?;
        Ok(&self.cells[idx])
    }

    /// State of the cell at (x, y).
    pub fn state(&self, x: usize, y: usize) -> Result<S, SeaError> {
        self.get(x, y).map(Cell::state)
    }

    /// Overwrite the state at (x, y). Transition policy is up to the caller.
    pub fn set_state(&mut self, x: usize, y: usize, state: S) -> Result<(), SeaError> {
        let idx = self.index(x, y)?;
        self.cells[idx].set_state(state);
        Ok(())
    }

    /// Flag the cell at (x, y) as targeted.
    pub fn mark_shot(&mut self, x: usize, y: usize) -> Result<(), SeaError> {
        let idx = self.index(x, y)?;
        self.cells[idx].mark_shot();
        Ok(())
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell<S>> + '_ {
        self.cells.iter()
    }

    /// Coordinates of the cells whose state satisfies `pred`, row-major.
    pub fn coords_where<F>(&self, mut pred: F) -> Vec<Coord>
    where
        F: FnMut(S) -> bool,
    {
        self.cells
            .iter()
            .filter(|c| pred(c.state()))
            .map(Cell::coord)
            .collect()
    }

    /// Number of cells whose state satisfies `pred`.
    pub fn count_where<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(S) -> bool,
    {
        self.cells.iter().filter(|c| pred(c.state())).count()
    }

    /// In-bounds cells sharing an edge with `coord`.
    pub fn orthogonal_neighbours(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.neighbours(coord, &ORTHOGONAL)
    }

    /// In-bounds cells sharing only a corner with `coord`.
    pub fn diagonal_neighbours(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.neighbours(coord, &DIAGONAL)
    }

    fn neighbours<'a>(
        &'a self,
        coord: Coord,
        offsets: &'static [(isize, isize)],
    ) -> impl Iterator<Item = Coord> + 'a {
        offsets
            .iter()
            .filter_map(move |&(dx, dy)| coord.offset(dx, dy))
            .filter(move |c| self.is_in_bounds(c.x, c.y))
    }
}

impl<S: CellState> fmt::Display for Grid<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width).enumerate() {
            for cell in row {
                write!(f, "{}", cell.state().symbol())?;
            }
            if i + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
