//! Ship vectors: the straight run of cells a ship occupies and the ring
//! of spacing cells around it.

use alloc::vec::Vec;

use crate::common::{Coord, SeaError};

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Both orientations, horizontal first.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Unit step along the orientation axis.
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// Origin, length and orientation of a ship.
///
/// Pure coordinate arithmetic: a vector knows nothing about grid bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipVector {
    origin: Coord,
    length: usize,
    orientation: Orientation,
}

impl ShipVector {
    /// Create a vector. Fails with `InvalidShipLength` for a zero length.
    pub fn new(origin: Coord, length: usize, orientation: Orientation) -> Result<Self, SeaError> {
        if length == 0 {
            return Err(SeaError::InvalidShipLength(length));
        }
        Ok(Self {
            origin,
            length,
            orientation,
        })
    }

    /// Shorthand for `new` with a horizontal orientation.
    pub fn horizontal(x: usize, y: usize, length: usize) -> Result<Self, SeaError> {
        Self::new(Coord::new(x, y), length, Orientation::Horizontal)
    }

    /// Shorthand for `new` with a vertical orientation.
    pub fn vertical(x: usize, y: usize, length: usize) -> Result<Self, SeaError> {
        Self::new(Coord::new(x, y), length, Orientation::Vertical)
    }

    /// Bounding vector of a set of cells belonging to one straight ship.
    ///
    /// The origin is the smallest cell, the length is the number of cells
    /// and the ship is vertical when it spans more than one row.
    pub fn from_cells(cells: &[Coord]) -> Option<Self> {
        let min = *cells.iter().min()?;
        let max = *cells.iter().max()?;
        let orientation = if max.y > min.y {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        Some(Self {
            origin: min,
            length: cells.len(),
            orientation,
        })
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Last cell of the vector.
    pub fn end(&self) -> Coord {
        let (dx, dy) = self.orientation.step();
        Coord::new(
            self.origin.x + dx * (self.length - 1),
            self.origin.y + dy * (self.length - 1),
        )
    }

    /// The `length` cells of the vector, origin first.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let (dx, dy) = self.orientation.step();
        let origin = self.origin;
        (0..self.length).map(move |i| Coord::new(origin.x + dx * i, origin.y + dy * i))
    }

    /// Returns `true` if `coord` is one of the vector's cells.
    pub fn contains(&self, coord: Coord) -> bool {
        let end = self.end();
        (self.origin.x..=end.x).contains(&coord.x) && (self.origin.y..=end.y).contains(&coord.y)
    }

    /// The spacing ring: every cell touching the vector, diagonals
    /// included, in row-major order. Cells that would fall below zero are
    /// dropped; cells past the grid's far edge are left for the grid to
    /// filter.
    pub fn border(&self) -> Vec<Coord> {
        let end = self.end();
        let mut ring = Vec::with_capacity(2 * (self.length + 2) + 2);
        for y in self.origin.y as isize - 1..=end.y as isize + 1 {
            for x in self.origin.x as isize - 1..=end.x as isize + 1 {
                if x < 0 || y < 0 {
                    continue;
                }
                let coord = Coord::new(x as usize, y as usize);
                if !self.contains(coord) {
                    ring.push(coord);
                }
            }
        }
        ring
    }
}
