//! Ship placement on a fleet grid: validation, border sealing and random
//! fleet layout.

use alloc::vec::Vec;

use log::{debug, trace};
use rand::Rng;

use crate::cell::SeaState;
use crate::common::{Coord, SeaError};
use crate::grid::SeaGrid;
use crate::ship::{Orientation, ShipVector};

impl SeaGrid {
    /// Every cell of `vector` is in bounds and currently empty.
    pub fn is_vector_placeable(&self, vector: &ShipVector) -> bool {
        vector
            .cells()
            .all(|c| matches!(self.state(c.x, c.y), Ok(SeaState::Empty)))
    }

    /// Mark the vector's cells as ship and seal the border ring around it.
    pub fn place_ship(&mut self, vector: ShipVector) -> Result<(), SeaError> {
        if !self.is_vector_placeable(&vector) {
            return Err(SeaError::ShipPlacementRejected(vector));
        }
        for c in vector.cells() {
            self.set_state(c.x, c.y, SeaState::Ship)?;
        }
        self.seal_border(&vector);
        debug!(
            "placed ship len={} at {} {:?}",
            vector.length(),
            vector.origin(),
            vector.orientation()
        );
        Ok(())
    }

    /// Mark every still-empty cell of the vector's border ring as border.
    /// Ring cells outside the grid are skipped. Returns the in-bounds ring.
    pub(crate) fn seal_border(&mut self, vector: &ShipVector) -> Vec<Coord> {
        let ring: Vec<Coord> = vector
            .border()
            .into_iter()
            .filter(|c| self.is_in_bounds(c.x, c.y))
            .collect();
        for c in &ring {
            if let Ok(SeaState::Empty) = self.state(c.x, c.y) {
                let _ = self.set_state(c.x, c.y, SeaState::Border);
            }
        }
        ring
    }

    /// All placeable vectors of `length`, row-major then horizontal before
    /// vertical.
    pub fn suitable_vectors(&self, length: usize) -> Vec<ShipVector> {
        if length == 0 {
            return Vec::new();
        }
        self.cells()
            .flat_map(|cell| {
                Orientation::ALL
                    .into_iter()
                    .filter_map(move |o| ShipVector::new(cell.coord(), length, o).ok())
            })
            .filter(|v| self.is_vector_placeable(v))
            .collect()
    }

    /// Place each ship of `fleet` in order at a uniformly chosen suitable
    /// vector. Stops with `NoSpaceLeft` on the first ship that cannot fit;
    /// ships placed before it stay on the grid.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fleet: &[usize],
    ) -> Result<Vec<ShipVector>, SeaError> {
        let mut placed = Vec::with_capacity(fleet.len());
        for &length in fleet {
            let vectors = self.suitable_vectors(length);
            trace!("{} suitable vectors for length {}", vectors.len(), length);
            if vectors.is_empty() {
                return Err(SeaError::NoSpaceLeft { length });
            }
            let vector = vectors[rng.random_range(0..vectors.len())];
            self.place_ship(vector)?;
            placed.push(vector);
        }
        Ok(placed)
    }
}
