use alloc::vec::Vec;

use rand::rngs::SmallRng;

use crate::{
    common::{Coord, SeaError, Signal},
    grid::SeaGrid,
    ship::ShipVector,
};

/// Interface implemented by different player types.
pub trait Player {
    /// Place the whole fleet onto the provided grid.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        grid: &mut SeaGrid,
        fleet: &[usize],
    ) -> Result<Vec<ShipVector>, SeaError>;

    /// Choose the next coordinate to fire at.
    fn select_target(&mut self, rng: &mut SmallRng) -> Result<Coord, SeaError>;

    /// Inform the player of the answer to its last shot.
    fn handle_shot_result(&mut self, _coords: &[Coord], _signal: Signal) -> Result<(), SeaError> {
        Ok(())
    }
}
