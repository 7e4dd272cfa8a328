use alloc::vec::Vec;

use rand::rngs::SmallRng;

use crate::{
    common::{Coord, SeaError, Signal},
    grid::{SeaGrid, TargetGrid},
    player::Player,
    ship::ShipVector,
};

/// Computer player: random fleet layout and the probable-neighbour
/// targeting heuristic over its own overlay of the opponent.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    overlay: TargetGrid,
}

impl AiPlayer {
    /// Player aiming at an opponent grid of `width × height`.
    pub fn new(width: usize, height: usize) -> Result<Self, SeaError> {
        Ok(Self {
            overlay: TargetGrid::new(width, height)?,
        })
    }

    /// What the player knows about the opponent so far.
    pub fn overlay(&self) -> &TargetGrid {
        &self.overlay
    }
}

impl Player for AiPlayer {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        grid: &mut SeaGrid,
        fleet: &[usize],
    ) -> Result<Vec<ShipVector>, SeaError> {
        grid.place_fleet_randomly(rng, fleet)
    }

    fn select_target(&mut self, rng: &mut SmallRng) -> Result<Coord, SeaError> {
        self.overlay.select_target(rng)
    }

    fn handle_shot_result(&mut self, coords: &[Coord], signal: Signal) -> Result<(), SeaError> {
        self.overlay.record_result(coords, signal)
    }
}
