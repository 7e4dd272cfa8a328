use alloc::vec::Vec;

use log::debug;
use rand::Rng;

use crate::common::SeaError;
use crate::grid::SeaGrid;
use crate::ship::ShipVector;

pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;

/// One four-cell ship, two of three cells, three of two and four singles.
pub const STANDARD_FLEET: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship cells in the standard fleet.
pub const STANDARD_FLEET_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Fresh grids tried by [`FieldConfig::random_fleet_grid`] before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Grid dimensions and fleet composition for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldConfig {
    pub width: usize,
    pub height: usize,
    /// Ship lengths in placement order; put larger ships first.
    pub fleet: Vec<usize>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fleet: STANDARD_FLEET.to_vec(),
        }
    }
}

impl FieldConfig {
    pub fn new(width: usize, height: usize, fleet: Vec<usize>) -> Result<Self, SeaError> {
        let config = Self {
            width,
            height,
            fleet,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject empty dimensions and ships that cannot fit along either axis.
    pub fn validate(&self) -> Result<(), SeaError> {
        if self.width == 0 || self.height == 0 {
            return Err(SeaError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        let longest = self.width.max(self.height);
        if let Some(&len) = self.fleet.iter().find(|&&l| l == 0 || l > longest) {
            return Err(SeaError::InvalidShipLength(len));
        }
        Ok(())
    }

    /// Number of ship cells the fleet occupies.
    pub fn fleet_cells(&self) -> usize {
        self.fleet.iter().sum()
    }

    /// Empty fleet grid with the configured dimensions.
    pub fn empty_grid(&self) -> Result<SeaGrid, SeaError> {
        SeaGrid::new(self.width, self.height)
    }

    /// Lay the fleet out at random, starting over on a fresh grid when a
    /// ship runs out of room.
    pub fn random_fleet_grid<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(SeaGrid, Vec<ShipVector>), SeaError> {
        self.validate()?;
        let mut last_err = SeaError::NoSpaceLeft { length: 0 };
        for attempt in 0..PLACEMENT_ATTEMPTS {
            let mut grid = self.empty_grid()?;
            match grid.place_fleet_randomly(rng, &self.fleet) {
                Ok(ships) => return Ok((grid, ships)),
                Err(err @ SeaError::NoSpaceLeft { .. }) => {
                    debug!("fleet placement attempt {} failed: {}", attempt, err);
                    last_err = err;
                }
                Err(err) => return Err(err),
            }
        }
        Err(last_err)
    }
}
