//! Shot resolution against a fleet grid: hits, ship tracing, sinking and
//! the answer a defender sends back to the shooter.

use alloc::vec;
use alloc::vec::Vec;

use log::debug;

use crate::cell::SeaState;
use crate::common::{Coord, SeaError, Signal, ORTHOGONAL};
use crate::grid::SeaGrid;
use crate::ship::ShipVector;

/// Cells of a sunk ship and the in-bounds border ring sealed around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunkShip {
    pub ship: Vec<Coord>,
    pub border: Vec<Coord>,
}

/// Defender's reply to a shot.
///
/// `coords` holds the whole ship for `Killed` and `Win`, and the target
/// cell alone otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotAnswer {
    pub signal: Signal,
    pub coords: Vec<Coord>,
}

impl SeaGrid {
    /// Fire at (x, y). A ship cell becomes hit; anything else becomes a
    /// miss. Returns whether a ship was hit.
    ///
    /// Shot ship cells keep their state so a repeated shot never turns a
    /// hit back into a miss.
    pub fn resolve_shot(&mut self, x: usize, y: usize) -> Result<bool, SeaError> {
        let state = self.state(x, y)?;
        self.mark_shot(x, y)?;
        let (next, hit) = match state {
            SeaState::Ship | SeaState::Hit => (SeaState::Hit, true),
            SeaState::Killed => (SeaState::Killed, true),
            SeaState::Empty | SeaState::Border | SeaState::Miss => (SeaState::Miss, false),
        };
        self.set_state(x, y, next)?;
        Ok(hit)
    }

    /// All cells of the ship passing through (x, y), sorted. Empty when the
    /// cell is not part of a ship.
    pub fn trace_ship(&self, x: usize, y: usize) -> Result<Vec<Coord>, SeaError> {
        if !self.state(x, y)?.is_part_of_ship() {
            return Ok(Vec::new());
        }
        let origin = Coord::new(x, y);
        let mut ship = vec![origin];
        for &(dx, dy) in ORTHOGONAL.iter() {
            let mut cursor = origin;
            while let Some(next) = cursor.offset(dx, dy) {
                match self.state(next.x, next.y) {
                    Ok(s) if s.is_part_of_ship() => {
                        ship.push(next);
                        cursor = next;
                    }
                    _ => break,
                }
            }
        }
        ship.sort_unstable();
        ship.dedup();
        Ok(ship)
    }

    /// The ship through (x, y) exists and every one of its cells is shot.
    pub fn is_ship_sunk(&self, x: usize, y: usize) -> Result<bool, SeaError> {
        let ship = self.trace_ship(x, y)?;
        Ok(!ship.is_empty()
            && ship
                .iter()
                .all(|c| matches!(self.state(c.x, c.y), Ok(s) if s.is_shot_ship())))
    }

    /// Mark a sunk ship as killed and seal the border around its bounding
    /// vector. Fails with `ShipAfloat` if the ship is not sunk.
    pub fn sink_ship(&mut self, x: usize, y: usize) -> Result<SunkShip, SeaError> {
        if !self.is_ship_sunk(x, y)? {
            return Err(SeaError::ShipAfloat { x, y });
        }
        let ship = self.trace_ship(x, y)?;
        for c in &ship {
            self.set_state(c.x, c.y, SeaState::Killed)?;
        }
        let vector = ShipVector::from_cells(&ship).ok_or(SeaError::ShipAfloat { x, y })?;
        let border = self.seal_border(&vector);
        Ok(SunkShip { ship, border })
    }

    /// Some ship cell has not been shot yet.
    pub fn has_surviving_ship(&self) -> bool {
        self.cells().any(|c| c.state().is_ship() && !c.is_shot())
    }

    /// Resolve a shot and compose the signal the shooter receives.
    ///
    /// Rejects cells that were already shot with `AlreadyShot`.
    pub fn answer_shot(&mut self, x: usize, y: usize) -> Result<ShotAnswer, SeaError> {
        if self.get(x, y)?.is_shot() {
            return Err(SeaError::AlreadyShot { x, y });
        }
        let answer = if !self.resolve_shot(x, y)? {
            ShotAnswer {
                signal: Signal::Miss,
                coords: vec![Coord::new(x, y)],
            }
        } else if self.is_ship_sunk(x, y)? {
            let sunk = self.sink_ship(x, y)?;
            let signal = if self.has_surviving_ship() {
                Signal::Killed
            } else {
                Signal::Win
            };
            ShotAnswer {
                signal,
                coords: sunk.ship,
            }
        } else {
            ShotAnswer {
                signal: Signal::Hit,
                coords: vec![Coord::new(x, y)],
            }
        };
        debug!("shot at ({}, {}) answered {:?}", x, y, answer.signal);
        Ok(answer)
    }
}
