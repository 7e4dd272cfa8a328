//! Targeting heuristic for the computer player.
//!
//! The overlay only ever learns about the opponent through shot answers.
//! Cells next to a fresh hit become probable targets, cells that cannot
//! hold a ship become border, and the next shot prefers probable cells.

use alloc::vec::Vec;

use log::trace;
use rand::Rng;

use crate::cell::TargetState;
use crate::common::{Coord, SeaError, Signal};
use crate::grid::{SeaGrid, TargetGrid};
use crate::shot::ShotAnswer;

impl TargetGrid {
    /// Fold a shot answer into the overlay.
    pub fn record_result(&mut self, coords: &[Coord], signal: Signal) -> Result<(), SeaError> {
        if let Some(c) = coords.iter().find(|c| !self.is_in_bounds(c.x, c.y)) {
            return Err(SeaError::OutOfBounds { x: c.x, y: c.y });
        }
        let mark = if signal.is_hit() {
            TargetState::Hit
        } else {
            TargetState::Miss
        };
        for c in coords {
            self.set_state(c.x, c.y, mark)?;
            self.mark_shot(c.x, c.y)?;
        }
        match signal {
            Signal::Miss => {}
            Signal::Hit => {
                for &c in coords {
                    self.mark_probable_around(c);
                    self.rule_out_diagonals(c);
                }
            }
            Signal::Killed | Signal::Win => {
                for &c in coords {
                    self.rule_out_diagonals(c);
                    self.rule_out_orthogonals(c);
                }
            }
        }
        Ok(())
    }

    /// Pick a probable cell if any exist, otherwise any empty cell.
    pub fn select_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Coord, SeaError> {
        let mut candidates = self.coords_where(TargetState::is_probable);
        if candidates.is_empty() {
            candidates = self.coords_where(TargetState::is_empty);
        }
        if candidates.is_empty() {
            return Err(SeaError::NoTargetsLeft);
        }
        Ok(candidates[rng.random_range(0..candidates.len())])
    }

    fn mark_probable_around(&mut self, coord: Coord) {
        let ribs: Vec<Coord> = self.orthogonal_neighbours(coord).collect();
        for c in ribs {
            if let Ok(TargetState::Empty) = self.state(c.x, c.y) {
                trace!("probable {}", c);
                let _ = self.set_state(c.x, c.y, TargetState::Probable);
            }
        }
    }

    fn rule_out_diagonals(&mut self, coord: Coord) {
        let corners: Vec<Coord> = self.diagonal_neighbours(coord).collect();
        self.rule_out(&corners);
    }

    fn rule_out_orthogonals(&mut self, coord: Coord) {
        let ribs: Vec<Coord> = self.orthogonal_neighbours(coord).collect();
        self.rule_out(&ribs);
    }

    fn rule_out(&mut self, coords: &[Coord]) {
        for c in coords {
            if matches!(self.state(c.x, c.y), Ok(s) if s.is_open()) {
                trace!("ruled out {}", c);
                let _ = self.set_state(c.x, c.y, TargetState::Border);
            }
        }
    }
}

/// One full turn of the computer player against `enemy`: select a target,
/// have the enemy grid answer it and record the answer on the overlay.
pub fn play_one_shot<R: Rng + ?Sized>(
    overlay: &mut TargetGrid,
    enemy: &mut SeaGrid,
    rng: &mut R,
) -> Result<ShotAnswer, SeaError> {
    let target = overlay.select_target(rng)?;
    let answer = enemy.answer_shot(target.x, target.y)?;
    overlay.record_result(&answer.coords, answer.signal)?;
    Ok(answer)
}
