#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod cell;
pub mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod player;
mod player_ai;
mod ship;
mod shot;
mod target;

pub use cell::{Cell, CellState, SeaState, TargetState};
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use ship::*;
pub use shot::*;
pub use target::*;
