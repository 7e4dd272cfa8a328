//! Common types for the sea war engine: coordinates, shot signals and errors.

use core::fmt;

use crate::ship::ShipVector;

/// A position on a grid. `x` indexes columns, `y` indexes rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

/// Offsets of the four cells sharing an edge with a cell.
pub const ORTHOGONAL: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Offsets of the four cells sharing only a corner with a cell.
pub const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shift by a signed offset. Returns `None` when either axis would go
    /// below zero; the upper bound is the grid's business.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Coord> {
        Some(Coord {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Public answer to a shot, as seen by the shooter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Signal {
    /// Shot landed on water or a border cell.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot sank a ship.
    Killed,
    /// Shot sank the last surviving ship.
    Win,
}

impl Signal {
    /// `true` for every signal that reports a ship cell.
    pub fn is_hit(self) -> bool {
        !matches!(self, Signal::Miss)
    }

    /// `true` when the shot finished off a ship.
    pub fn is_kill(self) -> bool {
        matches!(self, Signal::Killed | Signal::Win)
    }
}

/// Errors returned by grid, placement, shot and targeting operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeaError {
    /// Coordinate lies outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// Grid dimensions must both be non-zero.
    InvalidSize { width: usize, height: usize },
    /// Ship length is zero or cannot fit on the grid.
    InvalidShipLength(usize),
    /// Vector overlaps a ship or border, or leaves the grid.
    ShipPlacementRejected(ShipVector),
    /// No legal vector remains for a ship of this length.
    NoSpaceLeft { length: usize },
    /// Symbol does not name a state of the grid role.
    UnknownCellState(char),
    /// The ship at this cell still has unshot cells.
    ShipAfloat { x: usize, y: usize },
    /// The cell was already shot at.
    AlreadyShot { x: usize, y: usize },
    /// Every cell of the target overlay is resolved.
    NoTargetsLeft,
}

impl fmt::Display for SeaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeaError::OutOfBounds { x, y } => write!(f, "Coordinate ({}, {}) is out of the grid", x, y),
            SeaError::InvalidSize { width, height } => {
                write!(f, "Invalid grid size {}x{}", width, height)
            }
            SeaError::InvalidShipLength(len) => write!(f, "Invalid ship length {}", len),
            SeaError::ShipPlacementRejected(v) => write!(
                f,
                "Ship of length {} at {} ({:?}) overlaps a ship, its border or the grid edge",
                v.length(),
                v.origin(),
                v.orientation()
            ),
            SeaError::NoSpaceLeft { length } => {
                write!(f, "No space left for a ship of length {}", length)
            }
            SeaError::UnknownCellState(c) => write!(f, "Unknown cell state '{}'", c),
            SeaError::ShipAfloat { x, y } => write!(f, "Ship at ({}, {}) is not sunk", x, y),
            SeaError::AlreadyShot { x, y } => write!(f, "Cell ({}, {}) was already shot", x, y),
            SeaError::NoTargetsLeft => write!(f, "No cells left to target"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SeaError {}
