//! Cell states for both grid roles and the cell record stored in a grid.

use core::fmt;

use crate::common::{Coord, SeaError};

/// Behaviour shared by the state enums of every grid role.
pub trait CellState: Copy + Eq + Default + fmt::Debug + TryFrom<char, Error = SeaError> {
    /// Single character used when rendering or parsing a grid.
    fn symbol(self) -> char;
}

/// Declare a closed set of cell states together with one `is_*` predicate
/// per variant, a rendering symbol and the matching `TryFrom<char>`.
/// The first variant is the default state.
#[macro_export]
macro_rules! cell_states {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $symbol:literal => $pred:ident, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every state of this role, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            $(
                #[doc = concat!("Returns `true` for [`", stringify!($name), "::", stringify!($variant), "`].")]
                #[inline]
                pub fn $pred(self) -> bool {
                    matches!(self, $name::$variant)
                }
            )+
        }

        impl Default for $name {
            /// The first declared state.
            fn default() -> Self {
                $name::ALL[0]
            }
        }

        impl $crate::cell::CellState for $name {
            fn symbol(self) -> char {
                match self {
                    $( $name::$variant => $symbol, )+
                }
            }
        }

        impl core::convert::TryFrom<char> for $name {
            type Error = $crate::common::SeaError;

            fn try_from(c: char) -> Result<Self, Self::Error> {
                match c {
                    $( $symbol => Ok($name::$variant), )+
                    other => Err($crate::common::SeaError::UnknownCellState(other)),
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", $crate::cell::CellState::symbol(*self))
            }
        }
    };
}

cell_states! {
    /// State of a cell on a player's own fleet grid.
    pub enum SeaState {
        Empty = '.' => is_empty,
        Ship = '#' => is_ship,
        /// Spacing cell around a ship; no ship may be placed here.
        Border = '+' => is_border,
        Hit = 'x' => is_hit,
        Miss = 'o' => is_miss,
        Killed = '*' => is_killed,
    }
}

impl SeaState {
    /// Cell belongs to a ship, shot or not.
    pub fn is_part_of_ship(self) -> bool {
        matches!(self, SeaState::Ship | SeaState::Hit | SeaState::Killed)
    }

    /// Ship cell that has already been shot.
    pub fn is_shot_ship(self) -> bool {
        matches!(self, SeaState::Hit | SeaState::Killed)
    }
}

cell_states! {
    /// State of a cell on the overlay a shooter keeps of the opponent.
    pub enum TargetState {
        Empty = '.' => is_empty,
        /// Likely holds the rest of a partially hit ship.
        Probable = '?' => is_probable,
        /// Ruled out: cannot hold a ship.
        Border = '+' => is_border,
        Hit = 'x' => is_hit,
        Miss = 'o' => is_miss,
    }
}

impl TargetState {
    /// Not yet shot at and not ruled out.
    pub fn is_open(self) -> bool {
        matches!(self, TargetState::Empty | TargetState::Probable)
    }
}

/// One grid position. The coordinate is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell<S> {
    coord: Coord,
    state: S,
    shot: bool,
}

impl<S: CellState> Cell<S> {
    pub(crate) fn new(coord: Coord) -> Self {
        Self {
            coord,
            state: S::default(),
            shot: false,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn x(&self) -> usize {
        self.coord.x
    }

    pub fn y(&self) -> usize {
        self.coord.y
    }

    pub fn state(&self) -> S {
        self.state
    }

    /// Whether the cell has been targeted.
    pub fn is_shot(&self) -> bool {
        self.shot
    }

    pub(crate) fn set_state(&mut self, state: S) {
        self.state = state;
    }

    pub(crate) fn mark_shot(&mut self) {
        self.shot = true;
    }
}
