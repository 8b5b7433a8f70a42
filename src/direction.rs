//! Movement directions on the Fanorona grid.
//!
//! Fanorona pieces slide along the lines of a 5×9 intersection grid, so a
//! move has one of eight compass directions. [`Direction::None`] is the
//! sentinel meaning "no capture made yet this turn" — it is what a state
//! carries when no capturing sequence is open.
//!
//! Directions use the row/column convention of
//! [`Position`](crate::Position): row 0 is the north edge, so `N` decreases
//! the row index and `E` increases the column index.
//!
//! # Example
//!
//! ```rust
//! use fanorona::Direction;
//!
//! assert_eq!(Direction::NE.vector(), (-1, 1));
//! assert_eq!(Direction::NE.opposite(), Direction::SW);
//! assert_eq!("SE".parse::<Direction>().unwrap(), Direction::SE);
//!
//! // The sentinel round-trips through its notation form "-".
//! assert_eq!("-".parse::<Direction>().unwrap(), Direction::None);
//! ```

use std::fmt;
use std::str::FromStr;

/// A compass direction of movement, or `None` outside a capturing sequence.
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// North (toward row 0).
    N,
    /// North-east.
    NE,
    /// East (toward higher columns).
    E,
    /// South-east.
    SE,
    /// South (toward higher rows).
    S,
    /// South-west.
    SW,
    /// West (toward lower columns).
    W,
    /// North-west.
    NW,
    /// No direction; the state is not inside a capturing sequence.
    #[default]
    None,
}

impl Direction {
    /// Checks whether this is one of the eight compass directions.
    #[inline]
    #[must_use]
    pub const fn is_compass(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the `(row, column)` delta of a single step in this direction.
    ///
    /// `None` is stationary.
    #[inline]
    #[must_use]
    pub const fn vector(&self) -> (isize, isize) {
        match self {
            Self::N => (-1, 0),
            Self::NE => (-1, 1),
            Self::E => (0, 1),
            Self::SE => (1, 1),
            Self::S => (1, 0),
            Self::SW => (1, -1),
            Self::W => (0, -1),
            Self::NW => (-1, -1),
            Self::None => (0, 0),
        }
    }

    /// Returns the opposite compass point.
    ///
    /// Approach and withdrawal captures remove pieces along opposite rays,
    /// so a move engine needs both ends of the line. `None` is its own
    /// opposite.
    #[inline]
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::N => Self::S,
            Self::NE => Self::SW,
            Self::E => Self::W,
            Self::SE => Self::NW,
            Self::S => Self::N,
            Self::SW => Self::NE,
            Self::W => Self::E,
            Self::NW => Self::SE,
            Self::None => Self::None,
        }
    }
}

/// Error type for parsing a direction from its notation name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDirection;

impl fmt::Display for InvalidDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid direction, expected one of N, NE, E, SE, S, SW, W, NW, or -"
        )
    }
}

impl std::error::Error for InvalidDirection {}

impl fmt::Display for Direction {
    /// Formats the direction as its notation name; `None` renders as `-`.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
            Self::None => "-",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Self::N),
            "NE" => Ok(Self::NE),
            "E" => Ok(Self::E),
            "SE" => Ok(Self::SE),
            "S" => Ok(Self::S),
            "SW" => Ok(Self::SW),
            "W" => Ok(Self::W),
            "NW" => Ok(Self::NW),
            "-" => Ok(Self::None),
            _ => Err(InvalidDirection),
        }
    }
}
