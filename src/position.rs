//! Positions on the 5×9 Fanorona board.
//!
//! This module defines [`Position`], a validated `(row, column)` pair, and
//! the human-readable label used by the notation codec.
//!
//! # Board layout
//!
//! ```text
//!     A   B   C   D   E   F   G   H   I
//!   +---+---+---+---+---+---+---+---+---+
//! 1 |A1 |B1 |C1 |D1 |E1 |F1 |G1 |H1 |I1 |  row 0
//! 2 |A2 |B2 |C2 |D2 |E2 |F2 |G2 |H2 |I2 |  row 1
//! 3 |A3 |B3 |C3 |D3 |E3 |F3 |G3 |H3 |I3 |  row 2
//! 4 |A4 |B4 |C4 |D4 |E4 |F4 |G4 |H4 |I4 |  row 3
//! 5 |A5 |B5 |C5 |D5 |E5 |F5 |G5 |H5 |I5 |  row 4
//!   +---+---+---+---+---+---+---+---+---+
//! ```
//!
//! The human label is the column letter (`A`-`I`, column 0-8) followed by
//! the one-based row number (`1`-`5`). Labels parse case-insensitively and
//! always print in upper case.
//!
//! # Enumeration order
//!
//! [`Position::all`] yields every position exactly once in row-major order
//! (row 0 to 4, each row left to right). Counting and the visited field of
//! the notation codec both rely on this exact order.
//!
//! # Example
//!
//! ```rust
//! use fanorona::Position;
//!
//! let pos = Position::new(2, 4).unwrap();
//! assert_eq!(pos.to_string(), "E3");
//! assert_eq!("e3".parse::<Position>().unwrap(), pos);
//! assert_eq!(Position::all().count(), 45);
//! ```

use std::fmt;
use std::str::FromStr;

/// Number of rows on the board.
pub const BOARD_ROWS: usize = 5;

/// Number of columns on the board.
pub const BOARD_COLS: usize = 9;

/// A single intersection on the board, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from zero-based grid coordinates.
    ///
    /// Fails with [`InvalidPosition::Coords`] when either index is outside
    /// the board.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Result<Self, InvalidPosition> {
        if row < BOARD_ROWS && col < BOARD_COLS {
            Ok(Self { row, col })
        } else {
            Err(InvalidPosition::Coords { row, col })
        }
    }

    /// Returns the zero-based row index (0-4).
    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the zero-based column index (0-8).
    #[inline]
    #[must_use]
    pub const fn column(&self) -> usize {
        self.col
    }

    /// Returns the `(row, column)` pair.
    #[inline]
    #[must_use]
    pub const fn to_coords(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Yields every board position exactly once, in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_ROWS).flat_map(|row| (0..BOARD_COLS).map(move |col| Self { row, col }))
    }
}

/// Error type for constructing or parsing a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPosition {
    /// The label has an invalid length (expected 2 characters).
    Length,
    /// The column letter is invalid (expected A-I or a-i).
    Column,
    /// The row number is invalid (expected 1-5).
    Row,
    /// Grid coordinates outside the board.
    Coords {
        /// The offending row index.
        row: usize,
        /// The offending column index.
        col: usize,
    },
}

impl fmt::Display for InvalidPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Length => write!(f, "invalid label length, expected 2 characters"),
            Self::Column => write!(f, "invalid column letter, expected A-I or a-i"),
            Self::Row => write!(f, "invalid row number, expected 1-5"),
            Self::Coords { row, col } => write!(
                f,
                "coordinates ({row}, {col}) outside the {BOARD_ROWS}x{BOARD_COLS} board"
            ),
        }
    }
}

impl std::error::Error for InvalidPosition {}

impl TryFrom<(usize, usize)> for Position {
    type Error = InvalidPosition;

    #[inline]
    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    /// Formats the position as its human label, e.g. `E3`.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let column = (b'A' + self.col as u8) as char;
        let row = (b'1' + self.row as u8) as char;
        write!(f, "{column}{row}")
    }
}

impl FromStr for Position {
    type Err = InvalidPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(InvalidPosition::Length);
        }

        let col = match bytes[0] {
            b'A'..=b'I' => bytes[0] - b'A',
            b'a'..=b'i' => bytes[0] - b'a',
            _ => return Err(InvalidPosition::Column),
        };

        let row = match bytes[1] {
            b'1'..=b'5' => bytes[1] - b'1',
            _ => return Err(InvalidPosition::Row),
        };

        Ok(Self {
            row: row as usize,
            col: col as usize,
        })
    }
}
