//! Piece occupancy for the Fanorona board.
//!
//! This module defines the [`Piece`] enum describing what a single board
//! intersection holds: nothing, a white stone, or a black stone. The same
//! type doubles as the side-to-move marker on
//! [`FanoronaState`](crate::FanoronaState), where only `White` and `Black`
//! are valid.
//!
//! # Example
//!
//! ```rust
//! use fanorona::Piece;
//!
//! let white = Piece::White;
//! assert_eq!(white.other().unwrap(), Piece::Black);
//!
//! // An empty intersection has no opposing color.
//! assert!(Piece::Empty.other().is_err());
//! ```

use std::fmt;

/// The contents of a single board intersection.
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Piece {
    /// No stone.
    #[default]
    Empty = 0,
    /// A white stone.
    White = 1,
    /// A black stone.
    Black = 2,
}

impl Piece {
    /// Returns the opposing color.
    ///
    /// Fails with [`InvalidPieceConversion::Empty`] for `Piece::Empty`,
    /// which has no opponent.
    #[inline]
    pub const fn other(&self) -> Result<Self, InvalidPieceConversion> {
        match self {
            Self::White => Ok(Self::Black),
            Self::Black => Ok(Self::White),
            Self::Empty => Err(InvalidPieceConversion::Empty),
        }
    }

    /// Checks whether this is a stone rather than an empty intersection.
    #[inline]
    #[must_use]
    pub const fn is_stone(&self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// Error for piece conversions that have no defined result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPieceConversion {
    /// `other()` was called on an empty intersection.
    Empty,
    /// A character that is not a recognized piece marker.
    Char(char),
}

impl fmt::Display for InvalidPieceConversion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "an empty intersection has no opposing color"),
            Self::Char(c) => write!(f, "invalid piece character '{c}', expected W or B"),
        }
    }
}

impl std::error::Error for InvalidPieceConversion {}

impl TryFrom<char> for Piece {
    type Error = InvalidPieceConversion;

    /// Parses a piece marker (case-insensitive `W` or `B`).
    #[inline]
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'W' | 'w' => Ok(Self::White),
            'B' | 'b' => Ok(Self::Black),
            _ => Err(InvalidPieceConversion::Char(c)),
        }
    }
}

impl fmt::Display for Piece {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "."),
            Self::White => write!(f, "W"),
            Self::Black => write!(f, "B"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Piece::White => Piece::Black ; "white")]
    #[test_case(Piece::Black => Piece::White ; "black")]
    fn other(piece: Piece) -> Piece {
        piece.other().unwrap()
    }

    #[test]
    fn other_fails_for_empty() {
        assert_eq!(Piece::Empty.other(), Err(InvalidPieceConversion::Empty));
    }

    #[test_case(Piece::White ; "white")]
    #[test_case(Piece::Black ; "black")]
    fn other_is_involution(piece: Piece) {
        assert_eq!(piece.other().unwrap().other().unwrap(), piece);
    }

    #[test_case('W' => Piece::White ; "upper_w")]
    #[test_case('w' => Piece::White ; "lower_w")]
    #[test_case('B' => Piece::Black ; "upper_b")]
    #[test_case('b' => Piece::Black ; "lower_b")]
    fn try_from_char(c: char) -> Piece {
        Piece::try_from(c).unwrap()
    }

    #[test_case('.' ; "dot")]
    #[test_case('X' ; "letter")]
    #[test_case('1' ; "digit")]
    fn try_from_invalid_char(c: char) {
        assert_eq!(Piece::try_from(c), Err(InvalidPieceConversion::Char(c)));
    }

    #[test_case(Piece::Empty => "." ; "empty")]
    #[test_case(Piece::White => "W" ; "white")]
    #[test_case(Piece::Black => "B" ; "black")]
    fn display(piece: Piece) -> String {
        piece.to_string()
    }

    #[test_case(Piece::Empty => false ; "empty")]
    #[test_case(Piece::White => true ; "white")]
    #[test_case(Piece::Black => true ; "black")]
    fn is_stone(piece: Piece) -> bool {
        piece.is_stone()
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(Piece::default(), Piece::Empty);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            InvalidPieceConversion::Empty.to_string(),
            "an empty intersection has no opposing color"
        );
        assert_eq!(
            InvalidPieceConversion::Char('x').to_string(),
            "invalid piece character 'x', expected W or B"
        );
    }
}
