//! Game outcomes and position scores.
//!
//! This module defines [`Reward`], the outcome of a finished game, and
//! [`Utility`], the value returned by
//! [`FanoronaState::utility`](crate::FanoronaState::utility). A utility is
//! either a terminal outcome or a material-difference heuristic for a game
//! still in progress, and callers must branch on which shape they received.
//!
//! # Example
//!
//! ```rust
//! use fanorona::{Reward, Utility};
//!
//! assert_eq!(Reward::Win.value(), 1);
//! assert_eq!(Reward::Loss.value(), -1);
//!
//! let score = Utility::Material(3);
//! assert!(!score.is_terminal());
//! match score {
//!     Utility::Outcome(reward) => println!("game over: {reward}"),
//!     Utility::Material(diff) => println!("ahead by {diff}"),
//! }
//! ```

use std::fmt;

/// The outcome of a finished game, from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reward {
    /// The side won.
    Win,
    /// The side lost.
    Loss,
    /// The game was drawn.
    Draw,
}

impl Reward {
    /// Returns the scalar reward signal: +1 for a win, -1 for a loss,
    /// 0 for a draw.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> i32 {
        match self {
            Self::Win => 1,
            Self::Loss => -1,
            Self::Draw => 0,
        }
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Win => write!(f, "Win"),
            Self::Loss => write!(f, "Loss"),
            Self::Draw => write!(f, "Draw"),
        }
    }
}

/// The value of a position for one side.
///
/// Terminal positions carry a [`Reward`]; positions still in progress carry
/// the signed material difference `count(side) - count(opponent)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Utility {
    /// The game is over with this outcome.
    Outcome(Reward),
    /// The game is in progress; the material difference for the queried side.
    Material(i32),
}

impl Utility {
    /// Checks whether this utility came from a terminal position.
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Outcome(_))
    }
}

impl fmt::Display for Utility {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Outcome(reward) => write!(f, "{reward}"),
            Self::Material(diff) => write!(f, "{diff:+}"),
        }
    }
}
