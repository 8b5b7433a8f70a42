//! # Fanorona - game state core
//!
//! A precise, serializable representation of the board game Fanorona, with
//! a lossless textual notation and terminal/utility scoring. The crate is
//! the stable core underneath an external move engine and search or
//! learning agents: it owns the state, its invariants, and its codec, and
//! leaves move legality entirely to its callers.
//!
//! ## Overview
//!
//! Fanorona is a two-player capture game played on the intersections of a
//! 5×9 grid with strong-diagonal connectivity. A single turn may chain
//! several captures with one piece; the direction of the previous capture
//! and the intersections already visited constrain the continuation, so
//! the state carries that bookkeeping between moves of the same turn.
//!
//! This crate provides:
//!
//! - [`FanoronaState`]: the piece grid, side to move, open capture
//!   sequence, and half-move counter, with deep-copy `Clone` for search
//! - A FEN-like notation codec (`Display`/`FromStr`) for saving,
//!   replaying, and comparing positions
//! - Terminal detection ([`FanoronaState::is_done`]) and scoring
//!   ([`FanoronaState::utility`]) for episode termination and rewards
//!
//! ## Quick start
//!
//! ```rust
//! use fanorona::{FanoronaState, Piece, Utility};
//!
//! // The canonical starting position: 22 stones each, white to move.
//! let mut state = FanoronaState::initial();
//! assert_eq!(state.count(Piece::White), 22);
//! assert_eq!(state.turn_to_play(), Piece::White);
//! assert!(!state.is_done());
//!
//! // A move engine mutates a copy: capture a black stone, pass the turn.
//! let mut next = state;
//! next.set_piece("A1".parse().unwrap(), Piece::Empty);
//! next.swap_turn();
//! next.increment_half_moves();
//!
//! // Score the position for White: one stone ahead.
//! assert_eq!(next.utility(Piece::White).unwrap(), Utility::Material(1));
//!
//! // Positions round-trip through their notation string.
//! let saved = next.to_string();
//! assert_eq!(saved.parse::<FanoronaState>().unwrap(), next);
//! ```
//!
//! ## Board layout
//!
//! ```text
//!     A   B   C   D   E   F   G   H   I
//!   +---+---+---+---+---+---+---+---+---+
//! 1 | B | B | B | B | B | B | B | B | B |  <- black's back row
//! 2 | B | B | B | B | B | B | B | B | B |
//! 3 | B | W | B | W | . | B | W | B | W |  <- mixed middle row, empty center
//! 4 | W | W | W | W | W | W | W | W | W |
//! 5 | W | W | W | W | W | W | W | W | W |  <- white's back row
//!   +---+---+---+---+---+---+---+---+---+
//! ```
//!
//! Positions are labeled column letter + row number (`A1` top left, `I5`
//! bottom right). Row 0 of the grid is row `1` of the labels.
//!
//! ## Notation
//!
//! The full record has five space-separated fields:
//!
//! | Field | Content | Example |
//! |-------|---------|---------|
//! | board | `/`-separated rows, `W`/`B` markers, digits for empty runs | `BBBBBBBBB/.../WWWWWWWWW` |
//! | turn | side to move | `W` |
//! | direction | last capture direction, `-` if none | `NE` |
//! | visited | comma-separated labels, `-` if none | `D4,E3` |
//! | half-moves | draw-rule counter | `12` |
//!
//! The starting position reads:
//!
//! ```text
//! BBBBBBBBB/BBBBBBBBB/BWBW1BWBW/WWWWWWWWW/WWWWWWWWW W - - 0
//! ```
//!
//! ## Key types
//!
//! - [`FanoronaState`]: the complete game state and notation codec
//! - [`Position`]: a validated intersection with its human label
//! - [`Piece`]: Empty, White, or Black
//! - [`Direction`]: eight compass directions plus the idle sentinel
//! - [`CaptureSequence`]: direction + visited bookkeeping for one turn
//! - [`Reward`] / [`Utility`]: terminal outcomes and heuristic scores
//!
//! ## Division of responsibility
//!
//! Move generation and validation live outside this crate. An engine
//! reads the query surface, mutates copies through [`FanoronaState`]'s
//! methods (never the fields), and is trusted to keep the game legal; the
//! crate does not re-validate the grid on every query. Errors
//! ([`InvalidPosition`], [`MalformedNotation`], [`InvalidPieceConversion`])
//! are raised immediately at the offending input and never retried
//! internally.

mod direction;
mod piece;
mod position;
mod reward;
mod sequence;
mod state;

pub use direction::{Direction, InvalidDirection};
pub use piece::{InvalidPieceConversion, Piece};
pub use position::{InvalidPosition, Position, BOARD_COLS, BOARD_ROWS};
pub use reward::{Reward, Utility};
pub use sequence::CaptureSequence;
pub use state::{FanoronaState, MalformedNotation, MOVE_LIMIT};
