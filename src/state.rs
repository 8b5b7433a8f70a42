//! Board state and notation codec for Fanorona.
//!
//! This module defines [`FanoronaState`], the complete description of a
//! game in progress: the 5×9 piece grid, the side to move, the capture
//! sequence open this turn (if any), and the half-move counter used by the
//! draw rule.
//!
//! # Overview
//!
//! The state is a pure value. An external move engine computes legal
//! successors by cloning a state and mutating the copy through
//! [`set_piece`], [`swap_turn`], [`increment_half_moves`] and the capture
//! transitions; search and learning agents score positions through
//! [`is_done`] and [`utility`]. Cloning is a full deep copy — the grid and
//! the visited set are owned arrays, so independent search branches never
//! alias.
//!
//! # Notation
//!
//! A state round-trips through a compact FEN-like string via `Display` and
//! `FromStr`:
//!
//! ```text
//! BBBBBBBBB/BBBBBBBBB/BWBW1BWBW/WWWWWWWWW/WWWWWWWWW W - - 0
//! |------------------- board --------------------| | | | |
//!                            turn to play (W or B)-+ | | |
//!                   last capture direction or "-"----+ | |
//!              visited labels, comma-separated or "-"--+ |
//!                                      half-move counter-+
//! ```
//!
//! Board rows are `/`-separated, top row first; a digit is a run of that
//! many empty intersections.
//!
//! # Example
//!
//! ```rust
//! use fanorona::{FanoronaState, Piece};
//!
//! let state = FanoronaState::initial();
//! assert_eq!(state.count(Piece::White), 22);
//! assert_eq!(state.count(Piece::Black), 22);
//! assert!(!state.is_done());
//!
//! let notation = state.to_string();
//! let decoded: FanoronaState = notation.parse().unwrap();
//! assert_eq!(decoded, state);
//! ```
//!
//! [`set_piece`]: FanoronaState::set_piece
//! [`swap_turn`]: FanoronaState::swap_turn
//! [`increment_half_moves`]: FanoronaState::increment_half_moves
//! [`is_done`]: FanoronaState::is_done
//! [`utility`]: FanoronaState::utility

use std::fmt;
use std::str::FromStr;

use crate::{
    CaptureSequence, Direction, InvalidDirection, InvalidPieceConversion, InvalidPosition, Piece,
    Position, Reward, Utility, BOARD_COLS, BOARD_ROWS,
};

/// Number of half-moves after which the game is drawn.
pub const MOVE_LIMIT: u32 = 44;

/// The complete state of a Fanorona game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FanoronaState {
    /// Sole source of truth for occupancy.
    grid: [[Piece; BOARD_COLS]; BOARD_ROWS],
    /// Side to move; never `Piece::Empty`, enforced by construction.
    turn_to_play: Piece,
    /// Bookkeeping for the capturing sequence open this turn, if any.
    sequence: CaptureSequence,
    /// Half-moves played, counting toward the draw limit.
    half_moves: u32,
}

impl FanoronaState {
    /// Creates the canonical starting position.
    ///
    /// Black occupies the two north rows, White the two south rows, and the
    /// middle row alternates around the empty center intersection. White
    /// moves first.
    #[must_use]
    pub const fn initial() -> Self {
        let mut grid = [[Piece::Empty; BOARD_COLS]; BOARD_ROWS];
        grid[0] = [Piece::Black; BOARD_COLS];
        grid[1] = [Piece::Black; BOARD_COLS];
        grid[2] = [
            Piece::Black,
            Piece::White,
            Piece::Black,
            Piece::White,
            Piece::Empty,
            Piece::Black,
            Piece::White,
            Piece::Black,
            Piece::White,
        ];
        grid[3] = [Piece::White; BOARD_COLS];
        grid[4] = [Piece::White; BOARD_COLS];

        Self {
            grid,
            turn_to_play: Piece::White,
            sequence: CaptureSequence::idle(),
            half_moves: 0,
        }
    }

    /// Returns the piece at the given position.
    #[inline]
    #[must_use]
    pub const fn get_piece(&self, position: Position) -> Piece {
        self.grid[position.row()][position.column()]
    }

    /// Places `piece` at `position`, overwriting whatever was there.
    #[inline]
    pub fn set_piece(&mut self, position: Position, piece: Piece) {
        self.grid[position.row()][position.column()] = piece;
    }

    /// Returns the side to move.
    #[inline]
    #[must_use]
    pub const fn turn_to_play(&self) -> Piece {
        self.turn_to_play
    }

    /// Returns the color of the opponent's pieces.
    #[inline]
    #[must_use]
    pub const fn other_side(&self) -> Piece {
        debug_assert!(self.turn_to_play.is_stone(), "turn_to_play is never Empty");
        match self.turn_to_play {
            Piece::White => Piece::Black,
            _ => Piece::White,
        }
    }

    /// Hands the turn to the other side.
    #[inline]
    pub fn swap_turn(&mut self) {
        self.turn_to_play = self.other_side();
    }

    /// Returns the number of half-moves played.
    #[inline]
    #[must_use]
    pub const fn half_moves(&self) -> u32 {
        self.half_moves
    }

    /// Advances the half-move counter by one.
    #[inline]
    pub fn increment_half_moves(&mut self) {
        self.half_moves += 1;
    }

    /// Counts the intersections holding `side`.
    #[must_use]
    pub fn count(&self, side: Piece) -> usize {
        Position::all()
            .filter(|pos| self.get_piece(*pos) == side)
            .count()
    }

    /// Checks whether at least one intersection holds `piece`.
    #[must_use]
    pub fn piece_exists(&self, piece: Piece) -> bool {
        Position::all().any(|pos| self.get_piece(pos) == piece)
    }

    /// Checks whether a capturing sequence is open, i.e. at least one
    /// capture has already been made this turn.
    #[inline]
    #[must_use]
    pub const fn in_capturing_sequence(&self) -> bool {
        self.sequence.is_active()
    }

    /// Returns the direction of the most recent capture, or
    /// [`Direction::None`] outside a capturing sequence.
    #[inline]
    #[must_use]
    pub const fn last_direction(&self) -> Direction {
        self.sequence.direction()
    }

    /// Checks whether the moving piece has already occupied `position`
    /// during the current capturing sequence.
    #[inline]
    #[must_use]
    pub const fn is_visited(&self, position: Position) -> bool {
        self.sequence.is_visited(position)
    }

    /// Returns the visited intersections of the current capturing
    /// sequence, in row-major board order.
    #[must_use]
    pub fn visited_positions(&self) -> Vec<Position> {
        self.sequence.visited_positions()
    }

    /// Opens a capturing sequence with the first capture's direction and
    /// the moving piece's starting intersection.
    ///
    /// See [`CaptureSequence::begin`].
    pub fn begin_capture(&mut self, direction: Direction, position: Position) {
        self.sequence.begin(direction, position);
    }

    /// Records a further capture in the open sequence.
    ///
    /// See [`CaptureSequence::extend`].
    pub fn extend_capture(&mut self, direction: Direction, position: Position) {
        self.sequence.extend(direction, position);
    }

    /// Closes the capturing sequence, clearing the last direction and the
    /// visited set in a single step.
    pub fn end_capture(&mut self) {
        self.sequence.end();
    }

    /// Checks whether the game is over.
    ///
    /// The game ends when the half-move counter reaches [`MOVE_LIMIT`]
    /// (draw) or when either side has no pieces left (loss for that side).
    /// Fanorona never leaves a side with pieces but no legal move, so piece
    /// presence stands in for move availability here; this mirrors the
    /// original environment's rule and is deliberately not re-derived from
    /// move generation.
    #[must_use]
    pub fn is_done(&self) -> bool {
        if self.half_moves >= MOVE_LIMIT {
            return true;
        }
        !(self.piece_exists(self.turn_to_play) && self.piece_exists(self.other_side()))
    }

    /// Scores the position for `side`.
    ///
    /// Returns [`Utility::Outcome`] for a terminal position — `Draw` at
    /// the move limit, otherwise `Win` for whichever side still has pieces
    /// and `Loss` for the other — and [`Utility::Material`] with the
    /// signed piece-count difference while the game is in progress.
    ///
    /// Fails with [`InvalidPieceConversion::Empty`] when `side` is
    /// [`Piece::Empty`].
    pub fn utility(&self, side: Piece) -> Result<Utility, InvalidPieceConversion> {
        let opponent = side.other()?;

        if self.half_moves >= MOVE_LIMIT {
            return Ok(Utility::Outcome(Reward::Draw));
        }

        if self.is_done() {
            let winner = if self.piece_exists(self.turn_to_play) {
                self.turn_to_play
            } else {
                self.other_side()
            };
            let reward = if side == winner {
                Reward::Win
            } else {
                Reward::Loss
            };
            return Ok(Utility::Outcome(reward));
        }

        let diff = self.count(side) as i32 - self.count(opponent) as i32;
        Ok(Utility::Material(diff))
    }

    /// Renders the board as an ASCII diagram with file and rank labels.
    ///
    /// ```text
    ///    A B C D E F G H I
    /// 1  B B B B B B B B B  1
    /// 2  B B B B B B B B B  2
    /// 3  B W B W . B W B W  3
    /// 4  W W W W W W W W W  4
    /// 5  W W W W W W W W W  5
    ///    A B C D E F G H I
    /// ```
    #[must_use]
    pub fn diagram(&self) -> String {
        let mut result = "   A B C D E F G H I\n".to_string();

        for (row_idx, row) in self.grid.iter().enumerate() {
            let rank = row_idx + 1;
            let mut line = format!("{rank} ");
            for piece in row {
                line += &format!(" {piece}");
            }
            line += &format!("  {rank}\n");
            result += &line;
        }

        result += "   A B C D E F G H I";
        result
    }
}

impl Default for FanoronaState {
    /// Returns the canonical starting position.
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

/// Error type for parsing a state from its notation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedNotation {
    /// The record does not have exactly 5 space-separated fields.
    FieldCount(usize),
    /// The board field does not have exactly 5 rows.
    RowCount(usize),
    /// A board row does not describe exactly 9 columns.
    RowWidth(usize),
    /// An unrecognized piece marker in the board or turn field.
    Piece(InvalidPieceConversion),
    /// The turn field is not a single piece letter.
    Turn,
    /// An unrecognized direction name.
    Direction(InvalidDirection),
    /// An invalid position label in the visited field.
    Visited(InvalidPosition),
    /// The half-move field is not a decimal integer.
    HalfMoves,
}

impl fmt::Display for MalformedNotation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::FieldCount(n) => write!(f, "expected 5 notation fields, found {n}"),
            Self::RowCount(n) => write!(f, "expected {BOARD_ROWS} board rows, found {n}"),
            Self::RowWidth(row) => {
                write!(f, "board row {row} does not describe {BOARD_COLS} columns")
            }
            Self::Piece(e) => write!(f, "{e}"),
            Self::Turn => write!(f, "invalid turn field, expected W or B"),
            Self::Direction(e) => write!(f, "{e}"),
            Self::Visited(e) => write!(f, "invalid visited label: {e}"),
            Self::HalfMoves => write!(f, "invalid half-move count, expected a decimal integer"),
        }
    }
}

impl std::error::Error for MalformedNotation {}

impl From<InvalidPieceConversion> for MalformedNotation {
    #[inline]
    fn from(e: InvalidPieceConversion) -> Self {
        Self::Piece(e)
    }
}

impl From<InvalidDirection> for MalformedNotation {
    #[inline]
    fn from(e: InvalidDirection) -> Self {
        Self::Direction(e)
    }
}

impl From<InvalidPosition> for MalformedNotation {
    #[inline]
    fn from(e: InvalidPosition) -> Self {
        Self::Visited(e)
    }
}

/// Parses the board field into a grid.
///
/// Digits are read one at a time, each standing for a run of that many
/// empty columns, so `111111111` and `9` describe the same row. Every row
/// must come out to exactly [`BOARD_COLS`] columns.
fn parse_grid(board: &str) -> Result<[[Piece; BOARD_COLS]; BOARD_ROWS], MalformedNotation> {
    let rows: Vec<&str> = board.split('/').collect();
    if rows.len() != BOARD_ROWS {
        return Err(MalformedNotation::RowCount(rows.len()));
    }

    let mut grid = [[Piece::Empty; BOARD_COLS]; BOARD_ROWS];
    for (row, cells) in rows.iter().enumerate() {
        let mut col = 0;
        for ch in cells.chars() {
            if let Some(run) = ch.to_digit(10) {
                col += run as usize;
            } else {
                if col >= BOARD_COLS {
                    return Err(MalformedNotation::RowWidth(row));
                }
                grid[row][col] = Piece::try_from(ch)?;
                col += 1;
            }
            if col > BOARD_COLS {
                return Err(MalformedNotation::RowWidth(row));
            }
        }
        if col != BOARD_COLS {
            return Err(MalformedNotation::RowWidth(row));
        }
    }
    Ok(grid)
}

/// Parses the turn field: a single piece letter.
fn parse_turn(field: &str) -> Result<Piece, MalformedNotation> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Piece::try_from(c)?),
        _ => Err(MalformedNotation::Turn),
    }
}

/// Parses the visited field: `-` or comma-separated position labels.
fn parse_visited(field: &str) -> Result<[[bool; BOARD_COLS]; BOARD_ROWS], MalformedNotation> {
    let mut visited = [[false; BOARD_COLS]; BOARD_ROWS];
    if field != "-" {
        for label in field.split(',') {
            let position = label.parse::<Position>()?;
            visited[position.row()][position.column()] = true;
        }
    }
    Ok(visited)
}

impl FromStr for FanoronaState {
    type Err = MalformedNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let &[board, turn, direction, visited, half_moves] = fields.as_slice() else {
            return Err(MalformedNotation::FieldCount(fields.len()));
        };

        let grid = parse_grid(board)?;
        let turn_to_play = parse_turn(turn)?;
        let direction = direction.parse::<Direction>()?;
        let visited = parse_visited(visited)?;
        let half_moves = half_moves
            .parse::<u32>()
            .map_err(|_| MalformedNotation::HalfMoves)?;

        Ok(Self {
            grid,
            turn_to_play,
            sequence: CaptureSequence::from_parts(direction, visited),
            half_moves,
        })
    }
}

impl fmt::Display for FanoronaState {
    /// Formats the state as its notation string, the exact inverse of
    /// parsing.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Board: run-length encode empty intersections per row. A pending
        // run is flushed before each piece and at each row end, and a zero
        // run is never written.
        for (row_idx, row) in self.grid.iter().enumerate() {
            if row_idx > 0 {
                write!(f, "/")?;
            }
            let mut run = 0;
            for piece in row {
                if piece.is_stone() {
                    if run > 0 {
                        write!(f, "{run}")?;
                        run = 0;
                    }
                    write!(f, "{piece}")?;
                } else {
                    run += 1;
                }
            }
            if run > 0 {
                write!(f, "{run}")?;
            }
        }

        write!(f, " {} {}", self.turn_to_play, self.sequence.direction())?;

        let visited = self.sequence.visited_positions();
        if visited.is_empty() {
            write!(f, " -")?;
        } else {
            for (i, position) in visited.iter().enumerate() {
                let separator = if i == 0 { ' ' } else { ',' };
                write!(f, "{separator}{position}")?;
            }
        }

        write!(f, " {}", self.half_moves)
    }
}
