//! Capture-sequence bookkeeping.
//!
//! A Fanorona turn may chain several captures with the same piece. While
//! such a sequence is open, two facts constrain the next capture: the
//! direction just used, and the set of intersections the moving piece has
//! already occupied this turn. [`CaptureSequence`] owns both together so
//! they can only change through one transition at a time — a sequence is
//! active if and only if at least one intersection has been visited.
//!
//! The external move engine drives the transitions: [`begin`] when the
//! first capture of a turn is made, [`extend`] for each further capture,
//! and [`end`] when the turn concludes, which clears the direction and the
//! visited set in a single step.
//!
//! [`begin`]: CaptureSequence::begin
//! [`extend`]: CaptureSequence::extend
//! [`end`]: CaptureSequence::end

use crate::{Direction, Position, BOARD_COLS, BOARD_ROWS};

/// The state of the current capturing sequence, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaptureSequence {
    direction: Direction,
    visited: [[bool; BOARD_COLS]; BOARD_ROWS],
}

impl CaptureSequence {
    /// Creates an idle sequence: no direction, nothing visited.
    #[inline]
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            direction: Direction::None,
            visited: [[false; BOARD_COLS]; BOARD_ROWS],
        }
    }

    /// Rebuilds a sequence from decoded notation fields.
    ///
    /// The notation is trusted as given; consistency between the two
    /// fields is the responsibility of whoever produced the string.
    pub(crate) const fn from_parts(
        direction: Direction,
        visited: [[bool; BOARD_COLS]; BOARD_ROWS],
    ) -> Self {
        Self { direction, visited }
    }

    /// Checks whether a capturing sequence is open.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.direction.is_compass()
    }

    /// Returns the direction of the most recent capture, or
    /// [`Direction::None`] when idle.
    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Checks whether the moving piece has already occupied `position`
    /// during the current sequence.
    #[inline]
    #[must_use]
    pub const fn is_visited(&self, position: Position) -> bool {
        self.visited[position.row()][position.column()]
    }

    /// Returns every visited position, in row-major board order.
    #[must_use]
    pub fn visited_positions(&self) -> Vec<Position> {
        Position::all().filter(|pos| self.is_visited(*pos)).collect()
    }

    /// Opens a capturing sequence.
    ///
    /// `direction` is the direction of the first capture and `position` is
    /// the intersection the moving piece started from.
    ///
    /// # Panics (debug builds only)
    ///
    /// Panics if a sequence is already open or `direction` is
    /// [`Direction::None`].
    pub fn begin(&mut self, direction: Direction, position: Position) {
        debug_assert!(!self.is_active(), "a capturing sequence is already open");
        debug_assert!(direction.is_compass(), "a capture needs a direction");
        self.direction = direction;
        self.visited[position.row()][position.column()] = true;
    }

    /// Records a further capture in an open sequence.
    ///
    /// `direction` replaces the last capture direction and `position` is
    /// the intersection the piece has just moved onto.
    ///
    /// # Panics (debug builds only)
    ///
    /// Panics if no sequence is open or `direction` is [`Direction::None`].
    pub fn extend(&mut self, direction: Direction, position: Position) {
        debug_assert!(self.is_active(), "no capturing sequence is open");
        debug_assert!(direction.is_compass(), "a capture needs a direction");
        self.direction = direction;
        self.visited[position.row()][position.column()] = true;
    }

    /// Closes the sequence, clearing the direction and every visited
    /// intersection together.
    ///
    /// Safe to call on an idle sequence.
    pub fn end(&mut self) {
        *self = Self::idle();
    }
}

impl Default for CaptureSequence {
    #[inline]
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(label: &str) -> Position {
        label.parse().unwrap()
    }

    #[test]
    fn idle_sequence() {
        let seq = CaptureSequence::idle();
        assert!(!seq.is_active());
        assert_eq!(seq.direction(), Direction::None);
        assert!(seq.visited_positions().is_empty());
        for position in Position::all() {
            assert!(!seq.is_visited(position));
        }
    }

    #[test]
    fn begin_marks_origin_and_direction() {
        let mut seq = CaptureSequence::idle();
        seq.begin(Direction::NE, pos("C3"));

        assert!(seq.is_active());
        assert_eq!(seq.direction(), Direction::NE);
        assert!(seq.is_visited(pos("C3")));
        assert_eq!(seq.visited_positions(), vec![pos("C3")]);
    }

    #[test]
    fn extend_updates_direction_and_accumulates() {
        let mut seq = CaptureSequence::idle();
        seq.begin(Direction::E, pos("B2"));
        seq.extend(Direction::SE, pos("C2"));
        seq.extend(Direction::S, pos("D3"));

        assert_eq!(seq.direction(), Direction::S);
        // Row-major order regardless of visit order.
        assert_eq!(
            seq.visited_positions(),
            vec![pos("B2"), pos("C2"), pos("D3")]
        );
    }

    #[test]
    fn end_clears_direction_and_visited_together() {
        let mut seq = CaptureSequence::idle();
        seq.begin(Direction::NW, pos("E3"));
        seq.extend(Direction::N, pos("D2"));
        seq.end();

        assert_eq!(seq, CaptureSequence::idle());
        assert!(!seq.is_active());
        assert_eq!(seq.direction(), Direction::None);
        assert!(seq.visited_positions().is_empty());
    }

    #[test]
    fn end_on_idle_is_a_no_op() {
        let mut seq = CaptureSequence::idle();
        seq.end();
        assert_eq!(seq, CaptureSequence::idle());
    }

    #[test]
    fn active_iff_visited_nonempty() {
        let mut seq = CaptureSequence::idle();
        assert_eq!(seq.is_active(), !seq.visited_positions().is_empty());

        seq.begin(Direction::SW, pos("A1"));
        assert_eq!(seq.is_active(), !seq.visited_positions().is_empty());

        seq.end();
        assert_eq!(seq.is_active(), !seq.visited_positions().is_empty());
    }

    #[test]
    #[should_panic(expected = "a capturing sequence is already open")]
    fn begin_twice_panics() {
        let mut seq = CaptureSequence::idle();
        seq.begin(Direction::N, pos("A1"));
        seq.begin(Direction::S, pos("A2"));
    }

    #[test]
    #[should_panic(expected = "no capturing sequence is open")]
    fn extend_idle_panics() {
        let mut seq = CaptureSequence::idle();
        seq.extend(Direction::N, pos("A1"));
    }

    #[test]
    #[should_panic(expected = "a capture needs a direction")]
    fn begin_without_direction_panics() {
        let mut seq = CaptureSequence::idle();
        seq.begin(Direction::None, pos("A1"));
    }
}
