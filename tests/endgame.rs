//! Terminal-condition and scoring tests.
//!
//! The game ends at the half-move limit (draw) or when a side runs out of
//! pieces (loss for that side). A side with pieces always has a legal
//! move in Fanorona, so piece presence is the terminal test.

use fanorona::{FanoronaState, Piece, Reward, Utility, MOVE_LIMIT};
use test_case::test_case;

#[test]
fn starting_position_is_not_terminal() {
    let state = FanoronaState::initial();
    assert!(!state.is_done());
    assert_eq!(state.utility(Piece::White).unwrap(), Utility::Material(0));
    assert_eq!(state.utility(Piece::Black).unwrap(), Utility::Material(0));
}

#[test]
fn empty_board_is_a_loss_for_the_side_to_move() {
    let state: FanoronaState = "9/9/9/9/9 W - - 0".parse().unwrap();
    assert_eq!(state.count(Piece::White), 0);
    assert_eq!(state.count(Piece::Black), 0);
    assert!(state.is_done());
    assert_eq!(
        state.utility(Piece::White).unwrap(),
        Utility::Outcome(Reward::Loss)
    );
    assert_eq!(
        state.utility(Piece::Black).unwrap(),
        Utility::Outcome(Reward::Win)
    );
}

#[test_case("9/9/4W4/9/9 B - - 10", Piece::White ; "black_to_move_has_nothing")]
#[test_case("9/9/4W4/9/9 W - - 10", Piece::White ; "white_to_move_opponent_exhausted")]
#[test_case("4B4/9/9/9/9 W - - 10", Piece::Black ; "white_to_move_has_nothing")]
#[test_case("4B4/9/9/9/9 B - - 10", Piece::Black ; "black_to_move_opponent_exhausted")]
fn piece_exhaustion_wins_for_the_remaining_side(notation: &str, winner: Piece) {
    let state: FanoronaState = notation.parse().unwrap();
    assert!(state.is_done());

    let loser = winner.other().unwrap();
    assert_eq!(
        state.utility(winner).unwrap(),
        Utility::Outcome(Reward::Win)
    );
    assert_eq!(state.utility(loser).unwrap(), Utility::Outcome(Reward::Loss));
}

#[test]
fn exhaustion_terminal_has_exactly_one_winner() {
    let state: FanoronaState = "9/9/9/W7B/9 B - - 3".parse().unwrap();
    assert!(!state.is_done());

    let exhausted: FanoronaState = "9/9/9/W8/9 B - - 3".parse().unwrap();
    assert!(exhausted.is_done());
    let white = exhausted.utility(Piece::White).unwrap();
    let black = exhausted.utility(Piece::Black).unwrap();
    assert!(
        (white == Utility::Outcome(Reward::Win) && black == Utility::Outcome(Reward::Loss))
            || (white == Utility::Outcome(Reward::Loss) && black == Utility::Outcome(Reward::Win))
    );
}

#[test]
fn move_limit_draws_for_both_sides() {
    let notation = format!(
        "BBBBBBBBB/BBBBBBBBB/BWBW1BWBW/WWWWWWWWW/WWWWWWWWW W - - {MOVE_LIMIT}"
    );
    let state: FanoronaState = notation.parse().unwrap();
    assert!(state.is_done());
    assert_eq!(
        state.utility(Piece::White).unwrap(),
        Utility::Outcome(Reward::Draw)
    );
    assert_eq!(
        state.utility(Piece::Black).unwrap(),
        Utility::Outcome(Reward::Draw)
    );
}

#[test]
fn one_half_move_below_the_limit_is_not_a_draw() {
    let below = MOVE_LIMIT - 1;
    let notation =
        format!("BBBBBBBBB/BBBBBBBBB/BWBW1BWBW/WWWWWWWWW/WWWWWWWWW W - - {below}");
    let state: FanoronaState = notation.parse().unwrap();
    assert!(!state.is_done());
    assert_eq!(state.utility(Piece::White).unwrap(), Utility::Material(0));
}

#[test]
fn terminality_is_monotonic_past_the_limit() {
    for half_moves in [MOVE_LIMIT, MOVE_LIMIT + 1, MOVE_LIMIT + 50] {
        let notation = format!("9/9/3WB4/9/9 W - - {half_moves}");
        let state: FanoronaState = notation.parse().unwrap();
        assert!(state.is_done(), "half_moves = {half_moves}");
        assert_eq!(
            state.utility(Piece::White).unwrap(),
            Utility::Outcome(Reward::Draw)
        );
        assert_eq!(
            state.utility(Piece::Black).unwrap(),
            Utility::Outcome(Reward::Draw)
        );
    }
}

#[test]
fn move_limit_takes_precedence_over_exhaustion() {
    // Even with a side exhausted, the limit scores the game as drawn.
    let notation = format!("9/9/4W4/9/9 B - - {MOVE_LIMIT}");
    let state: FanoronaState = notation.parse().unwrap();
    assert!(state.is_done());
    assert_eq!(
        state.utility(Piece::White).unwrap(),
        Utility::Outcome(Reward::Draw)
    );
}

#[test_case("WWW6/9/9/9/8B W - - 5", 2 ; "white_ahead")]
#[test_case("W8/9/9/9/BBBB5 W - - 5", -3 ; "black_ahead")]
#[test_case("WB7/9/9/9/9 B - - 5", 0 ; "level_material")]
fn non_terminal_utility_is_the_material_difference(notation: &str, diff: i32) {
    let state: FanoronaState = notation.parse().unwrap();
    assert!(!state.is_done());
    assert_eq!(state.utility(Piece::White).unwrap(), Utility::Material(diff));
    assert_eq!(
        state.utility(Piece::Black).unwrap(),
        Utility::Material(-diff)
    );
}

#[test]
fn utility_rejects_the_empty_side() {
    let state = FanoronaState::initial();
    assert!(state.utility(Piece::Empty).is_err());
}

#[test]
fn incrementing_to_the_limit_terminates_the_game() {
    let mut state: FanoronaState = "9/9/3WB4/9/9 W - - 0".parse().unwrap();
    for _ in 0..MOVE_LIMIT {
        assert!(!state.is_done());
        state.increment_half_moves();
    }
    assert!(state.is_done());
    assert_eq!(
        state.utility(Piece::White).unwrap(),
        Utility::Outcome(Reward::Draw)
    );
}
