//! Movement and scoring rule tests, including property checks over every
//! track index and roll.

use patolli::board::Board;
use patolli::core::{PieceId, PieceRef, PlayerColor};
use patolli::rules::{Destination, MovementRules, ScoringRules};
use proptest::prelude::*;

const RULES: MovementRules = MovementRules::new();
const SCORING: ScoringRules = ScoringRules::new();

fn color_strategy() -> impl Strategy<Value = PlayerColor> {
    prop_oneof![Just(PlayerColor::Black), Just(PlayerColor::White)]
}

proptest! {
    /// A piece sitting on its own start always advances normally.
    #[test]
    fn prop_own_start_advances(color in color_strategy(), steps in 1usize..=5) {
        let board = Board::default();
        let start = board.start_index(color);
        prop_assert_eq!(
            RULES.target(&board, color, start, steps),
            Destination::Advance((start + steps) % board.size())
        );
    }

    /// Finishing happens exactly when the roll equals the distance home.
    #[test]
    fn prop_finish_iff_exact(color in color_strategy(), from in 0usize..60, steps in 1usize..=5) {
        let board = Board::default();
        let distance = board.forward_distance(from, board.start_index(color));
        let target = RULES.target(&board, color, from, steps);

        prop_assert_eq!(target == Destination::Finish, distance != 0 && steps == distance);
        if distance != 0 && steps > distance {
            prop_assert_eq!(target, Destination::Overshoot { distance });
        }
    }

    /// An advance never passes the mover's own start.
    #[test]
    fn prop_advance_never_wraps_home(color in color_strategy(), from in 0usize..60, steps in 1usize..=60) {
        let board = Board::default();
        let start = board.start_index(color);
        if let Destination::Advance(to) = RULES.target(&board, color, from, steps) {
            prop_assert_eq!(to, board.advance_index(from, steps));
            if from != start {
                prop_assert!(board.forward_distance(from, to) < board.forward_distance(from, start));
            }
        }
    }

    /// Destination only differs from target by the occupancy check.
    #[test]
    fn prop_destination_respects_occupancy(
        color in color_strategy(),
        from in 0usize..60,
        steps in 1usize..=5,
        blocker in 0usize..60,
    ) {
        let mut board = Board::default();
        if blocker != from {
            board.occupy(blocker, PieceRef::new(color.opposite(), PieceId::new(0)));
        }

        let destination = RULES.destination(&board, color, from, steps);
        match RULES.target(&board, color, from, steps) {
            Destination::Advance(to) if to == blocker && blocker != from => {
                prop_assert_eq!(destination, Destination::Occupied(to));
            }
            other => prop_assert_eq!(destination, other),
        }
    }

    /// Triangles cost one coin, endpoints grant a turn, never both.
    #[test]
    fn prop_landing_effects_exclusive(index in 0usize..60) {
        let board = Board::default();
        let effect = SCORING.landing_effect(&board, index);

        prop_assert_eq!(effect.coin_delta == -1, board.is_triangle(index));
        prop_assert_eq!(effect.extra_turn, board.is_endpoint(index));
        prop_assert!(!(effect.coin_delta != 0 && effect.extra_turn));
    }
}

#[test]
fn test_white_finishes_from_57_with_three() {
    let board = Board::default();
    assert_eq!(RULES.destination(&board, PlayerColor::White, 57, 3), Destination::Finish);
    assert_eq!(RULES.destination(&board, PlayerColor::White, 57, 2), Destination::Advance(59));
    assert_eq!(
        RULES.destination(&board, PlayerColor::White, 57, 4),
        Destination::Overshoot { distance: 3 }
    );
}

#[test]
fn test_black_finishes_on_its_own_start() {
    let board = Board::default();
    assert_eq!(RULES.destination(&board, PlayerColor::Black, 28, 2), Destination::Finish);
    // White passes Black's start freely
    assert_eq!(RULES.destination(&board, PlayerColor::White, 28, 2), Destination::Advance(30));
}

#[test]
fn test_finish_ignores_start_occupant() {
    let mut board = Board::default();
    board.occupy(0, PieceRef::new(PlayerColor::White, PieceId::new(1)));
    assert_eq!(RULES.destination(&board, PlayerColor::White, 58, 2), Destination::Finish);
}

#[test]
fn test_penalty_cells_on_cross() {
    let board = Board::default();
    for index in [5, 6, 9, 10, 20, 21, 24, 25, 35, 36, 39, 40, 50, 51, 54, 55] {
        assert_eq!(SCORING.penalty_for_landing(&board, index), -1, "index {}", index);
    }
    for index in [7, 8, 22, 23, 37, 38, 52, 53] {
        assert!(SCORING.is_extra_turn(&board, index), "index {}", index);
        assert_eq!(SCORING.penalty_for_landing(&board, index), 0);
    }
    assert_eq!(SCORING.landing_effect(&board, 0), Default::default());
}

#[test]
fn test_own_start_accepts_any_step_count() {
    let board = Board::default();
    for color in PlayerColor::ALL {
        let start = board.start_index(color);
        assert_eq!(
            RULES.target(&board, color, start, usize::MAX),
            Destination::Advance(board.advance_index(start, usize::MAX % board.size()))
        );
    }
    assert_eq!(RULES.target(&board, PlayerColor::Black, 30, usize::MAX), Destination::Advance(45));
    assert_eq!(RULES.target(&board, PlayerColor::White, 0, usize::MAX), Destination::Advance(15));
}
