//! Movement rules: where a piece ends up for a given roll.
//!
//! The track is one loop and each color's start cell doubles as its finish
//! line. A piece heading home must land on its start exactly:
//!
//! - `dist` = forward distance from the piece to its own start
//! - `dist == 0` (sitting on its own start): ordinary advance
//! - `steps < dist`: ordinary advance
//! - `steps == dist`: the piece finishes, whoever stands on the start cell
//! - `steps > dist`: illegal, the piece may not overshoot and circle again
//!
//! An ordinary advance is only legal onto a free cell. There are no
//! captures.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::PlayerColor;

/// Result of a movement query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// Move to this free track index.
    Advance(usize),
    /// Leave the track as finished.
    Finish,
    /// The roll exceeds the distance home.
    Overshoot { distance: usize },
    /// The target cell is held by another piece.
    Occupied(usize),
}

impl Destination {
    /// Whether the move may be made.
    #[must_use]
    pub fn is_legal(self) -> bool {
        matches!(self, Destination::Advance(_) | Destination::Finish)
    }
}

/// Stateless movement calculator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovementRules;

impl MovementRules {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Where `steps` would take a `color` piece from `from`, ignoring
    /// occupancy of the target cell.
    #[must_use]
    pub fn target(&self, board: &Board, color: PlayerColor, from: usize, steps: usize) -> Destination {
        let distance = board.forward_distance(from, board.start_index(color));

        if distance == 0 || steps < distance {
            Destination::Advance(board.advance_index(from, steps))
        } else if steps == distance {
            Destination::Finish
        } else {
            Destination::Overshoot { distance }
        }
    }

    /// The legal destination for the move, or the reason there is none.
    ///
    /// An `Advance` result is always a free cell.
    #[must_use]
    pub fn destination(&self, board: &Board, color: PlayerColor, from: usize, steps: usize) -> Destination {
        match self.target(board, color, from, steps) {
            Destination::Advance(index) if !board.is_free(index) => Destination::Occupied(index),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PieceId, PieceRef};

    const RULES: MovementRules = MovementRules::new();

    #[test]
    fn test_advance_from_own_start() {
        let board = Board::default();
        // White starts at 0
        assert_eq!(RULES.destination(&board, PlayerColor::White, 0, 3), Destination::Advance(3));
        // Black starts at 30
        assert_eq!(RULES.destination(&board, PlayerColor::Black, 30, 5), Destination::Advance(35));
    }

    #[test]
    fn test_exact_finish() {
        let board = Board::default();
        assert_eq!(RULES.destination(&board, PlayerColor::White, 57, 3), Destination::Finish);
        assert_eq!(RULES.destination(&board, PlayerColor::Black, 29, 1), Destination::Finish);
    }

    #[test]
    fn test_overshoot_rejected() {
        let board = Board::default();
        let dest = RULES.destination(&board, PlayerColor::White, 58, 4);
        assert_eq!(dest, Destination::Overshoot { distance: 2 });
        assert!(!dest.is_legal());
    }

    #[test]
    fn test_passing_opponent_start_is_fine() {
        let board = Board::default();
        // White at 28 crosses Black's start (30) on the way home
        assert_eq!(RULES.destination(&board, PlayerColor::White, 28, 4), Destination::Advance(32));
    }

    #[test]
    fn test_finish_ignores_start_occupancy() {
        let mut board = Board::default();
        board.occupy(0, PieceRef::new(PlayerColor::White, PieceId::new(1)));
        assert_eq!(RULES.destination(&board, PlayerColor::White, 57, 3), Destination::Finish);
    }

    #[test]
    fn test_occupied_target() {
        let mut board = Board::default();
        board.occupy(4, PieceRef::new(PlayerColor::Black, PieceId::new(0)));

        assert_eq!(RULES.target(&board, PlayerColor::White, 1, 3), Destination::Advance(4));
        assert_eq!(RULES.destination(&board, PlayerColor::White, 1, 3), Destination::Occupied(4));
    }

    #[test]
    fn test_zero_steps_is_never_legal() {
        let mut board = Board::default();
        let me = PieceRef::new(PlayerColor::White, PieceId::new(0));
        board.occupy(12, me);
        assert_eq!(RULES.destination(&board, PlayerColor::White, 12, 0), Destination::Occupied(12));
    }
}
