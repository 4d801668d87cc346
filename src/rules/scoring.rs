//! Landing effects.
//!
//! Landing on a triangle costs the mover one coin, paid to the opponent.
//! Landing on an endpoint grants an extra turn. The two never coincide
//! because the board classifies each cell exactly once.

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Combined effect of landing on a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingEffect {
    /// Coin delta for the mover (0 or -1).
    pub coin_delta: i32,
    /// Whether the mover keeps the turn.
    pub extra_turn: bool,
}

/// Stateless scoring calculator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoringRules;

impl ScoringRules {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Coin delta for the mover landing on `index`: -1 on a triangle,
    /// otherwise 0.
    #[must_use]
    pub fn penalty_for_landing(&self, board: &Board, index: usize) -> i32 {
        if board.is_triangle(index) {
            -1
        } else {
            0
        }
    }

    /// Whether landing on `index` grants an extra turn.
    #[must_use]
    pub fn is_extra_turn(&self, board: &Board, index: usize) -> bool {
        board.is_endpoint(index)
    }

    #[must_use]
    pub fn landing_effect(&self, board: &Board, index: usize) -> LandingEffect {
        LandingEffect {
            coin_delta: self.penalty_for_landing(board, index),
            extra_turn: self.is_extra_turn(board, index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORING: ScoringRules = ScoringRules::new();

    #[test]
    fn test_penalty_cells() {
        let board = Board::default();
        for idx in board.penalty_cells() {
            assert_eq!(SCORING.penalty_for_landing(&board, idx), -1);
            assert!(!SCORING.is_extra_turn(&board, idx));
        }
    }

    #[test]
    fn test_endpoints_grant_extra_turn_without_penalty() {
        let board = Board::default();
        for idx in board.endpoints() {
            let effect = SCORING.landing_effect(&board, idx);
            assert!(effect.extra_turn);
            assert_eq!(effect.coin_delta, 0);
        }
    }

    #[test]
    fn test_plain_cells_have_no_effect() {
        let board = Board::default();
        assert_eq!(SCORING.landing_effect(&board, 0), LandingEffect::default());
        assert_eq!(SCORING.landing_effect(&board, 14), LandingEffect::default());
        assert_eq!(SCORING.landing_effect(&board, 30), LandingEffect::default());
    }
}
