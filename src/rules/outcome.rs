//! Game results.

use serde::{Deserialize, Serialize};

use crate::core::PlayerColor;

/// Why the game ended in a win.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinCause {
    /// The loser's coin balance reached zero.
    OpponentOutOfCoins,
    /// The winner moved all six pieces home.
    AllPiecesFinished,
}

impl WinCause {
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            WinCause::OpponentOutOfCoins => "opponent ran out of coins",
            WinCause::AllPiecesFinished => "moved all pieces off the board",
        }
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Single winner.
    Winner { color: PlayerColor, cause: WinCause },
    /// Both players out of coins at once.
    Draw,
}

impl GameOutcome {
    /// Check if a color won.
    #[must_use]
    pub fn is_winner(&self, color: PlayerColor) -> bool {
        matches!(self, GameOutcome::Winner { color: c, .. } if *c == color)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerColor> {
        match self {
            GameOutcome::Winner { color, .. } => Some(*color),
            GameOutcome::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_outcome_is_winner() {
        let result = GameOutcome::Winner {
            color: PlayerColor::White,
            cause: WinCause::AllPiecesFinished,
        };
        assert!(result.is_winner(PlayerColor::White));
        assert!(!result.is_winner(PlayerColor::Black));
        assert_eq!(result.winner(), Some(PlayerColor::White));

        assert!(!GameOutcome::Draw.is_winner(PlayerColor::Black));
        assert_eq!(GameOutcome::Draw.winner(), None);
    }

    #[test]
    fn test_cause_text() {
        assert_eq!(WinCause::OpponentOutOfCoins.describe(), "opponent ran out of coins");
    }
}
