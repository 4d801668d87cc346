//! Error types.
//!
//! `RuleViolation` covers every rejected player action. A rejected action
//! never changes game state, so hosts can show the message and carry on.
//! Broken internal invariants are not represented here; they panic.

use std::path::PathBuf;

use super::color::PlayerColor;
use super::piece::PieceRef;

/// A player action the rules do not allow right now.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("the game is over")]
    GameOver,

    #[error("already rolled this turn; move, enter a piece, or pass")]
    RollPending,

    #[error("roll the coins before acting")]
    NoRoll,

    #[error("{piece} does not exist")]
    UnknownPiece { piece: PieceRef },

    #[error("{piece} belongs to {owner}, but it is {current}'s turn")]
    NotYourPiece {
        piece: PieceRef,
        owner: PlayerColor,
        current: PlayerColor,
    },

    #[error("{piece} is not on the track")]
    PieceNotOnTrack { piece: PieceRef },

    #[error("{piece} has already finished")]
    PieceFinished { piece: PieceRef },

    #[error("{piece} needs exactly {needed} to finish but the roll is {roll}")]
    Overshoot { piece: PieceRef, needed: usize, roll: u8 },

    #[error("cell {index} is occupied")]
    DestinationOccupied { index: usize },

    #[error("{color} cannot enter a new piece now")]
    EntryNotAllowed { color: PlayerColor },

    #[error("a legal move is available; passing is not allowed")]
    LegalMoveAvailable,
}

/// Errors loading or validating a [`GameConfig`](super::GameConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PieceId;

    #[test]
    fn test_violation_messages() {
        let piece = PieceRef::new(PlayerColor::White, PieceId::new(2));

        let err = RuleViolation::Overshoot { piece, needed: 2, roll: 4 };
        assert_eq!(
            err.to_string(),
            "WHITE Piece 2 needs exactly 2 to finish but the roll is 4"
        );

        let err = RuleViolation::NotYourPiece {
            piece,
            owner: PlayerColor::White,
            current: PlayerColor::Black,
        };
        assert!(err.to_string().contains("BLACK's turn"));
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::Validation("starting_coins must be > 0".into());
        assert_eq!(err.to_string(), "invalid configuration: starting_coins must be > 0");
    }
}
