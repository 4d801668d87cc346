//! Player colors.
//!
//! Patolli is strictly a two-player game, so the color doubles as the
//! player identifier throughout the engine.

use serde::{Deserialize, Serialize};

/// One of the two sides of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerColor {
    Black,
    White,
}

impl PlayerColor {
    /// Both colors, Black first.
    pub const ALL: [PlayerColor; 2] = [PlayerColor::Black, PlayerColor::White];

    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            PlayerColor::Black => PlayerColor::White,
            PlayerColor::White => PlayerColor::Black,
        }
    }

    /// Stable index (Black = 0, White = 1) for per-color arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerColor::Black => 0,
            PlayerColor::White => 1,
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerColor::Black => write!(f, "BLACK"),
            PlayerColor::White => write!(f, "WHITE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(PlayerColor::Black.opposite(), PlayerColor::White);
        assert_eq!(PlayerColor::White.opposite(), PlayerColor::Black);
        for color in PlayerColor::ALL {
            assert_eq!(color.opposite().opposite(), color);
        }
    }

    #[test]
    fn test_index_is_distinct() {
        assert_ne!(PlayerColor::Black.index(), PlayerColor::White.index());
        assert_eq!(format!("{}", PlayerColor::White), "WHITE");
    }

    #[test]
    fn test_color_serialization() {
        let json = serde_json::to_string(&PlayerColor::Black).unwrap();
        let back: PlayerColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PlayerColor::Black);
    }
}
