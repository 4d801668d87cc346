//! Player state: name, color, coin balance, and the fixed set of pieces.
//!
//! ## Ownership
//!
//! A `Player` exclusively owns its pieces. Everything else (the board's
//! occupancy, the game's queries) refers to a piece through its `PieceId`
//! or a `PieceRef`, resolved against the owner's piece list.

use serde::{Deserialize, Serialize};

use super::color::PlayerColor;
use super::piece::{Piece, PieceId};

/// Number of pieces each player owns.
pub const PIECES_PER_PLAYER: usize = 6;

/// Coin balance every player starts with unless configured otherwise.
pub const DEFAULT_STARTING_COINS: i32 = 20;

/// One side of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: PlayerColor,
    coins: i32,
    pieces: Vec<Piece>,
}

impl Player {
    /// Create a player with all pieces off the board.
    pub fn new(name: impl Into<String>, color: PlayerColor, coins: i32) -> Self {
        let pieces = (0..PIECES_PER_PLAYER as u8)
            .map(|i| Piece::new(PieceId::new(i), color))
            .collect();

        Self {
            name: name.into(),
            color,
            coins,
            pieces,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    #[must_use]
    pub fn coins(&self) -> i32 {
        self.coins
    }

    /// Adjust the coin balance by `delta` (may be negative).
    pub fn add_coins(&mut self, delta: i32) {
        self.coins += delta;
    }

    /// Whether the player still has at least one coin.
    #[must_use]
    pub fn has_coins(&self) -> bool {
        self.coins > 0
    }

    /// All pieces, ordered by id.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Look up a piece by id.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// Look up a piece by id (mutable).
    pub fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.index())
    }

    /// First piece that has neither entered nor finished.
    #[must_use]
    pub fn first_reserved(&self) -> Option<PieceId> {
        self.reserved().next().map(Piece::id)
    }

    /// Pieces waiting off the board.
    pub fn reserved(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.is_off_board())
    }

    /// Pieces currently on the track.
    pub fn on_track(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.is_on_board())
    }

    #[must_use]
    pub fn has_reserved(&self) -> bool {
        self.reserved().next().is_some()
    }

    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.is_finished()).count()
    }

    /// Whether every piece has finished.
    #[must_use]
    pub fn all_finished(&self) -> bool {
        self.finished_count() == self.pieces.len()
    }
}
