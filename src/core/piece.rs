//! Piece identification and per-token position state.
//!
//! ## PieceId
//!
//! Pieces are numbered 0-based within their owner. The pair
//! `(owner color, PieceId)` is unique across the game and is what the board
//! stores as a cell's occupant (`PieceRef`), so the board never holds the
//! piece itself.
//!
//! ## Lifecycle
//!
//! `OffBoard` -> `OnTrack(i)` -> ... -> `Finished`. A finished piece never
//! re-enters play.

use serde::{Deserialize, Serialize};

use super::color::PlayerColor;

/// Piece identifier, unique within one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece {}", self.0)
    }
}

/// Game-wide reference to a piece: owner color plus id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceRef {
    pub color: PlayerColor,
    pub id: PieceId,
}

impl PieceRef {
    #[must_use]
    pub const fn new(color: PlayerColor, id: PieceId) -> Self {
        Self { color, id }
    }
}

impl std::fmt::Display for PieceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.id)
    }
}

/// Where a piece currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PiecePosition {
    /// Waiting to enter.
    OffBoard,
    /// On the track at the given index.
    OnTrack(usize),
    /// Completed the circuit; out of play for good.
    Finished,
}

/// Movement direction along the track.
///
/// The canonical rules only ever move forward; the flag is reset whenever a
/// piece enters the track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Signed step multiplier (+1 / -1).
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// A single token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    id: PieceId,
    owner: PlayerColor,
    position: PiecePosition,
    direction: Direction,
}

impl Piece {
    /// Create a piece off the board.
    #[must_use]
    pub fn new(id: PieceId, owner: PlayerColor) -> Self {
        Self {
            id,
            owner,
            position: PiecePosition::OffBoard,
            direction: Direction::Forward,
        }
    }

    #[must_use]
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// Color of the owning player.
    #[must_use]
    pub fn owner(&self) -> PlayerColor {
        self.owner
    }

    /// Game-wide reference to this piece.
    #[must_use]
    pub fn piece_ref(&self) -> PieceRef {
        PieceRef::new(self.owner, self.id)
    }

    #[must_use]
    pub fn position(&self) -> PiecePosition {
        self.position
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Track index if on the track.
    #[must_use]
    pub fn track_index(&self) -> Option<usize> {
        match self.position {
            PiecePosition::OnTrack(index) => Some(index),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_on_board(&self) -> bool {
        matches!(self.position, PiecePosition::OnTrack(_))
    }

    #[must_use]
    pub fn is_off_board(&self) -> bool {
        self.position == PiecePosition::OffBoard
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.position == PiecePosition::Finished
    }

    /// Put the piece on its start cell, heading forward.
    pub fn place_at_start(&mut self, start_index: usize) {
        debug_assert!(self.is_off_board(), "{} entered while not off-board", self.piece_ref());
        self.position = PiecePosition::OnTrack(start_index);
        self.direction = Direction::Forward;
    }

    /// Move along the track.
    pub fn move_to(&mut self, index: usize) {
        debug_assert!(self.is_on_board(), "{} moved while not on the track", self.piece_ref());
        self.position = PiecePosition::OnTrack(index);
    }

    /// Take the piece out of play.
    pub fn finish(&mut self) {
        self.position = PiecePosition::Finished;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Overwrite the position without lifecycle checks.
    pub(crate) fn set_position(&mut self, position: PiecePosition) {
        self.position = position;
    }
}
