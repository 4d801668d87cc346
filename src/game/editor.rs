//! Direct position editing.
//!
//! Puzzles, tutorials, and tests need to start from arbitrary positions.
//! The editor bypasses the turn rules but still keeps piece positions and
//! cell occupancy in sync. Edits emit no events. Finished pieces stay
//! finished, and once the game is decided every edit is refused.
//!
//! ```
//! use patolli::core::{PieceId, PieceRef, PlayerColor};
//! use patolli::game::GameBuilder;
//!
//! let mut game = GameBuilder::new().seed(1).build().unwrap();
//! let piece = PieceRef::new(PlayerColor::White, PieceId::new(1));
//!
//! game.edit().place(piece, 57).unwrap();
//! assert_eq!(game.piece_at(57).map(|p| p.id()), Some(PieceId::new(1)));
//! ```

use crate::core::{PiecePosition, PieceRef, PlayerColor, RuleViolation, COIN_COUNT};

use super::state::Game;

/// Mutable handle for arranging a position. See [`Game::edit`].
#[derive(Debug)]
pub struct PositionEditor<'a> {
    game: &'a mut Game,
}

impl Game {
    /// Open a position editor.
    pub fn edit(&mut self) -> PositionEditor<'_> {
        PositionEditor { game: self }
    }
}

impl PositionEditor<'_> {
    /// Put a piece on a track index, lifting it from wherever it was.
    pub fn place(&mut self, piece: PieceRef, index: usize) -> Result<(), RuleViolation> {
        let previous = self.unfinished_position(piece)?;
        let board = self.game.board_mut();
        match board.occupant(index) {
            Some(other) if other != piece => {
                return Err(RuleViolation::DestinationOccupied { index });
            }
            _ => {}
        }

        if let PiecePosition::OnTrack(from) = previous {
            board.free(from);
        }
        board.occupy(index, piece);
        self.set_position(piece, PiecePosition::OnTrack(index));
        Ok(())
    }

    /// Mark a piece as finished.
    pub fn finish(&mut self, piece: PieceRef) -> Result<(), RuleViolation> {
        let from = self.position_of(piece)?;
        self.lift(piece, from, PiecePosition::Finished);
        Ok(())
    }

    /// Send a piece back off the board.
    pub fn remove(&mut self, piece: PieceRef) -> Result<(), RuleViolation> {
        let from = self.unfinished_position(piece)?;
        self.lift(piece, from, PiecePosition::OffBoard);
        Ok(())
    }

    /// Overwrite a coin balance.
    pub fn set_coins(&mut self, color: PlayerColor, coins: i32) -> Result<(), RuleViolation> {
        self.ensure_open()?;
        let player = self.game.player_mut_for_edit(color);
        player.add_coins(coins - player.coins());
        Ok(())
    }

    /// Hand the turn to `color`.
    pub fn set_current(&mut self, color: PlayerColor) -> Result<(), RuleViolation> {
        self.ensure_open()?;
        self.game.set_current(color);
        Ok(())
    }

    /// Set (or clear) the pending roll.
    ///
    /// # Panics
    ///
    /// Panics if the roll exceeds the number of coins.
    pub fn set_roll(&mut self, roll: Option<u8>) -> Result<(), RuleViolation> {
        if let Some(r) = roll {
            assert!(r <= COIN_COUNT, "Roll {} out of range", r);
        }
        self.ensure_open()?;
        self.game.set_last_roll(roll);
        Ok(())
    }

    /// A decided game is frozen, edits included.
    fn ensure_open(&self) -> Result<(), RuleViolation> {
        if self.game.is_game_over() {
            Err(RuleViolation::GameOver)
        } else {
            Ok(())
        }
    }

    fn lift(&mut self, piece: PieceRef, from: PiecePosition, to: PiecePosition) {
        if let PiecePosition::OnTrack(index) = from {
            self.game.board_mut().free(index);
        }
        self.set_position(piece, to);
    }

    fn position_of(&self, piece: PieceRef) -> Result<PiecePosition, RuleViolation> {
        self.ensure_open()?;
        self.game
            .piece(piece)
            .map(|p| p.position())
            .ok_or(RuleViolation::UnknownPiece { piece })
    }

    /// Finished pieces never come back into play.
    fn unfinished_position(&self, piece: PieceRef) -> Result<PiecePosition, RuleViolation> {
        match self.position_of(piece)? {
            PiecePosition::Finished => Err(RuleViolation::PieceFinished { piece }),
            position => Ok(position),
        }
    }

    fn set_position(&mut self, piece: PieceRef, position: PiecePosition) {
        if let Some(p) = self.game.player_mut_for_edit(piece.color).piece_mut(piece.id) {
            p.set_position(position);
        }
    }
}
