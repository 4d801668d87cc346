//! Read-only state query surface for presentation layers.
//!
//! Renderers subscribe to events and then re-read whatever they show. The
//! types here are plain data copies of the engine state; `GameSnapshot`
//! bundles all of it and serializes with serde.

use serde::{Deserialize, Serialize};

use crate::board::CellType;
use crate::core::{Piece, PieceId, PiecePosition, PieceRef, PlayerColor};

use super::state::{Game, TurnPhase};

/// Where a piece is, in grid terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceStatus {
    OffBoard,
    OnBoard { row: usize, col: usize },
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceView {
    pub id: PieceId,
    pub owner: PlayerColor,
    pub status: PieceStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub cell_type: CellType,
    pub occupant: Option<PieceRef>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub color: PlayerColor,
    pub coins: i32,
    pub finished: usize,
    pub pieces: Vec<PieceView>,
}

/// Everything a presentation layer reads, captured at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub black: PlayerView,
    pub white: PlayerView,
    pub current: PlayerColor,
    pub opponent: PlayerColor,
    pub last_roll: Option<u8>,
    pub phase: TurnPhase,
    pub can_enter_new_piece: bool,
    pub must_pass: bool,
    pub is_game_over: bool,
    pub game_over_message: Option<String>,
    pub pot: i32,
    pub cells: Vec<CellView>,
}

impl Game {
    /// Grid status of a piece.
    #[must_use]
    pub fn piece_status(&self, piece: &Piece) -> PieceStatus {
        match piece.position() {
            PiecePosition::OffBoard => PieceStatus::OffBoard,
            PiecePosition::Finished => PieceStatus::Finished,
            PiecePosition::OnTrack(index) => {
                let cell = self.board().cell(index);
                PieceStatus::OnBoard {
                    row: cell.row(),
                    col: cell.col(),
                }
            }
        }
    }

    #[must_use]
    pub fn piece_views(&self, color: PlayerColor) -> Vec<PieceView> {
        self.player(color)
            .pieces()
            .iter()
            .map(|p| PieceView {
                id: p.id(),
                owner: p.owner(),
                status: self.piece_status(p),
            })
            .collect()
    }

    #[must_use]
    pub fn player_view(&self, color: PlayerColor) -> PlayerView {
        let player = self.player(color);
        PlayerView {
            name: player.name().to_string(),
            color,
            coins: player.coins(),
            finished: player.finished_count(),
            pieces: self.piece_views(color),
        }
    }

    /// Full cell list, ordered by track index.
    #[must_use]
    pub fn cell_views(&self) -> Vec<CellView> {
        self.board()
            .cells()
            .iter()
            .map(|c| CellView {
                index: c.index(),
                row: c.row(),
                col: c.col(),
                cell_type: c.cell_type(),
                occupant: c.occupant(),
            })
            .collect()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            rows: self.board().rows(),
            cols: self.board().cols(),
            black: self.player_view(PlayerColor::Black),
            white: self.player_view(PlayerColor::White),
            current: self.current(),
            opponent: self.opponent(),
            last_roll: self.last_roll(),
            phase: self.phase(),
            can_enter_new_piece: self.can_enter_new_piece(),
            must_pass: self.must_pass(),
            is_game_over: self.is_game_over(),
            game_over_message: self.game_over_message(),
            pot: self.pot(),
            cells: self.cell_views(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dice;
    use crate::game::GameBuilder;

    fn game() -> Game {
        GameBuilder::new()
            .names("Ana", "Bo")
            .first_player(PlayerColor::Black)
            .dice(Dice::loaded([3]))
            .build()
            .unwrap()
    }

    #[test]
    fn test_piece_views() {
        let game = game();
        let views = game.piece_views(PlayerColor::White);

        assert_eq!(views.len(), 6);
        assert_eq!(views[0].status, PieceStatus::OnBoard { row: 8, col: 7 });
        assert!(views[1..].iter().all(|v| v.status == PieceStatus::OffBoard));
    }

    #[test]
    fn test_cell_views() {
        let game = game();
        let cells = game.cell_views();

        assert_eq!(cells.len(), 60);
        assert_eq!(cells[30].cell_type, CellType::Start);
        assert_eq!(cells[30].occupant.map(|r| r.color), Some(PlayerColor::Black));
        assert_eq!(cells[7].cell_type, CellType::Endpoint);
        assert_eq!(cells[5].cell_type, CellType::TrianglePenalty);
        assert_eq!(cells[14].occupant, None);
    }

    #[test]
    fn test_snapshot() {
        let mut game = game();
        game.roll().unwrap();
        let snap = game.snapshot();

        assert_eq!((snap.rows, snap.cols), (16, 16));
        assert_eq!(snap.black.name, "Ana");
        assert_eq!(snap.current, PlayerColor::Black);
        assert_eq!(snap.opponent, PlayerColor::White);
        assert_eq!(snap.last_roll, Some(3));
        assert_eq!(snap.phase, TurnPhase::AwaitingAction);
        assert!(!snap.must_pass);
        assert!(!snap.is_game_over);
        assert_eq!(snap.game_over_message, None);
        assert_eq!(snap.pot, 0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = game().snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
