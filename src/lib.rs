//! # patolli
//!
//! Rule engine for Patolli, the cross-shaped race game played with five
//! coins. Two players move six pieces each around a closed track, paying
//! coins on triangle cells and earning extra turns on the arm tips.
//!
//! ## Design Principles
//!
//! 1. **Rules are pure**: `MovementRules` and `ScoringRules` compute
//!    results from the board; only `Game` mutates state.
//!
//! 2. **Reject, never corrupt**: every illegal action returns a
//!    `RuleViolation` and leaves the game untouched. Broken internal
//!    invariants panic.
//!
//! 3. **Identifiers over references**: cells store `PieceRef`s; each
//!    `Player` owns its pieces.
//!
//! 4. **Deterministic when seeded**: the coin toss runs on ChaCha8, so a
//!    seed (or a loaded toss sequence) replays a game exactly.
//!
//! ## Modules
//!
//! - `core`: colors, pieces, players, coin toss, configuration, errors
//! - `board`: layouts, cell classification, occupancy
//! - `rules`: movement, scoring, outcomes
//! - `events`: change notification tags and subscriber registry
//! - `game`: the turn state machine, builder, editor, and query surface
//!
//! ## Example
//!
//! ```
//! use patolli::game::GameBuilder;
//!
//! let mut game = GameBuilder::new().seed(2024).build().unwrap();
//!
//! while !game.is_game_over() && game.history().len() < 200 {
//!     game.roll().unwrap();
//!     if game.last_roll().is_none() {
//!         continue; // a toss of 0 already ended the turn
//!     }
//!     if game.can_enter_new_piece() {
//!         game.enter_new_piece().unwrap();
//!         game.next_turn_if_needed();
//!     } else if let Some(&piece) = game.movable_pieces().first() {
//!         game.move_piece(piece).unwrap();
//!         game.next_turn_if_needed();
//!     } else {
//!         game.pass().unwrap();
//!     }
//! }
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod events;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Dice, Direction, GameConfig, GameRng, Piece, PieceId,
    PiecePosition, PieceRef, Player, PlayerColor, RuleViolation, PIECES_PER_PLAYER,
};

pub use crate::board::{Board, BoardLayout, Cell, CellType, Coord, CrossLayout16};

pub use crate::rules::{Destination, GameOutcome, LandingEffect, MovementRules, ScoringRules, WinCause};

pub use crate::events::{GameEvent, ObserverRegistry, SubscriberId};

pub use crate::game::{
    CellView, Game, GameBuilder, GameSnapshot, PieceStatus, PieceView, PlayerView, PositionEditor,
    TurnChange, TurnPhase,
};
