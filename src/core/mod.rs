//! Core types: colors, pieces, players, coin toss, configuration, errors.
//!
//! These are the building blocks the board, rules, and game modules share.
//! None of them know about the track layout.

pub mod color;
pub mod piece;
pub mod player;
pub mod rng;
pub mod dice;
pub mod config;
pub mod error;

pub use color::PlayerColor;
pub use piece::{Direction, Piece, PieceId, PiecePosition, PieceRef};
pub use player::{Player, DEFAULT_STARTING_COINS, PIECES_PER_PLAYER};
pub use rng::GameRng;
pub use dice::{Dice, COIN_COUNT};
pub use config::GameConfig;
pub use error::{ConfigError, RuleViolation};
