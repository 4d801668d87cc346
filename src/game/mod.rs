//! The playable game.
//!
//! - `state`: the `Game` orchestrator and turn state machine
//! - `builder`: `GameBuilder` (config, layout, dice)
//! - `editor`: direct position editing for puzzles and tests
//! - `view`: read-only query types for presentation layers

mod state;
mod builder;
mod editor;
mod view;

pub use state::{Game, Movable, TurnChange, TurnPhase};
pub use builder::GameBuilder;
pub use editor::PositionEditor;
pub use view::{CellView, GameSnapshot, PieceStatus, PieceView, PlayerView};
