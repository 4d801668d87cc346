//! Pure rule calculations.
//!
//! - `movement`: destination of a move, including the exact-landing finish
//! - `scoring`: coin and extra-turn effects of landing on a cell
//! - `outcome`: how a finished game is reported
//!
//! Nothing here mutates state; the `Game` applies the results.

pub mod movement;
pub mod scoring;
pub mod outcome;

pub use movement::{Destination, MovementRules};
pub use scoring::{LandingEffect, ScoringRules};
pub use outcome::{GameOutcome, WinCause};
