//! Board topology and occupancy.
//!
//! - `layout`: pluggable board shapes (`BoardLayout`) and the 16x16 cross
//! - `cell`: cell classification and occupant slot
//! - `track`: the `Board` built from a layout

pub mod layout;
pub mod cell;
pub mod track;

pub use layout::{BoardLayout, Coord, CrossLayout16};
pub use cell::{Cell, CellType};
pub use track::{Board, TRIANGLE_REACH};
