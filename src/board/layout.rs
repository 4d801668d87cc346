//! Board shapes.
//!
//! A `BoardLayout` describes one physical board: the grid extents, the
//! ordered loop of track coordinates, the arm-tip endpoints, and each
//! color's start cell. The `Board` turns a layout into an indexed,
//! classified track; it never looks at geometry again afterwards.
//!
//! Only one shape ships: [`CrossLayout16`], the classic cross drawn on a
//! 16x16 grid with two-cell-wide arms.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::PlayerColor;

/// Grid coordinate (row, column), 0-based from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the two coordinates share an edge.
    #[must_use]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A board shape.
///
/// ## Contract
///
/// - `track_coords` is ordered, has no duplicates, and forms one closed loop
///   (consecutive coordinates adjacent, last adjacent to first).
/// - Every coordinate from `endpoint_coords` and `start_for_color` lies on
///   the track.
/// - The two start coordinates differ.
pub trait BoardLayout {
    /// Number of grid rows.
    fn rows(&self) -> usize;

    /// Number of grid columns.
    fn cols(&self) -> usize;

    /// Ordered loop of track coordinates.
    fn track_coords(&self) -> Vec<Coord>;

    /// Coordinates of the arm tips (bonus cells).
    fn endpoint_coords(&self) -> Vec<Coord>;

    /// Entry/finish coordinate for a color.
    fn start_for_color(&self, color: PlayerColor) -> Coord;
}

/// The 16x16 cross: two center rows and two center columns, each arm seven
/// cells long.
///
/// The loop starts at White's start cell `(8, 7)`, runs out along the left
/// arm, around its tip, back in, then does the same for the top, right, and
/// bottom arms. That gives 60 cells with White's start at index 0 and
/// Black's start `(7, 8)` at index 30.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CrossLayout16;

impl CrossLayout16 {
    const SIZE: usize = 16;
    const LOW: usize = Self::SIZE / 2 - 1;
    const HIGH: usize = Self::SIZE / 2;
    const EDGE: usize = Self::SIZE - 1;

    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl BoardLayout for CrossLayout16 {
    fn rows(&self) -> usize {
        Self::SIZE
    }

    fn cols(&self) -> usize {
        Self::SIZE
    }

    fn track_coords(&self) -> Vec<Coord> {
        let (lo, hi, edge) = (Self::LOW, Self::HIGH, Self::EDGE);
        let mut path = Vec::with_capacity(64);

        // Left arm: out along row 8, back along row 7.
        horizontal(&mut path, hi, lo, 0);
        vertical(&mut path, lo, lo, 0);
        horizontal(&mut path, lo, 0, lo);
        // Top arm: up column 7, down column 8.
        vertical(&mut path, lo - 1, 0, lo);
        horizontal(&mut path, 0, lo, hi);
        vertical(&mut path, 1, lo, hi);
        // Right arm: out along row 7, back along row 8.
        horizontal(&mut path, lo, hi, edge);
        vertical(&mut path, hi, hi, edge);
        horizontal(&mut path, hi, edge, hi);
        // Bottom arm: down column 8, up column 7 to close the loop.
        vertical(&mut path, hi + 1, edge, hi);
        horizontal(&mut path, edge, hi, lo);
        vertical(&mut path, edge - 1, hi, lo);

        dedup(path)
    }

    fn endpoint_coords(&self) -> Vec<Coord> {
        let (lo, hi, edge) = (Self::LOW, Self::HIGH, Self::EDGE);
        vec![
            // Top
            Coord::new(0, lo),
            Coord::new(0, hi),
            // Bottom
            Coord::new(edge, lo),
            Coord::new(edge, hi),
            // Left
            Coord::new(lo, 0),
            Coord::new(hi, 0),
            // Right
            Coord::new(lo, edge),
            Coord::new(hi, edge),
        ]
    }

    fn start_for_color(&self, color: PlayerColor) -> Coord {
        match color {
            PlayerColor::Black => Coord::new(Self::LOW, Self::HIGH),
            PlayerColor::White => Coord::new(Self::HIGH, Self::LOW),
        }
    }
}

/// Append a row segment, both ends inclusive, in either direction.
fn horizontal(path: &mut Vec<Coord>, row: usize, from_col: usize, to_col: usize) {
    if from_col <= to_col {
        path.extend((from_col..=to_col).map(|col| Coord::new(row, col)));
    } else {
        path.extend((to_col..=from_col).rev().map(|col| Coord::new(row, col)));
    }
}

/// Append a column segment, both ends inclusive, in either direction.
fn vertical(path: &mut Vec<Coord>, from_row: usize, to_row: usize, col: usize) {
    if from_row <= to_row {
        path.extend((from_row..=to_row).map(|row| Coord::new(row, col)));
    } else {
        path.extend((to_row..=from_row).rev().map(|row| Coord::new(row, col)));
    }
}

/// Drop repeated coordinates, keeping the first occurrence.
fn dedup(path: Vec<Coord>) -> Vec<Coord> {
    let mut seen = FxHashSet::default();
    path.into_iter().filter(|c| seen.insert(*c)).collect()
}
