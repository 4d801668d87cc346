//! The indexed, classified track and its occupancy.
//!
//! ## Construction
//!
//! 1. Number the layout's track coordinates 0..N in order.
//! 2. Mark each endpoint coordinate as `Endpoint`.
//! 3. Mark each color's start coordinate as `Start`.
//! 4. Mark every index within two steps (either way, modulo N) of an
//!    endpoint as `TrianglePenalty`, unless it is already an endpoint or a
//!    start.
//!
//! ## Occupancy
//!
//! Each cell holds at most one `PieceRef`. The board does not know about
//! piece positions; keeping `Piece::position` and cell occupancy in sync is
//! the game's job.

use rustc_hash::FxHashSet;

use super::cell::{Cell, CellType};
use super::layout::{BoardLayout, Coord, CrossLayout16};
use crate::core::{PieceRef, Player, PlayerColor};

/// How far (in track steps) on each side of an endpoint the penalty
/// triangles reach.
pub const TRIANGLE_REACH: usize = 2;

/// The game board.
#[derive(Clone, Debug)]
pub struct Board {
    track: Vec<Cell>,
    start_index: [usize; 2],
    endpoints: FxHashSet<usize>,
    penalty_cells: FxHashSet<usize>,
    rows: usize,
    cols: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&CrossLayout16)
    }
}

impl Board {
    /// Build the board from a layout.
    ///
    /// # Panics
    ///
    /// Panics if the layout breaks its contract: an empty track, or an
    /// endpoint/start coordinate that is not on the track.
    pub fn new(layout: &dyn BoardLayout) -> Self {
        let coords = layout.track_coords();
        assert!(!coords.is_empty(), "Layout produced an empty track");

        let mut track: Vec<Cell> = coords
            .iter()
            .enumerate()
            .map(|(i, c)| Cell::new(i, c.row, c.col, CellType::Normal))
            .collect();

        let index_of = |coord: Coord| -> usize {
            coords
                .iter()
                .position(|&c| c == coord)
                .unwrap_or_else(|| panic!("Layout coordinate {} is not on the track", coord))
        };

        let endpoints: FxHashSet<usize> =
            layout.endpoint_coords().into_iter().map(index_of).collect();
        for &ep in &endpoints {
            track[ep].set_type(CellType::Endpoint);
        }

        let mut start_index = [0; 2];
        for color in PlayerColor::ALL {
            let idx = index_of(layout.start_for_color(color));
            assert!(
                !endpoints.contains(&idx),
                "Start cell for {} overlaps an endpoint",
                color
            );
            track[idx].set_type(CellType::Start);
            start_index[color.index()] = idx;
        }
        assert_ne!(
            start_index[0], start_index[1],
            "Both colors share one start cell"
        );

        let n = track.len();
        let mut penalty_cells = FxHashSet::default();
        for &ep in &endpoints {
            for offset in 1..=TRIANGLE_REACH {
                for idx in [(ep + offset) % n, (ep + n - offset % n) % n] {
                    if track[idx].cell_type() == CellType::Normal {
                        penalty_cells.insert(idx);
                    }
                }
            }
        }
        for &idx in &penalty_cells {
            track[idx].set_type(CellType::TrianglePenalty);
        }

        Self {
            track,
            start_index,
            endpoints,
            penalty_cells,
            rows: layout.rows(),
            cols: layout.cols(),
        }
    }

    /// Track length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.track.len()
    }

    /// Grid rows of the underlying layout.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid columns of the underlying layout.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All cells, ordered by index.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.track
    }

    /// Cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the track.
    #[must_use]
    pub fn cell(&self, index: usize) -> &Cell {
        self.check_index(index);
        &self.track[index]
    }

    /// Start (and finish) index for a color.
    #[must_use]
    pub fn start_index(&self, color: PlayerColor) -> usize {
        self.start_index[color.index()]
    }

    /// Index of the cell at a grid coordinate, if it is on the track.
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.track
            .iter()
            .position(|c| c.row() == row && c.col() == col)
    }

    #[must_use]
    pub fn is_endpoint(&self, index: usize) -> bool {
        self.endpoints.contains(&index)
    }

    #[must_use]
    pub fn is_triangle(&self, index: usize) -> bool {
        self.penalty_cells.contains(&index)
    }

    /// Endpoint indices, ascending.
    #[must_use]
    pub fn endpoints(&self) -> Vec<usize> {
        sorted(&self.endpoints)
    }

    /// Triangle penalty indices, ascending.
    #[must_use]
    pub fn penalty_cells(&self) -> Vec<usize> {
        sorted(&self.penalty_cells)
    }

    #[must_use]
    pub fn is_free(&self, index: usize) -> bool {
        self.cell(index).is_free()
    }

    /// Occupant of a cell.
    #[must_use]
    pub fn occupant(&self, index: usize) -> Option<PieceRef> {
        self.cell(index).occupant()
    }

    /// Put a piece on a free cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already occupied; callers must check first.
    pub fn occupy(&mut self, index: usize, piece: PieceRef) {
        self.check_index(index);
        let cell = &mut self.track[index];
        assert!(
            cell.is_free(),
            "Cell {} already holds {:?}, cannot place {}",
            index,
            cell.occupant(),
            piece
        );
        cell.set_occupant(Some(piece));
    }

    /// Clear a cell. Clearing a free cell is a no-op.
    pub fn free(&mut self, index: usize) {
        self.check_index(index);
        self.track[index].set_occupant(None);
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.track.iter().filter(|c| !c.is_free()).count()
    }

    /// `(from + steps) mod N`, for any step count.
    #[must_use]
    pub fn advance_index(&self, from: usize, steps: usize) -> usize {
        self.check_index(from);
        (from + steps % self.size()) % self.size()
    }

    /// Forward distance from `from` to `to` along the track.
    #[must_use]
    pub fn forward_distance(&self, from: usize, to: usize) -> usize {
        self.check_index(from);
        self.check_index(to);
        (to + self.size() - from) % self.size()
    }

    /// Whether the player's start cell is free.
    #[must_use]
    pub fn can_place_at_start(&self, player: &Player) -> bool {
        self.is_free(self.start_index(player.color()))
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.track.len(),
            "Track index {} out of range (track length {})",
            index,
            self.track.len()
        );
    }
}

fn sorted(set: &FxHashSet<usize>) -> Vec<usize> {
    let mut v: Vec<usize> = set.iter().copied().collect();
    v.sort_unstable();
    v
}
