//! Track cells.

use serde::{Deserialize, Serialize};

use crate::core::PieceRef;

/// Classification of a track cell. Every cell has exactly one type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    #[default]
    Normal,
    /// A color's entry cell and finish line.
    Start,
    /// Arm tip; landing here grants an extra turn.
    Endpoint,
    /// Next to an arm tip; landing here costs one coin.
    TrianglePenalty,
}

/// One cell of the track.
///
/// Index, coordinates, and type are fixed at construction; only the
/// occupant changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    index: usize,
    row: usize,
    col: usize,
    cell_type: CellType,
    occupant: Option<PieceRef>,
}

impl Cell {
    pub(crate) fn new(index: usize, row: usize, col: usize, cell_type: CellType) -> Self {
        Self {
            index,
            row,
            col,
            cell_type,
            occupant: None,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub fn col(&self) -> usize {
        self.col
    }

    #[must_use]
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    #[must_use]
    pub fn occupant(&self) -> Option<PieceRef> {
        self.occupant
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    pub(crate) fn set_type(&mut self, cell_type: CellType) {
        self.cell_type = cell_type;
    }

    pub(crate) fn set_occupant(&mut self, occupant: Option<PieceRef>) {
        self.occupant = occupant;
    }
}
