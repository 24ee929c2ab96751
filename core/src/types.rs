use core::ops::Range;
use serde::{Deserialize, Serialize};

/// Single axis length, used for board row and column counts.
pub type Coord = u8;

/// Count type used for bomb counts and total-cell counts.
pub type CellCount = u16;

/// Row-major position of a cell, `row * columns + column`.
pub type CellIndex = u16;

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Dimensions of a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: Coord,
    pub columns: Coord,
}

impl GridShape {
    pub const fn new(rows: Coord, columns: Coord) -> Self {
        Self { rows, columns }
    }

    pub const fn total_cells(self) -> CellCount {
        mult(self.rows, self.columns)
    }

    pub const fn contains(self, index: CellIndex) -> bool {
        index < self.total_cells()
    }

    /// Converts a linear index into an `ndarray` position, `None` when it is off the board.
    pub fn to_nd_index(self, index: CellIndex) -> Option<[usize; 2]> {
        if !self.contains(index) {
            return None;
        }
        let columns = CellIndex::from(self.columns);
        Some([
            usize::from(index / columns),
            usize::from(index % columns),
        ])
    }

    pub fn row_indices(self) -> Range<Coord> {
        0..self.rows
    }

    pub fn column_indices(self) -> Range<Coord> {
        0..self.columns
    }
}
