use alloc::collections::BTreeSet;
use smallvec::SmallVec;

use crate::*;

/// Up to eight adjacent cell indices, ascending.
pub type Neighbors = SmallVec<[CellIndex; 8]>;

impl GridShape {
    fn left(self, current: Option<CellIndex>) -> Option<CellIndex> {
        let current = current?;
        let columns = CellIndex::from(self.columns);
        if columns == 0 || current % columns == 0 {
            return None;
        }
        current.checked_sub(1)
    }

    fn right(self, current: Option<CellIndex>) -> Option<CellIndex> {
        let value = current?.checked_add(1)?;
        let columns = CellIndex::from(self.columns);
        if columns == 0 || value % columns == 0 || value > self.total_cells() {
            return None;
        }
        Some(value)
    }

    fn upper(self, current: Option<CellIndex>) -> Option<CellIndex> {
        current?.checked_sub(CellIndex::from(self.columns))
    }

    fn lower(self, current: Option<CellIndex>) -> Option<CellIndex> {
        let value = current?.checked_add(CellIndex::from(self.columns))?;
        (value < self.total_cells()).then_some(value)
    }

    /// Indices of every cell adjacent to `index`, orthogonally or diagonally.
    ///
    /// Both bomb counting and flood fill go through here, so edges and corners are handled the
    /// same way in both. `index` is expected to be on the board.
    pub fn neighbors(self, index: CellIndex) -> Neighbors {
        let current = Some(index);
        let left = self.left(current);
        let right = self.right(current);

        let mut neighbors: Neighbors = [
            self.upper(left),
            self.upper(current),
            self.upper(right),
            left,
            right,
            self.lower(left),
            self.lower(current),
            self.lower(right),
        ]
        .into_iter()
        .flatten()
        .collect();

        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }

    /// How many of the cells around `index` are listed in `bomb_positions`.
    pub fn neighbor_bomb_count(self, bomb_positions: &BTreeSet<CellIndex>, index: CellIndex) -> u8 {
        let count = self
            .neighbors(index)
            .iter()
            .filter(|&&pos| bomb_positions.contains(&pos))
            .count();
        // at most eight neighbors
        count as u8
    }
}
