use alloc::collections::BTreeSet;
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::*;

/// Row-major grid of cells with a fixed bomb layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardFields")]
pub struct Board {
    shape: GridShape,
    bomb_count: CellCount,
    cells: Array2<Cell>,
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct BoardFields {
    shape: GridShape,
    bomb_count: CellCount,
    cells: Array2<Cell>,
}

impl TryFrom<BoardFields> for Board {
    type Error = GameError;

    /// Rebuilds the board from the bombs in `cells` and only accepts the snapshot if every other
    /// field agrees with that rebuild.
    fn try_from(fields: BoardFields) -> Result<Self> {
        let BoardFields {
            shape,
            bomb_count,
            cells,
        } = fields;
        if cells.dim() != (usize::from(shape.rows), usize::from(shape.columns)) {
            return Err(GameError::InvalidBoardShape);
        }

        let bomb_positions: BTreeSet<CellIndex> = cells
            .iter()
            .filter(|cell| cell.is_bomb())
            .map(|cell| cell.index())
            .collect();
        let board = Self::from_bomb_positions(shape, &bomb_positions)?;
        if board.bomb_count != bomb_count {
            return Err(GameError::InconsistentBoard);
        }

        // same dimensions, so both iterate in index order
        let consistent = board.cells.iter().zip(cells.iter()).all(|(expected, actual)| {
            expected.with_open(actual.is_open()) == *actual
        });
        if !consistent {
            return Err(GameError::InconsistentBoard);
        }
        Ok(Self {
            shape,
            bomb_count,
            cells,
        })
    }
}

impl Board {
    /// Builds a closed board with bombs at `bomb_positions`.
    pub fn from_bomb_positions(
        shape: GridShape,
        bomb_positions: &BTreeSet<CellIndex>,
    ) -> Result<Self> {
        let cell_count = shape.total_cells();
        if cell_count < 1 {
            return Err(InvalidParameter::RangeBelowOne.into());
        }
        if let Some(&index) = bomb_positions.iter().find(|&&pos| !shape.contains(pos)) {
            return Err(GameError::IndexOutOfRange { index, cell_count });
        }
        Ok(Self::build(shape, bomb_positions))
    }

    /// `bomb_positions` must already be on the board.
    pub(crate) fn build(shape: GridShape, bomb_positions: &BTreeSet<CellIndex>) -> Self {
        let columns = usize::from(shape.columns);
        let cells = Array2::from_shape_fn(
            (usize::from(shape.rows), columns),
            |(row, column)| {
                // row * columns + column < rows * columns, which fits in a CellCount
                let index = (row * columns + column) as CellIndex;
                Cell::closed(
                    index,
                    bomb_positions.contains(&index),
                    shape.neighbor_bomb_count(bomb_positions, index),
                )
            },
        );
        // positions are a set, so the count is exact and fits in the board
        let bomb_count = bomb_positions.len() as CellCount;
        log::debug!(
            "Built {}x{} board with {} bombs at {:?}",
            shape.rows,
            shape.columns,
            bomb_count,
            bomb_positions
        );
        Self {
            shape,
            bomb_count,
            cells,
        }
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn rows(&self) -> Coord {
        self.shape.rows
    }

    pub fn columns(&self) -> Coord {
        self.shape.columns
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bomb_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.shape.total_cells()
    }

    pub fn cell(&self, index: CellIndex) -> Result<Cell> {
        self.shape
            .to_nd_index(index)
            .and_then(|pos| self.cells.get(pos))
            .copied()
            .ok_or(GameError::IndexOutOfRange {
                index,
                cell_count: self.total_cells(),
            })
    }

    /// All cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// One view per board row, top to bottom, for laying out the grid.
    pub fn grid_rows(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.cells.outer_iter()
    }

    pub fn neighbors(&self, index: CellIndex) -> Neighbors {
        self.shape.neighbors(index)
    }

    pub fn bomb_positions(&self) -> BTreeSet<CellIndex> {
        self.cells()
            .filter(|cell| cell.is_bomb())
            .map(Cell::index)
            .collect()
    }

    /// Closed cells without a bomb.
    pub fn remaining_safe_count(&self) -> CellCount {
        let count = self.cells().filter(|cell| cell.is_remaining_safe()).count();
        // bounded by the cell count
        count as CellCount
    }

    pub fn is_all_open(&self) -> bool {
        self.cells().all(Cell::is_open)
    }

    /// Copy of this board with each cell's open flag recomputed by `is_open`.
    pub(crate) fn with_open_cells(&self, is_open: impl Fn(&Cell) -> bool) -> Self {
        Self {
            shape: self.shape,
            bomb_count: self.bomb_count,
            cells: self.cells.map(|cell| cell.with_open(is_open(cell))),
        }
    }

    /// Copy of this board with every cell open.
    pub fn fully_revealed(&self) -> Self {
        self.with_open_cells(|_| true)
    }
}
