use thiserror::Error;

use crate::{CellCount, CellIndex};

/// Why a board could not be constructed.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidParameter {
    #[error("Board must contain at least one cell")]
    RangeBelowOne,
    #[error("Bomb count {count} exceeds the {range} cells on the board")]
    CountExceedsRange { count: CellCount, range: CellCount },
    #[error("Layout names {actual} bombs but {expected} were configured")]
    PositionCountMismatch { expected: CellCount, actual: usize },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] InvalidParameter),
    #[error("Cell index {index} is out of range for a board of {cell_count} cells")]
    IndexOutOfRange {
        index: CellIndex,
        cell_count: CellCount,
    },
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Board cells do not match its bomb layout")]
    InconsistentBoard,
}

pub type Result<T> = core::result::Result<T, GameError>;
