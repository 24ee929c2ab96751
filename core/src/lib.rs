#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use neighbor::*;
pub use reveal::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod game;
mod generator;
mod neighbor;
mod reveal;
#[cfg(test)]
mod testing;
mod types;

/// Board dimensions and bomb count, validated on construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameConfigFields")]
pub struct GameConfig {
    shape: GridShape,
    bombs: CellCount,
}

/// Unchecked wire form of [`GameConfig`], deserialized configs go through [`GameConfig::new`].
#[derive(Deserialize)]
struct GameConfigFields {
    shape: GridShape,
    bombs: CellCount,
}

impl TryFrom<GameConfigFields> for GameConfig {
    type Error = GameError;

    fn try_from(fields: GameConfigFields) -> Result<Self> {
        Self::new(fields.shape.rows, fields.shape.columns, fields.bombs)
    }
}

impl GameConfig {
    pub const ROW_COUNT: Coord = 5;
    pub const COLUMN_COUNT: Coord = 6;
    pub const BOMB_COUNT: CellCount = 7;

    /// The one configuration the game is played with: 5 rows, 6 columns, 7 bombs.
    pub const STANDARD: Self = Self::new_unchecked(
        GridShape::new(Self::ROW_COUNT, Self::COLUMN_COUNT),
        Self::BOMB_COUNT,
    );

    pub(crate) const fn new_unchecked(shape: GridShape, bombs: CellCount) -> Self {
        Self { shape, bombs }
    }

    pub fn new(rows: Coord, columns: Coord, bombs: CellCount) -> Result<Self> {
        let shape = GridShape::new(rows, columns);
        let range = shape.total_cells();
        if range < 1 {
            return Err(InvalidParameter::RangeBelowOne.into());
        }
        if bombs > range {
            return Err(InvalidParameter::CountExceedsRange {
                count: bombs,
                range,
            }
            .into());
        }
        Ok(Self::new_unchecked(shape, bombs))
    }

    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    pub const fn rows(&self) -> Coord {
        self.shape.rows
    }

    pub const fn columns(&self) -> Coord {
        self.shape.columns
    }

    pub const fn bombs(&self) -> CellCount {
        self.bombs
    }

    pub const fn total_cells(&self) -> CellCount {
        self.shape.total_cells()
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.bombs
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Outcome of opening a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    NoChange,
    Revealed,
    HitBomb,
    Cleared,
}

impl OpenOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use OpenOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitBomb => true,
            Cleared => true,
        }
    }
}
