use serde::{Deserialize, Serialize};

use crate::CellIndex;

/// A single board cell. Everything but the open flag is fixed when the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    index: CellIndex,
    is_bomb: bool,
    neighbor_bomb_count: u8,
    is_open: bool,
}

impl Cell {
    pub(crate) const fn closed(index: CellIndex, is_bomb: bool, neighbor_bomb_count: u8) -> Self {
        Self {
            index,
            is_bomb,
            neighbor_bomb_count,
            is_open: false,
        }
    }

    pub const fn index(self) -> CellIndex {
        self.index
    }

    pub const fn is_bomb(self) -> bool {
        self.is_bomb
    }

    pub const fn neighbor_bomb_count(self) -> u8 {
        self.neighbor_bomb_count
    }

    pub const fn is_open(self) -> bool {
        self.is_open
    }

    /// Closed and not a bomb, i.e. still needs to be opened to win.
    pub const fn is_remaining_safe(self) -> bool {
        !self.is_open && !self.is_bomb
    }

    /// Flood fill stops at bombs and at cells touching a bomb.
    pub(crate) const fn is_flood_boundary(self) -> bool {
        self.is_bomb || self.neighbor_bomb_count > 0
    }

    pub(crate) const fn with_open(self, is_open: bool) -> Self {
        Self { is_open, ..self }
    }

    pub const fn view(self) -> CellView {
        match (self.is_open, self.is_bomb) {
            (false, _) => CellView::Hidden,
            (true, true) => CellView::Bomb,
            (true, false) => CellView::Revealed(self.neighbor_bomb_count),
        }
    }
}

/// What the player is allowed to see of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Bomb,
    Revealed(u8),
}

impl CellView {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
