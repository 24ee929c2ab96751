//! Shared fixtures for unit tests.
//!
//! The fixture board, `*` marking bombs:
//!
//! ```text
//! 222110
//! **3*31
//! 223*4*
//! 0012*3
//! 00012*
//! ```

use alloc::collections::{BTreeSet, VecDeque};

use crate::*;

pub const FIXTURE_BOMBS: [CellIndex; 7] = [6, 7, 9, 15, 17, 22, 29];

#[rustfmt::skip]
pub const FIXTURE_NEIGHBOR_COUNTS: [u8; 30] = [
    2, 2, 2, 1, 1, 0,
    1, 1, 3, 1, 3, 1,
    2, 2, 3, 2, 4, 1,
    0, 0, 1, 2, 3, 3,
    0, 0, 0, 1, 2, 1,
];

/// Cells opened by opening 24 on a closed fixture board.
pub const FIXTURE_FLOOD_FROM_24: [CellIndex; 11] = [12, 13, 14, 18, 19, 20, 21, 24, 25, 26, 27];

/// Opening these in order clears the fixture board, each one opening something new.
pub const FIXTURE_CLEAR_SEQUENCE: [CellIndex; 14] =
    [0, 1, 2, 3, 4, 5, 8, 12, 13, 14, 16, 18, 23, 28];

pub fn fixture_generator() -> FixedBoardGenerator {
    FixedBoardGenerator::new(GameConfig::STANDARD, FIXTURE_BOMBS).unwrap()
}

pub fn fixture_board() -> Board {
    Board::from_bomb_positions(GameConfig::STANDARD.shape(), &BTreeSet::from(FIXTURE_BOMBS))
        .unwrap()
}

/// Bomb flags and neighbor counts of `board` are still exactly those of the fixture.
pub fn assert_fixture_layout(board: &Board) {
    assert_eq!(board.total_cells(), 30);
    for (index, cell) in board.cells().enumerate() {
        assert_eq!(usize::from(cell.index()), index);
        assert_eq!(cell.is_bomb(), FIXTURE_BOMBS.contains(&cell.index()), "cell {index}");
        assert_eq!(
            cell.neighbor_bomb_count(),
            FIXTURE_NEIGHBOR_COUNTS[index],
            "cell {index}"
        );
    }
}

pub fn fixture_game() -> Game<FixedBoardGenerator> {
    Game::new(fixture_generator())
}

/// Replays a fixed list of draws, panicking once it runs dry.
pub struct ScriptedSource {
    draws: VecDeque<CellIndex>,
}

impl ScriptedSource {
    pub fn new<const N: usize>(draws: [CellIndex; N]) -> Self {
        Self {
            draws: VecDeque::from(draws),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_below(&mut self, _bound: CellCount) -> CellIndex {
        self.draws.pop_front().expect("scripted draws exhausted")
    }
}
