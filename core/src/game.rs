use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Failure
/// - Playing -> Success
///
/// Both terminal states only go back to Playing through a restart.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Game in progress, cells can be opened
    Playing,
    /// A bomb was opened
    Failure,
    /// Every safe cell was opened
    Success,
}

impl Status {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Indicates the game has ended and no cells can be opened anymore
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Failure | Self::Success)
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Playing
    }
}

/// Status that follows opening `opened` (as it was before the reveal) and ending up with `board`.
pub fn next_status(opened: Cell, board: &Board) -> Status {
    if opened.is_bomb() {
        Status::Failure
    } else if board.remaining_safe_count() == 0 {
        Status::Success
    } else {
        Status::Playing
    }
}

/// Board as it should be shown under `status`: untouched while playing, fully open once the game
/// has ended.
pub fn settle(board: Board, status: Status) -> Board {
    if status.is_terminal() {
        board.fully_revealed()
    } else {
        board
    }
}

/// A single game session: current board, its status, and where new boards come from.
#[derive(Clone, Debug)]
pub struct Game<G = RandomBoardGenerator> {
    generator: G,
    board: Board,
    status: Status,
}

impl Game {
    /// Standard 5x6 game with 7 bombs, placed from `seed`.
    pub fn standard(seed: u64) -> Self {
        Self::new(RandomBoardGenerator::seeded(GameConfig::STANDARD, seed))
    }
}

impl<G: BoardGenerator> Game<G> {
    pub fn new(mut generator: G) -> Self {
        let board = generator.generate();
        log::debug!("New game, config: {:?}", generator.config());
        Self {
            generator,
            board,
            status: Status::default(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.generator.config()
    }

    pub fn rows(&self) -> Coord {
        self.board.rows()
    }

    pub fn columns(&self) -> Coord {
        self.board.columns()
    }

    pub fn bomb_count(&self) -> CellCount {
        self.board.bomb_count()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.board.cells()
    }

    pub fn cell_at(&self, index: CellIndex) -> Result<Cell> {
        self.board.cell(index)
    }

    pub fn remaining_safe_count(&self) -> CellCount {
        self.board.remaining_safe_count()
    }

    /// Opens a cell, flooding through empty areas.
    ///
    /// Does nothing once the game is over or when the cell is already open.
    pub fn open(&mut self, index: CellIndex) -> Result<OpenOutcome> {
        if !self.status.is_playing() {
            log::debug!("Ignoring open of {} in {:?}", index, self.status);
            return Ok(OpenOutcome::NoChange);
        }

        let cell = self.board.cell(index)?;
        if cell.is_open() {
            return Ok(OpenOutcome::NoChange);
        }

        let board = reveal(&self.board, index)?;
        let status = next_status(cell, &board);
        log::debug!(
            "Opened cell {}, {} safe cells remain",
            index,
            board.remaining_safe_count()
        );
        self.transition(board, status);

        Ok(match status {
            Status::Playing => OpenOutcome::Revealed,
            Status::Failure => OpenOutcome::HitBomb,
            Status::Success => OpenOutcome::Cleared,
        })
    }

    /// Throws the current board away and starts over on a freshly generated one.
    pub fn restart(&mut self) {
        let board = self.generator.generate();
        log::debug!("Restarting game");
        self.transition(board, Status::Playing);
    }

    fn transition(&mut self, board: Board, status: Status) {
        if status != self.status {
            log::debug!("Game status {:?} -> {:?}", self.status, status);
        }
        self.status = status;
        self.board = settle(board, status);
    }
}
