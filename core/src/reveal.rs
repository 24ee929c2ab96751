use alloc::collections::VecDeque;
use hashbrown::HashSet;

use crate::*;

/// Opens `target` on a copy of `board`, flooding outwards through cells with no adjacent bombs.
///
/// Cells that are already open stay open and are never expanded again. Bombs and numbered cells
/// are opened but stop the flood. Re-opening an open cell is allowed and changes nothing; the
/// game does its own check before getting here.
pub fn reveal(board: &Board, target: CellIndex) -> Result<Board> {
    board.cell(target)?;

    let mut opened: HashSet<CellIndex> = board
        .cells()
        .filter(|cell| cell.is_open())
        .map(Cell::index)
        .collect();
    let mut to_visit = VecDeque::from([target]);

    while let Some(current) = to_visit.pop_front() {
        if !opened.insert(current) {
            continue;
        }

        let cell = board.cell(current)?;
        log::trace!(
            "Flood opened cell {}, bomb: {}, count: {}",
            current,
            cell.is_bomb(),
            cell.neighbor_bomb_count()
        );
        if cell.is_flood_boundary() {
            continue;
        }

        to_visit.extend(
            board
                .neighbors(current)
                .into_iter()
                .filter(|pos| !opened.contains(pos)),
        );
    }

    Ok(board.with_open_cells(|cell| opened.contains(&cell.index())))
}
